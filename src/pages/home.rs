use std::time::Duration;

use axum::extract::Query;
use axum::response::Html;
use serde::Deserialize;

use super::layout;
use super::roster::{RosterView, CONFIG_HINT, FETCH_FAILED};

/// How long the post-submit banner stays up.
pub const BANNER_DISMISS: Duration = Duration::from_secs(5);

pub const BANNER_MESSAGE: &str = "Submission complete. Your info is now on the list below.";

/// Size, chest and body length in inches.
pub const SIZE_CHART: [(&str, u8, u8); 7] = [
    ("S", 36, 26),
    ("M", 38, 27),
    ("L", 40, 28),
    ("XL", 42, 29),
    ("2XL", 44, 30),
    ("3XL", 46, 31),
    ("4XL", 48, 32),
];

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub submitted: Option<String>,
}

impl HomeQuery {
    pub fn show_banner(&self) -> bool {
        self.submitted.as_deref() == Some("1")
    }
}

const LOAD_ROSTER_SCRIPT: &str = r#"
<script>
  (function () {
    var target = document.getElementById('roster');
    fetch('/fragments/roster', { cache: 'no-store' })
      .then(function (res) {
        if (!res.ok) throw new Error('Failed to load');
        return res.text();
      })
      .then(function (html) { target.innerHTML = html; })
      .catch(function () {
        target.innerHTML = '<div class="state error"><p>' + target.dataset.fetchFailed +
          '</p><p class="hint">' + target.dataset.configHint + '</p></div>';
      });
  })();
</script>
"#;

/// The success banner plus the script that removes it and drops
/// `?submitted=1` from the address bar so a reload does not show it again.
pub fn render_banner() -> String {
    let delay_ms = BANNER_DISMISS.as_millis();
    format!(
        r#"<div class="banner" role="alert" id="submit-banner">{BANNER_MESSAGE}</div>
<script>
  setTimeout(function () {{
    var banner = document.getElementById('submit-banner');
    if (banner) banner.remove();
    window.history.replaceState(null, '', window.location.pathname);
  }}, {delay_ms});
</script>"#
    )
}

fn render_size_chart() -> String {
    let rows: String = SIZE_CHART
        .iter()
        .map(|(size, chest, height)| {
            format!("<tr><td><strong>{size}</strong></td><td>{chest} in</td><td>{height} in</td></tr>")
        })
        .collect();
    format!(
        r#"<section class="card" style="background:rgba(39,39,42,0.3);border-color:rgba(63,63,70,0.5)">
  <h2>Our Size Chart</h2>
  <p class="hint">Use this to pick your size when submitting. All measurements are in inches.</p>
  <table>
    <thead><tr><th>SIZE</th><th>CHEST</th><th>HEIGHT</th></tr></thead>
    <tbody>{rows}</tbody>
  </table>
</section>"#
    )
}

pub fn render_home(query: &HomeQuery) -> Html<String> {
    let banner = if query.show_banner() {
        render_banner()
    } else {
        String::new()
    };
    let roster = RosterView::Loading.render();
    let size_chart = render_size_chart();

    let body = format!(
        r#"<div class="wrap">
  {banner}
  <header>
    <h1 class="brand">HOT GANG</h1>
    <p class="tagline">Team info &amp; jury assignments</p>
  </header>

  <section class="card">
    <h2>Submit your info</h2>
    <p class="hint">Add your jersey number, name, size, and phone. It will be saved and shown to the team.</p>
    <a class="button" href="/submit">Add your info</a>
  </section>

  {size_chart}

  <section>
    <h2>Who has which jurcy number</h2>
    <p class="hint">All members can see who took which jurcy number and their size. Data comes from the form submissions.</p>
    <div id="roster" data-fetch-failed="{FETCH_FAILED}" data-config-hint="{CONFIG_HINT}">{roster}</div>
  </section>

  <footer>HOT GANG — Jury assignment tracker</footer>
</div>
{LOAD_ROSTER_SCRIPT}"#
    );
    layout("HOT GANG", &body)
}

/// `GET /`
pub async fn home(Query(query): Query<HomeQuery>) -> Html<String> {
    render_home(&query)
}
