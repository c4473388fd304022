use axum::extract::State;
use axum::response::Html;

use super::escape;
use crate::error::RosterError;
use crate::models::member::{MemberRow, Roster};
use crate::server::AppState;

pub const CONFIG_HINT: &str =
    "Make sure GOOGLE_SHEETS_SCRIPT_URL is set and your Apps Script is deployed.";

pub const EMPTY_MESSAGE: &str = "No entries yet. Be the first to submit your jury info!";

/// Shown by the page script when the fragment request itself fails.
pub const FETCH_FAILED: &str = "Could not load jury list. Check setup.";

/// What the roster section is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterView {
    Loading,
    Failed(String),
    Empty,
    Loaded(Vec<MemberRow>),
}

impl From<Result<Roster, RosterError>> for RosterView {
    fn from(result: Result<Roster, RosterError>) -> Self {
        match result {
            Ok(roster) if roster.is_empty() => Self::Empty,
            Ok(roster) => Self::Loaded(roster.rows()),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

impl RosterView {
    pub fn render(&self) -> String {
        match self {
            Self::Loading => {
                r#"<div class="state"><p>Loading jury assignments…</p></div>"#.to_string()
            }
            Self::Failed(message) => format!(
                r#"<div class="state error"><p>{}</p><p class="hint">{CONFIG_HINT}</p></div>"#,
                escape(message)
            ),
            Self::Empty => format!(r#"<div class="state"><p>{EMPTY_MESSAGE}</p></div>"#),
            Self::Loaded(rows) => {
                let body: String = rows.iter().map(render_row).collect();
                format!(
                    r#"<div class="card" style="padding:0;overflow-x:auto">
<table>
  <thead><tr><th>Jurcy #</th><th>Name</th><th>Size</th><th>Phone</th></tr></thead>
  <tbody>{body}</tbody>
</table>
</div>"#
                )
            }
        }
    }
}

fn render_row(row: &MemberRow) -> String {
    format!(
        "<tr><td><strong>{}</strong></td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape(&row.jury_number),
        escape(&row.name),
        escape(&row.size),
        escape(&row.phone),
    )
}

/// `GET /fragments/roster`: the section body after a fresh fetch.
pub async fn roster_fragment(State(state): State<AppState>) -> Html<String> {
    let result = state.client.fetch_roster().await;
    if let Err(e) = &result {
        crate::server::log_error(e);
    }
    Html(RosterView::from(result).render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_view_from_empty_roster() {
        assert_eq!(RosterView::from(Ok(Roster::default())), RosterView::Empty);
    }

    #[test]
    fn test_view_from_error() {
        let view = RosterView::from(Err(RosterError::NotConfigured));
        assert_eq!(
            view,
            RosterView::Failed("GOOGLE_SHEETS_SCRIPT_URL is not configured".into())
        );
        let html = view.render();
        assert!(html.contains("is not configured"));
        assert!(html.contains(CONFIG_HINT));
    }

    #[test]
    fn test_loaded_renders_one_row_per_member() {
        let roster = Roster::from_json(json!([
            { "Jurcy Number": "7", "Name": "Alex", "Size": "M", "Phone Number": "0170" },
            { "jersey Number": "9" }
        ]));
        let html = RosterView::from(Ok(roster)).render();
        assert_eq!(html.matches("<tr><td>").count(), 2);
        assert!(html.contains("<strong>7</strong>"));
        assert!(html.contains("<td>Alex</td>"));
        assert!(html.contains("<td>—</td>"));
    }

    #[test]
    fn test_loaded_escapes_sheet_text() {
        let roster = Roster::from_json(json!([{ "Name": "<script>x</script>" }]));
        let html = RosterView::from(Ok(roster)).render();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_loading_and_empty_text() {
        assert!(RosterView::Loading.render().contains("Loading"));
        assert!(RosterView::Empty.render().contains(EMPTY_MESSAGE));
    }
}
