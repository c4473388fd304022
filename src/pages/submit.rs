use axum::response::Html;

use super::layout;
use crate::endpoints::submit::NUMBER_TAKEN;
use crate::models::submission::SIZES;

// The taken set is advisory; /api/submit checks again before writing.
const FORM_SCRIPT: &str = r#"
<script>
  (function () {
    var form = document.getElementById('submit-form');
    var number = document.getElementById('jerseyNumber');
    var warning = document.getElementById('number-taken');
    var button = document.getElementById('save');
    var errorBox = document.getElementById('form-error');
    var taken = new Set();
    var saving = false;

    function refresh() {
      var value = number.value.trim();
      var isTaken = value !== '' && taken.has(value);
      number.classList.toggle('taken', isTaken);
      number.setAttribute('aria-invalid', isTaken ? 'true' : 'false');
      warning.hidden = !isTaken;
      button.disabled = saving || isTaken;
      button.textContent = saving ? 'Saving…' : 'Save';
    }

    fetch('/api/team/taken', { cache: 'no-store' })
      .then(function (res) { return res.ok ? res.json() : []; })
      .then(function (data) {
        if (Array.isArray(data)) {
          taken = new Set(data.map(function (n) { return String(n).trim(); }).filter(Boolean));
          refresh();
        }
      })
      .catch(function () {});

    number.addEventListener('input', refresh);

    function showError(message) {
      errorBox.textContent = message;
      errorBox.hidden = false;
    }

    form.addEventListener('submit', function (event) {
      event.preventDefault();
      if (!form.reportValidity()) return;
      saving = true;
      errorBox.hidden = true;
      refresh();
      var payload = {
        name: document.getElementById('name').value.trim(),
        jerseyNumber: number.value.trim(),
        size: document.getElementById('size').value.trim(),
        phone: document.getElementById('phone').value.trim()
      };
      fetch('/api/submit', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(payload)
      })
        .then(function (res) {
          return res.json().catch(function () { return {}; }).then(function (data) {
            if (!res.ok) {
              showError(data.error || 'Something went wrong. Try again.');
              return;
            }
            window.location.assign('/?submitted=1');
          });
        })
        .catch(function () { showError('Network error. Try again.'); })
        .then(function () { saving = false; refresh(); });
    });
  })();
</script>
"#;

pub fn render_submit() -> Html<String> {
    let size_options: String = SIZES
        .iter()
        .map(|s| format!(r#"<option value="{s}">{s}</option>"#))
        .collect();

    let body = format!(
        r#"<div class="wrap narrow">
  <a href="/">← Back to HOT GANG</a>
  <h1>Submit your info</h1>
  <p class="hint">Add your jersey number, name, size, and phone. It will be saved and shown to the team.</p>

  <form id="submit-form" class="card">
    <div class="field">
      <label for="name">Your name (jersey name)</label>
      <input id="name" name="name" type="text" required placeholder="e.g. Asif Ahammad" />
    </div>
    <div class="field">
      <label for="jerseyNumber">Jersey number</label>
      <p class="hint">Each number can only be chosen once. If someone has already taken it, pick another.</p>
      <input id="jerseyNumber" name="jerseyNumber" type="text" required placeholder="e.g. 7" aria-invalid="false" />
      <p id="number-taken" class="field-error" hidden>{NUMBER_TAKEN}</p>
    </div>
    <div class="field">
      <label for="size">Size</label>
      <p class="hint">Check the size chart on the home page (Chest &amp; Height in inches) if you need help.</p>
      <select id="size" name="size" required>
        <option value="">Select size</option>
        {size_options}
      </select>
    </div>
    <div class="field">
      <label for="phone">Phone number</label>
      <input id="phone" name="phone" type="tel" required placeholder="e.g. 01789846204" />
    </div>
    <p id="form-error" class="form-error" hidden></p>
    <button id="save" class="button" type="submit" style="width:100%">Save</button>
  </form>
</div>
{FORM_SCRIPT}"#
    );
    layout("Submit your info", &body)
}

/// `GET /submit`
pub async fn submit_page() -> Html<String> {
    render_submit()
}
