use reqwest::header::CACHE_CONTROL;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::client::{looks_like_html, read_body, SheetClient};
use crate::error::{preview, RosterError};
use crate::models::submission::Submission;

pub(crate) const SAVE_FAILED: &str = "Could not save. Try again.";

pub(crate) const NUMBER_TAKEN: &str =
    "This jersey number is already taken. Please choose another.";

pub(crate) const WRITE_HTML_HINT: &str =
    "Sheet app returned an error. Add doPost to your Apps Script (see docs).";

impl SheetClient {
    /// Validate a raw request body and append it to the sheet.
    ///
    /// Checks run in order: endpoint configured, body is JSON, all four
    /// fields present, number not already on the roster, then one write.
    pub async fn submit(&self, body: &[u8]) -> Result<Submission, RosterError> {
        let url = self.script_url()?;
        let submission = Submission::parse(body)?;
        self.save(&url, &submission).await?;
        Ok(submission)
    }

    async fn save(&self, url: &str, submission: &Submission) -> Result<(), RosterError> {
        if self.number_taken(url, &submission.jersey_number).await {
            warn!(jersey_number = %submission.jersey_number, "rejected duplicate jersey number");
            return Err(RosterError::conflict(NUMBER_TAKEN));
        }

        let resp = self
            .http
            .post(url)
            .header(CACHE_CONTROL, "no-cache")
            .json(submission)
            .send()
            .await
            .map_err(|e| RosterError::upstream(SAVE_FAILED, format!("request failed: {e}")))?;
        let (status, text) = read_body(resp, SAVE_FAILED).await?;

        if looks_like_html(&text) {
            error!(
                %status,
                preview = preview(text.trim(), 200),
                "sheet returned HTML to a write; the Apps Script needs a doPost handler"
            );
            return Err(RosterError::UpstreamMisconfigured(WRITE_HTML_HINT.to_string()));
        }

        if !status.is_success() {
            return Err(RosterError::upstream(
                SAVE_FAILED,
                format!("sheet returned {status}: {}", preview(&text, 100)),
            ));
        }

        // A body that is not JSON is still an acknowledgement.
        if let Ok(ack) = serde_json::from_str::<Value>(&text) {
            if let Some(message) = echoed_error(&ack) {
                warn!(%message, "sheet refused submission");
                return Err(RosterError::Conflict(message));
            }
        }

        info!(
            jersey_number = %submission.jersey_number,
            size = %submission.size,
            "saved submission"
        );
        Ok(())
    }

    /// Fails open: if the roster cannot be read the number counts as free.
    async fn number_taken(&self, url: &str, number: &str) -> bool {
        match self.fetch_roster_from(url).await {
            Ok(roster) => roster.is_number_taken(number),
            Err(e) => {
                warn!(error = %e, "duplicate check skipped, roster unavailable");
                false
            }
        }
    }
}

/// The `error` member of a write acknowledgement, if it is set to anything
/// truthy.
fn echoed_error(ack: &Value) -> Option<String> {
    match ack.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
