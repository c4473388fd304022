use reqwest::header::{ACCEPT, CACHE_CONTROL};
use serde_json::Value;
use tracing::{debug, error};

use crate::client::{looks_like_html, read_body, SheetClient};
use crate::error::{preview, RosterError};
use crate::models::member::Roster;

pub(crate) const LOAD_FAILED: &str = "Could not load team data. Check GOOGLE_SHEETS_SCRIPT_URL.";

pub(crate) const READ_HTML_HINT: &str = "Sheet URL returned a web page instead of data. \
In Google Apps Script: Deploy as Web app → Who has access: Anyone. \
Open the Web app URL once in a browser and click Allow.";

impl SheetClient {
    /// Fetch the full roster, bypassing any cache.
    pub async fn fetch_roster(&self) -> Result<Roster, RosterError> {
        let url = self.script_url()?;
        self.fetch_roster_from(&url).await
    }

    pub(crate) async fn fetch_roster_from(&self, url: &str) -> Result<Roster, RosterError> {
        let resp = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| RosterError::upstream(LOAD_FAILED, format!("request failed: {e}")))?;
        let (status, text) = read_body(resp, LOAD_FAILED).await?;

        if looks_like_html(&text) {
            error!(
                %status,
                preview = preview(text.trim(), 200),
                "sheet returned HTML instead of JSON; deploy the Apps Script as a web app \
                 with access for anyone and authorize it once in a browser"
            );
            return Err(RosterError::UpstreamMisconfigured(READ_HTML_HINT.to_string()));
        }

        if !status.is_success() {
            return Err(RosterError::upstream(
                LOAD_FAILED,
                format!("sheet returned {status}: {}", preview(&text, 100)),
            ));
        }

        let value: Value = serde_json::from_str(&text).map_err(|e| {
            RosterError::upstream(
                LOAD_FAILED,
                format!("sheet returned invalid JSON ({e}): {}", preview(&text, 100)),
            )
        })?;
        let roster = Roster::from_json(value);
        debug!(members = roster.len(), "fetched roster");
        Ok(roster)
    }
}
