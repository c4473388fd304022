use reqwest::{Client, Response, StatusCode};

use crate::config::ScriptUrl;
use crate::error::RosterError;

/// Talks to the spreadsheet web app. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SheetClient {
    pub(crate) http: Client,
    pub(crate) script_url: ScriptUrl,
}

impl SheetClient {
    pub fn new(script_url: ScriptUrl) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(concat!("team-roster/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http(http, script_url))
    }

    pub fn with_http(http: Client, script_url: ScriptUrl) -> Self {
        Self { http, script_url }
    }

    /// Looked up per call, see [`ScriptUrl`].
    pub(crate) fn script_url(&self) -> Result<String, RosterError> {
        self.script_url.resolve().ok_or(RosterError::NotConfigured)
    }
}

/// Status plus the whole body as text. Content-type headers from the sheet
/// are not trusted, callers sniff the text themselves.
pub(crate) async fn read_body(
    resp: Response,
    message: &str,
) -> Result<(StatusCode, String), RosterError> {
    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| RosterError::upstream(message, format!("reading body failed: {e}")))?;
    Ok((status, text))
}

/// Apps Script serves an HTML page (login, "script function not found")
/// when the deployment is wrong.
pub(crate) fn looks_like_html(text: &str) -> bool {
    text.trim_start().starts_with('<')
}
