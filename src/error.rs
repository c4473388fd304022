use axum::http::StatusCode;

use crate::config::SCRIPT_URL_VAR;

#[derive(thiserror::Error, Debug)]
pub enum RosterError {
    #[error("{var} is not configured", var = SCRIPT_URL_VAR)]
    NotConfigured,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Conflict(String),
    /// The sheet answered with an HTML page (login wall, missing handler)
    /// instead of data.
    #[error("{0}")]
    UpstreamMisconfigured(String),
    /// `message` goes to the browser, `detail` only to the log.
    #[error("{message}")]
    UpstreamError { message: String, detail: String },
}

impl RosterError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn upstream(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::UpstreamError {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::UpstreamMisconfigured(_) | Self::UpstreamError { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Cut `text` to at most `max` characters, never splitting a code point.
pub fn preview(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(RosterError::NotConfigured.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(RosterError::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(RosterError::conflict("x").status(), StatusCode::CONFLICT);
        assert_eq!(
            RosterError::UpstreamMisconfigured("x".into()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(RosterError::upstream("x", "y").status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_not_configured_names_the_variable() {
        assert_eq!(
            RosterError::NotConfigured.to_string(),
            "GOOGLE_SHEETS_SCRIPT_URL is not configured"
        );
    }

    #[test]
    fn test_upstream_display_hides_detail() {
        let err = RosterError::upstream("Could not save. Try again.", "status 500: boom");
        assert_eq!(err.to_string(), "Could not save. Try again.");
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        assert_eq!(preview("héllo", 2), "hé");
        assert_eq!(preview("abc", 10), "abc");
        assert_eq!(preview("", 3), "");
    }
}
