//! Error types for ScraperAPI tools.

use thiserror::Error;

/// Result type for ScraperAPI operations.
pub type Result<T> = std::result::Result<T, ScraperApiError>;

/// Longest slice of a response body rendered in error messages.
const BODY_PREVIEW_CHARS: usize = 500;

/// Errors that can occur while translating, sending or decoding a ScraperAPI call.
#[derive(Error, Debug)]
pub enum ScraperApiError {
    /// Missing or unusable client configuration (API key, base URL)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A request parameter failed validation; nothing was sent
    #[error("Invalid parameter '{field}': {reason}")]
    Validation { field: &'static str, reason: String },

    /// The service answered with a non-success status or an unreadable payload
    #[error("ScraperAPI request failed with status {status} ({reason}): {}", body_preview(.body))]
    RemoteService {
        status: u16,
        reason: String,
        body: String,
    },

    /// Connection, DNS, timeout or body read failure
    #[error("HTTP transport error: {0}")]
    Transport(#[source] reqwest::Error),
}

impl ScraperApiError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        ScraperApiError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// HTTP status reported by the service, if the error came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            ScraperApiError::RemoteService { status, .. } => Some(*status),
            ScraperApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body for remote service errors
    pub fn body(&self) -> Option<&str> {
        match self {
            ScraperApiError::RemoteService { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ScraperApiError::Validation { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, ScraperApiError::Configuration(_))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ScraperApiError::RemoteService { .. })
    }
}

impl From<reqwest::Error> for ScraperApiError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key in its query string
        ScraperApiError::Transport(err.without_url())
    }
}

fn body_preview(body: &str) -> String {
    if body.chars().count() > BODY_PREVIEW_CHARS {
        let preview: String = body.chars().take(BODY_PREVIEW_CHARS).collect();
        format!("{}... (truncated from {} bytes)", preview, body.len())
    } else {
        body.to_string()
    }
}
