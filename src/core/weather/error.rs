//! Fetch failure type

use thiserror::Error;

/// Why one batch's upstream call produced no records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Upstream answered with a non-success status
    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection or transport failure
    #[error("network error: {0}")]
    Network(String),

    /// The per-request timeout elapsed
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Body was not the expected group response
    #[error("invalid upstream response: {0}")]
    Parse(String),
}

impl FetchError {
    /// HTTP status for `Status` failures
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Stable label for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Status { .. } => "status",
            FetchError::Network(_) => "network",
            FetchError::Timeout(_) => "timeout",
            FetchError::Parse(_) => "parse",
        }
    }

    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        // The request URL carries the API key in its query string
        let err = err.without_url();
        if err.is_timeout() {
            FetchError::Timeout(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}
