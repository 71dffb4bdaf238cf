//! Error taxonomy for feed and catalog fetches
//!
//! Every failure is reduced to a single human-readable message at the
//! fetch boundary; nothing here propagates past the fetcher state machine.

use reqwest::StatusCode;
use thiserror::Error;
use types::feed::ErrorBody;

/// Generic message when a failure carries no usable detail
pub const GENERIC_FETCH_MESSAGE: &str = "Failed to load feed";

/// Classified fetch failure
///
/// `Display` is the exact message shown to the user, one per failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request could not complete (connect, timeout, I/O)
    #[error("{message}")]
    Network { message: String },

    /// Backend answered with a non-2xx status
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("{message}")]
    Parse { message: String },
}

impl FetchError {
    /// Classify a transport-level failure
    pub fn transport(err: reqwest::Error) -> Self {
        let raw = err.to_string();
        let message = if raw.is_empty() {
            GENERIC_FETCH_MESSAGE.to_string()
        } else {
            raw
        };
        Self::Network { message }
    }

    /// Classify a non-2xx response, preferring the backend's structured
    /// message over the bare status line
    pub fn from_status(status: StatusCode, body: Option<ErrorBody>) -> Self {
        let message = body
            .and_then(|b| b.error)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        Self::Http {
            status: status.as_u16(),
            message,
        }
    }

    /// Classify a body that failed to deserialize
    pub fn parse(err: serde_json::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}
