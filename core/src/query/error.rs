//! Error types for backend requests

use thiserror::Error;

/// Errors while fetching from the analysis service.
///
/// All variants collapse into the same user-facing message; the variant is
/// kept for logging.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed payload from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("base URL {url} cannot carry a request path")]
    InvalidBaseUrl { url: String },
}

impl FetchError {
    /// Generic message shown in place of the failed view
    pub const USER_MESSAGE: &'static str =
        "Data is unavailable right now. Check that the analysis service is running.";

    pub fn user_message(&self) -> &'static str {
        Self::USER_MESSAGE
    }

    /// True for failures where the server answered but the payload was unusable
    pub fn is_malformed(&self) -> bool {
        matches!(self, FetchError::Decode { .. })
    }
}
