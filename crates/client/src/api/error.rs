//! Errors from the societies REST API.

use thiserror::Error;

/// Errors that can occur when talking to the societies backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The token was rejected.
    #[error("Unauthorized: the session token was rejected")]
    Unauthorized,

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),

    /// No token in either session slot.
    #[error("Not signed in: no session token available")]
    MissingToken,

    /// Endpoint URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Whether the request reached the server and was answered.
    #[must_use]
    pub const fn is_server_response(&self) -> bool {
        matches!(
            self,
            Self::Api { .. } | Self::Unauthorized | Self::NotFound(_)
        )
    }
}
