//! Error types for the bridge client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the bridge
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or its body could not be read
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The bridge answered with a non-success status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body, usually the bridge's `detail`
        message: String,
    },

    /// The response body was not the JSON the client expected
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Short name of the failure class, used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RequestFailed(_) => "network",
            Self::ApiError { .. } => "status",
            Self::ParseError(_) => "malformed",
        }
    }
}
