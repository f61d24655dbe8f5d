//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure (unreachable host, closed connection)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response, carrying the status code and status text
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not the JSON we expected
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// JSON (de)serialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Every planning endpoint candidate failed
    #[error("No planning endpoint available")]
    PlanningUnavailable,

    /// In-process transport plumbing failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Non-2xx response as an error, from the numeric code and its
    /// reason phrase.
    pub fn from_status(status: u16, reason: Option<&str>) -> Self {
        Self::Status {
            status,
            message: reason.unwrap_or("unknown status").to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
