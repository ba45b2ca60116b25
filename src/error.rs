//! API Errors
//!
//! Failures of the task backend round-trips.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connection refused, CORS, aborted fetch...)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Body was not the JSON we expected
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Id that cannot be addressed as a path segment ("", "." or "..")
    #[error("invalid task id {0:?}")]
    InvalidTaskId(String),

    /// Configured backend origin is unusable
    #[error("invalid API base URL {0:?}")]
    InvalidBaseUrl(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;
