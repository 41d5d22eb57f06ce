//! Error types for OpenTripPlanner operations.
//!
//! These errors are mapped to core port errors at the boundary.

use thiserror::Error;

/// Result type alias for planner operations.
pub type OtpResult<T> = Result<T, OtpError>;

/// Errors related to OpenTripPlanner operations.
#[derive(Debug, Error)]
pub enum OtpError {
    /// Request failed with an HTTP error status.
    #[error("Planner request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The planner answered with an error instead of a plan.
    #[error("Planner error: {message}")]
    Planner {
        /// Planner's error message
        message: String,
    },

    /// Reply had neither a plan nor an error.
    #[error("Invalid response from planner: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
