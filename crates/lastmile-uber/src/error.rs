//! Error types for Uber API operations.
//!
//! These errors are mapped to core port errors at the boundary.

use thiserror::Error;

/// Result type alias for Uber API operations.
pub type UberResult<T> = Result<T, UberError>;

/// Errors related to Uber API operations.
#[derive(Debug, Error)]
pub enum UberError {
    /// API request failed with an HTTP error status.
    #[error("Uber API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from Uber API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// No token was configured for an endpoint that needs one.
    #[error("No {kind} configured")]
    MissingToken {
        /// Which token is missing ("access token" or "server token")
        kind: &'static str,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON (de)serialization error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
