//! Ride-hailing estimate port.
//!
//! The actual implementation lives in `lastmile-uber`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{PriceEstimate, RawResponse, TripEstimateRequest};

/// Errors from ride estimate port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Clone, Error)]
pub enum RidePortError {
    /// The provider rejected the credentials.
    #[error("Authentication failed with status {status}")]
    Unauthorized {
        /// HTTP status code (401 or 403)
        status: u16,
    },

    /// API rate limit exceeded.
    #[error("Rate limit exceeded, try again later")]
    RateLimited,

    /// The provider answered with a non-success status.
    #[error("Provider request failed with status {status}")]
    Api {
        /// HTTP status code
        status: u16,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// Invalid response from the provider.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Configuration error (missing token, bad base URL).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for ride estimate port operations.
pub type RidePortResult<T> = Result<T, RidePortError>;

/// Port trait for ride-hailing estimate operations.
///
/// # Design
///
/// - Uses core-owned DTOs, not provider wire types
/// - Returns `RidePortError` for all failures
/// - Async methods for network operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RideEstimatePort: Send + Sync {
    /// Send a single trip estimate request and return the reply as-is.
    ///
    /// Any HTTP status is a successful result. Only transport failures
    /// are errors, and the request is never retried.
    async fn request_trip_estimate(
        &self,
        request: &TripEstimateRequest,
    ) -> RidePortResult<RawResponse>;

    /// Fetch per-product price estimates for a trip.
    async fn price_estimates(
        &self,
        request: &TripEstimateRequest,
    ) -> RidePortResult<Vec<PriceEstimate>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn RideEstimatePort>) {}

    #[test]
    fn test_error_display() {
        let err = RidePortError::Unauthorized { status: 401 };
        assert!(err.to_string().contains("401"));

        let err = RidePortError::Network {
            message: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));

        assert!(RidePortError::RateLimited.to_string().contains("Rate limit"));
    }
}
