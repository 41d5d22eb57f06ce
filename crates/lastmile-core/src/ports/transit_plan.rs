//! Transit journey planner port.
//!
//! The actual implementation lives in `lastmile-otp`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Coordinate, TripPlan};

/// Errors from transit planner port operations.
#[derive(Debug, Clone, Error)]
pub enum TransitPortError {
    /// The planner answered but found no itinerary.
    #[error("No route found: {message}")]
    NoRoute {
        /// The planner's explanation
        message: String,
    },

    /// The planner answered with a non-success status.
    #[error("Planner request failed with status {status}")]
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

    /// Invalid response from the planner.
    #[error("Invalid planner response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Configuration error (bad base URL).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for transit planner port operations.
pub type TransitPortResult<T> = Result<T, TransitPortError>;

/// Port trait for transit journey planning.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransitPlanPort: Send + Sync {
    /// Plan a transit-and-walk journey between two points.
    async fn plan_trip(&self, from: &Coordinate, to: &Coordinate)
    -> TransitPortResult<TripPlan>;
}
