//! Command handlers that delegate to the core services.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Resolve CLI input into a trip request
//!   2. Call `LastMileService` or `RoutePlannerService` methods
//!   3. Render output to a string and print it
//!
//! Handlers should NOT talk to the HTTP client directly.

pub mod estimate;
pub mod fare;
pub mod quote;
pub mod route;

use lastmile_core::{Coordinate, TripEstimateRequest};

use crate::error::CliError;

/// Build the trip request, filling missing points from the default trip.
pub fn resolve_trip(
    pickup: Option<Coordinate>,
    dropoff: Option<Coordinate>,
) -> Result<TripEstimateRequest, CliError> {
    let default = TripEstimateRequest::default();
    let request = TripEstimateRequest::new(
        pickup.unwrap_or(default.pickup),
        dropoff.unwrap_or(default.dropoff),
    )?;
    Ok(request)
}
