//! Last-mile service - thin orchestrator for ride estimate operations.
//!
//! Delegates all network work to the `RideEstimatePort` and adds the
//! fallback behavior for quotes.

use std::sync::Arc;

use crate::domain::{
    FareComparison, LastMileQuote, QuoteStatus, RawResponse, TripEstimateRequest, compare_fares,
    mock_estimates,
};
use crate::ports::{RideEstimatePort, RidePortResult};

/// Service for last-mile ride estimates.
pub struct LastMileService {
    rides: Arc<dyn RideEstimatePort>,
}

impl LastMileService {
    /// Create a new service over a ride estimate port.
    pub fn new(rides: Arc<dyn RideEstimatePort>) -> Self {
        Self { rides }
    }

    /// Send one trip estimate request and hand back the reply untouched.
    pub async fn trip_estimate(
        &self,
        request: &TripEstimateRequest,
    ) -> RidePortResult<RawResponse> {
        tracing::debug!(
            pickup = %request.pickup,
            dropoff = %request.dropoff,
            "Requesting trip estimate"
        );

        let response = self.rides.request_trip_estimate(request).await?;
        if !response.is_success() {
            tracing::warn!(
                status = response.status,
                "Trip estimate returned a non-success status"
            );
        }
        Ok(response)
    }

    /// Quote the last leg of a journey.
    ///
    /// Never fails: if the provider cannot be reached the quote carries
    /// canned estimates and [`QuoteStatus::Mock`].
    pub async fn quote(&self, request: &TripEstimateRequest) -> LastMileQuote {
        match self.rides.price_estimates(request).await {
            Ok(uber_estimates) => LastMileQuote {
                status: QuoteStatus::Success,
                pickup: request.pickup,
                dropoff: request.dropoff,
                uber_estimates,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching price estimates, using mock estimates");
                LastMileQuote {
                    status: QuoteStatus::Mock,
                    pickup: request.pickup,
                    dropoff: request.dropoff,
                    uber_estimates: mock_estimates(),
                }
            }
        }
    }

    /// Estimate ride, bus and train fares locally, without calling the provider.
    pub fn local_fare(&self, request: &TripEstimateRequest, ac_bus: bool) -> FareComparison {
        compare_fares(&request.pickup, &request.dropoff, ac_bus)
    }
}
