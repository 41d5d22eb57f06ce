//! Port trait implementation for `UberClient`.
//!
//! This module implements the core-owned `RideEstimatePort` trait for
//! `UberClient`, handling the conversion between internal API types and
//! core DTOs.

use async_trait::async_trait;
use lastmile_core::{
    PriceEstimate, RawResponse, RideEstimatePort, RidePortError, RidePortResult,
    TripEstimateRequest,
};

use crate::client::UberClient;
use crate::error::UberError;
use crate::http::HttpBackend;
use crate::models::UberPriceEstimate;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `UberError` to core `RidePortError`.
fn map_error(err: UberError) -> RidePortError {
    match err {
        UberError::ApiRequestFailed { status, .. } => match status {
            401 | 403 => RidePortError::Unauthorized { status },
            429 => RidePortError::RateLimited,
            _ => RidePortError::Api { status },
        },
        UberError::InvalidResponse { message } => RidePortError::InvalidResponse { message },
        UberError::MissingToken { kind } => RidePortError::Configuration {
            message: format!("No {kind} configured"),
        },
        UberError::Network(e) if e.is_decode() => RidePortError::InvalidResponse {
            message: e.to_string(),
        },
        // The request never left the process, e.g. a token with a newline
        UberError::Network(e) if e.is_builder() => RidePortError::Configuration {
            message: e.to_string(),
        },
        UberError::Network(e) => RidePortError::Network {
            message: e.to_string(),
        },
        UberError::InvalidUrl(e) => RidePortError::Configuration {
            message: e.to_string(),
        },
        UberError::JsonParse(e) => RidePortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Type Conversions
// ============================================================================

/// Convert an API price estimate to the core `PriceEstimate`.
fn to_price_estimate(price: UberPriceEstimate) -> PriceEstimate {
    PriceEstimate {
        localized_display_name: price.localized_display_name,
        estimate: price.estimate,
        duration: price.duration.unwrap_or_default(),
        distance: price.distance.unwrap_or_default(),
        display_name: price.display_name,
        product_id: price.product_id,
        low_estimate: price.low_estimate,
        high_estimate: price.high_estimate,
        currency_code: price.currency_code,
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> RideEstimatePort for UberClient<B> {
    async fn request_trip_estimate(
        &self,
        request: &TripEstimateRequest,
    ) -> RidePortResult<RawResponse> {
        self.post_trip_estimate(request).await.map_err(map_error)
    }

    async fn price_estimates(
        &self,
        request: &TripEstimateRequest,
    ) -> RidePortResult<Vec<PriceEstimate>> {
        let prices = self
            .fetch_price_estimates(request)
            .await
            .map_err(map_error)?;

        Ok(prices.into_iter().map(to_price_estimate).collect())
    }
}
