//! Uber client for trip and price estimates.
//!
//! This module provides the main client interface for interacting with
//! the Uber estimates API.

use lastmile_core::{RawResponse, TripEstimateRequest};

use crate::config::UberClientConfig;
use crate::error::{UberError, UberResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{Authorization, UberConfig, UberPriceEstimate, UberPriceEstimatesResponse};
use crate::url::{build_price_estimates_url, build_trip_estimates_url};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Uber client using the reqwest HTTP backend.
pub type DefaultUberClient = UberClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for interacting with the Uber estimates API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultUberClient` for production code.
pub struct UberClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: UberConfig,
}

impl DefaultUberClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &UberClientConfig) -> UberResult<Self> {
        let internal_config = UberConfig::from_public(config)?;
        let backend = ReqwestBackend::new(&internal_config)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }
}

impl<B: HttpBackend> UberClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: UberConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// POST the trip to the guest trip estimate endpoint, once.
    pub(crate) async fn post_trip_estimate(
        &self,
        request: &TripEstimateRequest,
    ) -> UberResult<RawResponse> {
        let token = self
            .config
            .access_token
            .clone()
            .ok_or(UberError::MissingToken {
                kind: "access token",
            })?;

        let url = build_trip_estimates_url(&self.config);
        let body = request.to_json()?;

        tracing::debug!(%url, "Sending trip estimate request");
        let response = self
            .backend
            .post_json(&url, body, &Authorization::Bearer(token))
            .await?;
        tracing::debug!(
            status = response.status,
            bytes = response.body.len(),
            "Trip estimate received"
        );

        Ok(response)
    }

    /// Fetch per-product price estimates for the trip.
    pub(crate) async fn fetch_price_estimates(
        &self,
        request: &TripEstimateRequest,
    ) -> UberResult<Vec<UberPriceEstimate>> {
        let token = self
            .config
            .server_token
            .clone()
            .ok_or(UberError::MissingToken {
                kind: "server token",
            })?;

        let url = build_price_estimates_url(&self.config, request);
        let response: UberPriceEstimatesResponse = self
            .backend
            .get_json(&url, &Authorization::Token(token))
            .await?;

        tracing::debug!(products = response.prices.len(), "Price estimates received");
        Ok(response.prices)
    }
}
