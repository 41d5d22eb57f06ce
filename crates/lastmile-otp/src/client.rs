//! Planner client.

use lastmile_core::{Coordinate, TripPlan};

use crate::config::OtpClientConfig;
use crate::error::{OtpError, OtpResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{OtpConfig, OtpPlanResponse};
use crate::url::build_plan_url;

/// Default planner client using the reqwest HTTP backend.
pub type DefaultOtpClient = OtpClient<ReqwestBackend>;

/// Client for an OpenTripPlanner router, generic over the HTTP backend.
pub struct OtpClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: OtpConfig,
}

impl DefaultOtpClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &OtpClientConfig) -> OtpResult<Self> {
        let internal_config = OtpConfig::from_public(config)?;
        let backend = ReqwestBackend::new(&internal_config)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }
}

impl<B: HttpBackend> OtpClient<B> {
    #[cfg(test)]
    pub(crate) const fn with_backend(config: OtpConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// Ask the planner for transit itineraries between two points.
    pub(crate) async fn fetch_plan(&self, from: &Coordinate, to: &Coordinate) -> OtpResult<TripPlan> {
        let url = build_plan_url(&self.config, from, to);
        tracing::debug!(%url, "Requesting transit plan");

        let response: OtpPlanResponse = self.backend.get_json(&url).await?;
        match (response.plan, response.error) {
            (Some(plan), _) => {
                tracing::debug!(itineraries = plan.itineraries.len(), "Transit plan received");
                Ok(plan)
            }
            (None, Some(error)) => Err(OtpError::Planner {
                message: error.describe(),
            }),
            (None, None) => Err(OtpError::InvalidResponse {
                message: "reply has neither plan nor error".to_string(),
            }),
        }
    }
}
