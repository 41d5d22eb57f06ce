//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. The Uber and OpenTripPlanner clients are built here
//! from the CLI configuration and handed to the core services behind the
//! `RideEstimatePort` and `TransitPlanPort` traits.
//!
//! Command handlers receive the composed context and delegate work to it.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use lastmile_core::{LastMileService, RideEstimatePort, RoutePlannerService, TransitPlanPort};
use lastmile_otp::{DefaultOtpClient, OtpClientConfig};
use lastmile_uber::{DefaultUberClient, UberClientConfig};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Clone)]
pub struct CliConfig {
    /// Base URL of the ride estimates API.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Bearer token for the trip estimate endpoint.
    pub access_token: Option<String>,
    /// Server token for the price estimates endpoint.
    pub server_token: Option<String>,
    /// Router base URL of the transit planner.
    pub otp_base_url: String,
}

impl CliConfig {
    /// Create config from the global options, with no tokens.
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(timeout_secs),
            access_token: None,
            server_token: None,
            otp_base_url: lastmile_otp::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set the access token, if one was given.
    #[must_use]
    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token;
        self
    }

    /// Set the server token, if one was given.
    #[must_use]
    pub fn with_server_token(mut self, token: Option<String>) -> Self {
        self.server_token = token;
        self
    }

    /// Set the transit planner router URL.
    #[must_use]
    pub fn with_otp_base_url(mut self, url: impl Into<String>) -> Self {
        self.otp_base_url = url.into();
        self
    }

    fn client_config(&self) -> UberClientConfig {
        UberClientConfig::new()
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout)
            .with_optional_access_token(self.access_token.clone())
            .with_optional_server_token(self.server_token.clone())
    }

    fn planner_config(&self) -> OtpClientConfig {
        OtpClientConfig::new()
            .with_base_url(self.otp_base_url.clone())
            .with_timeout(self.timeout)
    }
}

impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .field("server_token", &self.server_token.as_ref().map(|_| "***"))
            .field("otp_base_url", &self.otp_base_url)
            .finish()
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core last-mile service.
    pub service: LastMileService,
    /// Transit route planning.
    pub routes: RoutePlannerService,
}

impl CliContext {
    /// Access the last-mile service.
    pub fn service(&self) -> &LastMileService {
        &self.service
    }

    /// Access the route planner.
    pub fn routes(&self) -> &RoutePlannerService {
        &self.routes
    }
}

/// Bootstrap the CLI application.
///
/// Builds the reqwest-backed Uber and planner clients and wraps them in the
/// core services. No network traffic happens here.
///
/// # Errors
///
/// Returns [`CliError::Config`] if either base URL does not parse or an HTTP
/// client cannot be built.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    tracing::debug!(?config, "Bootstrapping CLI context");

    let rides = DefaultUberClient::new(&config.client_config())
        .map_err(|e| CliError::Config(e.to_string()))?;
    let planner = DefaultOtpClient::new(&config.planner_config())
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(bootstrap_with(Arc::new(rides), Arc::new(planner)))
}

/// Bootstrap with custom ports (for testing).
pub fn bootstrap_with(
    rides: Arc<dyn RideEstimatePort>,
    transit: Arc<dyn TransitPlanPort>,
) -> CliContext {
    CliContext {
        service: LastMileService::new(rides),
        routes: RoutePlannerService::new(transit),
    }
}
