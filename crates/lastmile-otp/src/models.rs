//! Internal configuration and planner wire types.

use std::time::Duration;

use lastmile_core::TripPlan;
use serde::Deserialize;
use url::Url;

use crate::config::OtpClientConfig;
use crate::error::OtpResult;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the planner client.
#[derive(Debug, Clone)]
pub struct OtpConfig {
    /// Router base URL
    pub base_url: Url,
    /// User agent sent with every request
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Maximum number of retry attempts for transient errors
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff
    pub retry_base_delay_ms: u64,
}

impl OtpConfig {
    /// Derive the internal config from the public one.
    pub fn from_public(config: &OtpClientConfig) -> OtpResult<Self> {
        Ok(Self {
            base_url: Url::parse(&config.base_url)?,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            max_retries: config.max_retries,
            retry_base_delay_ms: u64::try_from(config.retry_base_delay.as_millis())
                .unwrap_or(u64::MAX),
        })
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Body of a `GET /plan` reply.
///
/// The planner answers 200 either way; a failed search carries `error`
/// and no `plan`.
#[derive(Debug, Deserialize)]
pub struct OtpPlanResponse {
    #[serde(default)]
    pub plan: Option<TripPlan>,
    #[serde(default)]
    pub error: Option<OtpPlannerError>,
}

/// Planner error object, e.g. `{"id":404,"msg":"No trip found.","message":"PATH_NOT_FOUND"}`.
#[derive(Debug, Deserialize)]
pub struct OtpPlannerError {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl OtpPlannerError {
    /// Human-readable description, preferring the prose `msg`.
    pub fn describe(&self) -> String {
        let text = self
            .msg
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or("no route found");
        match self.id {
            Some(id) => format!("{text} ({id})"),
            None => text.to_string(),
        }
    }
}
