//! Internal configuration and API wire types for the Uber API.
//!
//! Wire types are internal to `lastmile-uber`. External consumers should use
//! the port DTOs defined in `lastmile-core`.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::config::UberClientConfig;
use crate::error::UberResult;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the Uber client.
#[derive(Clone)]
pub struct UberConfig {
    /// Base URL for the Uber API
    pub base_url: Url,
    /// User agent sent with every request
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Bearer token for guest trip estimates
    pub access_token: Option<String>,
    /// Server token for price estimates
    pub server_token: Option<String>,
    /// Maximum number of retry attempts for transient errors
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff
    pub retry_base_delay_ms: u64,
}

impl UberConfig {
    /// Derive the internal config from the public one.
    pub fn from_public(config: &UberClientConfig) -> UberResult<Self> {
        Ok(Self {
            base_url: Url::parse(&config.base_url)?,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            access_token: config.access_token.clone(),
            server_token: config.server_token.clone(),
            max_retries: config.max_retries,
            retry_base_delay_ms: u64::try_from(config.retry_base_delay.as_millis())
                .unwrap_or(u64::MAX),
        })
    }
}

// ============================================================================
// Authorization
// ============================================================================

/// Authorization scheme for a request.
#[derive(Clone, PartialEq, Eq)]
pub enum Authorization {
    /// `Authorization: Bearer <token>` (OAuth access token)
    Bearer(String),
    /// `Authorization: Token <token>` (server token)
    Token(String),
}

impl Authorization {
    /// Value of the `Authorization` header.
    pub fn header_value(&self) -> String {
        match self {
            Self::Bearer(token) => format!("Bearer {token}"),
            Self::Token(token) => format!("Token {token}"),
        }
    }
}

impl std::fmt::Debug for Authorization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer(_) => write!(f, "Bearer(<redacted>)"),
            Self::Token(_) => write!(f, "Token(<redacted>)"),
        }
    }
}

// ============================================================================
// Price Estimates
// ============================================================================

/// Response body of `GET /v1.2/estimates/price`.
#[derive(Debug, Clone, Deserialize)]
pub struct UberPriceEstimatesResponse {
    /// One entry per product; absent when no products serve the area
    #[serde(default)]
    pub prices: Vec<UberPriceEstimate>,
}

/// A single product price estimate as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct UberPriceEstimate {
    /// Product name in the rider's locale (e.g. "UberGo")
    pub localized_display_name: String,
    /// Formatted fare range (e.g. "₹120-150")
    pub estimate: String,
    /// Expected trip duration in seconds
    #[serde(default)]
    pub duration: Option<u32>,
    /// Expected trip distance in miles
    #[serde(default)]
    pub distance: Option<f64>,
    /// Product name, not localized
    #[serde(default)]
    pub display_name: Option<String>,
    /// Provider's product identifier
    #[serde(default)]
    pub product_id: Option<String>,
    /// Lower bound of the fare range
    #[serde(default)]
    pub low_estimate: Option<f64>,
    /// Upper bound of the fare range
    #[serde(default)]
    pub high_estimate: Option<f64>,
    /// ISO 4217 currency code
    #[serde(default)]
    pub currency_code: Option<String>,
}
