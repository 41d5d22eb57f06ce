//! Provider estimates and the last-mile quote built from them.

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// Raw HTTP reply from the provider, untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl RawResponse {
    /// Whether the status is in the 2xx range.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// One product line from the provider's price estimate endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    /// Product name shown to riders (e.g. "UberGo")
    pub localized_display_name: String,
    /// Formatted price range (e.g. "₹120-150")
    pub estimate: String,
    /// Expected trip duration in seconds
    #[serde(default)]
    pub duration: u32,
    /// Expected trip distance as reported by the provider
    #[serde(default)]
    pub distance: f64,
    /// Non-localized product name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Provider product identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Lower bound of the price range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_estimate: Option<f64>,
    /// Upper bound of the price range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_estimate: Option<f64>,
    /// ISO 4217 currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

impl PriceEstimate {
    /// Create an estimate with only the display fields populated.
    pub fn new(
        name: impl Into<String>,
        estimate: impl Into<String>,
        duration: u32,
        distance: f64,
    ) -> Self {
        Self {
            localized_display_name: name.into(),
            estimate: estimate.into(),
            duration,
            distance,
            display_name: None,
            product_id: None,
            low_estimate: None,
            high_estimate: None,
            currency_code: None,
        }
    }
}

/// Where the estimates in a [`LastMileQuote`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    /// Live estimates from the provider
    Success,
    /// Canned estimates, the provider could not be reached
    Mock,
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Mock => write!(f, "mock"),
        }
    }
}

/// Fare options for the last leg of a journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastMileQuote {
    /// Whether the estimates are live or canned
    pub status: QuoteStatus,
    /// Pickup point the quote is for
    pub pickup: Coordinate,
    /// Dropoff point the quote is for
    pub dropoff: Coordinate,
    /// Product estimates, possibly empty
    pub uber_estimates: Vec<PriceEstimate>,
}

/// Canned estimates returned when the provider is unavailable.
pub fn mock_estimates() -> Vec<PriceEstimate> {
    vec![
        PriceEstimate::new("UberGo", "₹120-150", 600, 2.1),
        PriceEstimate::new("UberAuto", "₹80-100", 650, 2.1),
    ]
}
