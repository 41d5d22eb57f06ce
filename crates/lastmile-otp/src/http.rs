//! HTTP backend abstraction for the planner API.
//!
//! Planning is a read-only GET, so every transient failure is retried.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::error::{OtpError, OtpResult};
use crate::models::OtpConfig;

/// Trait for HTTP backends that talk to the planner.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET a URL and deserialize the JSON reply. Non-2xx is an error.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> OtpResult<T>;
}

/// Production HTTP backend using reqwest, with exponential backoff for
/// 5xx replies and network errors.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay_ms: u64,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &OtpConfig) -> OtpResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay_ms: config.retry_base_delay_ms,
        })
    }

    /// Delay before retry number `attempt` (1-based).
    fn backoff(&self, attempt: u8) -> Duration {
        let factor = 2u64.saturating_pow(u32::from(attempt).saturating_sub(1));
        Duration::from_millis(self.retry_base_delay_ms.saturating_mul(factor))
    }

    async fn get_with_retry(&self, url: &Url) -> OtpResult<reqwest::Response> {
        let mut last_error: Option<OtpError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.backoff(attempt);
                tracing::debug!(attempt, ?delay, %url, "Retrying plan request");
                tokio::time::sleep(delay).await;
            }

            match self.client.get(url.as_str()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    let err = OtpError::ApiRequestFailed {
                        status: status.as_u16(),
                        url: url.to_string(),
                    };
                    if status.is_server_error() && attempt < self.max_retries {
                        last_error = Some(err);
                        continue;
                    }
                    return Err(err);
                }
                Err(e) => {
                    if attempt < self.max_retries && !e.is_builder() {
                        tracing::warn!(error = %e, attempt, "Plan request failed");
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| OtpError::InvalidResponse {
            message: "Unknown error during fetch".to_string(),
        }))
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> OtpResult<T> {
        let response = self.get_with_retry(url).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
