//! HTTP backend abstraction for the Uber API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest. Only idempotent GETs are retried.

use async_trait::async_trait;
use lastmile_core::RawResponse;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::error::{UberError, UberResult};
use crate::models::{Authorization, UberConfig};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that talk to the Uber API.
///
/// This is an implementation detail - external code should use the
/// `RideEstimatePort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST a JSON body once and return the reply whatever its status.
    async fn post_json(
        &self,
        url: &Url,
        body: String,
        auth: &Authorization,
    ) -> UberResult<RawResponse>;

    /// GET a URL and deserialize the JSON reply. Non-2xx is an error.
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        auth: &Authorization,
    ) -> UberResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// GETs use exponential backoff for transient server errors (5xx)
/// and network errors. POSTs are sent exactly once.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay_ms: u64,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &UberConfig) -> UberResult<Self> {
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

    /// GET a URL with automatic retry for transient errors.
    async fn get_with_retry(
        &self,
        url: &Url,
        auth: &Authorization,
    ) -> UberResult<reqwest::Response> {
        let mut last_error: Option<UberError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.backoff(attempt);
                tracing::debug!(attempt, ?delay, %url, "Retrying request");
                tokio::time::sleep(delay).await;
            }

            let request = self
                .client
                .get(url.as_str())
                .header(AUTHORIZATION, auth.header_value());

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    // 5xx errors are retryable (server-side issues)
                    if status.is_server_error() && attempt < self.max_retries {
                        last_error = Some(UberError::ApiRequestFailed {
                            status: status.as_u16(),
                            url: url.to_string(),
                        });
                        continue;
                    }

                    // 4xx errors or final attempt - fail immediately
                    return Err(UberError::ApiRequestFailed {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                Err(e) => {
                    // Network errors are retryable; a request that could not
                    // be built (bad header value) fails the same way every time
                    if attempt < self.max_retries && !e.is_builder() {
                        tracing::warn!(error = %e, attempt, "Request failed");
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| UberError::InvalidResponse {
            message: "Unknown error during fetch".to_string(),
        }))
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json(
        &self,
        url: &Url,
        body: String,
        auth: &Authorization,
    ) -> UberResult<RawResponse> {
        let response = self
            .client
            .post(url.as_str())
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, auth.header_value())
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }

    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        auth: &Authorization,
    ) -> UberResult<T> {
        let response = self.get_with_retry(url, auth).await?;
        let text = response.text().await?;
        let data: T = serde_json::from_str(&text)?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
