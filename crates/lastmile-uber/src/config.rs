//! Public configuration for the Uber client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://api.uber.com";

/// Configuration for the Uber client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use lastmile_uber::UberClientConfig;
/// use std::time::Duration;
///
/// let config = UberClientConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_access_token("access-token")
///     .with_server_token("server-token");
/// ```
#[derive(Clone)]
pub struct UberClientConfig {
    /// Base URL for the Uber API
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// OAuth access token for the guest trip estimate endpoint
    pub(crate) access_token: Option<String>,
    /// Server token for the price estimate endpoint
    pub(crate) server_token: Option<String>,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl Default for UberClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("lastmile-uber/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            access_token: None,
            server_token: None,
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

// Tokens never show up in logs or panic messages
impl std::fmt::Debug for UberClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |token: &Option<String>| token.as_ref().map(|_| "<redacted>");
        f.debug_struct("UberClientConfig")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("access_token", &redact(&self.access_token))
            .field("server_token", &redact(&self.server_token))
            .field("max_retries", &self.max_retries)
            .field("retry_base_delay", &self.retry_base_delay)
            .finish()
    }
}

impl UberClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the Uber API.
    ///
    /// Defaults to `https://api.uber.com`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the OAuth access token sent as `Authorization: Bearer <token>`.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set an optional access token.
    #[must_use]
    pub fn with_optional_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token;
        self
    }

    /// Set the server token sent as `Authorization: Token <token>`.
    #[must_use]
    pub fn with_server_token(mut self, token: impl Into<String>) -> Self {
        self.server_token = Some(token.into());
        self
    }

    /// Set an optional server token.
    #[must_use]
    pub fn with_optional_server_token(mut self, token: Option<String>) -> Self {
        self.server_token = token;
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Only price estimates are retried. Defaults to 3 retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }
}
