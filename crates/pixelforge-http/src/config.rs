//! Public configuration for the upscaling service client.

use std::time::Duration;

/// Where the service listens when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path of the upscale endpoint, relative to the base URL.
pub const ENDPOINT_PATH: &str = "/api/upscale";

/// Configuration for the upscaling service client.
///
/// # Example
///
/// ```
/// use pixelforge_http::UpscaleClientConfig;
/// use std::time::Duration;
///
/// let config = UpscaleClientConfig::new()
///     .with_base_url("http://gpu-box:8000")
///     .with_timeout(Duration::from_secs(120));
/// ```
#[derive(Debug, Clone)]
pub struct UpscaleClientConfig {
    /// Scheme, host and port of the service
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout. `None` waits for as long as the service takes.
    pub(crate) timeout: Option<Duration>,
}

impl Default for UpscaleClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("pixelforge-http/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl UpscaleClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the service.
    ///
    /// Defaults to `http://localhost:8000`.
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

    /// Bound each request to `timeout`.
    ///
    /// Unset by default.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set or clear the request timeout.
    #[must_use]
    pub const fn with_optional_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL of the service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
