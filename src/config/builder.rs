//! Fluent builder for `LookupConfig`
//!
//! Every field has a default, so `LookupConfig::builder().build()` yields the
//! live-site configuration. Validation happens once, in `build()`.

use serde::Deserialize;
use std::time::Duration;

use crate::lookup::errors::{LookupError, LookupResult};
use crate::utils::{
    CHROME_USER_AGENT, DEFAULT_BASE_URL, DEFAULT_MAX_CONCURRENT_DETAILS,
    DEFAULT_REQUEST_TIMEOUT_SECS, is_valid_url,
};

use super::types::LookupConfig;

/// Also the deserialization shape of `LookupConfig`: missing fields take
/// their defaults and the result goes through `build()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LookupConfigBuilder {
    pub(crate) base_url: String,
    pub(crate) request_timeout: Duration,
    pub(crate) user_agent: String,
    pub(crate) max_concurrent_details: usize,
}

impl Default for LookupConfigBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: CHROME_USER_AGENT.to_string(),
            max_concurrent_details: DEFAULT_MAX_CONCURRENT_DETAILS,
        }
    }
}

impl TryFrom<LookupConfigBuilder> for LookupConfig {
    type Error = LookupError;

    fn try_from(builder: LookupConfigBuilder) -> LookupResult<Self> {
        builder.build()
    }
}

impl LookupConfig {
    /// Create a builder for configuring a `LookupConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> LookupConfigBuilder {
        LookupConfigBuilder::default()
    }
}

impl LookupConfigBuilder {
    /// Site root. Useful for pointing lookups at a mirror or a test server.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Width of the detail-page fetch stage; `1` fetches one page at a time
    #[must_use]
    pub fn max_concurrent_details(mut self, n: usize) -> Self {
        self.max_concurrent_details = n;
        self
    }

    pub fn build(self) -> LookupResult<LookupConfig> {
        let base_url = self.base_url.trim().trim_end_matches('/').to_string();
        if !is_valid_url(&base_url) {
            return Err(LookupError::Config(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(LookupError::Config(
                "request_timeout must be greater than zero".to_string(),
            ));
        }

        if self.max_concurrent_details == 0 {
            return Err(LookupError::Config(
                "max_concurrent_details must be at least 1".to_string(),
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(LookupError::Config("user_agent cannot be empty".to_string()));
        }

        Ok(LookupConfig {
            base_url,
            request_timeout: self.request_timeout,
            user_agent: self.user_agent,
            max_concurrent_details: self.max_concurrent_details,
        })
    }
}
