//! Core configuration types for game lookups
//!
//! This module contains the `LookupConfig` struct that carries everything a
//! lookup needs besides the query itself: where the site lives and how the
//! HTTP side behaves.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration struct for lookup operations
///
/// Deserializing validates the same way `LookupConfigBuilder::build` does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "super::builder::LookupConfigBuilder")]
pub struct LookupConfig {
    /// Site root that `kensaku.php` and detail hrefs are resolved against.
    ///
    /// **INVARIANT:** Always an http(s) URL without a trailing `/`
    /// (normalized in builder).
    pub(crate) base_url: String,

    /// Timeout applied to every HTTP request
    ///
    /// Default: 30 seconds
    pub(crate) request_timeout: Duration,

    /// `User-Agent` header sent with every request
    pub(crate) user_agent: String,

    /// Maximum number of detail pages fetched concurrently per lookup
    /// Default: 4, Minimum: 1
    pub(crate) max_concurrent_details: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: crate::utils::DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(crate::utils::DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: crate::utils::CHROME_USER_AGENT.to_string(),
            max_concurrent_details: crate::utils::DEFAULT_MAX_CONCURRENT_DETAILS,
        }
    }
}
