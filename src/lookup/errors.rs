//! Error types for game lookups
//!
//! Only a failed search-page fetch ever reaches the caller of a lookup;
//! detail-page failures are logged and folded into the `LookupReport`.

use thiserror::Error;

/// Result type alias for lookup operations
pub type LookupResult<T> = Result<T, LookupError>;

/// Error types for lookup operations
#[derive(Debug, Error)]
pub enum LookupError {
    /// Request never produced a response (DNS, refused connection, timeout, body read)
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// A URL could not be parsed or joined
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Query rejected before any request was made
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Configuration rejected by the builder
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LookupError {
    /// Check if this is a network failure (transport or HTTP status)
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, LookupError::Transport { .. } | LookupError::Status { .. })
    }

    /// URL of the request that failed, for network errors
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            LookupError::Transport { url, .. }
            | LookupError::Status { url, .. }
            | LookupError::InvalidUrl { url, .. } => Some(url),
            LookupError::InvalidQuery(_) | LookupError::Config(_) => None,
        }
    }
}
