//! `reqwest`-backed document fetcher
//!
//! One client per fetcher; the client pools connections, so a single
//! `HttpFetcher` should be shared across lookups rather than rebuilt.

use reqwest::Client;
use tracing::debug;

use super::{DocumentFetcher, ParsedDocument};
use crate::config::LookupConfig;
use crate::lookup::errors::{LookupError, LookupResult};

/// Fetches pages over HTTP(S) with the timeout and user agent from config
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher from lookup configuration
    pub fn new(config: &LookupConfig) -> LookupResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| LookupError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing client (shared pools, custom TLS, proxies)
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> LookupResult<ParsedDocument> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
            .send()
            .await
            .map_err(|source| LookupError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Decodes using the charset from Content-Type, falling back to UTF-8
        let body = response
            .text()
            .await
            .map_err(|source| LookupError::Transport {
                url: url.to_string(),
                source,
            })?;

        debug!("Fetched {} ({} bytes)", url, body.len());
        Ok(ParsedDocument::parse(url, &body))
    }
}
