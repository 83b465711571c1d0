//! Getter methods for `LookupConfig`

use std::time::Duration;

use super::types::LookupConfig;
use crate::lookup::errors::{LookupError, LookupResult};
use crate::lookup::types::SEARCH_PAGE;
use crate::utils::directory_url;

impl LookupConfig {
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn max_concurrent_details(&self) -> usize {
        self.max_concurrent_details
    }

    /// Search page URL for `query`
    ///
    /// `<base>/kensaku.php?category=game&word_category=name&word=<query>`,
    /// with the query form-encoded (space becomes `+`).
    pub fn search_url(&self, query: &str) -> LookupResult<String> {
        let mut url = directory_url(&self.base_url)?
            .join(SEARCH_PAGE)
            .map_err(|e| LookupError::InvalidUrl {
                url: self.base_url.clone(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("category", "game")
            .append_pair("word_category", "name")
            .append_pair("word", query);
        Ok(url.into())
    }
}
