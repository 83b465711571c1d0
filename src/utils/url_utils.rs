//! URL helpers for building lookup requests.

use url::Url;

use crate::lookup::errors::{LookupError, LookupResult};

/// Check if a URL is a usable http(s) URL
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Parse `base` as a directory URL so relative joins land underneath it.
///
/// `Url::join` drops the last path segment unless the base ends in `/`,
/// so `.../toukei_kaiseki` and `.../toukei_kaiseki/` must behave the same.
pub fn directory_url(base: &str) -> LookupResult<Url> {
    let with_slash = format!("{}/", base.trim_end_matches('/'));
    Url::parse(&with_slash).map_err(|e| LookupError::InvalidUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })
}

/// Resolve an `href` found on a page against the site base directory
pub fn resolve_href(base: &str, href: &str) -> LookupResult<String> {
    let joined = directory_url(base)?
        .join(href)
        .map_err(|e| LookupError::InvalidUrl {
            url: href.to_string(),
            reason: e.to_string(),
        })?;
    Ok(joined.into())
}
