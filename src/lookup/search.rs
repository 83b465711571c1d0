//! Search results page extraction
//!
//! Turns the `kensaku.php` results table into `SearchCandidate`s. No
//! matching happens here; every hit is yielded in document order.

use scraper::{ElementRef, Selector};
use std::sync::LazyLock;
use tracing::warn;

use super::types::{PLATFORM_SELECTOR, SEARCH_RESULT_SELECTOR, SearchCandidate};
use crate::fetcher::ParsedDocument;
use crate::utils::resolve_href;

// Hardcoded selectors should NEVER fail to parse - if they do, it's a compile-time bug.

static SEARCH_RESULT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(SEARCH_RESULT_SELECTOR)
        .expect("BUG: hardcoded CSS selector for search results is invalid")
});

static PLATFORM: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(PLATFORM_SELECTOR)
        .expect("BUG: hardcoded CSS selector for platform label is invalid")
});

/// Extract candidates from a search results document
///
/// Lazy and single-pass: the iterator borrows `doc`, and walking the
/// results again means extracting again. Hrefs are resolved against
/// `base_url`.
pub fn extract_candidates<'a>(
    doc: &'a ParsedDocument,
    base_url: &'a str,
) -> impl Iterator<Item = SearchCandidate> + 'a {
    doc.html()
        .select(&SEARCH_RESULT)
        .filter_map(move |anchor| candidate_from_anchor(anchor, base_url))
}

fn candidate_from_anchor(anchor: ElementRef<'_>, base_url: &str) -> Option<SearchCandidate> {
    let title: String = anchor.text().collect();
    if title.trim().is_empty() {
        return None;
    }

    let href = anchor.value().attr("href")?;
    let detail_url = match resolve_href(base_url, href) {
        Ok(url) => url,
        Err(e) => {
            warn!("Skipping search hit '{}': {}", title, e);
            return None;
        }
    };

    Some(SearchCandidate {
        title,
        detail_url,
        platform: platform_label(anchor),
    })
}

/// Bold label next to the anchor, e.g. `(PS Vita)`
fn platform_label(anchor: ElementRef<'_>) -> String {
    anchor
        .parent()
        .and_then(ElementRef::wrap)
        .map(|cell| {
            cell.select(&PLATFORM)
                .flat_map(|label| label.text())
                .collect::<String>()
        })
        .unwrap_or_default()
}
