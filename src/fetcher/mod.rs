//! Document fetching
//!
//! The pipeline only talks to the network through `DocumentFetcher`, so it
//! can be driven by `HttpFetcher` in production and by canned pages in tests.

mod document;
mod http;

pub use document::ParsedDocument;
pub use http::HttpFetcher;

use std::future::Future;

use crate::lookup::errors::LookupResult;

/// Retrieves a page by URL and returns its parsed markup
///
/// Implementations must not retry; a failure is reported once and the
/// pipeline decides what it means (fatal for the search page, skip for a
/// detail page).
///
/// The returned future must be `Send` so lookups can run on a multi-threaded
/// runtime; build the `ParsedDocument` after the last `.await`.
pub trait DocumentFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = LookupResult<ParsedDocument>> + Send;
}

impl<F: DocumentFetcher> DocumentFetcher for &F {
    fn fetch(&self, url: &str) -> impl Future<Output = LookupResult<ParsedDocument>> + Send {
        (**self).fetch(url)
    }
}
