//! Lookup orchestration
//!
//! One lookup moves through four phases:
//!
//! 1. `SearchPending` - the search page is being fetched. A failure here ends
//!    the lookup with an error.
//! 2. `SearchDone` - candidates are extracted and matched against the query.
//! 3. `DetailPending` - each match has its detail page fetched, extracted and
//!    assembled. Each resolves on its own into a record or a drop.
//! 4. `Completed` - all detail fetches have resolved; records come back in
//!    search-page order.
//!
//! Nothing is shared between lookups: each call owns its candidates and
//! documents and keeps none of them afterwards.

use futures::{StreamExt, stream};
use std::fmt;
use tracing::{debug, info, warn};

use super::assemble::assemble;
use super::details::extract_details;
use super::errors::{LookupError, LookupResult};
use super::matcher::is_match;
use super::search::extract_candidates;
use super::types::{FailedFetch, GameRecord, LookupReport, SearchCandidate};
use crate::config::LookupConfig;
use crate::fetcher::{DocumentFetcher, HttpFetcher};
use crate::utils::MAX_QUERY_LENGTH;

/// Phase of a lookup, as reported in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupPhase {
    SearchPending,
    SearchDone,
    DetailPending,
    Completed,
}

impl fmt::Display for LookupPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SearchPending => "search-pending",
            Self::SearchDone => "search-done",
            Self::DetailPending => "detail-pending",
            Self::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// How one matched candidate resolved
enum DetailOutcome {
    Assembled(GameRecord),
    Incomplete,
    FetchFailed(FailedFetch),
}

/// Runs lookups against the site with a given fetcher
///
/// Cheap to share: hold one per process and call `run_query` per request.
#[derive(Debug, Clone)]
pub struct GameLookup<F = HttpFetcher> {
    config: LookupConfig,
    fetcher: F,
}

impl GameLookup<HttpFetcher> {
    /// Lookup over HTTP using `config`
    pub fn new(config: LookupConfig) -> LookupResult<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self { config, fetcher })
    }
}

impl<F: DocumentFetcher> GameLookup<F> {
    /// Lookup using a caller-supplied fetcher
    #[must_use]
    pub fn with_fetcher(config: LookupConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    #[must_use]
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Find every game matching `title`
    ///
    /// `Ok(vec![])` means nothing matched (or every match lacked required
    /// fields). `Err` only when the query is invalid or the search page
    /// itself could not be fetched.
    pub async fn run_query(&self, title: &str) -> LookupResult<Vec<GameRecord>> {
        Ok(self.run_query_with_report(title).await?.records)
    }

    /// Same as `run_query`, with counters and per-page failures
    pub async fn run_query_with_report(&self, title: &str) -> LookupResult<LookupReport> {
        validate_query(title)?;

        let search_url = self.config.search_url(title)?;
        debug!(phase = %LookupPhase::SearchPending, "Looking up '{}'", title);
        info!("Searching ErogameScape: {}", search_url);

        let mut report = LookupReport::new(title);

        // The document is confined to this block; it is not Send and must
        // not live across the detail fetches.
        let matched: Vec<SearchCandidate> = {
            let search_doc = self.fetcher.fetch(&search_url).await?;
            extract_candidates(&search_doc, self.config.base_url())
                .filter(|candidate| {
                    report.candidates += 1;
                    is_match(&candidate.title, title)
                })
                .collect()
        };
        report.matched = matched.len();

        debug!(
            phase = %LookupPhase::SearchDone,
            candidates = report.candidates,
            matched = report.matched,
            "Search page processed"
        );

        if !matched.is_empty() {
            debug!(
                phase = %LookupPhase::DetailPending,
                width = self.config.max_concurrent_details(),
                "Fetching {} detail pages",
                matched.len()
            );
        }

        // `buffered` yields in input order, so records keep search-page order
        // however the fetches interleave.
        let outcomes: Vec<DetailOutcome> = stream::iter(matched)
            .map(move |candidate| self.resolve_candidate(candidate))
            .buffered(self.config.max_concurrent_details())
            .collect()
            .await;

        for outcome in outcomes {
            match outcome {
                DetailOutcome::Assembled(record) => report.records.push(record),
                DetailOutcome::Incomplete => report.incomplete += 1,
                DetailOutcome::FetchFailed(failed) => report.failed_fetches.push(failed),
            }
        }

        info!(
            phase = %LookupPhase::Completed,
            "Lookup for '{}' finished: {} records ({} matched, {} incomplete, {} failed)",
            title,
            report.records.len(),
            report.matched,
            report.incomplete,
            report.failed_fetches.len()
        );

        Ok(report)
    }

    async fn resolve_candidate(&self, candidate: SearchCandidate) -> DetailOutcome {
        match self.fetcher.fetch(&candidate.detail_url).await {
            Ok(doc) => {
                let details = extract_details(&doc);
                let title = candidate.title.clone();
                match assemble(candidate, details) {
                    Some(record) => DetailOutcome::Assembled(record),
                    None => {
                        debug!("Dropping '{}': brand, score or release date missing", title);
                        DetailOutcome::Incomplete
                    }
                }
            }
            Err(error) => {
                warn!(
                    "Skipping '{}', detail page failed: {}",
                    candidate.title, error
                );
                DetailOutcome::FetchFailed(FailedFetch {
                    url: candidate.detail_url,
                    error,
                })
            }
        }
    }
}

/// Reject queries before any request is made
///
/// The query is otherwise used verbatim: it is neither trimmed nor
/// normalized, for the search URL or for matching.
pub fn validate_query(title: &str) -> LookupResult<()> {
    if title.trim().is_empty() {
        return Err(LookupError::InvalidQuery(
            "title cannot be empty or whitespace-only".to_string(),
        ));
    }

    let len = title.chars().count();
    if len > MAX_QUERY_LENGTH {
        return Err(LookupError::InvalidQuery(format!(
            "title is too long ({len} characters, maximum {MAX_QUERY_LENGTH})"
        )));
    }

    Ok(())
}

/// Look up `title` on the live site with default settings
///
/// Builds a fresh HTTP client per call; front-ends serving many requests
/// should keep a `GameLookup` around instead.
pub async fn run_query(title: &str) -> LookupResult<Vec<GameRecord>> {
    GameLookup::new(LookupConfig::default())?
        .run_query(title)
        .await
}
