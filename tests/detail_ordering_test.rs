//! Ordering and fan-out of detail fetches, driven by an in-memory fetcher

use kodegen_tools_gameinfo::{
    DocumentFetcher, GameLookup, LookupConfig, LookupError, LookupResult, ParsedDocument,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

mod common;
use common::{DetailFixture, detail_page, search_page};

const BASE: &str = "http://gameinfo.test";

/// Serves canned pages, each after its own delay, and records what was asked for
struct CannedFetcher {
    pages: HashMap<String, (Duration, String)>,
    requested: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl CannedFetcher {
    fn new() -> Self {
        Self {
            pages: HashMap::new(),
            requested: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    fn page(mut self, url: impl Into<String>, delay_ms: u64, html: String) -> Self {
        self.pages
            .insert(url.into(), (Duration::from_millis(delay_ms), html));
        self
    }

    fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl DocumentFetcher for CannedFetcher {
    async fn fetch(&self, url: &str) -> LookupResult<ParsedDocument> {
        self.requested.lock().unwrap().push(url.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        let page = self.pages.get(url).cloned();
        if let Some((delay, _)) = &page {
            tokio::time::sleep(*delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match page {
            Some((_, html)) => Ok(ParsedDocument::parse(url, &html)),
            None => Err(LookupError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

fn config(width: usize) -> LookupConfig {
    LookupConfig::builder()
        .base_url(BASE)
        .max_concurrent_details(width)
        .build()
        .unwrap()
}

fn search_url(query: &str) -> String {
    config(1).search_url(query).unwrap()
}

#[tokio::test]
async fn test_slow_early_pages_keep_their_position() {
    let rows = [
        ("Sample 1", "game.php?game=1", ""),
        ("Sample 2", "game.php?game=2", ""),
        ("Sample 3", "game.php?game=3", ""),
    ];
    // First page is slowest, last is fastest
    let fetcher = CannedFetcher::new()
        .page(search_url("Sample"), 0, search_page(&rows))
        .page(format!("{BASE}/game.php?game=1"), 120, detail_page(&DetailFixture::complete()))
        .page(format!("{BASE}/game.php?game=2"), 60, detail_page(&DetailFixture::complete()))
        .page(format!("{BASE}/game.php?game=3"), 0, detail_page(&DetailFixture::complete()));

    let lookup = GameLookup::with_fetcher(config(3), &fetcher);
    let records = lookup.run_query("Sample").await.unwrap();

    let titles: Vec<&str> = records.iter().map(|r| r.title()).collect();
    assert_eq!(titles, vec!["Sample 1", "Sample 2", "Sample 3"]);
    assert_eq!(fetcher.peak_in_flight.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_width_bounds_concurrent_fetches() {
    let rows: Vec<(String, String)> = (1..=6)
        .map(|i| (format!("Sample {i}"), format!("game.php?game={i}")))
        .collect();
    let row_refs: Vec<(&str, &str, &str)> = rows
        .iter()
        .map(|(title, href)| (title.as_str(), href.as_str(), ""))
        .collect();

    let mut fetcher = CannedFetcher::new().page(search_url("Sample"), 0, search_page(&row_refs));
    for i in 1..=6 {
        fetcher = fetcher.page(
            format!("{BASE}/game.php?game={i}"),
            20,
            detail_page(&DetailFixture::required_only()),
        );
    }

    let lookup = GameLookup::with_fetcher(config(2), &fetcher);
    let records = lookup.run_query("Sample").await.unwrap();

    assert_eq!(records.len(), 6);
    assert!(fetcher.peak_in_flight.load(Ordering::SeqCst) <= 2);
}

#[tokio::test]
async fn test_search_page_is_fetched_first_and_once() {
    let rows = [
        ("Sample 1", "game.php?game=1", ""),
        ("Other", "game.php?game=2", ""),
    ];
    let fetcher = CannedFetcher::new()
        .page(search_url("Sample"), 0, search_page(&rows))
        .page(format!("{BASE}/game.php?game=1"), 0, detail_page(&DetailFixture::complete()));

    let lookup = GameLookup::with_fetcher(config(4), &fetcher);
    let report = lookup.run_query_with_report("Sample").await.unwrap();

    assert_eq!(
        fetcher.requested(),
        vec![search_url("Sample"), format!("{BASE}/game.php?game=1")]
    );
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].detail_url(), format!("{BASE}/game.php?game=1"));
}

#[tokio::test]
async fn test_missing_detail_page_is_reported_in_order() {
    let rows = [
        ("Sample 1", "game.php?game=1", ""),
        ("Sample 2", "game.php?game=2", ""),
        ("Sample 3", "game.php?game=3", ""),
    ];
    // game=2 is not served at all
    let fetcher = CannedFetcher::new()
        .page(search_url("Sample"), 0, search_page(&rows))
        .page(format!("{BASE}/game.php?game=1"), 30, detail_page(&DetailFixture::complete()))
        .page(format!("{BASE}/game.php?game=3"), 0, detail_page(&DetailFixture::complete()));

    let lookup = GameLookup::with_fetcher(config(3), &fetcher);
    let report = lookup.run_query_with_report("Sample").await.unwrap();

    let titles: Vec<&str> = report.records.iter().map(|r| r.title()).collect();
    assert_eq!(titles, vec!["Sample 1", "Sample 3"]);
    assert_eq!(report.failed_fetches.len(), 1);
    assert_eq!(report.failed_fetches[0].url, format!("{BASE}/game.php?game=2"));
}

#[tokio::test]
async fn test_config_loaded_from_json_drives_a_lookup() {
    assert!(
        serde_json::from_str::<LookupConfig>(&format!(
            r#"{{"base_url":"{BASE}","max_concurrent_details":0}}"#
        ))
        .is_err()
    );

    let config: LookupConfig = serde_json::from_str(&format!(
        r#"{{"base_url":"{BASE}","max_concurrent_details":1}}"#
    ))
    .unwrap();
    let rows = [
        ("Sample 1", "game.php?game=1", ""),
        ("Sample 2", "game.php?game=2", ""),
    ];
    let fetcher = CannedFetcher::new()
        .page(search_url("Sample"), 0, search_page(&rows))
        .page(format!("{BASE}/game.php?game=1"), 0, detail_page(&DetailFixture::complete()))
        .page(format!("{BASE}/game.php?game=2"), 0, detail_page(&DetailFixture::complete()));

    let lookup = GameLookup::with_fetcher(config, &fetcher);
    let records = tokio::time::timeout(Duration::from_secs(3), lookup.run_query("Sample"))
        .await
        .expect("lookup did not complete")
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(fetcher.peak_in_flight.load(Ordering::SeqCst), 1);
}
