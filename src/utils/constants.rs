//! Shared configuration constants for gameinfo lookups
//!
//! Default values used by `LookupConfig` and the HTTP fetcher, kept here so
//! the builder, the binary and the tests agree on them.

/// ErogameScape statistics section, the root every lookup URL is built on
///
/// The search page (`kensaku.php`) and the per-game detail pages
/// (`game.php?game=...`) both live directly under this path.
pub const DEFAULT_BASE_URL: &str = "https://erogamescape.dyndns.org/~ap2/ero/toukei_kaiseki";

/// Default HTTP request timeout: 30 seconds
///
/// Covers connect and body download. The site is slow under load, so this
/// stays generous; a timed-out detail fetch only drops that one game.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default width of the detail-page fetch stage
///
/// At most this many detail pages are in flight per lookup. `1` gives the
/// strictly sequential behavior.
pub const DEFAULT_MAX_CONCURRENT_DETAILS: usize = 4;

/// Longest query accepted, in characters
pub const MAX_QUERY_LENGTH: usize = 200;

/// Chrome user agent string sent with every request
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
