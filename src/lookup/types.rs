//! Data structures and constants for game lookups

use serde::{Deserialize, Serialize};

use super::errors::LookupError;

// =============================================================================
// Constants
// =============================================================================

// Everything below mirrors ErogameScape's markup. These are the site's
// identifiers, not tunables.

/// Search page, relative to the base URL
pub const SEARCH_PAGE: &str = "kensaku.php";

/// One anchor per search hit, inside the results table
pub const SEARCH_RESULT_SELECTOR: &str = "table tbody tr td a";

/// Platform label, looked up under the anchor's parent cell
pub const PLATFORM_SELECTOR: &str = "span[style='font-weight:bold;']";

/// Brand name is the link inside the brand row
pub const BRAND_SELECTOR: &str = "tr#brand td a";

/// Median/average score cell
pub const AVERAGE_SELECTOR: &str = "tr#average td";

/// Release date cell
pub const SELLDAY_SELECTOR: &str = "tr#sellday td";

/// Voice actors cell
pub const SEIYU_SELECTOR: &str = "tr#seiyu td";

/// Artist (原画) cell
pub const GENGA_SELECTOR: &str = "tr#genga td";

/// Scenario writer (シナリオ) cell
pub const SHINARIO_SELECTOR: &str = "tr#shinario td";

/// Package image
pub const MAIN_IMAGE_SELECTOR: &str = "div#main_image a img";

/// First DLsite sample CG
pub const SAMPLE_IMAGE_SELECTOR: &str = "div#dlsite_sample_cg_1_main a img";

// =============================================================================
// Data Structures
// =============================================================================

/// One row of the search results table, before matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCandidate {
    /// Anchor text, verbatim
    pub title: String,

    /// Absolute URL of the game's detail page
    pub detail_url: String,

    /// Platform label; empty for PC titles, which carry none
    pub platform: String,
}

/// Fields read from a detail page
///
/// Any field whose element is missing is left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameDetails {
    pub brand: String,
    pub average_score: String,
    pub release_date: String,
    pub scenario_writer: String,
    pub artist: String,
    pub voice_actors: String,
    pub main_image_url: String,
    pub sample_image_url: String,
}

/// A complete, emission-eligible result for one game
///
/// Only `assemble` builds these, so every record has a non-empty title,
/// brand, average score and release date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub(crate) title: String,
    pub(crate) platform: String,
    pub(crate) brand: String,
    pub(crate) average_score: String,
    pub(crate) release_date: String,
    pub(crate) scenario_writer: String,
    pub(crate) artist: String,
    pub(crate) voice_actors: String,
    pub(crate) main_image_url: String,
    pub(crate) sample_image_url: String,
    pub(crate) detail_url: String,
}

impl GameRecord {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[must_use]
    pub fn average_score(&self) -> &str {
        &self.average_score
    }

    #[must_use]
    pub fn release_date(&self) -> &str {
        &self.release_date
    }

    #[must_use]
    pub fn scenario_writer(&self) -> &str {
        &self.scenario_writer
    }

    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    #[must_use]
    pub fn voice_actors(&self) -> &str {
        &self.voice_actors
    }

    #[must_use]
    pub fn main_image_url(&self) -> &str {
        &self.main_image_url
    }

    #[must_use]
    pub fn sample_image_url(&self) -> &str {
        &self.sample_image_url
    }

    /// Detail page this record was read from
    #[must_use]
    pub fn detail_url(&self) -> &str {
        &self.detail_url
    }
}

/// A detail page that could not be fetched
#[derive(Debug)]
pub struct FailedFetch {
    pub url: String,
    pub error: LookupError,
}

/// Everything one lookup produced
#[derive(Debug)]
pub struct LookupReport {
    /// Query as given by the caller
    pub query: String,

    /// Assembled records, in search-page order
    pub records: Vec<GameRecord>,

    /// Rows found on the search page
    pub candidates: usize,

    /// Rows whose title matched the query
    pub matched: usize,

    /// Matches dropped because a required field was empty
    pub incomplete: usize,

    /// Matches dropped because their detail page failed to load
    pub failed_fetches: Vec<FailedFetch>,
}

impl LookupReport {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            records: Vec::new(),
            candidates: 0,
            matched: 0,
            incomplete: 0,
            failed_fetches: Vec::new(),
        }
    }

    /// True when nothing usable was found (the "no match" case)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
