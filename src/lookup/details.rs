//! Detail page extraction
//!
//! Each field lives in its own uniquely identified table row (or image
//! container) on `game.php`. Fields are read independently; a missing row
//! leaves that field empty, which is normal since detail pages differ a lot
//! between entries.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use super::types::{
    AVERAGE_SELECTOR, BRAND_SELECTOR, GENGA_SELECTOR, GameDetails, MAIN_IMAGE_SELECTOR,
    SAMPLE_IMAGE_SELECTOR, SEIYU_SELECTOR, SELLDAY_SELECTOR, SHINARIO_SELECTOR,
};
use crate::fetcher::ParsedDocument;

// Hardcoded selectors should NEVER fail to parse - if they do, it's a compile-time bug.

macro_rules! detail_selector {
    ($name:ident, $css:expr) => {
        static $name: LazyLock<Selector> = LazyLock::new(|| {
            Selector::parse($css).unwrap_or_else(|e| {
                panic!("BUG: hardcoded CSS selector '{}' is invalid: {e:?}", $css)
            })
        });
    };
}

detail_selector!(BRAND, BRAND_SELECTOR);
detail_selector!(AVERAGE, AVERAGE_SELECTOR);
detail_selector!(SELLDAY, SELLDAY_SELECTOR);
detail_selector!(SEIYU, SEIYU_SELECTOR);
detail_selector!(GENGA, GENGA_SELECTOR);
detail_selector!(SHINARIO, SHINARIO_SELECTOR);
detail_selector!(MAIN_IMAGE, MAIN_IMAGE_SELECTOR);
detail_selector!(SAMPLE_IMAGE, SAMPLE_IMAGE_SELECTOR);

/// Read every known field from a detail document
#[must_use]
pub fn extract_details(doc: &ParsedDocument) -> GameDetails {
    let html = doc.html();
    GameDetails {
        brand: last_text(html, &BRAND),
        average_score: last_text(html, &AVERAGE),
        release_date: last_text(html, &SELLDAY),
        scenario_writer: last_text(html, &SHINARIO),
        artist: last_text(html, &GENGA),
        voice_actors: last_text(html, &SEIYU),
        main_image_url: last_attr(html, &MAIN_IMAGE, "src"),
        sample_image_url: last_attr(html, &SAMPLE_IMAGE, "src"),
    }
}

// When a selector matches more than once, the last match wins.

/// Cell text with surrounding whitespace trimmed
///
/// The site pads cells with newlines and indentation, so raw text is never
/// used as-is. A cell holding only whitespace therefore reads as empty, and
/// for brand, score or release date that drops the game.
fn last_text(html: &Html, selector: &Selector) -> String {
    html.select(selector)
        .last()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn last_attr(html: &Html, selector: &Selector, attr: &str) -> String {
    html.select(selector)
        .last()
        .and_then(|el| el.value().attr(attr))
        .map(str::to_string)
        .unwrap_or_default()
}
