//! Parsed HTML documents handed from the fetcher to the extractors.

use scraper::Html;

/// A fetched page, parsed and ready for CSS-selector queries
///
/// Holds the URL the markup came from so extractors and logs can refer back
/// to it. Not `Send`: documents are parsed, queried and dropped within one
/// lookup future.
pub struct ParsedDocument {
    url: String,
    html: Html,
}

impl ParsedDocument {
    /// Parse a complete HTML document
    pub fn parse(url: impl Into<String>, markup: &str) -> Self {
        Self {
            url: url.into(),
            html: Html::parse_document(markup),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn html(&self) -> &Html {
        &self.html
    }
}

impl std::fmt::Debug for ParsedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedDocument")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}
