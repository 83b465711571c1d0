//! Title matching between search hits and the query.

/// Decide whether a search hit counts as a match for the query
///
/// Matches when either title contains the other. Comparison is exact:
/// case-sensitive, no full-width/half-width folding, no whitespace cleanup.
/// Short or generic queries therefore pull in unrelated titles; every match
/// is pursued and none is ranked above another.
#[must_use]
pub fn is_match(candidate_title: &str, query_title: &str) -> bool {
    candidate_title.contains(query_title) || query_title.contains(candidate_title)
}
