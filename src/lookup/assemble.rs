//! Record assembly: search-row fields + detail-page fields -> `GameRecord`.

use super::types::{GameDetails, GameRecord, SearchCandidate};

/// Merge a candidate with its detail fields
///
/// Returns `None` when title, brand, average score or release date is empty.
/// A match without those is not useful output; it is dropped quietly rather
/// than reported as an error. Images, scenario, artist, voice actors and
/// platform are optional.
#[must_use]
pub fn assemble(candidate: SearchCandidate, details: GameDetails) -> Option<GameRecord> {
    if candidate.title.is_empty()
        || details.brand.is_empty()
        || details.average_score.is_empty()
        || details.release_date.is_empty()
    {
        return None;
    }

    Some(GameRecord {
        title: candidate.title,
        platform: candidate.platform,
        brand: details.brand,
        average_score: details.average_score,
        release_date: details.release_date,
        scenario_writer: details.scenario_writer,
        artist: details.artist,
        voice_actors: details.voice_actors,
        main_image_url: details.main_image_url,
        sample_image_url: details.sample_image_url,
        detail_url: candidate.detail_url,
    })
}
