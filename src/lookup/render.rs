//! Plain-text reply for chat-style front-ends.

use std::fmt::Write;

use super::types::GameRecord;

/// Sent when a lookup produced no records
pub const NOT_FOUND_MESSAGE: &str = "ゲーム情報が見つかりませんでした。";

/// First line of a non-empty reply
pub const FOUND_HEADER: &str = "以下のゲームが見つかりました:";

/// Format records as one reply message, one block per game
///
/// The platform label is appended to the title without a separator; the
/// site's labels already carry their own parentheses.
#[must_use]
pub fn render_reply(records: &[GameRecord]) -> String {
    if records.is_empty() {
        return NOT_FOUND_MESSAGE.to_string();
    }

    let mut out = String::new();
    out.push_str(FOUND_HEADER);
    out.push('\n');

    for record in records {
        // Writing to a String cannot fail
        let _ = write!(
            out,
            "タイトル: {}{}\nブランド: {}\n平均点数: {}\n発売日: {}\nシナリオ: {}\n原画: {}\n声優: {}\n画像: {}\n {}\n",
            record.title(),
            record.platform(),
            record.brand(),
            record.average_score(),
            record.release_date(),
            record.scenario_writer(),
            record.artist(),
            record.voice_actors(),
            record.main_image_url(),
            record.sample_image_url(),
        );
    }

    out
}
