//! Game lookups against ErogameScape
//!
//! Searches the site for a title, follows every matching hit to its detail
//! page and returns one `GameRecord` per game that has a brand, score and
//! release date.
//!
//! # Example
//! ```no_run
//! use kodegen_tools_gameinfo::lookup::{GameLookup, render_reply};
//! use kodegen_tools_gameinfo::LookupConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let lookup = GameLookup::new(LookupConfig::default())?;
//!     let records = lookup.run_query("CLANNAD").await?;
//!     println!("{}", render_reply(&records));
//!     Ok(())
//! }
//! ```

mod assemble;
mod details;
pub mod errors;
mod matcher;
mod pipeline;
mod render;
mod search;
pub mod types;

pub use assemble::assemble;
pub use details::extract_details;
pub use errors::{LookupError, LookupResult};
pub use matcher::is_match;
pub use pipeline::{GameLookup, LookupPhase, run_query, validate_query};
pub use render::{FOUND_HEADER, NOT_FOUND_MESSAGE, render_reply};
pub use search::extract_candidates;
pub use types::{FailedFetch, GameDetails, GameRecord, LookupReport, SearchCandidate};
