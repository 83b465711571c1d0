pub mod config;
pub mod fetcher;
pub mod lookup;
pub mod utils;

pub use config::LookupConfig;
pub use fetcher::{DocumentFetcher, HttpFetcher, ParsedDocument};
pub use lookup::{
    GameLookup, GameRecord, LookupError, LookupReport, LookupResult, render_reply, run_query,
};
