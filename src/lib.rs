//! Latest-match lookup service.
//!
//! Resolves a summoner's most recent League of Legends match through the Riot
//! API and enriches every participant with champion name and mastery level.
//! Champion names are kept in a persisted cache to spare upstream calls.

pub mod cache;
pub mod config;
pub mod enricher;
pub mod error;
pub mod logging;
pub mod riot;
pub mod server;

pub use cache::ChampionCache;
pub use config::Config;
pub use enricher::{MatchEnricher, MatchSummary, Participant};
pub use error::AppError;
