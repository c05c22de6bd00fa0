//! OWL Ratings - TrueSkill player ratings for a team-based esports league
//!
//! This crate fetches concluded league games, rates every player with a
//! two-team TrueSkill update, and ranks them on a conservative leaderboard.

pub mod config;
pub mod error;
pub mod leaderboard;
pub mod pipeline;
pub mod rating;
pub mod source;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RatingError, RatingResult, Result};
pub use types::*;

// Re-export key components
pub use leaderboard::{render, OutputFormat, Standing};
pub use pipeline::{IngestionPipeline, IngestionReport};
pub use rating::{RatingCalculator, RatingModel, TrueSkillCalculator};
pub use source::{collect_games, CachedHttpSource, LeagueSource, StaticLeagueSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
