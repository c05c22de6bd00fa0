//! Error types for the rating service
//!
//! The rating core reports its failures through [`RatingError`] so the
//! ingestion pipeline can skip a single game and record why. The outer
//! layers (configuration loading, data fetching, the binary) use anyhow.

use crate::types::{GameId, MatchId, PlayerId, TeamId};

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Result type for the rating core
pub type RatingResult<T> = std::result::Result<T, RatingError>;

/// Custom error types for specific rating scenarios
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Roster size mismatch in game {game_id}: team {team_id} fielded {actual} players, expected {expected}")]
    RosterSizeMismatch {
        game_id: GameId,
        team_id: TeamId,
        expected: usize,
        actual: usize,
    },

    #[error("Player {player_id} is listed more than once in game {game_id}")]
    DuplicatePlayer { game_id: GameId, player_id: PlayerId },

    #[error("Match {match_id} has {count} competitors, expected 2")]
    CompetitorCountMismatch { match_id: MatchId, count: usize },

    #[error("Degenerate rating update: {reason}")]
    DegenerateUpdate { reason: String },

    #[error("Malformed record: {reason}")]
    MalformedRecord { reason: String },

    #[error("Upstream fetch failed for {resource}: {message}")]
    UpstreamFetchFailed { resource: String, message: String },
}
