//! Rating calculator trait
//!
//! This module defines the interface between the ingestion pipeline and the
//! rating algorithm, along with the result of rating a single game.

use crate::config::RatingConfig;
use crate::error::RatingResult;
use crate::rating::model::RatingModel;
use crate::rating::storage::RatingChange;
use crate::rating::team::Team;
use crate::types::GameOutcome;
use serde::{Deserialize, Serialize};

/// Result of rating one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameUpdate {
    /// Outcome the update was computed for
    pub outcome: GameOutcome,
    /// New ratings for Team A, in roster order
    pub team_a: Vec<RatingChange>,
    /// New ratings for Team B, in roster order
    pub team_b: Vec<RatingChange>,
    /// Pre-game match quality (0.0 to 1.0, higher is more balanced)
    pub match_quality: f64,
}

impl GameUpdate {
    /// Changes for every participant, Team A first
    pub fn changes(&self) -> impl Iterator<Item = &RatingChange> {
        self.team_a.iter().chain(self.team_b.iter())
    }
}

/// Trait for computing new ratings after a two-team game
pub trait RatingCalculator: Send + Sync {
    /// Compute new ratings for every participant of a game
    ///
    /// # Arguments
    /// * `team_a` - First side with current ratings
    /// * `team_b` - Second side with current ratings
    /// * `outcome` - Result of the game, decided by the scores
    ///
    /// # Returns
    /// The new rating of all participants, or `DegenerateUpdate` when the
    /// update cannot be computed. Inputs are never modified.
    fn rate(&self, team_a: &Team, team_b: &Team, outcome: GameOutcome) -> RatingResult<GameUpdate>;

    /// Rating assigned to players on their first appearance
    fn default_rating(&self) -> RatingModel;

    /// Parameters the calculator was built with
    fn config(&self) -> &RatingConfig;
}
