//! Common types used throughout the rating service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for players
pub type PlayerId = u32;

/// Unique identifier for competitors (league teams)
pub type TeamId = u32;

/// Unique identifier for matches
pub type MatchId = u32;

/// Unique identifier for games within a match
pub type GameId = u32;

/// One of the two sides of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

/// Classification of a concluded game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    WinA,
    WinB,
    Draw,
}

impl GameOutcome {
    /// Classify a game from the two sides' scores
    pub fn from_scores(score_a: i32, score_b: i32) -> Self {
        match score_a.cmp(&score_b) {
            std::cmp::Ordering::Greater => GameOutcome::WinA,
            std::cmp::Ordering::Less => GameOutcome::WinB,
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        }
    }

    /// The winning side, if the game was decisive
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameOutcome::WinA => Some(Side::A),
            GameOutcome::WinB => Some(Side::B),
            GameOutcome::Draw => None,
        }
    }

    /// The same result seen with the sides relabeled
    pub fn swapped(&self) -> Self {
        match self {
            GameOutcome::WinA => GameOutcome::WinB,
            GameOutcome::WinB => GameOutcome::WinA,
            GameOutcome::Draw => GameOutcome::Draw,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::WinA => write!(f, "WinA"),
            GameOutcome::WinB => write!(f, "WinB"),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// A league team taking part in a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: TeamId,
    pub name: String,
}

/// A player fielded in one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub player_id: PlayerId,
    pub name: String,
    pub team_id: TeamId,
}

/// A concluded game, validated and ready for rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub match_id: MatchId,
    pub game_id: GameId,
    pub game_number: u32,
    pub start_time: DateTime<Utc>,
    pub competitor_a: Competitor,
    pub competitor_b: Competitor,
    pub roster_a: Vec<Participant>,
    pub roster_b: Vec<Participant>,
    pub score_a: i32,
    pub score_b: i32,
}

impl GameRecord {
    /// Outcome of the game as decided by the scores
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::from_scores(self.score_a, self.score_b)
    }

    /// Competitor and roster of one side
    pub fn side(&self, side: Side) -> (&Competitor, &[Participant]) {
        match side {
            Side::A => (&self.competitor_a, &self.roster_a),
            Side::B => (&self.competitor_b, &self.roster_b),
        }
    }

    /// All participants, side A first
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.roster_a.iter().chain(self.roster_b.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_scores() {
        assert_eq!(GameOutcome::from_scores(2, 0), GameOutcome::WinA);
        assert_eq!(GameOutcome::from_scores(1, 3), GameOutcome::WinB);
        assert_eq!(GameOutcome::from_scores(1, 1), GameOutcome::Draw);
        assert_eq!(GameOutcome::from_scores(0, 0), GameOutcome::Draw);
    }

    #[test]
    fn test_outcome_swap() {
        assert_eq!(GameOutcome::WinA.swapped(), GameOutcome::WinB);
        assert_eq!(GameOutcome::WinB.swapped(), GameOutcome::WinA);
        assert_eq!(GameOutcome::Draw.swapped(), GameOutcome::Draw);
        assert_eq!(GameOutcome::WinB.winner(), Some(Side::B));
        assert_eq!(GameOutcome::Draw.winner(), None);
    }
}
