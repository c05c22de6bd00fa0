//! Rating system built on the TrueSkill algorithm
//!
//! This module provides the Gaussian skill model, team assembly, the
//! two-team update and the store holding every player's current belief.

pub mod calculator;
pub mod gaussian;
pub mod model;
pub mod storage;
pub mod team;
pub mod truncated;
pub mod trueskill;

// Re-export commonly used types
pub use calculator::{GameUpdate, RatingCalculator};
pub use model::RatingModel;
pub use storage::{RatingChange, RatingStore};
pub use team::{Team, TeamBuilder};
pub use trueskill::TrueSkillCalculator;
