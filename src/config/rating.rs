//! Rating system configuration
//!
//! The run-wide constants of the TrueSkill model. Values are immutable once a
//! calculator has been built from them.

use crate::error::{RatingError, RatingResult};
use serde::{Deserialize, Serialize};
use skillratings::trueskill::TrueSkillConfig;

/// Number of players fielded by each side of a league game
pub const DEFAULT_TEAM_SIZE: usize = 6;

/// TrueSkill parameters for one league
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Prior mean for players without history
    pub initial_mean: f64,
    /// Prior standard deviation for players without history
    pub initial_std_dev: f64,
    /// Standard deviation of a player's in-game performance
    pub beta: f64,
    /// Standard deviation added to every player's belief before each game
    pub dynamics_factor: f64,
    /// Prior probability that a game ends in a draw
    pub draw_probability: f64,
    /// Players per side
    pub team_size: usize,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self::from_initial_mean(500.0)
    }
}

impl RatingConfig {
    /// League parameters scaled from the prior mean
    pub fn from_initial_mean(initial_mean: f64) -> Self {
        Self {
            initial_mean,
            initial_std_dev: initial_mean / 3.0,
            beta: initial_mean / 6.0,
            dynamics_factor: initial_mean / 300.0,
            draw_probability: 0.02,
            team_size: DEFAULT_TEAM_SIZE,
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> RatingResult<()> {
        let values = [
            ("initial_mean", self.initial_mean),
            ("initial_std_dev", self.initial_std_dev),
            ("beta", self.beta),
            ("dynamics_factor", self.dynamics_factor),
            ("draw_probability", self.draw_probability),
        ];
        if let Some((name, value)) = values.iter().find(|(_, value)| !value.is_finite()) {
            return Err(configuration_error(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }

        if self.initial_std_dev <= 0.0 {
            return Err(configuration_error("Initial standard deviation must be positive"));
        }

        if self.beta <= 0.0 {
            return Err(configuration_error("Beta must be positive"));
        }

        if self.dynamics_factor < 0.0 {
            return Err(configuration_error("Dynamics factor must be non-negative"));
        }

        if !(0.0..1.0).contains(&self.draw_probability) {
            return Err(configuration_error(format!(
                "Draw probability must be in [0, 1), got {}",
                self.draw_probability
            )));
        }

        if self.team_size == 0 {
            return Err(configuration_error("Team size must be at least 1"));
        }

        Ok(())
    }
}

impl From<&RatingConfig> for TrueSkillConfig {
    fn from(config: &RatingConfig) -> Self {
        Self {
            draw_probability: config.draw_probability,
            beta: config.beta,
            default_dynamics: config.dynamics_factor,
        }
    }
}

fn configuration_error(message: impl Into<String>) -> RatingError {
    RatingError::ConfigurationError {
        message: message.into(),
    }
}
