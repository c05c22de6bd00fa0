//! Two-team TrueSkill update
//!
//! Each player's skill is a Gaussian belief. A team performs as the sum of its
//! members' performances, each drawn around the member's skill with variance
//! `sigma² + beta²`. Conditioning the difference of the two team performances
//! on the observed result (beyond the draw margin for a win, within it for a
//! draw) gives a truncated Gaussian whose first two moments are pushed back to
//! every player in proportion to the player's own variance.

use crate::config::RatingConfig;
use crate::error::{RatingError, RatingResult};
use crate::rating::calculator::{GameUpdate, RatingCalculator};
use crate::rating::model::RatingModel;
use crate::rating::storage::RatingChange;
use crate::rating::team::Team;
use crate::rating::truncated::{
    draw_margin, v_exceeds_margin, v_within_margin, w_exceeds_margin, w_within_margin,
};
use crate::types::GameOutcome;
use skillratings::trueskill::{match_quality_two_teams, TrueSkillConfig, TrueSkillRating};

/// Result of a game from one side's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SideResult {
    Won,
    Lost,
    Drew,
}

/// Moments of one team's summed performance
struct TeamPerformance {
    mean: f64,
    variance: f64,
    /// Per-player skill variance after the dynamics step
    player_variances: Vec<f64>,
}

/// TrueSkill rating calculator for games between exactly two teams
#[derive(Debug, Clone)]
pub struct TrueSkillCalculator {
    config: RatingConfig,
    draw_margin: f64,
}

impl TrueSkillCalculator {
    /// Create a new calculator, rejecting invalid parameters
    pub fn new(config: RatingConfig) -> RatingResult<Self> {
        config.validate()?;

        let draw_margin = draw_margin(config.draw_probability, config.beta);
        Ok(Self {
            config,
            draw_margin,
        })
    }

    /// Draw margin on the unnormalized performance-difference axis
    pub fn draw_margin(&self) -> f64 {
        self.draw_margin
    }

    /// Probability of a draw relative to the most balanced possible game
    pub fn match_quality(&self, team_a: &Team, team_b: &Team) -> f64 {
        let one: Vec<TrueSkillRating> = team_a.ratings().map(Into::into).collect();
        let two: Vec<TrueSkillRating> = team_b.ratings().map(Into::into).collect();
        let config: TrueSkillConfig = (&self.config).into();
        match_quality_two_teams(&one, &two, &config)
    }

    fn team_performance(&self, team: &Team) -> RatingResult<TeamPerformance> {
        let tau_squared = self.config.dynamics_factor * self.config.dynamics_factor;
        let beta_squared = self.config.beta * self.config.beta;

        let mut mean = 0.0;
        let mut variance = 0.0;
        let mut player_variances = Vec::with_capacity(team.len());
        for (player_id, rating) in team.members() {
            if !rating.mean.is_finite() || !rating.std_dev.is_finite() || rating.std_dev <= 0.0 {
                return Err(RatingError::DegenerateUpdate {
                    reason: format!("player {} has invalid rating {}", player_id, rating),
                });
            }

            let skill_variance = rating.variance() + tau_squared;
            mean += rating.mean;
            variance += skill_variance + beta_squared;
            player_variances.push(skill_variance);
        }

        Ok(TeamPerformance {
            mean,
            variance,
            player_variances,
        })
    }

    /// Signed mean factor and variance factor for one side
    fn correction(own_mean: f64, other_mean: f64, c: f64, epsilon: f64, result: SideResult) -> (f64, f64) {
        match result {
            SideResult::Won => {
                let t = (own_mean - other_mean) / c;
                (v_exceeds_margin(t, epsilon), w_exceeds_margin(t, epsilon))
            }
            SideResult::Lost => {
                let t = (other_mean - own_mean) / c;
                (-v_exceeds_margin(t, epsilon), w_exceeds_margin(t, epsilon))
            }
            SideResult::Drew => {
                let t = (own_mean - other_mean) / c;
                (v_within_margin(t, epsilon), w_within_margin(t, epsilon))
            }
        }
    }

    fn update_team(
        team: &Team,
        performance: &TeamPerformance,
        v: f64,
        w: f64,
        c: f64,
    ) -> RatingResult<Vec<RatingChange>> {
        let c_squared = c * c;

        team.members()
            .iter()
            .zip(&performance.player_variances)
            .map(|(&(player_id, old_rating), &variance)| {
                let mean = old_rating.mean + variance / c * v;
                let new_variance = variance * (1.0 - w * variance / c_squared);

                if !mean.is_finite() || !new_variance.is_finite() || new_variance <= 0.0 {
                    return Err(RatingError::DegenerateUpdate {
                        reason: format!(
                            "player {} would move to mean {} with variance {}",
                            player_id, mean, new_variance
                        ),
                    });
                }

                Ok(RatingChange {
                    player_id,
                    old_rating,
                    new_rating: RatingModel::new(mean, new_variance.sqrt()),
                })
            })
            .collect()
    }
}

impl RatingCalculator for TrueSkillCalculator {
    fn rate(&self, team_a: &Team, team_b: &Team, outcome: GameOutcome) -> RatingResult<GameUpdate> {
        let performance_a = self.team_performance(team_a)?;
        let performance_b = self.team_performance(team_b)?;

        let c = (performance_a.variance + performance_b.variance).sqrt();
        if !c.is_finite() || c <= 0.0 {
            return Err(RatingError::DegenerateUpdate {
                reason: format!("performance difference has standard deviation {}", c),
            });
        }
        let epsilon = self.draw_margin / c;

        let (result_a, result_b) = match outcome {
            GameOutcome::WinA => (SideResult::Won, SideResult::Lost),
            GameOutcome::WinB => (SideResult::Lost, SideResult::Won),
            GameOutcome::Draw => (SideResult::Drew, SideResult::Drew),
        };

        let (v_a, w_a) =
            Self::correction(performance_a.mean, performance_b.mean, c, epsilon, result_a);
        let (v_b, w_b) =
            Self::correction(performance_b.mean, performance_a.mean, c, epsilon, result_b);

        Ok(GameUpdate {
            outcome,
            team_a: Self::update_team(team_a, &performance_a, v_a, w_a, c)?,
            team_b: Self::update_team(team_b, &performance_b, v_b, w_b, c)?,
            match_quality: self.match_quality(team_a, team_b),
        })
    }

    fn default_rating(&self) -> RatingModel {
        RatingModel::new(self.config.initial_mean, self.config.initial_std_dev)
    }

    fn config(&self) -> &RatingConfig {
        &self.config
    }
}
