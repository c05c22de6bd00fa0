//! Gaussian skill belief for a single player

use serde::{Deserialize, Serialize};
use skillratings::trueskill::TrueSkillRating;

/// Number of standard deviations subtracted for the conservative rating
pub const CONSERVATIVE_STD_DEVS: f64 = 3.0;

/// Belief over a player's latent skill: N(mean, std_dev²)
///
/// Ratings are values: an update produces a new model rather than mutating
/// the old one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingModel {
    pub mean: f64,
    pub std_dev: f64,
}

impl RatingModel {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    /// `mean - k * std_dev`, penalizing uncertain beliefs
    pub fn conservative_rating_with(&self, k: f64) -> f64 {
        self.mean - k * self.std_dev
    }

    /// Conservative rating with the usual three standard deviations
    pub fn conservative_rating(&self) -> f64 {
        self.conservative_rating_with(CONSERVATIVE_STD_DEVS)
    }
}

impl std::fmt::Display for RatingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "μ={:.4}, σ={:.4}", self.mean, self.std_dev)
    }
}

impl From<TrueSkillRating> for RatingModel {
    fn from(rating: TrueSkillRating) -> Self {
        Self {
            mean: rating.rating,
            std_dev: rating.uncertainty,
        }
    }
}

impl From<RatingModel> for TrueSkillRating {
    fn from(rating: RatingModel) -> Self {
        Self {
            rating: rating.mean,
            uncertainty: rating.std_dev,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conservative_rating() {
        let rating = RatingModel::new(500.0, 100.0);
        assert_eq!(rating.conservative_rating(), 200.0);
        assert_eq!(rating.conservative_rating_with(1.0), 400.0);
        assert_eq!(rating.variance(), 10_000.0);
    }

    #[test]
    fn test_display() {
        let rating = RatingModel::new(500.0, 500.0 / 3.0);
        assert_eq!(rating.to_string(), "μ=500.0000, σ=166.6667");
    }

    #[test]
    fn test_trueskill_round_trip() {
        let rating = RatingModel::new(25.0, 8.333);
        let trueskill: TrueSkillRating = rating.into();
        assert_eq!(trueskill.rating, 25.0);
        assert_eq!(trueskill.uncertainty, 8.333);
        assert_eq!(RatingModel::from(trueskill), rating);
    }
}
