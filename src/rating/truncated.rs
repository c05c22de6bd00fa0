//! Truncated-Gaussian correction factors
//!
//! `v` gives the additive mean correction and `w` the multiplicative variance
//! correction obtained when a Gaussian performance difference is conditioned
//! on exceeding the draw margin (decisive game) or staying within it (draw).
//! Both are evaluated on the normalized axis: `t` is the performance
//! difference from the perspective being updated divided by `c`, `epsilon`
//! the draw margin divided by `c`.

use super::gaussian::{cdf, inverse_cdf, pdf};
use std::f64::consts::SQRT_2;

/// Denominators below this are treated as zero probability mass
const MIN_PROBABILITY: f64 = 2.222_758_749e-162;

/// Draw margin on the performance-difference axis for a two-team game
///
/// Converts the prior probability of a draw into the symmetric threshold
/// `sqrt(2) * beta * inverse_cdf((p + 1) / 2)`.
pub fn draw_margin(draw_probability: f64, beta: f64) -> f64 {
    inverse_cdf(0.5 * (draw_probability + 1.0)) * SQRT_2 * beta
}

/// Mean correction for a decisive result
pub fn v_exceeds_margin(t: f64, epsilon: f64) -> f64 {
    let denominator = cdf(t - epsilon);
    if denominator < MIN_PROBABILITY {
        return -t + epsilon;
    }
    pdf(t - epsilon) / denominator
}

/// Variance correction for a decisive result
pub fn w_exceeds_margin(t: f64, epsilon: f64) -> f64 {
    let denominator = cdf(t - epsilon);
    if denominator < MIN_PROBABILITY {
        return if t < 0.0 { 1.0 } else { 0.0 };
    }
    let v = v_exceeds_margin(t, epsilon);
    v * (v + t - epsilon)
}

/// Mean correction for a draw
pub fn v_within_margin(t: f64, epsilon: f64) -> f64 {
    let t_abs = t.abs();
    let denominator = cdf(epsilon - t_abs) - cdf(-epsilon - t_abs);
    if denominator < MIN_PROBABILITY {
        return if t < 0.0 { -t - epsilon } else { -t + epsilon };
    }

    let numerator = pdf(-epsilon - t_abs) - pdf(epsilon - t_abs);
    if t < 0.0 {
        -numerator / denominator
    } else {
        numerator / denominator
    }
}

/// Variance correction for a draw
pub fn w_within_margin(t: f64, epsilon: f64) -> f64 {
    let t_abs = t.abs();
    let denominator = cdf(epsilon - t_abs) - cdf(-epsilon - t_abs);
    if denominator < MIN_PROBABILITY {
        return 1.0;
    }

    let v = v_within_margin(t_abs, epsilon);
    v * v
        + ((epsilon - t_abs) * pdf(epsilon - t_abs) - (-epsilon - t_abs) * pdf(-epsilon - t_abs))
            / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_margin() {
        assert!(draw_margin(0.0, 100.0).abs() < 1e-9);

        // 2% draws at beta = 500 / 6
        let margin = draw_margin(0.02, 500.0 / 6.0);
        assert!((margin - 2.954_389).abs() < 1e-4, "margin was {margin}");

        assert!(draw_margin(0.10, 25.0 / 6.0) > draw_margin(0.05, 25.0 / 6.0));
    }

    #[test]
    fn test_v_exceeds_at_origin() {
        // pdf(0) / cdf(0)
        let v = v_exceeds_margin(0.0, 0.0);
        assert!((v - 0.797_884_560_802_865_4).abs() < 1e-9);

        let w = w_exceeds_margin(0.0, 0.0);
        assert!((w - v * v).abs() < 1e-12);
    }

    #[test]
    fn test_exceeds_factors_shrink_for_expected_wins() {
        // an upset moves ratings more than an expected win
        assert!(v_exceeds_margin(-1.0, 0.1) > v_exceeds_margin(1.0, 0.1));
        for t in [-3.0, -1.0, 0.0, 1.0, 3.0] {
            let w = w_exceeds_margin(t, 0.05);
            assert!(w > 0.0 && w < 1.0, "w({t}) = {w}");
        }
    }

    #[test]
    fn test_within_factors() {
        assert_eq!(v_within_margin(0.0, 0.1), 0.0);
        assert!(v_within_margin(0.5, 0.1) < 0.0);
        assert!(v_within_margin(-0.5, 0.1) > 0.0);
        assert!((v_within_margin(0.5, 0.1) + v_within_margin(-0.5, 0.1)).abs() < 1e-12);

        for t in [-2.0, -0.3, 0.0, 0.3, 2.0] {
            let w = w_within_margin(t, 0.1);
            assert!(w > 0.0 && w <= 1.0, "w({t}) = {w}");
        }
    }

    #[test]
    fn test_vanishing_probability_fallbacks() {
        assert_eq!(v_exceeds_margin(-60.0, 0.0), 60.0);
        assert_eq!(w_exceeds_margin(-60.0, 0.0), 1.0);
        assert_eq!(w_within_margin(60.0, 0.001), 1.0);
    }
}
