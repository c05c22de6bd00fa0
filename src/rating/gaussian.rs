//! Standard normal distribution primitives
//!
//! The rating engine needs the density, the cumulative distribution and its
//! inverse. The complementary error function uses the Chebyshev expansion
//! from Numerical Recipes, accurate to about 1.2e-16 over the real line.

use std::f64::consts::{FRAC_2_SQRT_PI, PI, SQRT_2};

const ERFC_COEFFICIENTS: [f64; 28] = [
    -1.3026537197817094,
    6.4196979235649026e-1,
    1.9476473204185836e-2,
    -9.561514786808631e-3,
    -9.46595344482036e-4,
    3.66839497852761e-4,
    4.2523324806907e-5,
    -2.0278578112534e-5,
    -1.624290004647e-6,
    1.303655835580e-6,
    1.5626441722e-8,
    -8.5238095915e-8,
    6.529054439e-9,
    5.059343495e-9,
    -9.91364156e-10,
    -2.27365122e-10,
    9.6467911e-11,
    2.394038e-12,
    -6.886027e-12,
    8.94487e-13,
    3.13092e-13,
    -1.12708e-13,
    3.81e-16,
    7.106e-15,
    -1.523e-15,
    -9.4e-17,
    1.21e-16,
    -2.8e-17,
];

/// Complementary error function
pub fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 2.0 / (2.0 + z);
    let ty = 4.0 * t - 2.0;

    let mut d = 0.0;
    let mut dd = 0.0;
    for coefficient in ERFC_COEFFICIENTS[1..].iter().rev() {
        let previous = d;
        d = ty * d - dd + coefficient;
        dd = previous;
    }

    let ans = t * (-z * z + 0.5 * (ERFC_COEFFICIENTS[0] + ty * d) - dd).exp();
    if x >= 0.0 {
        ans
    } else {
        2.0 - ans
    }
}

/// Inverse of [`erfc`] on (0, 2), refined with two Halley steps
pub fn inverse_erfc(p: f64) -> f64 {
    if p >= 2.0 {
        return -100.0;
    }
    if p <= 0.0 {
        return 100.0;
    }

    let pp = if p < 1.0 { p } else { 2.0 - p };
    let t = (-2.0 * (pp / 2.0).ln()).sqrt();
    let mut x = -0.70711 * ((2.30753 + t * 0.27061) / (1.0 + t * (0.99229 + t * 0.04481)) - t);

    for _ in 0..2 {
        let err = erfc(x) - pp;
        x += err / (FRAC_2_SQRT_PI * (-x * x).exp() - x * err);
    }

    if p < 1.0 {
        x
    } else {
        -x
    }
}

/// Standard normal probability density
pub fn pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Standard normal cumulative distribution
pub fn cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal quantile function (inverse of [`cdf`])
pub fn inverse_cdf(p: f64) -> f64 {
    -SQRT_2 * inverse_erfc(2.0 * p)
}
