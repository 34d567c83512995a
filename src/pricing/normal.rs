//! Standard normal distribution.
//!
//! The CDF is self-contained: a power series in `x` scaled by the density,
//! saturated to exactly 0 or 1 beyond eight standard deviations.

use std::f64::consts::PI;

/// Beyond this many standard deviations the CDF is exactly 0 or 1.
const TAIL_BOUND: f64 = 8.0;

/// Number of terms summed by the CDF series.
const SERIES_TERMS: i32 = 100;

/// Standard normal probability density function (PDF).
///
/// φ(x) = exp(−x²/2) / √(2π)
#[must_use]
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Standard normal cumulative distribution function (CDF).
///
/// Calculates P(Z ≤ x) with
///
/// Φ(x) = 0.5 + φ(x) · Σ x^(2i+1) / (2i+1)!!, i = 0..99
///
/// for |x| < 8. The series loses a little precision as |x| approaches the
/// bound, well below the cent-level accuracy the pricer needs. Rounding can
/// push the sum a few ulps outside [0, 1], so the result is clamped.
///
/// NaN propagates.
#[must_use]
pub fn norm_cdf(x: f64) -> f64 {
    if x >= TAIL_BOUND {
        return 1.0;
    }
    if x <= -TAIL_BOUND {
        return 0.0;
    }

    let series: f64 = (0..SERIES_TERMS)
        .map(|i| {
            let n = 2 * i + 1;
            x.powi(n) / double_factorial(n)
        })
        .sum();

    (series * norm_pdf(x) + 0.5).clamp(0.0, 1.0)
}

/// Double factorial of an odd (or any positive) integer: n·(n−2)·(n−4)·…
///
/// Returns 1 for n ≤ 1.
#[must_use]
pub fn double_factorial(n: i32) -> f64 {
    let mut value = 1.0;
    let mut i = n;
    while i > 1 {
        value *= f64::from(i);
        i -= 2;
    }
    value
}
