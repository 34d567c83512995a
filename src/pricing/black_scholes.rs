//! Black-Scholes closed-form pricer.
//!
//! All functions take the contract as bare scalars in the order
//! `(underlying, strike, time, vol, rate)`. Nothing is validated: degenerate
//! time or volatility makes the intermediate term [`w`] non-finite, and the
//! price follows whatever the normal CDF does with it.

use super::normal::norm_cdf;
use super::types::ContractKind;

/// Returns true iff `x` is neither infinite nor NaN.
#[inline]
#[must_use]
pub fn is_finite(x: f64) -> bool {
    !x.is_infinite() && !x.is_nan()
}

/// Standardized log-moneyness drift shared by the pricer and the Greeks.
///
/// w = (r·t + v²·t/2 − ln(k/s)) / (v·√t)
///
/// This is the usual d1. It is ±∞ when `v·√t` is zero and the numerator is
/// not, and NaN when both are zero (e.g. at-the-money at expiry).
///
/// # Arguments
/// - `s`: Underlying price
/// - `k`: Strike price
/// - `t`: Time to expiration in years
/// - `v`: Volatility (annualized)
/// - `r`: Risk-free interest rate
#[must_use]
pub fn w(s: f64, k: f64, t: f64, v: f64, r: f64) -> f64 {
    (r * t + v * v * t / 2.0 - (k / s).ln()) / (v * t.sqrt())
}

/// Theoretical price of a European option.
///
/// For calls: C = s·Φ(w) − k·e^(−rt)·Φ(w − v√t)
/// For puts:  P = k·e^(−rt)·Φ(v√t − w) − s·Φ(−w)
///
/// With zero volatility and positive time the infinite `w` saturates the CDF
/// and the price collapses to the discounted forward intrinsic value.
///
/// # Arguments
/// - `s`: Underlying price
/// - `k`: Strike price
/// - `t`: Time to expiration in years
/// - `v`: Volatility (annualized)
/// - `r`: Risk-free interest rate
/// - `kind`: Call or put
#[must_use]
pub fn price(s: f64, k: f64, t: f64, v: f64, r: f64, kind: ContractKind) -> f64 {
    let w = w(s, k, t, v, r);
    let vol_sqrt_time = v * t.sqrt();
    let discounted_strike = k * (-r * t).exp();

    match kind {
        ContractKind::Call => s * norm_cdf(w) - discounted_strike * norm_cdf(w - vol_sqrt_time),
        ContractKind::Put => discounted_strike * norm_cdf(vol_sqrt_time - w) - s * norm_cdf(-w),
    }
}

/// Deviation from put-call parity: `call − put − (s − k·e^(−rt))`.
///
/// Zero up to floating point error for any valid inputs.
#[must_use]
pub fn put_call_parity_gap(s: f64, k: f64, t: f64, v: f64, r: f64) -> f64 {
    let call = price(s, k, t, v, r, ContractKind::Call);
    let put = price(s, k, t, v, r, ContractKind::Put);
    call - put - (s - k * (-r * t).exp())
}
