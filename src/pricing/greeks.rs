//! Analytic Greeks for European options.
//!
//! Every Greek is a closed-form derivative of [`price`](super::black_scholes::price)
//! built on the shared term [`w`]. When `v·√t` collapses to zero `w` is not
//! finite and each Greek returns its limiting value instead of NaN.

use super::black_scholes::{is_finite, w};
use super::error::PricingError;
use super::normal::{norm_cdf, norm_pdf};
use super::types::{ContractKind, GreekScales, OptionParams};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Delta (∂price/∂s) of a call or a put.
///
/// Accepts either a [`ContractKind`] or a string naming one in any casing.
///
/// For calls: Δ = Φ(w), or 1/0 for in/out of the money when `w` is not finite.
/// For puts:  Δ = call Δ − 1, except an at-the-money contract whose call
/// delta collapsed to 0 reports 0 rather than −1.
///
/// # Errors
/// Returns [`PricingError::InvalidContractKind`] when `kind` names neither a call nor a put.
pub fn delta<K>(s: f64, k: f64, t: f64, v: f64, r: f64, kind: K) -> Result<f64, PricingError>
where
    K: TryInto<ContractKind>,
    PricingError: From<K::Error>,
{
    let kind = kind.try_into()?;
    Ok(delta_of(s, k, t, v, r, kind))
}

fn delta_of(s: f64, k: f64, t: f64, v: f64, r: f64, kind: ContractKind) -> f64 {
    match kind {
        ContractKind::Call => call_delta(s, k, t, v, r),
        ContractKind::Put => put_delta(s, k, t, v, r),
    }
}

fn call_delta(s: f64, k: f64, t: f64, v: f64, r: f64) -> f64 {
    let w = w(s, k, t, v, r);
    if !is_finite(w) {
        trace!("call delta: non-finite w {w}, using limit for s={s} k={k}");
        return if s > k { 1.0 } else { 0.0 };
    }
    norm_cdf(w)
}

fn put_delta(s: f64, k: f64, t: f64, v: f64, r: f64) -> f64 {
    let delta = call_delta(s, k, t, v, r) - 1.0;
    if delta == -1.0 && k == s {
        return 0.0;
    }
    delta
}

/// Gamma (∂²price/∂s²), identical for calls and puts.
///
/// Γ = φ(w) / (s·v·√t), or 0 when `w` is not finite.
#[must_use]
pub fn gamma(s: f64, k: f64, t: f64, v: f64, r: f64) -> f64 {
    let w = w(s, k, t, v, r);
    if is_finite(w) {
        norm_pdf(w) / (s * v * t.sqrt())
    } else {
        0.0
    }
}

/// Vega per percentage point of volatility, identical for calls and puts.
///
/// Vega = s·√t·φ(w) / 100, or 0 when `w` is not finite.
#[must_use]
pub fn vega(s: f64, k: f64, t: f64, v: f64, r: f64) -> f64 {
    let w = w(s, k, t, v, r);
    if is_finite(w) {
        s * t.sqrt() * norm_pdf(w) / 100.0
    } else {
        0.0
    }
}

/// Theta (time decay) divided by `scale`.
///
/// A `scale` of 0 means 365, i.e. theta per calendar day.
///
/// For calls: (−v·s·φ(w)/(2√t) − k·r·e^(−rt)·Φ(w − v√t)) / scale
/// For puts:  (−v·s·φ(w)/(2√t) + k·r·e^(−rt)·Φ(v√t − w)) / scale
///
/// Returns 0 when `w` is not finite.
#[must_use]
pub fn theta(s: f64, k: f64, t: f64, v: f64, r: f64, kind: ContractKind, scale: u32) -> f64 {
    let scale = if scale == 0 {
        GreekScales::DEFAULT_THETA
    } else {
        scale
    };

    let w = w(s, k, t, v, r);
    if !is_finite(w) {
        return 0.0;
    }

    let sqrt_time = t.sqrt();
    let decay = -v * s * norm_pdf(w) / (2.0 * sqrt_time);
    let carry = k * r * (-r * t).exp();

    let annual = match kind {
        ContractKind::Call => decay - carry * norm_cdf(w - v * sqrt_time),
        ContractKind::Put => decay + carry * norm_cdf(v * sqrt_time - w),
    };
    annual / f64::from(scale)
}

/// Rho (∂price/∂r) divided by `scale`.
///
/// A `scale` of 0 means 100, i.e. rho per percentage point of rate.
///
/// For calls: k·t·e^(−rt)·Φ(w − v√t) / scale
/// For puts:  −k·t·e^(−rt)·Φ(v√t − w) / scale
///
/// Only a NaN `w` short-circuits to 0. An infinite `w` (zero volatility)
/// saturates the CDF, which gives the discounted-strike limit.
#[must_use]
pub fn rho(s: f64, k: f64, t: f64, v: f64, r: f64, kind: ContractKind, scale: u32) -> f64 {
    let scale = if scale == 0 {
        GreekScales::DEFAULT_RHO
    } else {
        scale
    };

    let w = w(s, k, t, v, r);
    if w.is_nan() {
        return 0.0;
    }

    let vol_sqrt_time = v * t.sqrt();
    let discounted = k * t * (-r * t).exp();

    let unscaled = match kind {
        ContractKind::Call => discounted * norm_cdf(w - vol_sqrt_time),
        ContractKind::Put => -discounted * norm_cdf(vol_sqrt_time - w),
    };
    unscaled / f64::from(scale)
}

/// All five Greeks of one contract at one volatility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Sensitivity to the underlying price.
    pub delta: f64,
    /// Sensitivity of delta to the underlying price.
    pub gamma: f64,
    /// Time decay per `GreekScales::theta` of a year.
    pub theta: f64,
    /// Sensitivity per percentage point of volatility.
    pub vega: f64,
    /// Sensitivity per `GreekScales::rho` of rate.
    pub rho: f64,
}

impl Greeks {
    /// Computes every Greek for `params` at volatility `vol`.
    #[must_use]
    pub fn compute(params: &OptionParams, vol: f64, scales: GreekScales) -> Self {
        let OptionParams {
            underlying: s,
            strike: k,
            time_to_expiry: t,
            risk_free_rate: r,
            kind,
        } = *params;

        Self {
            delta: delta_of(s, k, t, vol, r, kind),
            gamma: gamma(s, k, t, vol, r),
            theta: theta(s, k, t, vol, r, kind, scales.theta),
            vega: vega(s, k, t, vol, r),
            rho: rho(s, k, t, vol, r, kind, scales.rho),
        }
    }
}
