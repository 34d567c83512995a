//! Error types for option pricing.

use std::convert::Infallible;
use std::fmt;

/// Errors raised by the pricing API.
///
/// Numeric degeneracy (zero time or zero volatility) is never reported
/// here: the pricer and the Greeks fall back to their limiting values instead.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Contract kind is neither a call nor a put.
    InvalidContractKind {
        /// The rejected input, verbatim.
        value: String,
    },

    /// Contract parameters rejected by [`OptionParams::validate`](super::OptionParams::validate).
    InvalidParams {
        /// Description of the invalid parameter.
        message: String,
    },

    /// Bisection exhausted its iteration budget without matching the target price to the cent.
    ConvergenceFailure {
        /// Number of pricer evaluations performed.
        iterations: u32,
        /// Last volatility estimate before giving up.
        last_iv: f64,
    },
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidContractKind { value } => {
                write!(f, "contract kind is not of type CALL or PUT: {value}")
            }
            PricingError::InvalidParams { message } => {
                write!(f, "invalid parameters: {message}")
            }
            PricingError::ConvergenceFailure {
                iterations,
                last_iv,
            } => {
                write!(
                    f,
                    "solver did not converge after {iterations} iterations, last IV: {last_iv:.4}"
                )
            }
        }
    }
}

impl std::error::Error for PricingError {}

impl From<Infallible> for PricingError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
