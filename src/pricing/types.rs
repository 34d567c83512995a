//! Value types shared by the pricer, the Greeks and the solver.

use super::black_scholes;
use super::error::PricingError;
use super::solver::{self, SolverConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of European option contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractKind {
    /// Call option (right to buy the underlying at strike price).
    Call,
    /// Put option (right to sell the underlying at strike price).
    Put,
}

impl ContractKind {
    /// Legacy upper-case literal for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractKind::Call => "CALL",
            ContractKind::Put => "PUT",
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses `call` / `put` in any casing, ignoring surrounding whitespace.
impl FromStr for ContractKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("call") {
            Ok(ContractKind::Call)
        } else if trimmed.eq_ignore_ascii_case("put") {
            Ok(ContractKind::Put)
        } else {
            Err(PricingError::InvalidContractKind {
                value: s.to_string(),
            })
        }
    }
}

impl TryFrom<&str> for ContractKind {
    type Error = PricingError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Contract and market inputs, everything except volatility.
///
/// Volatility is kept out so the same parameters can be priced at several
/// volatilities, which is what the implied volatility solver does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionParams {
    /// Underlying price in price units.
    pub underlying: f64,
    /// Option strike price in price units.
    pub strike: f64,
    /// Time to expiration in years (e.g., 30 days = 30.0 / 365.0).
    pub time_to_expiry: f64,
    /// Risk-free interest rate (annualized, continuously compounded).
    pub risk_free_rate: f64,
    /// Call or put.
    pub kind: ContractKind,
}

impl OptionParams {
    /// Creates new option parameters.
    #[must_use]
    pub fn new(
        underlying: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        kind: ContractKind,
    ) -> Self {
        Self {
            underlying,
            strike,
            time_to_expiry,
            risk_free_rate,
            kind,
        }
    }

    /// Creates parameters for a call option.
    #[must_use]
    pub fn call(underlying: f64, strike: f64, time_to_expiry: f64, risk_free_rate: f64) -> Self {
        Self::new(
            underlying,
            strike,
            time_to_expiry,
            risk_free_rate,
            ContractKind::Call,
        )
    }

    /// Creates parameters for a put option.
    #[must_use]
    pub fn put(underlying: f64, strike: f64, time_to_expiry: f64, risk_free_rate: f64) -> Self {
        Self::new(
            underlying,
            strike,
            time_to_expiry,
            risk_free_rate,
            ContractKind::Put,
        )
    }

    /// Checks the parameters are usable for pricing.
    ///
    /// The pricing functions themselves never validate; this is for callers
    /// that want to reject bad market data up front.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidParams`] naming the first bad field.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.underlying.is_finite() && self.underlying > 0.0) {
            return Err(PricingError::InvalidParams {
                message: format!("underlying must be positive, got {}", self.underlying),
            });
        }

        if !(self.strike.is_finite() && self.strike > 0.0) {
            return Err(PricingError::InvalidParams {
                message: format!("strike must be positive, got {}", self.strike),
            });
        }

        if !(self.time_to_expiry.is_finite() && self.time_to_expiry >= 0.0) {
            return Err(PricingError::InvalidParams {
                message: format!(
                    "time to expiry must be non-negative, got {}",
                    self.time_to_expiry
                ),
            });
        }

        if !self.risk_free_rate.is_finite() {
            return Err(PricingError::InvalidParams {
                message: format!("risk-free rate must be finite, got {}", self.risk_free_rate),
            });
        }

        Ok(())
    }

    /// Intrinsic value of the option.
    ///
    /// For calls: max(0, underlying - strike)
    /// For puts: max(0, strike - underlying)
    #[must_use]
    pub fn intrinsic_value(&self) -> f64 {
        match self.kind {
            ContractKind::Call => (self.underlying - self.strike).max(0.0),
            ContractKind::Put => (self.strike - self.underlying).max(0.0),
        }
    }

    /// Returns true if the option is in-the-money.
    #[must_use]
    pub fn is_itm(&self) -> bool {
        self.intrinsic_value() > 0.0
    }

    /// Returns true if the option is at-the-money (within 0.1% of strike).
    #[must_use]
    pub fn is_atm(&self) -> bool {
        (self.underlying - self.strike).abs() / self.strike < 0.001
    }

    /// Returns true if the option is out-of-the-money.
    #[must_use]
    pub fn is_otm(&self) -> bool {
        !self.is_itm() && !self.is_atm()
    }

    /// Theoretical Black-Scholes price at volatility `vol`.
    #[must_use]
    pub fn price(&self, vol: f64) -> f64 {
        black_scholes::price(
            self.underlying,
            self.strike,
            self.time_to_expiry,
            vol,
            self.risk_free_rate,
            self.kind,
        )
    }

    /// Recovers the volatility reproducing `target_price`, with the default solver settings.
    #[must_use]
    pub fn implied_volatility(&self, target_price: f64) -> IVResult {
        solver::solve_implied_volatility(self, target_price, &SolverConfig::default())
    }
}

/// Divisors applied to theta and rho.
///
/// A zero divisor falls back to the default for that Greek.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreekScales {
    /// Theta divisor; 365 expresses theta per calendar day.
    pub theta: u32,
    /// Rho divisor; 100 expresses rho per percentage point of rate.
    pub rho: u32,
}

impl GreekScales {
    /// Default theta divisor (calendar days per year).
    pub const DEFAULT_THETA: u32 = 365;
    /// Default rho divisor (percentage points).
    pub const DEFAULT_RHO: u32 = 100;

    /// Creates scales with the default divisors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scales theta per trading day (252 per year) instead of per calendar day.
    #[must_use]
    pub fn trading_days() -> Self {
        Self::default().with_theta(252)
    }

    /// Sets the theta divisor.
    #[must_use]
    pub fn with_theta(mut self, theta: u32) -> Self {
        self.theta = theta;
        self
    }

    /// Sets the rho divisor.
    #[must_use]
    pub fn with_rho(mut self, rho: u32) -> Self {
        self.rho = rho;
        self
    }
}

impl Default for GreekScales {
    fn default() -> Self {
        Self {
            theta: Self::DEFAULT_THETA,
            rho: Self::DEFAULT_RHO,
        }
    }
}

/// Result of an implied volatility search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IVResult {
    /// Final volatility estimate (e.g., 0.25 = 25%).
    pub iv: f64,
    /// Number of pricer evaluations performed.
    pub iterations: u32,
    /// True when the estimate priced to the same cent as the target.
    pub converged: bool,
    /// `price(iv) - target`, in price units.
    pub residual: f64,
}

impl IVResult {
    /// Creates a new IV result.
    #[must_use]
    pub fn new(iv: f64, iterations: u32, converged: bool, residual: f64) -> Self {
        Self {
            iv,
            iterations,
            converged,
            residual,
        }
    }

    /// Returns the IV as a percentage (e.g., 25.0 for 25%).
    #[must_use]
    pub fn iv_percent(&self) -> f64 {
        self.iv * 100.0
    }

    /// Turns a non-converged search into an error.
    ///
    /// # Errors
    /// Returns [`PricingError::ConvergenceFailure`] if the search did not converge.
    pub fn into_result(self) -> Result<f64, PricingError> {
        if self.converged {
            Ok(self.iv)
        } else {
            Err(PricingError::ConvergenceFailure {
                iterations: self.iterations,
                last_iv: self.iv,
            })
        }
    }
}
