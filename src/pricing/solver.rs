//! Bisection solver for implied volatility.
//!
//! The search interval starts as `[0, +∞)`. While the upper bound is still
//! infinite the midpoint is not finite, so the estimate doubles instead until
//! some price overshoots the target. From then on it is plain bisection.
//! The search stops as soon as the estimate prices to the same cent as the
//! target (both truncated, not rounded).

use super::black_scholes::is_finite;
use super::types::{ContractKind, IVResult, OptionParams};
use tracing::{debug, trace};

/// Configuration for the bisection solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum pricer evaluations before giving up.
    pub max_iterations: u32,
    /// First volatility tried; 0 means [`SolverConfig::DEFAULT_INITIAL_ESTIMATE`].
    pub initial_estimate: f64,
}

impl SolverConfig {
    /// Iteration budget used by [`implied_volatility`].
    pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
    /// Seed volatility (10%) used when no estimate is supplied.
    pub const DEFAULT_INITIAL_ESTIMATE: f64 = 0.1;

    /// Creates a new solver configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the initial volatility estimate.
    #[must_use]
    pub fn with_initial_estimate(mut self, initial_estimate: f64) -> Self {
        self.initial_estimate = initial_estimate;
        self
    }

    fn seed(&self) -> f64 {
        if self.initial_estimate == 0.0 {
            Self::DEFAULT_INITIAL_ESTIMATE
        } else {
            self.initial_estimate
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            initial_estimate: Self::DEFAULT_INITIAL_ESTIMATE,
        }
    }
}

/// Whole cents of a price, truncated toward zero.
fn cents(price: f64) -> f64 {
    (price * 100.0).trunc()
}

/// Recovers the volatility whose Black-Scholes price matches `target_price` to the cent.
///
/// Note the argument order: strike comes before underlying here, while the
/// pricer takes underlying first.
///
/// An `initial_estimate` of 0 seeds the search at 10%. The search runs at most
/// 100 pricer evaluations and returns its last estimate whether or not it
/// matched; use [`solve_implied_volatility`] to find out which.
///
/// # Arguments
/// - `target_price`: Observed option premium
/// - `k`: Strike price
/// - `s`: Underlying price
/// - `t`: Time to expiration in years
/// - `r`: Risk-free interest rate
/// - `kind`: Call or put
/// - `initial_estimate`: First volatility tried, or 0
///
/// # Example
/// ```
/// use blackscholes_rs::{ContractKind, implied_volatility};
///
/// let iv = implied_volatility(5.876, 100.0, 100.0, 0.5, 0.01, ContractKind::Call, 0.0);
/// assert!((iv - 0.20).abs() < 0.001);
/// ```
#[must_use]
pub fn implied_volatility(
    target_price: f64,
    k: f64,
    s: f64,
    t: f64,
    r: f64,
    kind: ContractKind,
    initial_estimate: f64,
) -> f64 {
    let params = OptionParams::new(s, k, t, r, kind);
    let config = SolverConfig::default().with_initial_estimate(initial_estimate);
    solve_implied_volatility(&params, target_price, &config).iv
}

/// Bisection search reporting convergence and the final pricing residual.
///
/// # Arguments
/// - `params`: Option parameters (underlying, strike, time, rate, kind)
/// - `target_price`: Observed market price to match
/// - `config`: Solver configuration
///
/// # Returns
/// The last estimate, the number of pricer evaluations, whether the cent
/// check fired, and `price(iv) - target_price`.
#[must_use]
pub fn solve_implied_volatility(
    params: &OptionParams,
    target_price: f64,
    config: &SolverConfig,
) -> IVResult {
    let target_cents = cents(target_price);

    let mut estimate = config.seed();
    let mut low = 0.0;
    let mut high = f64::INFINITY;

    for iteration in 0..config.max_iterations {
        let actual = params.price(estimate);
        trace!(
            "iteration {iteration}: estimate={estimate} price={actual} target={target_price} low={low} high={high}"
        );

        if cents(actual) == target_cents {
            return IVResult::new(estimate, iteration + 1, true, actual - target_price);
        }

        if actual > target_price {
            high = estimate;
            estimate = low + (estimate - low) / 2.0;
        } else {
            low = estimate;
            estimate += (high - estimate) / 2.0;
            if !is_finite(estimate) {
                estimate = low * 2.0;
            }
        }
    }

    debug!(
        "implied volatility search for {} did not converge after {} iterations, last estimate {estimate}",
        params.kind, config.max_iterations
    );
    let residual = params.price(estimate) - target_price;
    IVResult::new(estimate, config.max_iterations, false, residual)
}
