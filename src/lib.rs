//! # Black-Scholes pricing for European options
//!
//! Theoretical prices, analytic Greeks and implied volatility for European
//! calls and puts, with no numerical libraries underneath: the normal CDF is
//! computed in-crate.
//!
//! ## Pricing
//!
//! ```
//! use blackscholes_rs::{ContractKind, price};
//!
//! // underlying, strike, years, volatility, rate
//! let premium = price(100.0, 100.0, 0.5, 0.20, 0.01, ContractKind::Call);
//! assert!((premium - 5.876).abs() < 0.01);
//! ```
//!
//! ## Greeks
//!
//! Delta takes either a [`ContractKind`] or a string, and rejects anything
//! that is not a call or a put. The other Greeks take the typed kind.
//! Theta is reported per calendar day and vega and rho per percentage point
//! unless another scale is passed.
//!
//! ```
//! use blackscholes_rs::{ContractKind, delta, gamma, theta};
//!
//! let put_delta = delta(49.0, 50.0, 0.3846, 0.2, 0.05, "PUT").unwrap();
//! assert!((put_delta + 0.478).abs() < 1e-3);
//! assert!(delta(49.0, 50.0, 0.3846, 0.2, 0.05, "BOGUS").is_err());
//!
//! assert!(gamma(49.0, 50.0, 0.3846, 0.2, 0.05) > 0.0);
//! assert!(theta(49.0, 50.0, 0.3846, 0.2, 0.05, ContractKind::Call, 0) < 0.0);
//! ```
//!
//! ## Implied volatility
//!
//! [`implied_volatility`] takes the strike *before* the underlying and
//! bisects until the price matches the target to the cent. Pass 0 as the
//! initial estimate to start from 10%.
//!
//! ```
//! use blackscholes_rs::{ContractKind, implied_volatility};
//!
//! let iv = implied_volatility(5.876, 100.0, 100.0, 0.5, 0.01, ContractKind::Call, 0.0);
//! assert!((iv - 0.20).abs() < 0.001);
//! ```
//!
//! ## Logging
//!
//! The crate logs through [`tracing`]: solver iterations and Greek fallbacks
//! at `TRACE`, solver non-convergence at `DEBUG`. Install a subscriber to
//! see them.

pub mod prelude;
pub mod pricing;

pub use pricing::{
    ContractKind, GreekScales, Greeks, IVResult, OptionParams, PricingError, SolverConfig, delta,
    gamma, implied_volatility, is_finite, norm_cdf, norm_pdf, price, put_call_parity_gap, rho,
    solve_implied_volatility, theta, vega, w,
};
