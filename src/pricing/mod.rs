//! European option pricing under Black-Scholes.
//!
//! # Overview
//!
//! Everything in this module is a pure function of a handful of scalars:
//! underlying `s`, strike `k`, time to expiry `t` in years, volatility `v`
//! and risk-free rate `r`. No state is kept between calls, so every function
//! can be called from any number of threads at once.
//!
//! - [`normal`]: standard normal density and a self-contained CDF
//! - [`black_scholes`]: the closed-form price and the shared term `w` (d1)
//! - [`greeks`]: delta, gamma, theta, vega and rho, all analytic
//! - [`solver`]: implied volatility by bisection on an unbounded interval
//!
//! # Degenerate inputs
//!
//! Nothing validates its inputs. When `v·√t` is zero `w` is not finite and
//! each Greek returns a defined limit (see the individual functions).
//! [`OptionParams::validate`] is available for callers who want to reject
//! bad data first.
//!
//! # Example
//!
//! ```
//! use blackscholes_rs::pricing::{GreekScales, Greeks, OptionParams};
//!
//! let params = OptionParams::call(100.0, 100.0, 0.5, 0.01);
//! let premium = params.price(0.20);
//! assert!((premium - 5.876).abs() < 0.01);
//!
//! let greeks = Greeks::compute(&params, 0.20, GreekScales::default());
//! assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
//!
//! let iv = params.implied_volatility(premium);
//! assert!(iv.converged);
//! assert!((iv.iv - 0.20).abs() < 0.001);
//! ```

pub mod black_scholes;
mod error;
pub mod greeks;
pub mod normal;
pub mod solver;
mod types;

pub use black_scholes::{is_finite, price, put_call_parity_gap, w};
pub use error::PricingError;
pub use greeks::{Greeks, delta, gamma, rho, theta, vega};
pub use normal::{norm_cdf, norm_pdf};
pub use solver::{SolverConfig, implied_volatility, solve_implied_volatility};
pub use types::{ContractKind, GreekScales, IVResult, OptionParams};
