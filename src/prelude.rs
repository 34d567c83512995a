//! Common imports.
//!
//! ```
//! use blackscholes_rs::prelude::*;
//!
//! let params = OptionParams::put(49.0, 50.0, 0.3846, 0.05);
//! let greeks = Greeks::compute(&params, 0.2, GreekScales::default());
//! assert!(greeks.delta < 0.0);
//! ```

pub use crate::pricing::{
    ContractKind, GreekScales, Greeks, IVResult, OptionParams, PricingError, SolverConfig, delta,
    gamma, implied_volatility, price, rho, solve_implied_volatility, theta, vega,
};
