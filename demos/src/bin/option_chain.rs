//! Prices a small option chain, prints its Greeks and recovers implied
//! volatility from quoted premiums.
//!
//! Run with `cargo run -p demos --bin option_chain`. Set the subscriber level
//! to TRACE in `main` to watch the solver iterate.

use blackscholes_rs::prelude::*;
use tracing::{error, info, warn};

/// A quoted premium for one contract.
struct Quote {
    kind: &'static str,
    strike: f64,
    premium: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let underlying = 100.0;
    let time_to_expiry = 0.5;
    let rate = 0.01;
    let model_vol = 0.20;

    info!("Chain for underlying {underlying}, {time_to_expiry}y, r={rate}, v={model_vol}");
    for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
        for kind in [ContractKind::Call, ContractKind::Put] {
            let params = OptionParams::new(underlying, strike, time_to_expiry, rate, kind);
            let premium = params.price(model_vol);
            let greeks = Greeks::compute(&params, model_vol, GreekScales::default());
            info!(
                "{kind} K={strike}: price={premium:.4} delta={:.4} gamma={:.4} theta={:.4} vega={:.4} rho={:.4}",
                greeks.delta, greeks.gamma, greeks.theta, greeks.vega, greeks.rho
            );
        }
    }

    let quotes = [
        Quote {
            kind: "CALL",
            strike: 100.0,
            premium: 5.876,
        },
        Quote {
            kind: "put",
            strike: 110.0,
            premium: 12.10,
        },
        Quote {
            kind: "call",
            strike: 100.0,
            premium: 150.0,
        },
        Quote {
            kind: "straddle",
            strike: 100.0,
            premium: 9.0,
        },
    ];

    for quote in &quotes {
        let kind: ContractKind = match quote.kind.parse() {
            Ok(kind) => kind,
            Err(e) => {
                error!("Skipping quote at strike {}: {}", quote.strike, e);
                continue;
            }
        };

        let params = OptionParams::new(underlying, quote.strike, time_to_expiry, rate, kind);
        let result = params.implied_volatility(quote.premium);
        if result.converged {
            info!(
                "{kind} K={} premium={}: IV={:.2}% after {} iterations",
                quote.strike,
                quote.premium,
                result.iv_percent(),
                result.iterations
            );
        } else {
            warn!(
                "{kind} K={} premium={}: no match, last IV {:.4} (residual {:.4})",
                quote.strike, quote.premium, result.iv, result.residual
            );
        }

        match serde_json::to_string(&result) {
            Ok(json) => info!("{json}"),
            Err(e) => error!("Failed to serialize result: {}", e),
        }
    }
}
