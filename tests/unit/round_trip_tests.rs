//! Price -> implied volatility -> price round trips.

use blackscholes_rs::prelude::*;

struct Case {
    name: &'static str,
    underlying: f64,
    strike: f64,
    time_to_expiry: f64,
    volatility: f64,
    risk_free_rate: f64,
    kind: ContractKind,
}

const fn case(
    name: &'static str,
    underlying: f64,
    strike: f64,
    time_to_expiry: f64,
    volatility: f64,
    risk_free_rate: f64,
    kind: ContractKind,
) -> Case {
    Case {
        name,
        underlying,
        strike,
        time_to_expiry,
        volatility,
        risk_free_rate,
        kind,
    }
}

const CASES: &[Case] = &[
    case("ATM call 30d", 100.0, 100.0, 30.0 / 365.0, 0.23, 0.05, ContractKind::Call),
    case("ATM put 30d", 100.0, 100.0, 30.0 / 365.0, 0.23, 0.05, ContractKind::Put),
    case("OTM put", 100.0, 120.0, 90.0 / 365.0, 0.37, 0.05, ContractKind::Put),
    case("ITM call 1y", 100.0, 80.0, 1.0, 0.27, 0.02, ContractKind::Call),
    case("OTM call", 100.0, 130.0, 0.5, 0.31, 0.01, ContractKind::Call),
    case("Long expiry put 2y", 100.0, 100.0, 2.0, 0.17, 0.03, ContractKind::Put),
    case("High volatility", 100.0, 100.0, 0.25, 1.35, 0.05, ContractKind::Call),
    case("Extreme volatility", 100.0, 100.0, 0.25, 2.0, 0.05, ContractKind::Call),
    case("Low volatility 5%", 100.0, 100.0, 0.25, 0.05, 0.05, ContractKind::Put),
    case("Low volatility 1% call", 100.0, 101.25, 0.25, 0.01, 0.05, ContractKind::Call),
    case("Low volatility 1% put", 100.0, 101.25, 0.25, 0.01, 0.05, ContractKind::Put),
    case("Reference call", 100.0, 100.0, 0.5, 0.20, 0.01, ContractKind::Call),
];

#[test]
fn test_round_trip_accuracy() {
    for c in CASES {
        let original = price(
            c.underlying,
            c.strike,
            c.time_to_expiry,
            c.volatility,
            c.risk_free_rate,
            c.kind,
        );
        assert!(original > 0.0, "{}: price should be positive", c.name);

        let iv = implied_volatility(
            original,
            c.strike,
            c.underlying,
            c.time_to_expiry,
            c.risk_free_rate,
            c.kind,
            0.0,
        );
        assert!(iv > 0.0, "{}: implied volatility should be positive", c.name);

        let round_trip = price(
            c.underlying,
            c.strike,
            c.time_to_expiry,
            iv,
            c.risk_free_rate,
            c.kind,
        );

        let price_diff = (original - round_trip).abs();
        let vol_diff = (c.volatility - iv).abs();
        assert!(
            price_diff <= 0.01,
            "{}: round-trip price difference {price_diff} > 0.01",
            c.name
        );
        assert!(
            vol_diff <= 0.001,
            "{}: volatility difference {vol_diff} > 0.001",
            c.name
        );
    }
}

#[test]
fn test_round_trip_reports_convergence() {
    for c in CASES {
        let params = OptionParams::new(
            c.underlying,
            c.strike,
            c.time_to_expiry,
            c.risk_free_rate,
            c.kind,
        );
        let target = params.price(c.volatility);
        let result = params.implied_volatility(target);

        assert!(result.converged, "{}: solver did not converge", c.name);
        assert!(result.iterations <= 100);
        assert!(result.residual.abs() < 0.01, "{}: residual {}", c.name, result.residual);
        assert!(result.clone().into_result().is_ok());
    }
}

#[test]
fn test_round_trip_deep_in_the_money() {
    // Vega is close to zero here, so only the price is recoverable.
    let deep = [
        OptionParams::call(100.0, 50.0, 0.25, 0.05),
        OptionParams::put(100.0, 150.0, 0.25, 0.05),
    ];
    for params in deep {
        let original = params.price(0.2);
        let iv = params.implied_volatility(original).iv;
        let round_trip = params.price(iv);
        assert!(
            (original - round_trip).abs() < 0.001,
            "{params:?}: {original} vs {round_trip}"
        );
    }
}

#[test]
fn test_reference_scenario() {
    let premium = price(100.0, 100.0, 0.5, 0.20, 0.01, ContractKind::Call);
    assert!((premium - 5.876).abs() < 0.01);

    let iv = implied_volatility(5.876, 100.0, 100.0, 0.5, 0.01, ContractKind::Call, 0.0);
    assert!((iv - 0.20).abs() < 0.001);
}

#[test]
fn test_unreachable_price_returns_best_effort() {
    let params = OptionParams::call(100.0, 100.0, 0.5, 0.01);
    let result = solve_implied_volatility(&params, 150.0, &SolverConfig::default());
    assert!(!result.converged);
    assert!(matches!(
        result.into_result(),
        Err(PricingError::ConvergenceFailure { iterations: 100, .. })
    ));
}

#[test]
fn test_solver_is_reentrant() {
    let handles: Vec<_> = CASES
        .iter()
        .map(|c| {
            let params = OptionParams::new(
                c.underlying,
                c.strike,
                c.time_to_expiry,
                c.risk_free_rate,
                c.kind,
            );
            let volatility = c.volatility;
            std::thread::spawn(move || {
                let target = params.price(volatility);
                (volatility, params.implied_volatility(target).iv)
            })
        })
        .collect();

    for handle in handles {
        let (expected, iv) = handle.join().unwrap();
        assert!((expected - iv).abs() <= 0.001);
    }
}
