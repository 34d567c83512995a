use blackscholes_rs::prelude::*;

#[test]
fn test_contract_kind_serialization() {
    let json = serde_json::to_string(&ContractKind::Call).unwrap();
    assert_eq!(json, "\"Call\"");

    let kind: ContractKind = serde_json::from_str("\"Put\"").unwrap();
    assert_eq!(kind, ContractKind::Put);
}

#[test]
fn test_option_params_json() {
    let params = OptionParams::put(49.0, 50.0, 0.3846, 0.05);
    let json = serde_json::to_value(&params).unwrap();
    assert_eq!(json["underlying"], 49.0);
    assert_eq!(json["strike"], 50.0);
    assert_eq!(json["kind"], "Put");

    let back: OptionParams = serde_json::from_value(json).unwrap();
    assert_eq!(back, params);
}

#[test]
fn test_greeks_and_iv_result_json() {
    let params = OptionParams::call(100.0, 100.0, 0.5, 0.01);
    let greeks = Greeks::compute(&params, 0.2, GreekScales::default());
    let json = serde_json::to_value(greeks).unwrap();
    for field in ["delta", "gamma", "theta", "vega", "rho"] {
        assert!(json[field].is_f64(), "missing {field}");
    }

    let result = params.implied_volatility(params.price(0.2));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["converged"], true);
    assert!(json["iterations"].is_u64());
}
