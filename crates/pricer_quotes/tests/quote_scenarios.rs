//! End-to-end quote scenarios through the public API.
//!
//! # Test Categories
//!
//! 1. **Factory scenarios**: tag plus JSON payload to priced response
//! 2. **Error kinds**: one scenario per `QuoteError` variant
//! 3. **Properties**: forward pricing formula and purity

use approx::{assert_abs_diff_eq, assert_relative_eq};
use pricer_core::math::distributions::norm_cdf;
use pricer_quotes::{
    price_quote, Describable, OptionQuote, Priceable, QuoteError, QuoteErrorResponse,
    QuoteFactory, QuoteField, QuotePayload, QuoteType,
};
use proptest::prelude::*;
use serde_json::json;

fn payload(value: serde_json::Value) -> QuotePayload {
    QuotePayload::from_value(value).unwrap()
}

// ============================================================================
// Factory Scenarios
// ============================================================================

#[test]
fn test_option_scenario() {
    let fields = payload(json!({
        "spotPrice": 100.0,
        "strikePrice": 100.0,
        "riskFreeRate": 0.05,
        "volatility": 0.2,
        "timeToMaturity": 1.0
    }));

    let quote = QuoteFactory::new().create_quote("Option", &fields).unwrap();
    assert_abs_diff_eq!(quote.price(), 10.4506, epsilon = 1e-4);
    assert_eq!(
        quote.describe(),
        "QuoteType = Option: Spot Price = 100, Strike Price = 100, Risk Free Rate = 0.05, \
         Volatility = 0.2, Time to Maturity = 1"
    );
}

#[test]
fn test_forward_scenario() {
    let fields = payload(json!({
        "spotPrice": 100.0,
        "riskFreeRate": 0.05,
        "timeToMaturity": 1.0
    }));

    let response = price_quote("Forward", &fields).unwrap();
    assert_abs_diff_eq!(response.price, 105.1271, epsilon = 1e-4);
}

#[test]
fn test_swap_scenario() {
    let fields = payload(json!({
        "spotPrice": 100.0,
        "riskFreeRate": 0.05,
        "timeToMaturity": 1.0
    }));

    let quote = QuoteFactory::new().create_quote("Swap", &fields).unwrap();
    assert_eq!(quote.quote_type(), QuoteType::Swap);
    assert_abs_diff_eq!(quote.price(), 105.1271, epsilon = 1e-4);
}

#[test]
fn test_norm_cdf_scenario() {
    assert_abs_diff_eq!(norm_cdf(1.96_f64), 0.9750, epsilon = 1e-4);
    assert_abs_diff_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1.5e-7);
}

#[test]
fn test_response_json_shape() {
    let fields = payload(json!({
        "spotPrice": 50,
        "riskFreeRate": 0,
        "timeToMaturity": 2
    }));

    let response = price_quote("Forward", &fields).unwrap();
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["price"], 50.0);
    assert_eq!(
        json["details"],
        "QuoteType = Forward: Spot Price = 50, Risk Free Rate = 0, Time to Maturity = 2"
    );
}

// ============================================================================
// Error Kinds
// ============================================================================

#[test]
fn test_unknown_tag_scenario() {
    let err = price_quote("Bond", &QuotePayload::new()).unwrap_err();
    assert!(matches!(err, QuoteError::UnknownQuoteType { ref tag } if tag == "Bond"));
}

#[test]
fn test_option_missing_fields_scenario() {
    let fields = payload(json!({
        "spotPrice": 100.0,
        "riskFreeRate": 0.05,
        "timeToMaturity": 1.0
    }));

    let err = QuoteFactory::new()
        .create_quote("Option", &fields)
        .unwrap_err();
    assert!(matches!(
        err,
        QuoteError::ShapeMismatch {
            quote_type: QuoteType::Option,
            ..
        }
    ));
}

#[test]
fn test_negative_volatility_scenario() {
    let err = OptionQuote::builder().volatility(-0.1).unwrap_err();
    assert_eq!(
        err,
        QuoteError::InvalidParameter {
            field: QuoteField::Volatility,
            value: -0.1
        }
    );
}

#[test]
fn test_early_build_scenario() {
    let err = OptionQuote::builder()
        .spot_price(100.0)
        .and_then(|b| b.build())
        .unwrap_err();
    assert_eq!(
        err,
        QuoteError::IncompleteRequest {
            field: QuoteField::StrikePrice
        }
    );
}

#[test]
fn test_error_response_codes_are_distinct() {
    let errors = [
        QuoteError::UnknownQuoteType {
            tag: "Bond".to_string(),
        },
        QuoteError::ShapeMismatch {
            quote_type: QuoteType::Swap,
            field: QuoteField::SpotPrice,
            issue: pricer_quotes::ShapeIssue::Missing,
        },
        QuoteError::InvalidParameter {
            field: QuoteField::SpotPrice,
            value: 0.0,
        },
        QuoteError::IncompleteRequest {
            field: QuoteField::SpotPrice,
        },
    ];

    let mut codes: Vec<String> = errors
        .iter()
        .map(|err| QuoteErrorResponse::from(err).error)
        .collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_forward_and_swap_price_is_spot_times_growth(
        spot in 0.01_f64..10_000.0,
        rate in -0.1_f64..0.2,
        maturity in 0.01_f64..30.0,
    ) {
        let expected = spot * (rate * maturity).exp();
        for tag in ["Forward", "Swap"] {
            let fields = QuotePayload::new()
                .with_field(QuoteField::SpotPrice, spot)
                .with_field(QuoteField::RiskFreeRate, rate)
                .with_field(QuoteField::TimeToMaturity, maturity);
            let response = price_quote(tag, &fields).unwrap();
            assert_relative_eq!(response.price, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn prop_option_price_is_pure_and_bounded(
        spot in 1.0_f64..500.0,
        strike in 1.0_f64..500.0,
        rate in -0.05_f64..0.15,
        vol in 0.01_f64..1.5,
        maturity in 0.01_f64..10.0,
    ) {
        let call = OptionQuote::new(spot, strike, rate, vol, maturity).unwrap();
        let first = call.price();
        prop_assert_eq!(first, call.price());
        prop_assert!(first.is_finite());
        prop_assert!(first <= spot + 1e-9);
        prop_assert!(first >= -1e-6);
    }
}
