//! Criterion benchmarks for quote construction and pricing.
//!
//! Benchmarks cover:
//! - Black-Scholes call pricing on a prebuilt quote
//! - Factory construction from a payload, per quote type
//! - The full `price_quote` path including JSON parsing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_quotes::{price_quote, OptionQuote, Priceable, QuoteFactory, QuotePayload, QuoteType};

const OPTION_JSON: &str = r#"{
    "spotPrice": 100.0,
    "strikePrice": 100.0,
    "riskFreeRate": 0.05,
    "volatility": 0.2,
    "timeToMaturity": 1.0
}"#;

fn option_payload() -> QuotePayload {
    QuotePayload::from_json_str(OPTION_JSON).unwrap()
}

/// Benchmark pricing a prebuilt option across moneyness.
fn bench_option_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("option_price");

    for strike in [50.0_f64, 100.0, 150.0] {
        let call = OptionQuote::new(100.0, strike, 0.05, 0.2, 1.0).unwrap();
        group.bench_with_input(BenchmarkId::new("strike", strike), &call, |b, call| {
            b.iter(|| black_box(call).price());
        });
    }

    group.finish();
}

/// Benchmark factory construction for each quote type.
fn bench_factory(c: &mut Criterion) {
    let mut group = c.benchmark_group("factory_create");
    let factory = QuoteFactory::new();
    let payload = option_payload();

    for quote_type in QuoteType::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(quote_type),
            &quote_type,
            |b, quote_type| {
                b.iter(|| factory.create_quote(black_box(quote_type.name()), &payload));
            },
        );
    }

    group.finish();
}

/// Benchmark parse, build, price and describe in one call.
fn bench_price_quote_from_json(c: &mut Criterion) {
    c.bench_function("price_quote_option_json", |b| {
        b.iter(|| {
            let payload = QuotePayload::from_json_str(black_box(OPTION_JSON)).unwrap();
            price_quote("Option", &payload).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_option_price,
    bench_factory,
    bench_price_quote_from_json
);
criterion_main!(benches);
