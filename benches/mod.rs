use blackscholes_rs::prelude::*;
use blackscholes_rs::norm_cdf;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_norm_cdf(c: &mut Criterion) {
    c.bench_function("norm_cdf", |b| b.iter(|| norm_cdf(black_box(0.73))));
}

fn bench_price(c: &mut Criterion) {
    c.bench_function("price_call", |b| {
        b.iter(|| {
            price(
                black_box(100.0),
                black_box(100.0),
                black_box(0.5),
                black_box(0.2),
                black_box(0.01),
                ContractKind::Call,
            )
        })
    });
}

fn bench_greeks(c: &mut Criterion) {
    let params = OptionParams::put(49.0, 50.0, 0.3846, 0.05);
    c.bench_function("greeks_compute", |b| {
        b.iter(|| Greeks::compute(black_box(&params), black_box(0.2), GreekScales::default()))
    });
}

fn bench_implied_volatility(c: &mut Criterion) {
    let mut group = c.benchmark_group("implied_volatility");
    for vol in [0.05, 0.2, 1.35] {
        let params = OptionParams::call(100.0, 100.0, 0.25, 0.05);
        let target = params.price(vol);
        group.bench_with_input(BenchmarkId::from_parameter(vol), &target, |b, &target| {
            b.iter(|| {
                implied_volatility(
                    black_box(target),
                    100.0,
                    100.0,
                    0.25,
                    0.05,
                    ContractKind::Call,
                    0.0,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_norm_cdf,
    bench_price,
    bench_greeks,
    bench_implied_volatility
);
criterion_main!(benches);
