//! Benchmarks for chart composition.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use charter_compose::{ChartComposer, IndicatorToggles, LineChart};
use charter_core::{Candle, Timeframe};
use charter_data::generate_at;
use charter_geometry::{SmoothingProfile, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn generate_candles(count: usize) -> Vec<Candle> {
    let mut rng = StdRng::seed_from_u64(7);
    generate_at(30_000.0, Timeframe::Hour1, count, 1_700_000_000_000, &mut rng)
        .expect("valid generator arguments")
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let composer = ChartComposer::default();

    for size in [50, 100, 300].iter() {
        let candles = generate_candles(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &candles, |b, candles| {
            b.iter(|| {
                composer.compose(black_box(candles), Timeframe::Hour1, IndicatorToggles::all())
            });
        });
    }

    group.finish();
}

fn bench_line_chart(c: &mut Criterion) {
    let candles = generate_candles(100);
    let viewport = Viewport::new(375.0, 180.0, 0.0, 10.0);

    c.bench_function("balance_chart_100", |b| {
        b.iter(|| {
            LineChart::from_candles(black_box(&candles), viewport, SmoothingProfile::Balance)
        });
    });
}

criterion_group!(benches, bench_compose, bench_line_chart);
criterion_main!(benches);
