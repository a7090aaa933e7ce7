//! Benchmarks for the indicator engine
//!
//! Run with: cargo bench --bench indicators

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use upbit_indicators::{bollinger_bands, ema, macd, obv, rsi, sma};
use upbit_types::Candle;

/// Create N candles along a noisy trend
fn create_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let price = 50_000_000.0 + (i as f64 * 0.3).sin() * 500_000.0 + i as f64 * 1_000.0;
            let volume = 10.0 + (i % 7) as f64;
            Candle::from_price(price, volume)
        })
        .collect()
}

fn bench_moving_averages(c: &mut Criterion) {
    let mut group = c.benchmark_group("moving_average");

    for size in [200, 1000, 5000] {
        let candles = create_candles(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sma_20", size), &candles, |b, candles| {
            b.iter(|| sma(black_box(candles), black_box(20)))
        });
        group.bench_with_input(BenchmarkId::new("ema_20", size), &candles, |b, candles| {
            b.iter(|| ema(black_box(candles), black_box(20)))
        });
    }

    group.finish();
}

fn bench_oscillators(c: &mut Criterion) {
    let mut group = c.benchmark_group("oscillators");

    for size in [200, 1000, 5000] {
        let candles = create_candles(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("macd", size), &candles, |b, candles| {
            b.iter(|| macd(black_box(candles), 12, 26, 9))
        });
        group.bench_with_input(BenchmarkId::new("rsi_14", size), &candles, |b, candles| {
            b.iter(|| rsi(black_box(candles), 14))
        });
    }

    group.finish();
}

fn bench_bands_and_volume(c: &mut Criterion) {
    let mut group = c.benchmark_group("bands_and_volume");

    for size in [200, 1000, 5000] {
        let candles = create_candles(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("bollinger_20", size), &candles, |b, candles| {
            b.iter(|| bollinger_bands(black_box(candles), 20, 2.0))
        });
        group.bench_with_input(BenchmarkId::new("obv", size), &candles, |b, candles| {
            b.iter(|| obv(black_box(candles)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_moving_averages, bench_oscillators, bench_bands_and_volume);
criterion_main!(benches);
