//! Indicators over generated candle series.

use charter_core::{Candle, Timeframe};
use charter_data::generate_at;
use charter_indicators::{bollinger_bands, ema, sma};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const NOW: i64 = 1_700_000_000_000;

fn generated(count: usize, seed: u64) -> Vec<Candle> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_at(100.0, Timeframe::Hour1, count, NOW, &mut rng).unwrap()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[test]
fn test_sma_over_fifty_hourly_candles() {
    let candles = generated(50, 2024);
    let output = sma(&candles, 5);

    assert_eq!(output.len(), 46);
    assert_eq!(output.start_index(), 4);

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let first = *output.get(4).unwrap();
    let last = *output.get(49).unwrap();
    assert!((first - mean(&closes[0..5])).abs() < 1e-9);
    assert!((last - mean(&closes[45..50])).abs() < 1e-9);
}

#[test]
fn test_ema_and_bollinger_align_with_sma() {
    let candles = generated(60, 7);

    let sma = sma(&candles, 20);
    let ema = ema(&candles, 20);
    let bands = bollinger_bands(&candles, 20, 2.0);

    assert_eq!(ema.len(), sma.len());
    assert_eq!(ema.start_index(), sma.start_index());
    assert_eq!(bands.middle, sma);
    assert_eq!(ema.get(19), sma.get(19));
}

#[test]
fn test_flat_series() {
    let candles: Vec<Candle> = (0..30)
        .map(|i| Candle::new(i * 60_000, 50.0, 50.5, 49.5, 50.0, 1_000.0))
        .collect();
    let bands = bollinger_bands(&candles, 20, 2.0);

    assert_eq!(bands.len(), 11);
    assert_eq!(bands.upper, bands.middle);
    assert_eq!(bands.lower, bands.middle);
}

proptest! {
    #[test]
    fn sma_length_matches_window_count(
        count in 1usize..120,
        period in 1usize..40,
        seed in any::<u64>(),
    ) {
        let candles = generated(count, seed);
        let output = sma(&candles, period);
        prop_assert_eq!(output.len(), (count + 1).saturating_sub(period));
    }

    #[test]
    fn sma_period_one_is_close_series(count in 1usize..80, seed in any::<u64>()) {
        let candles = generated(count, seed);
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        prop_assert_eq!(sma(&candles, 1).to_vec(), closes);
    }

    #[test]
    fn ema_follows_recurrence(count in 2usize..100, period in 1usize..30, seed in any::<u64>()) {
        prop_assume!(period <= count);
        let candles = generated(count, seed);
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let values = ema(&candles, period).to_vec();
        let k = 2.0 / (period as f64 + 1.0);

        prop_assert!((values[0] - mean(&closes[..period])).abs() < 1e-9);
        for i in 1..values.len() {
            let expected = closes[i + period - 1] * k + values[i - 1] * (1.0 - k);
            prop_assert!((values[i] - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn bollinger_bands_are_symmetric(
        count in 1usize..100,
        period in 1usize..30,
        seed in any::<u64>(),
    ) {
        let candles = generated(count, seed);
        let bands = bollinger_bands(&candles, period, 2.0);

        prop_assert_eq!(bands.upper.len(), bands.middle.len());
        prop_assert_eq!(bands.lower.len(), bands.middle.len());
        let upper = bands.upper.to_vec();
        let middle = bands.middle.to_vec();
        let lower = bands.lower.to_vec();
        for i in 0..middle.len() {
            prop_assert!(((upper[i] - middle[i]) - (middle[i] - lower[i])).abs() < 1e-9);
        }
    }

    #[test]
    fn generated_candles_respect_envelope(
        count in 1usize..200,
        seed in any::<u64>(),
        price in 0.01f64..100_000.0,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let candles = generate_at(price, Timeframe::Min5, count, NOW, &mut rng).unwrap();
        prop_assert_eq!(candles.len(), count);
        for c in &candles {
            prop_assert!(c.high >= c.open.max(c.close));
            prop_assert!(c.low <= c.open.min(c.close));
            prop_assert!(c.volume >= 0.0);
        }
    }
}
