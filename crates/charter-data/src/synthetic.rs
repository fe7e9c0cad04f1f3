//! Random-walk OHLCV candle generation.

use charter_core::{round2, round_to, Candle, Timeframe};
use rand::Rng;

use crate::error::DataError;

/// Per-candle volatility as a fraction of the seed price.
pub const VOLATILITY_RATIO: f64 = 0.02;

const BASE_VOLUME: f64 = 500_000.0;
const VOLUME_SPREAD: f64 = 1_000_000.0;

/// Generate `count` candles ending at the current wall-clock time.
pub fn generate<R: Rng + ?Sized>(
    seed_price: f64,
    timeframe: Timeframe,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Candle>, DataError> {
    let now_ms = chrono::Utc::now().timestamp_millis();
    generate_at(seed_price, timeframe, count, now_ms, rng)
}

/// Generate `count` candles, oldest first, the newest stamped one interval
/// before `now_ms`.
///
/// Volatility is fixed at 2% of the seed price for the whole run; it is not
/// recomputed from the walking price. Prices are rounded to two decimals and
/// volume to an integer, and the next candle opens at the rounded close.
pub fn generate_at<R: Rng + ?Sized>(
    seed_price: f64,
    timeframe: Timeframe,
    count: usize,
    now_ms: i64,
    rng: &mut R,
) -> Result<Vec<Candle>, DataError> {
    if !(seed_price.is_finite() && seed_price > 0.0) {
        log::warn!("rejecting series generation with seed price {}", seed_price);
        return Err(DataError::NonPositiveSeedPrice(seed_price));
    }
    if count == 0 {
        log::warn!("rejecting series generation with zero candles");
        return Err(DataError::ZeroCount);
    }

    let volatility = seed_price * VOLATILITY_RATIO;
    let interval = timeframe.duration_ms();
    let mut current_price = seed_price;
    let mut candles = Vec::with_capacity(count);

    for i in 0..count {
        let change = (rng.gen::<f64>() - 0.5) * volatility;
        let open = current_price;
        let close = open + change;
        let high = open.max(close) + rng.gen::<f64>() * volatility * 0.5;
        let low = open.min(close) - rng.gen::<f64>() * volatility * 0.5;
        let volume = rng.gen::<f64>() * VOLUME_SPREAD + BASE_VOLUME;
        let timestamp = now_ms - (count - i) as i64 * interval;

        let candle = Candle::new(
            timestamp,
            round2(open),
            round2(high),
            round2(low),
            round2(close),
            round_to(volume, 0),
        );
        current_price = candle.close;
        candles.push(candle);
    }

    log::trace!(
        "generated {} {} candles from seed price {}",
        candles.len(),
        timeframe,
        seed_price
    );

    Ok(candles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const NOW: i64 = 1_700_000_000_000;

    fn series(count: usize, seed: u64) -> Vec<Candle> {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_at(100.0, Timeframe::Hour1, count, NOW, &mut rng).unwrap()
    }

    #[test]
    fn test_envelope_invariant() {
        for candle in series(500, 42) {
            assert!(candle.high >= candle.open.max(candle.close), "{:?}", candle);
            assert!(candle.low <= candle.open.min(candle.close), "{:?}", candle);
        }
    }

    #[test]
    fn test_timestamps_spaced_by_timeframe() {
        let candles = series(50, 1);
        assert_eq!(candles.len(), 50);
        assert_eq!(candles[0].timestamp, NOW - 50 * 3_600_000);
        assert_eq!(candles[49].timestamp, NOW - 3_600_000);
        for pair in candles.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, 3_600_000);
        }
    }

    #[test]
    fn test_walk_continues_from_previous_close() {
        let candles = series(20, 3);
        assert_eq!(candles[0].open, 100.0);
        for pair in candles.windows(2) {
            assert_eq!(pair[1].open, pair[0].close);
        }
    }

    #[test]
    fn test_rounding_and_volume_range() {
        for candle in series(100, 9) {
            for price in [candle.open, candle.high, candle.low, candle.close] {
                assert!((price * 100.0 - (price * 100.0).round()).abs() < 1e-6);
            }
            assert_eq!(candle.volume, candle.volume.round());
            assert!(candle.volume >= BASE_VOLUME);
            assert!(candle.volume <= BASE_VOLUME + VOLUME_SPREAD);
        }
    }

    #[test]
    fn test_change_bounded_by_seed_volatility() {
        // Half of 2% of the seed, plus rounding slack.
        for candle in series(200, 11) {
            assert!((candle.close - candle.open).abs() <= 1.0 + 0.01);
        }
    }

    #[test]
    fn test_deterministic_with_seeded_rng() {
        assert_eq!(series(40, 5), series(40, 5));
    }

    #[test]
    fn test_invalid_arguments() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_at(0.0, Timeframe::Min1, 10, NOW, &mut rng),
            Err(DataError::NonPositiveSeedPrice(0.0))
        );
        assert!(matches!(
            generate_at(f64::NAN, Timeframe::Min1, 10, NOW, &mut rng),
            Err(DataError::NonPositiveSeedPrice(_))
        ));
        assert_eq!(
            generate_at(10.0, Timeframe::Min1, 0, NOW, &mut rng),
            Err(DataError::ZeroCount)
        );
    }

    #[test]
    fn test_generate_uses_wall_clock() {
        let mut rng = StdRng::seed_from_u64(2);
        let before = chrono::Utc::now().timestamp_millis();
        let candles = generate(100.0, Timeframe::Min5, 3, &mut rng).unwrap();
        let after = chrono::Utc::now().timestamp_millis();

        let last = candles[2].timestamp + Timeframe::Min5.duration_ms();
        assert!(last >= before && last <= after);
    }
}
