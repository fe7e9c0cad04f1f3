//! Validation utilities for candle data.

use charter_core::Candle;

use crate::error::DataError;

/// Validate a candle has reasonable values.
///
/// Checks finiteness, positive prices, non-negative volume and the OHLC
/// envelope (`low <= open, close <= high`).
pub fn validate_candle(candle: &Candle) -> bool {
    candle.open.is_finite()
        && candle.high.is_finite()
        && candle.low.is_finite()
        && candle.close.is_finite()
        && candle.volume.is_finite()
        && candle.open > 0.0
        && candle.close > 0.0
        && candle.low > 0.0
        && candle.volume >= 0.0
        && candle.low <= candle.body_bottom()
        && candle.high >= candle.body_top()
}

/// Check every candle of a series, reporting the first one that fails.
pub fn validate_series(candles: &[Candle]) -> Result<(), DataError> {
    match candles.iter().position(|c| !validate_candle(c)) {
        Some(index) => {
            log::warn!("invalid candle at index {}: {:?}", index, candles[index]);
            Err(DataError::InvalidCandle {
                index,
                timestamp: candles[index].timestamp,
            })
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_candle_valid() {
        let candle = Candle::new(1000, 100.0, 105.0, 95.0, 102.0, 1000.0);
        assert!(validate_candle(&candle));
    }

    #[test]
    fn test_validate_candle_high_below_low() {
        let candle = Candle::new(1000, 100.0, 90.0, 95.0, 102.0, 1000.0);
        assert!(!validate_candle(&candle));
    }

    #[test]
    fn test_validate_candle_body_outside_wick() {
        let candle = Candle::new(1000, 100.0, 101.0, 99.0, 103.0, 1000.0);
        assert!(!validate_candle(&candle));
    }

    #[test]
    fn test_validate_candle_nan() {
        let candle = Candle::new(1000, f64::NAN, 105.0, 95.0, 102.0, 1000.0);
        assert!(!validate_candle(&candle));
    }

    #[test]
    fn test_validate_candle_negative_volume() {
        let candle = Candle::new(1000, 100.0, 105.0, 95.0, 102.0, -1.0);
        assert!(!validate_candle(&candle));
    }

    #[test]
    fn test_validate_series_reports_first_bad_candle() {
        let candles = vec![
            Candle::new(1000, 100.0, 105.0, 95.0, 102.0, 1000.0),
            Candle::new(2000, 102.0, 103.0, 101.0, 0.0, 1000.0),
            Candle::new(3000, f64::NAN, 105.0, 95.0, 102.0, 1000.0),
        ];
        assert_eq!(
            validate_series(&candles),
            Err(DataError::InvalidCandle {
                index: 1,
                timestamp: 2000
            })
        );
        assert_eq!(validate_series(&candles[..1]), Ok(()));
        assert_eq!(validate_series(&[]), Ok(()));
    }
}
