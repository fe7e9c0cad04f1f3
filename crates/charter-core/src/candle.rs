//! Candle data structures for OHLCV data.

use serde::{Deserialize, Serialize};

/// One OHLCV bar.
///
/// `timestamp` is milliseconds since the Unix epoch. Within a series the
/// envelope invariant `low <= min(open, close)` and `high >= max(open, close)`
/// holds for every candle the generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// True when the candle closed above its open.
    ///
    /// A doji (`close == open`) counts as down, matching the colouring rule.
    pub fn is_up(&self) -> bool {
        self.close > self.open
    }

    /// Upper edge of the body.
    pub fn body_top(&self) -> f64 {
        self.open.max(self.close)
    }

    /// Lower edge of the body.
    pub fn body_bottom(&self) -> f64 {
        self.open.min(self.close)
    }
}
