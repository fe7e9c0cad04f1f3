//! Data source trait definition.

use anyhow::Context;
use charter_core::{Candle, Timeframe};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::synthetic;
use crate::validation::validate_series;

/// Trait for types that can load candle data.
///
/// This trait uses `anyhow::Result` for flexible error handling.
pub trait DataSource {
    fn load(&self) -> anyhow::Result<Vec<Candle>>;
}

/// Random-walk candles with a fixed RNG seed.
///
/// Loading twice with the same clock yields the same prices, so a screen can
/// re-request a series after a redraw without the chart jumping.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    pub seed_price: f64,
    pub timeframe: Timeframe,
    pub count: usize,
    pub rng_seed: u64,
    /// Reference time for the newest candle. `None` reads the wall clock.
    pub now_ms: Option<i64>,
}

impl SyntheticSource {
    pub fn new(seed_price: f64, timeframe: Timeframe, count: usize, rng_seed: u64) -> Self {
        Self {
            seed_price,
            timeframe,
            count,
            rng_seed,
            now_ms: None,
        }
    }

    /// Pin the reference time of the newest candle.
    pub fn with_now(mut self, now_ms: i64) -> Self {
        self.now_ms = Some(now_ms);
        self
    }
}

impl DataSource for SyntheticSource {
    fn load(&self) -> anyhow::Result<Vec<Candle>> {
        let mut rng = StdRng::seed_from_u64(self.rng_seed);
        let now_ms = self
            .now_ms
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());

        let candles =
            synthetic::generate_at(self.seed_price, self.timeframe, self.count, now_ms, &mut rng)
                .with_context(|| {
                    format!(
                        "generating {} {} candles from {}",
                        self.count, self.timeframe, self.seed_price
                    )
                })?;

        // A long walk from a small seed can drift to zero or below.
        validate_series(&candles)
            .with_context(|| format!("walk from {} left the drawable range", self.seed_price))?;

        Ok(candles)
    }
}
