//! Exponential moving average.

use charter_core::{Candle, TimeSeries};

use crate::indicator::{Indicator, IndicatorConfig, IndicatorOutput, PriceSource};

/// EMA configuration.
#[derive(Debug, Clone)]
pub struct EmaConfig {
    /// Smoothing period (default: 10).
    pub period: usize,
    /// Price source for calculation.
    pub price_source: PriceSource,
}

impl Default for EmaConfig {
    fn default() -> Self {
        Self {
            period: 10,
            price_source: PriceSource::Close,
        }
    }
}

impl IndicatorConfig for EmaConfig {}

/// Exponential moving average indicator.
pub struct Ema {
    config: EmaConfig,
}

impl Indicator for Ema {
    type Config = EmaConfig;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn calculate(&self, candles: &[Candle]) -> IndicatorOutput {
        let values = self.config.price_source.extract_all(candles);
        let ema = ema_values(&values, self.config.period);
        if ema.is_empty() {
            return IndicatorOutput::Line(TimeSeries::new());
        }
        IndicatorOutput::Line(TimeSeries::from_values(&ema, self.config.period - 1))
    }

    fn min_periods(&self) -> usize {
        self.config.period
    }

    fn is_overlay(&self) -> bool {
        true
    }

    fn label(&self) -> String {
        format!("EMA({})", self.config.period)
    }
}

/// SMA-seeded exponential moving average of candle closes.
///
/// The first value is the plain mean of the first `period` closes; each later
/// value folds in the next close with `multiplier = 2 / (period + 1)`. The
/// output therefore has the same length and alignment as [`crate::sma`].
pub fn ema(candles: &[Candle], period: usize) -> TimeSeries<f64> {
    let closes = PriceSource::Close.extract_all(candles);
    let values = ema_values(&closes, period);
    if values.is_empty() {
        return TimeSeries::new();
    }
    TimeSeries::from_values(&values, period - 1)
}

fn ema_values(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut ema_values = Vec::with_capacity(values.len() - period + 1);

    // First EMA value is SMA of first `period` values
    let seed = values[..period].iter().sum::<f64>() / period as f64;
    ema_values.push(seed);

    let mut prev = seed;
    for &value in &values[period..] {
        let next = value * multiplier + prev * (1.0 - multiplier);
        ema_values.push(next);
        prev = next;
    }

    ema_values
}
