//! Simple moving average.

use charter_core::{Candle, TimeSeries};

use crate::indicator::{Indicator, IndicatorConfig, IndicatorOutput, PriceSource};

/// SMA configuration.
#[derive(Debug, Clone)]
pub struct SmaConfig {
    /// Window length (default: 20).
    pub period: usize,
    /// Price source for calculation.
    pub price_source: PriceSource,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self {
            period: 20,
            price_source: PriceSource::Close,
        }
    }
}

impl IndicatorConfig for SmaConfig {}

/// Simple moving average indicator.
pub struct Sma {
    config: SmaConfig,
}

impl Indicator for Sma {
    type Config = SmaConfig;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn calculate(&self, candles: &[Candle]) -> IndicatorOutput {
        let values = self.config.price_source.extract_all(candles);
        IndicatorOutput::Line(series_from(&values, self.config.period))
    }

    fn min_periods(&self) -> usize {
        self.config.period
    }

    fn is_overlay(&self) -> bool {
        true
    }

    fn label(&self) -> String {
        format!("SMA({})", self.config.period)
    }
}

/// Simple moving average of candle closes.
///
/// Output length is `candles.len() - period + 1`, starting at candle index
/// `period - 1`; empty when `period` is zero or longer than the input.
pub fn sma(candles: &[Candle], period: usize) -> TimeSeries<f64> {
    let closes = PriceSource::Close.extract_all(candles);
    series_from(&closes, period)
}

fn series_from(values: &[f64], period: usize) -> TimeSeries<f64> {
    let means = sma_values(values, period);
    if means.is_empty() {
        return TimeSeries::new();
    }
    TimeSeries::from_values(&means, period - 1)
}

/// Mean of each trailing `period` window of `values`.
pub(crate) fn sma_values(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    values
        .windows(period)
        .map(|window| window.iter().sum::<f64>() / period as f64)
        .collect()
}
