//! Bollinger Bands.

use charter_core::{Candle, TimeSeries};
use serde::Serialize;

use crate::indicator::{Indicator, IndicatorConfig, IndicatorOutput, PriceSource};
use crate::sma::sma_values;

/// Bollinger Bands configuration.
#[derive(Debug, Clone)]
pub struct BollingerConfig {
    /// Window length (default: 20).
    pub period: usize,
    /// Band width in standard deviations (default: 2).
    pub std_dev: f64,
    /// Price source for calculation.
    pub price_source: PriceSource,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev: 2.0,
            price_source: PriceSource::Close,
        }
    }
}

impl IndicatorConfig for BollingerConfig {}

/// Bollinger Bands output. All three series share length and start index.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BollingerOutput {
    pub upper: TimeSeries<f64>,
    pub middle: TimeSeries<f64>,
    pub lower: TimeSeries<f64>,
}

impl BollingerOutput {
    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }

    pub fn len(&self) -> usize {
        self.middle.len()
    }
}

/// Bollinger Bands indicator.
pub struct BollingerBands {
    config: BollingerConfig,
}

impl Indicator for BollingerBands {
    type Config = BollingerConfig;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn calculate(&self, candles: &[Candle]) -> IndicatorOutput {
        let values = self.config.price_source.extract_all(candles);
        IndicatorOutput::Bands(bands_from(&values, self.config.period, self.config.std_dev))
    }

    fn min_periods(&self) -> usize {
        self.config.period
    }

    fn is_overlay(&self) -> bool {
        true
    }

    fn label(&self) -> String {
        format!("BB({},{})", self.config.period, self.config.std_dev)
    }
}

/// Bollinger Bands over candle closes.
///
/// `middle` is the SMA; each band sits `std_dev` population standard
/// deviations of the same window away from it.
pub fn bollinger_bands(candles: &[Candle], period: usize, std_dev: f64) -> BollingerOutput {
    let closes = PriceSource::Close.extract_all(candles);
    bands_from(&closes, period, std_dev)
}

fn bands_from(values: &[f64], period: usize, std_dev: f64) -> BollingerOutput {
    let middle = sma_values(values, period);
    if middle.is_empty() {
        return BollingerOutput::default();
    }

    let mut upper = Vec::with_capacity(middle.len());
    let mut lower = Vec::with_capacity(middle.len());

    for (window, &mean) in values.windows(period).zip(&middle) {
        let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
        let sigma = variance.sqrt();
        upper.push(mean + std_dev * sigma);
        lower.push(mean - std_dev * sigma);
    }

    let start = period - 1;
    BollingerOutput {
        upper: TimeSeries::from_values(&upper, start),
        middle: TimeSeries::from_values(&middle, start),
        lower: TimeSeries::from_values(&lower, start),
    }
}
