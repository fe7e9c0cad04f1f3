//! Core indicator traits and types.

use charter_core::{Candle, TimeSeries};
use serde::{Deserialize, Serialize};

use crate::bollinger::BollingerOutput;

/// Trait for indicator configuration.
pub trait IndicatorConfig: Clone + Default {}

/// Which candle field to use for indicator calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    Open,
    High,
    Low,
    #[default]
    Close,
    /// (High + Low) / 2
    HL2,
    /// (High + Low + Close) / 3
    HLC3,
    /// (Open + High + Low + Close) / 4
    OHLC4,
    /// Traded volume rather than a price, for volume moving averages.
    Volume,
}

impl PriceSource {
    /// Extract the value from a candle based on this source.
    pub fn extract(&self, candle: &Candle) -> f64 {
        match self {
            PriceSource::Open => candle.open,
            PriceSource::High => candle.high,
            PriceSource::Low => candle.low,
            PriceSource::Close => candle.close,
            PriceSource::HL2 => (candle.high + candle.low) / 2.0,
            PriceSource::HLC3 => (candle.high + candle.low + candle.close) / 3.0,
            PriceSource::OHLC4 => (candle.open + candle.high + candle.low + candle.close) / 4.0,
            PriceSource::Volume => candle.volume,
        }
    }

    /// Extract this source from every candle.
    pub fn extract_all(&self, candles: &[Candle]) -> Vec<f64> {
        candles.iter().map(|c| self.extract(c)).collect()
    }
}

/// Output from an indicator calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorOutput {
    /// Single line output (SMA, EMA).
    Line(TimeSeries<f64>),
    /// Upper, middle and lower bands sharing one alignment (Bollinger Bands).
    Bands(BollingerOutput),
}

impl IndicatorOutput {
    /// True when the indicator had too few candles to produce anything.
    pub fn is_empty(&self) -> bool {
        match self {
            IndicatorOutput::Line(series) => series.is_empty(),
            IndicatorOutput::Bands(bands) => bands.is_empty(),
        }
    }
}

/// Trait for technical indicators.
pub trait Indicator {
    /// The configuration type for this indicator.
    type Config: IndicatorConfig;

    /// Create a new indicator with the given configuration.
    fn new(config: Self::Config) -> Self;

    /// Calculate the indicator values for the given candles.
    fn calculate(&self, candles: &[Candle]) -> IndicatorOutput;

    /// Minimum number of candles required before the indicator produces output.
    fn min_periods(&self) -> usize;

    /// Whether this indicator should be overlaid on the price chart (true)
    /// or displayed in a separate pane (false).
    fn is_overlay(&self) -> bool;

    /// Human-readable label of the indicator, including its parameters.
    fn label(&self) -> String;
}
