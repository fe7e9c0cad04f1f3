//! Indicator framework for technical analysis.
//!
//! Every calculation is a pure function of its input candles. Outputs are
//! aligned to the tail of the input: a window of `period` candles produces
//! its first value at candle index `period - 1`.

pub mod bollinger;
pub mod ema;
pub mod indicator;
pub mod sma;

pub use bollinger::{bollinger_bands, BollingerBands, BollingerConfig, BollingerOutput};
pub use ema::{ema, Ema, EmaConfig};
pub use indicator::{Indicator, IndicatorConfig, IndicatorOutput, PriceSource};
pub use sma::{sma, Sma, SmaConfig};
