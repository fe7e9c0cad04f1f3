//! Candle series sources for charter.
//!
//! There is no market feed behind the engine; charts are driven by synthetic
//! random-walk candles generated from a seed price.

pub mod error;
pub mod source;
pub mod synthetic;
pub mod validation;

pub use error::DataError;
pub use source::{DataSource, SyntheticSource};
pub use synthetic::{generate, generate_at, VOLATILITY_RATIO};
pub use validation::{validate_candle, validate_series};
