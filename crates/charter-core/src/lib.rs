//! Core types for the charter engine.
//!
//! This crate provides the fundamental value types shared by every stage of
//! the charting pipeline:
//! - `Candle` - OHLCV candle data
//! - `Timeframe` - Candle interval enumeration
//! - `TimeSeries` - Container for tail-aligned indicator output
//! - `round_to` / `round2` - Fixed-decimal rounding used for display values

pub mod candle;
pub mod round;
pub mod series;
pub mod timeframe;

pub use candle::Candle;
pub use round::{round2, round_to};
pub use series::TimeSeries;
pub use timeframe::{ParseTimeframeError, Timeframe};
