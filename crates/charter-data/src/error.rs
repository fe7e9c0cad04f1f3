//! Error types for series generation.

use thiserror::Error;

/// Series generation and validation failures.
///
/// Seed prices come from a trusted table, so invalid arguments indicate a
/// programming error in the caller rather than a recoverable condition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("seed price must be positive and finite, got {0}")]
    NonPositiveSeedPrice(f64),
    #[error("candle count must be positive")]
    ZeroCount,
    #[error("candle {index} at {timestamp} is not drawable")]
    InvalidCandle { index: usize, timestamp: i64 },
}
