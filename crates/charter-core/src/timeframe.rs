//! Timeframe enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Timeframe enumeration for the selectable chart periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Timeframe {
    Min1,   // 1 minute
    Min5,   // 5 minutes
    Min15,  // 15 minutes
    Hour1,  // 1 hour
    Hour4,  // 4 hours
    Day1,   // 1 day
    Week1,  // 1 week
    Month1, // 1 month (30 days)
}

/// Returned when a label does not name a timeframe.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown timeframe: {0:?}")]
pub struct ParseTimeframeError(pub String);

impl Timeframe {
    /// Returns the duration of this timeframe in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        match self {
            Timeframe::Min1 => MINUTE_MS,
            Timeframe::Min5 => 5 * MINUTE_MS,
            Timeframe::Min15 => 15 * MINUTE_MS,
            Timeframe::Hour1 => HOUR_MS,
            Timeframe::Hour4 => 4 * HOUR_MS,
            Timeframe::Day1 => DAY_MS,
            Timeframe::Week1 => 7 * DAY_MS,
            Timeframe::Month1 => 30 * DAY_MS,
        }
    }

    /// Returns a short label for this timeframe.
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Min1 => "1m",
            Timeframe::Min5 => "5m",
            Timeframe::Min15 => "15m",
            Timeframe::Hour1 => "1h",
            Timeframe::Hour4 => "4h",
            Timeframe::Day1 => "1d",
            Timeframe::Week1 => "1w",
            Timeframe::Month1 => "1M",
        }
    }

    /// Returns all available timeframes in order.
    pub fn all() -> &'static [Timeframe] {
        &[
            Timeframe::Min1,
            Timeframe::Min5,
            Timeframe::Min15,
            Timeframe::Hour1,
            Timeframe::Hour4,
            Timeframe::Day1,
            Timeframe::Week1,
            Timeframe::Month1,
        ]
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Timeframe {
    type Err = ParseTimeframeError;

    // Labels are case sensitive: "1m" is a minute, "1M" a month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timeframe::all()
            .iter()
            .copied()
            .find(|tf| tf.label() == s)
            .ok_or_else(|| ParseTimeframeError(s.to_string()))
    }
}

impl TryFrom<String> for Timeframe {
    type Error = ParseTimeframeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Timeframe> for String {
    fn from(tf: Timeframe) -> Self {
        tf.label().to_string()
    }
}
