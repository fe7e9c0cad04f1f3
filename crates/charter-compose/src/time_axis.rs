//! Time axis labels.

use charter_core::{Candle, Timeframe};
use chrono::DateTime;

use crate::layers::TimeLabel;

/// strftime pattern used to label candles of `timeframe`.
pub fn label_format(timeframe: Timeframe) -> &'static str {
    match timeframe {
        Timeframe::Min1 | Timeframe::Min5 | Timeframe::Min15 | Timeframe::Hour1 => "%H:%M",
        Timeframe::Hour4 | Timeframe::Day1 => "%m/%d",
        Timeframe::Week1 | Timeframe::Month1 => "%Y-%m-%d",
    }
}

/// Up to `count` labels spread evenly from the first to the last candle.
///
/// `x_of` maps a candle index to its horizontal position. Timestamps are
/// formatted in UTC.
pub fn time_labels<F>(
    candles: &[Candle],
    timeframe: Timeframe,
    count: usize,
    x_of: F,
) -> Vec<TimeLabel>
where
    F: Fn(usize) -> f64,
{
    let n = candles.len();
    let count = count.min(n);
    if count == 0 {
        return Vec::new();
    }

    let pattern = label_format(timeframe);
    let indices: Vec<usize> = if count == 1 {
        vec![n - 1]
    } else {
        (0..count).map(|i| i * (n - 1) / (count - 1)).collect()
    };

    indices
        .into_iter()
        .filter_map(|index| {
            let timestamp = candles[index].timestamp;
            let datetime = DateTime::from_timestamp_millis(timestamp)?;
            Some(TimeLabel {
                x: x_of(index),
                timestamp,
                text: datetime.format(pattern).to_string(),
            })
        })
        .collect()
}
