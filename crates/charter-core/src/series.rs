//! TimeSeries container for indicator output.

use serde::Serialize;

/// A candle-indexed series of values, typically used for indicator output.
///
/// Indicators produce fewer values than there are candles; the series keeps
/// the offset of its first value so it stays aligned to the tail of the
/// source candle sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries<T> {
    /// The values in the series, aligned with candle indices.
    values: Vec<Option<T>>,
    /// Starting index (offset from the first candle).
    start_index: usize,
}

impl<T> TimeSeries<T> {
    /// Creates a new empty TimeSeries.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            start_index: 0,
        }
    }

    /// Creates a TimeSeries with the given values starting at the specified index.
    pub fn with_offset(values: Vec<Option<T>>, start_index: usize) -> Self {
        Self {
            values,
            start_index,
        }
    }

    /// Returns the starting index of this series.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Returns the number of values in this series.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this series is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Gets the value at the given candle index, if available.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.start_index {
            return None;
        }
        let local_idx = index - self.start_index;
        self.values.get(local_idx).and_then(|v| v.as_ref())
    }

    /// Value at the newest candle, if the series reaches it.
    pub fn last(&self) -> Option<&T> {
        self.values.last().and_then(|v| v.as_ref())
    }

    /// Present values paired with the candle index they belong to.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_ref().map(|val| (self.start_index + i, val)))
    }
}

impl<T> Default for TimeSeries<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> TimeSeries<T> {
    /// Creates a TimeSeries from a slice of values, all present.
    pub fn from_values(values: &[T], start_index: usize) -> Self {
        Self::with_offset(values.iter().cloned().map(Some).collect(), start_index)
    }

    /// Collects the present values in order, dropping gaps.
    pub fn to_vec(&self) -> Vec<T> {
        self.values.iter().flatten().cloned().collect()
    }
}
