//! Projected plot points.

use serde::{Deserialize, Serialize};

/// A projected sample: pixel coordinates plus the value it came from.
///
/// `value` is kept so touch lookups can report the original number without
/// inverting the projection.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

impl PlotPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64, value: f64) -> Self {
        Self { x, y, value }
    }
}
