//! Plot area and value-to-pixel scale.

use serde::{Deserialize, Serialize};

/// Smallest value range a scale will divide by.
///
/// Flat series would otherwise divide by zero; with this floor they plot as a
/// horizontal line along the bottom of the inner area.
pub const MIN_RANGE: f64 = 1.0;

/// Pixel dimensions of a plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding_x: f64,
    pub padding_y: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64, padding_x: f64, padding_y: f64) -> Self {
        Self {
            width,
            height,
            padding_x,
            padding_y,
        }
    }

    /// Viewport without padding.
    #[must_use]
    pub const fn unpadded(width: f64, height: f64) -> Self {
        Self::new(width, height, 0.0, 0.0)
    }

    /// Drawable width between the horizontal paddings.
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        (self.width - 2.0 * self.padding_x).max(0.0)
    }

    /// Drawable height between the vertical paddings.
    #[must_use]
    pub fn inner_height(&self) -> f64 {
        (self.height - 2.0 * self.padding_y).max(0.0)
    }

    /// X coordinate of sample `index` out of `len` evenly spread samples.
    ///
    /// A single sample sits on the left edge of the inner area.
    #[must_use]
    pub fn x_at(&self, index: usize, len: usize) -> f64 {
        let denom = len.saturating_sub(1).max(1) as f64;
        (index as f64 / denom) * self.inner_width() + self.padding_x
    }
}

/// Linear mapping from a value range onto a viewport's vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScale {
    pub min: f64,
    pub max: f64,
}

impl PriceScale {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Scale spanning the finite values of `values`, `None` if there are none.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut any = false;

        for v in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
            any = true;
        }

        any.then_some(Self { min, max })
    }

    /// Widen both ends by `ratio` of the raw range (0.1 = 10% each side).
    #[must_use]
    pub fn padded(self, ratio: f64) -> Self {
        let pad = (self.max - self.min) * ratio;
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    /// Range used for division, floored at [`MIN_RANGE`].
    #[must_use]
    pub fn range(&self) -> f64 {
        (self.max - self.min).max(MIN_RANGE)
    }

    /// Y coordinate for `value`; higher values plot higher on screen.
    #[must_use]
    pub fn y_for(&self, value: f64, viewport: &Viewport) -> f64 {
        let inner = viewport.inner_height();
        inner - ((value - self.min) / self.range()) * inner + viewport.padding_y
    }

    /// `count` evenly spaced values from `max` down to `min`.
    #[must_use]
    pub fn levels(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.max],
            _ => {
                let step = (self.max - self.min) / (count - 1) as f64;
                (0..count).map(|i| self.max - step * i as f64).collect()
            }
        }
    }
}
