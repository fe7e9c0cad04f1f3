//! Series projection into plot space.

use charter_core::round2;

use crate::point::PlotPoint;
use crate::viewport::{PriceScale, Viewport};

/// Project `series` onto `viewport` using the series' own min/max.
///
/// Non-finite entries are dropped first, so indices refer to the filtered
/// series. Coordinates are rounded to two decimals. An empty or all-invalid
/// input yields no points.
pub fn project(series: &[f64], viewport: &Viewport) -> Vec<PlotPoint> {
    let valid: Vec<f64> = series.iter().copied().filter(|v| v.is_finite()).collect();
    let Some(scale) = PriceScale::from_values(valid.iter().copied()) else {
        return Vec::new();
    };

    let len = valid.len();
    valid
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            PlotPoint::new(
                round2(viewport.x_at(i, len)),
                round2(scale.y_for(value, viewport)),
                value,
            )
        })
        .collect()
}

/// Project `(x, value)` samples against a shared scale.
///
/// Used for overlays that must line up with another layer: the caller
/// supplies the X positions and the scale that layer was drawn with.
/// Samples with a non-finite value are skipped.
pub fn project_onto<I>(samples: I, scale: &PriceScale, viewport: &Viewport) -> Vec<PlotPoint>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    samples
        .into_iter()
        .filter(|(_, value)| value.is_finite())
        .map(|(x, value)| PlotPoint::new(round2(x), round2(scale.y_for(value, viewport)), value))
        .collect()
}
