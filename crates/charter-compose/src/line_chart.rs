//! Smoothed line charts: coin sparklines and the portfolio balance chart.

use charter_config::SmoothingConfig;
use charter_core::Candle;
use charter_geometry::{
    area_path, nearest_point, project, smooth_path, HitResult, Path, PlotPoint, SmoothingProfile,
    Viewport,
};
use serde::Serialize;

/// Line chart presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Small inline chart in market lists.
    Sparkline,
    /// Full-width interactive balance chart.
    Balance,
}

impl LineStyle {
    /// Smoothing profile for this style with the configured tension.
    ///
    /// An untouched tension maps back to the named preset.
    pub fn profile(&self, smoothing: &SmoothingConfig) -> SmoothingProfile {
        match self {
            LineStyle::Sparkline => SmoothingProfile::from_tension(smoothing.sparkline_tension),
            LineStyle::Balance => SmoothingProfile::from_tension(smoothing.balance_tension),
        }
    }
}

/// A projected series with its smoothed line and area fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub viewport: Viewport,
    pub points: Vec<PlotPoint>,
    pub line: Path,
    pub area: Path,
}

impl LineChart {
    /// Chart `values` in `viewport`.
    ///
    /// Non-finite values are dropped. Returns `None` when nothing valid
    /// remains.
    pub fn compose(values: &[f64], viewport: Viewport, profile: SmoothingProfile) -> Option<Self> {
        let points = project(values, &viewport);
        if points.is_empty() {
            return None;
        }

        let line = smooth_path(&points, profile);
        let area = area_path(&line, &viewport);
        log::trace!("line chart with {} points", points.len());

        Some(Self {
            viewport,
            points,
            line,
            area,
        })
    }

    /// Chart the closes of `candles`.
    pub fn from_candles(
        candles: &[Candle],
        viewport: Viewport,
        profile: SmoothingProfile,
    ) -> Option<Self> {
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        Self::compose(&closes, viewport, profile)
    }

    /// The sample nearest to a touch at horizontal position `x`.
    pub fn hit_test(&self, x: f64) -> Option<HitResult> {
        nearest_point(&self.points, x)
    }
}
