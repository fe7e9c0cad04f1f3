//! Chart composition for charter.
//!
//! Combines a candle series, its indicators and the curve geometry into
//! drawable layers. The output is plain data (coordinates, path strings and
//! colour tags); any rendering surface can draw it.

pub mod composer;
pub mod format;
pub mod layers;
pub mod line_chart;
pub mod time_axis;

pub use composer::{ChartComposer, IndicatorToggles};
pub use layers::{
    CandleShape, ChartLayers, CurrentPriceLine, GridLine, Marker, Overlay, OverlayKind, Palette,
    PriceChange, Rect, Segment, TimeLabel, Tone, VolumeAverage, VolumeBar, VolumePanel,
};
pub use line_chart::{LineChart, LineStyle};

/// Minimum body height in pixels, so doji candles stay visible.
pub const MIN_BODY_HEIGHT: f64 = 1.0;
/// Radius of the current price marker dot.
pub const MARKER_RADIUS: f64 = 3.0;
