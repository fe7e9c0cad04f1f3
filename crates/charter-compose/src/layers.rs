//! Drawable layer types.
//!
//! Everything here is in pixel space with the origin at the top-left of the
//! price panel. The volume panel sits directly below it.

use charter_core::{Candle, Timeframe};
use charter_geometry::{Path, PlotPoint, PriceScale};
use serde::Serialize;

/// Colour tag for direction-coloured shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Up,
    Down,
}

impl Tone {
    /// Up when the close is strictly above the open.
    pub fn of(open: f64, close: f64) -> Self {
        if close > open {
            Tone::Up
        } else {
            Tone::Down
        }
    }
}

impl From<&Candle> for Tone {
    fn from(candle: &Candle) -> Self {
        if candle.is_up() {
            Tone::Up
        } else {
            Tone::Down
        }
    }
}

/// Concrete colours for the two tones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub up: String,
    pub down: String,
}

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// An axis-aligned rectangle given by its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Horizontal grid line at a labelled price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLine {
    pub y: f64,
    pub price: f64,
    pub label: String,
}

/// Time axis label under a candle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeLabel {
    pub x: f64,
    pub timestamp: i64,
    pub text: String,
}

/// Wick and body of one candle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandleShape {
    pub index: usize,
    pub timestamp: i64,
    /// Horizontal centre of the candle slot.
    pub x: f64,
    /// High to low.
    pub wick: Segment,
    /// Open to close.
    pub body: Rect,
    pub tone: Tone,
}

/// Which indicator line an overlay draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    Sma,
    Ema,
    BollingerUpper,
    BollingerLower,
}

/// An indicator line drawn over the candles on the candle price scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub kind: OverlayKind,
    pub label: String,
    pub points: Vec<PlotPoint>,
    pub path: Path,
    /// Most recent indicator value, for the legend.
    pub last_value: f64,
}

/// Dot at the last close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Dashed reference line at the last close.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentPriceLine {
    pub price: f64,
    pub label: String,
    pub line: Segment,
    /// Dash and gap lengths.
    pub dash: [f64; 2],
    pub marker: Marker,
    pub tone: Tone,
}

/// One bar of the volume panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeBar {
    pub index: usize,
    pub volume: f64,
    pub rect: Rect,
    pub tone: Tone,
}

/// Trailing mean of the most recent volumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeAverage {
    pub period: usize,
    pub value: f64,
    pub text: String,
}

/// Volume bars plus the textual legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumePanel {
    pub top: f64,
    pub height: f64,
    pub max_volume: f64,
    pub bars: Vec<VolumeBar>,
    /// Volume of the last candle.
    pub volume_text: String,
    /// `None` when there are fewer candles than the window.
    pub average_short: Option<VolumeAverage>,
    pub average_long: Option<VolumeAverage>,
}

/// Change from the first open to the last close.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceChange {
    pub absolute: f64,
    pub percent: f64,
    /// Signed percentage for header rows, e.g. `+2.50%`.
    pub text: String,
    pub tone: Tone,
}

/// Everything needed to draw a candlestick chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayers {
    pub timeframe: Timeframe,
    pub width: f64,
    pub height: f64,
    /// Padded price range the candle panel is drawn against.
    pub price_scale: PriceScale,
    pub palette: Palette,
    pub grid: Vec<GridLine>,
    pub time_labels: Vec<TimeLabel>,
    pub candles: Vec<CandleShape>,
    pub overlays: Vec<Overlay>,
    pub current_price: CurrentPriceLine,
    pub volume: VolumePanel,
    pub change: PriceChange,
}

impl ChartLayers {
    /// Overlay of the given kind, if it was produced.
    pub fn overlay(&self, kind: OverlayKind) -> Option<&Overlay> {
        self.overlays.iter().find(|o| o.kind == kind)
    }
}
