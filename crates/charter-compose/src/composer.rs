//! Candlestick chart composition.

use charter_config::{ChartConfig, Config, IndicatorSettings, IndicatorsConfig};
use charter_core::{round2, Candle, TimeSeries, Timeframe};
use charter_geometry::{polyline, project_onto, PriceScale, Viewport};
use charter_indicators::{
    bollinger_bands, ema, sma, Indicator, IndicatorOutput, PriceSource, Sma, SmaConfig,
};

use crate::format::{format_percent, format_price, format_volume};
use crate::layers::{
    CandleShape, ChartLayers, CurrentPriceLine, GridLine, Marker, Overlay, OverlayKind, Palette,
    PriceChange, Rect, Segment, Tone, VolumeAverage, VolumeBar, VolumePanel,
};
use crate::time_axis::time_labels;
use crate::{MARKER_RADIUS, MIN_BODY_HEIGHT};

/// Which overlays to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorToggles {
    pub sma: bool,
    pub ema: bool,
    pub bollinger: bool,
}

impl IndicatorToggles {
    pub fn all() -> Self {
        Self {
            sma: true,
            ema: true,
            bollinger: true,
        }
    }
}

impl From<&IndicatorSettings> for IndicatorToggles {
    fn from(settings: &IndicatorSettings) -> Self {
        Self {
            sma: settings.show_sma,
            ema: settings.show_ema,
            bollinger: settings.show_bollinger,
        }
    }
}

/// Builds [`ChartLayers`] from a candle series.
///
/// The composer holds only layout and indicator parameters. Each call to
/// [`compose`](Self::compose) is an independent computation; callers re-invoke
/// it whenever the series, timeframe or toggles change.
#[derive(Debug, Clone, Default)]
pub struct ChartComposer {
    chart: ChartConfig,
    indicators: IndicatorsConfig,
}

/// Horizontal layout of the candle slots.
struct SlotLayout {
    left: f64,
    slot: f64,
}

impl SlotLayout {
    fn new(viewport: &Viewport, count: usize) -> Self {
        Self {
            left: viewport.padding_x,
            slot: viewport.inner_width() / count.max(1) as f64,
        }
    }

    fn center(&self, index: usize) -> f64 {
        self.left + self.slot * (index as f64 + 0.5)
    }
}

impl ChartComposer {
    pub fn new(chart: ChartConfig, indicators: IndicatorsConfig) -> Self {
        Self { chart, indicators }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.chart.clone(), config.indicators.clone())
    }

    /// Indicator parameters in effect for `timeframe`.
    pub fn settings_for(&self, timeframe: Timeframe) -> IndicatorSettings {
        self.indicators.for_timeframe(timeframe.label())
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(
            self.chart.width,
            self.chart.height,
            self.chart.padding_x,
            self.chart.padding_y,
        )
    }

    /// Compose every layer of the chart.
    ///
    /// Returns `None` for an empty series: there is nothing to draw, and no
    /// partial layers are produced. A single candle still yields a full set
    /// of layers, with indicator overlays simply absent.
    pub fn compose(
        &self,
        candles: &[Candle],
        timeframe: Timeframe,
        toggles: IndicatorToggles,
    ) -> Option<ChartLayers> {
        let last = candles.last()?;
        let first = candles.first()?;

        let scale = PriceScale::from_values(candles.iter().flat_map(|c| [c.high, c.low]))?
            .padded(self.chart.price_padding_ratio);
        log::trace!(
            "price scale {:.4}..{:.4} for {} candles",
            scale.min,
            scale.max,
            candles.len()
        );

        let viewport = self.viewport();
        let slots = SlotLayout::new(&viewport, candles.len());
        let settings = self.settings_for(timeframe);

        let overlays = self.overlays(candles, &settings, toggles, &scale, &viewport, &slots);
        log::debug!(
            "composed {} {} candles with {} overlays",
            candles.len(),
            timeframe,
            overlays.len()
        );

        Some(ChartLayers {
            timeframe,
            width: self.chart.width,
            height: self.chart.height + self.chart.volume_height,
            price_scale: scale,
            palette: Palette {
                up: self.chart.up_color.clone(),
                down: self.chart.down_color.clone(),
            },
            grid: self.grid(&scale, &viewport),
            time_labels: time_labels(candles, timeframe, self.chart.time_labels, |i| {
                round2(slots.center(i))
            }),
            candles: self.candles(candles, &scale, &viewport, &slots),
            overlays,
            current_price: self.current_price(last, candles.len() - 1, &scale, &viewport, &slots),
            volume: self.volume_panel(candles, &settings, &slots),
            change: price_change(first.open, last.close),
        })
    }

    fn grid(&self, scale: &PriceScale, viewport: &Viewport) -> Vec<GridLine> {
        scale
            .levels(self.chart.grid_levels)
            .into_iter()
            .map(|price| GridLine {
                y: round2(scale.y_for(price, viewport)),
                price: round2(price),
                label: format_price(price),
            })
            .collect()
    }

    fn candles(
        &self,
        candles: &[Candle],
        scale: &PriceScale,
        viewport: &Viewport,
        slots: &SlotLayout,
    ) -> Vec<CandleShape> {
        let body_width = slots.slot * self.chart.body_width_ratio;

        candles
            .iter()
            .enumerate()
            .map(|(index, candle)| {
                let x = slots.center(index);
                let body_top = scale.y_for(candle.body_top(), viewport);
                let body_bottom = scale.y_for(candle.body_bottom(), viewport);

                CandleShape {
                    index,
                    timestamp: candle.timestamp,
                    x: round2(x),
                    wick: Segment {
                        x1: round2(x),
                        y1: round2(scale.y_for(candle.high, viewport)),
                        x2: round2(x),
                        y2: round2(scale.y_for(candle.low, viewport)),
                    },
                    body: Rect {
                        x: round2(x - body_width / 2.0),
                        y: round2(body_top),
                        width: round2(body_width),
                        height: round2((body_bottom - body_top).max(MIN_BODY_HEIGHT)),
                    },
                    tone: Tone::from(candle),
                }
            })
            .collect()
    }

    fn overlays(
        &self,
        candles: &[Candle],
        settings: &IndicatorSettings,
        toggles: IndicatorToggles,
        scale: &PriceScale,
        viewport: &Viewport,
        slots: &SlotLayout,
    ) -> Vec<Overlay> {
        let mut lines: Vec<(OverlayKind, String, TimeSeries<f64>)> = Vec::new();

        if toggles.sma {
            let period = settings.sma_period;
            lines.push((OverlayKind::Sma, format!("SMA({period})"), sma(candles, period)));
        }
        if toggles.ema {
            let period = settings.ema_period;
            lines.push((OverlayKind::Ema, format!("EMA({period})"), ema(candles, period)));
        }
        if toggles.bollinger {
            let period = settings.bollinger_period;
            let std_dev = settings.bollinger_std_dev;
            let bands = bollinger_bands(candles, period, std_dev);
            let label = format!("BB({period},{std_dev})");
            lines.push((OverlayKind::BollingerUpper, format!("{label} Upper"), bands.upper));
            lines.push((OverlayKind::BollingerLower, format!("{label} Lower"), bands.lower));
        }

        lines
            .into_iter()
            .filter_map(|(kind, label, series)| {
                let last_value = *series.last()?;
                let points = project_onto(
                    series.iter().map(|(i, v)| (slots.center(i), *v)),
                    scale,
                    viewport,
                );
                let path = polyline(&points);
                if path.is_empty() {
                    return None;
                }
                Some(Overlay {
                    kind,
                    label,
                    points,
                    path,
                    last_value: round2(last_value),
                })
            })
            .collect()
    }

    fn current_price(
        &self,
        last: &Candle,
        last_index: usize,
        scale: &PriceScale,
        viewport: &Viewport,
        slots: &SlotLayout,
    ) -> CurrentPriceLine {
        let y = round2(scale.y_for(last.close, viewport));

        CurrentPriceLine {
            price: last.close,
            label: format_price(last.close),
            line: Segment {
                x1: viewport.padding_x,
                y1: y,
                x2: viewport.width - viewport.padding_x,
                y2: y,
            },
            dash: self.chart.dash_pattern,
            marker: Marker {
                x: round2(slots.center(last_index)),
                y,
                radius: MARKER_RADIUS,
            },
            tone: Tone::from(last),
        }
    }

    fn volume_panel(
        &self,
        candles: &[Candle],
        settings: &IndicatorSettings,
        slots: &SlotLayout,
    ) -> VolumePanel {
        let top = self.chart.height;
        let height = self.chart.volume_height;
        let max_volume = candles.iter().map(|c| c.volume).fold(0.0, f64::max);
        let bar_width = slots.slot * self.chart.body_width_ratio;

        let bars = candles
            .iter()
            .enumerate()
            .map(|(index, candle)| {
                let bar_height = if max_volume > 0.0 {
                    candle.volume / max_volume * height
                } else {
                    0.0
                };
                VolumeBar {
                    index,
                    volume: candle.volume,
                    rect: Rect {
                        x: round2(slots.center(index) - bar_width / 2.0),
                        y: round2(top + height - bar_height),
                        width: round2(bar_width),
                        height: round2(bar_height),
                    },
                    tone: Tone::from(candle),
                }
            })
            .collect();

        let last_volume = candles.last().map(|c| c.volume).unwrap_or(0.0);

        VolumePanel {
            top,
            height,
            max_volume,
            bars,
            volume_text: format_volume(last_volume),
            average_short: volume_average(candles, settings.volume_ma_short),
            average_long: volume_average(candles, settings.volume_ma_long),
        }
    }
}

/// Mean volume of the last `period` candles.
fn volume_average(candles: &[Candle], period: usize) -> Option<VolumeAverage> {
    let indicator = Sma::new(SmaConfig {
        period,
        price_source: PriceSource::Volume,
    });
    let IndicatorOutput::Line(series) = indicator.calculate(candles) else {
        return None;
    };
    let value = *series.last()?;

    Some(VolumeAverage {
        period,
        value,
        text: format!("MA{}: {}", period, format_volume(value)),
    })
}

fn price_change(open: f64, close: f64) -> PriceChange {
    let absolute = close - open;
    let percent = if open != 0.0 {
        absolute / open * 100.0
    } else {
        0.0
    };

    PriceChange {
        absolute: round2(absolute),
        percent: round2(percent),
        text: format_percent(percent),
        tone: Tone::of(open, close),
    }
}
