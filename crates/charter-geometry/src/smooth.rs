//! Smooth curve synthesis through projected points.

use charter_core::round2;
use serde::{Deserialize, Serialize};

use crate::path::{Path, PathCommand};
use crate::point::PlotPoint;
use crate::viewport::Viewport;

/// Control-point tension presets.
///
/// Tension scales how far each Bezier handle reaches toward the neighbouring
/// points. Small sparklines read better with a light curve; the full-width
/// balance chart uses a rounder one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmoothingProfile {
    #[default]
    Sparkline,
    Balance,
    Custom(f64),
}

impl SmoothingProfile {
    pub const SPARKLINE_TENSION: f64 = 0.15;
    pub const BALANCE_TENSION: f64 = 0.3;

    /// The named preset with this tension, or `Custom` for any other value.
    pub fn from_tension(tension: f64) -> Self {
        if tension == Self::SPARKLINE_TENSION {
            SmoothingProfile::Sparkline
        } else if tension == Self::BALANCE_TENSION {
            SmoothingProfile::Balance
        } else {
            SmoothingProfile::Custom(tension)
        }
    }

    pub fn tension(&self) -> f64 {
        match self {
            SmoothingProfile::Sparkline => Self::SPARKLINE_TENSION,
            SmoothingProfile::Balance => Self::BALANCE_TENSION,
            SmoothingProfile::Custom(t) => *t,
        }
    }
}

/// Build a curve passing through every point.
///
/// Fewer than two points give an empty path and two points a straight line.
/// From three points on, each segment `p[i-1] -> p[i]` is a cubic Bezier whose
/// first handle follows the direction `p[i-2] -> p[i]` out of `p[i-1]` and
/// whose second handle follows `p[i-1] -> p[i+1]` back into `p[i]`, both scaled
/// by the profile's tension. At the ends a missing neighbour is replaced by the
/// endpoint itself. Neighbouring segments therefore share a tangent at each
/// joint.
pub fn smooth_path(points: &[PlotPoint], profile: SmoothingProfile) -> Path {
    match points {
        [] | [_] => Path::new(),
        [a, b] => Path::from_commands(vec![
            PathCommand::MoveTo(a.x, a.y),
            PathCommand::LineTo(b.x, b.y),
        ]),
        _ => {
            let tension = profile.tension();
            let mut commands = Vec::with_capacity(points.len());
            commands.push(PathCommand::MoveTo(points[0].x, points[0].y));

            for i in 1..points.len() {
                let current = points[i];
                let prev = points[i - 1];
                let prev_prev = if i >= 2 { points[i - 2] } else { prev };
                let next = points.get(i + 1).copied().unwrap_or(current);

                let ctrl1 = control_point(prev, prev_prev, current, tension, false);
                let ctrl2 = control_point(current, prev, next, tension, true);

                commands.push(PathCommand::CubicTo {
                    ctrl1,
                    ctrl2,
                    to: (current.x, current.y),
                });
            }

            Path::from_commands(commands)
        }
    }
}

/// Handle for `current` along the line from `previous` to `next`.
///
/// `reverse` points the handle backwards, for the incoming side of a segment.
fn control_point(
    current: PlotPoint,
    previous: PlotPoint,
    next: PlotPoint,
    tension: f64,
    reverse: bool,
) -> (f64, f64) {
    let sign = if reverse { -1.0 } else { 1.0 };
    let dx = (next.x - previous.x) * tension * sign;
    let dy = (next.y - previous.y) * tension * sign;
    (round2(current.x + dx), round2(current.y + dy))
}

/// Straight segments through the points. Fewer than two points give an
/// empty path.
pub fn polyline(points: &[PlotPoint]) -> Path {
    if points.len() < 2 {
        return Path::new();
    }

    let mut commands = Vec::with_capacity(points.len());
    commands.push(PathCommand::MoveTo(points[0].x, points[0].y));
    commands.extend(points[1..].iter().map(|p| PathCommand::LineTo(p.x, p.y)));
    Path::from_commands(commands)
}

/// Close `line` into a fillable region along the bottom of the viewport.
///
/// Appends lines to the bottom-right and bottom-left corners and closes back
/// to the start. An empty line gives an empty region.
pub fn area_path(line: &Path, viewport: &Viewport) -> Path {
    if line.is_empty() {
        return Path::new();
    }

    line.extended([
        PathCommand::LineTo(viewport.width, viewport.height),
        PathCommand::LineTo(0.0, viewport.height),
        PathCommand::Close,
    ])
}
