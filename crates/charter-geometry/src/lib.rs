//! Curve geometry for charter.
//!
//! Turns numeric series into renderable 2D primitives:
//!
//! - [`Viewport`] and [`PriceScale`] describe the plot area and the
//!   value-to-pixel mapping
//! - [`project`] maps a series onto its own scale, [`project_onto`] onto a
//!   shared one
//! - [`smooth_path`] synthesizes a cubic Bezier curve through projected
//!   points, [`area_path`] closes it into a fillable region
//! - [`nearest_point`] resolves touch positions back to series values
//!
//! Plot space follows screen conventions: the origin is the top-left corner
//! and Y grows downward, so larger values map to smaller Y.

pub mod path;
pub mod point;
pub mod project;
pub mod smooth;
pub mod viewport;

pub use hit_test::{nearest_point, HitResult};
pub use path::{Path, PathCommand};
pub use point::PlotPoint;
pub use project::{project, project_onto};
pub use smooth::{area_path, polyline, smooth_path, SmoothingProfile};
pub use viewport::{PriceScale, Viewport, MIN_RANGE};
