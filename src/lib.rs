//! Small SVG scope charts.
//!
//! Draws two axes with integer ticks, a highlighted "scope" rectangle, point
//! markers and text labels onto any [`Canvas`], and serializes the built-in
//! [`SvgDocument`] canvas to SVG.
//!
//! ```
//! use scopechart::{Chart, DataPoint, Scope};
//!
//! let svg = Chart::fitted(7.0, 4.0)?
//!     .with_labels(true)
//!     .with_scope(Scope::new(1.0, 3.0, 0.0, 2.0)?)
//!     .with_points([DataPoint::new(2.0, 1.0)])
//!     .to_svg()?;
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), scopechart::ChartError>(())
//! ```

pub mod canvas;
pub mod chart;
pub mod errors;
pub mod log;
pub mod render;
pub mod types;

pub use canvas::{AttrValue, Canvas, ElementKind};
pub use chart::{Annotation, Chart};
pub use errors::{ChartError, Result};
pub use render::{
    AxisStats, ChartLayout, MarkerStyle, SvgDocument, add_text, draw_axes, draw_point, draw_region,
    is_inside_region, map_to_canvas, map_to_data,
};
pub use types::{Axis, CanvasRect, DataPoint, Scope, Steps};

/// Render a labelled chart with a scope and points using the default layout
/// and steps fitted to the extents.
pub fn scope_chart_svg(x_max: f64, y_max: f64, scope: Scope, points: &[DataPoint]) -> Result<String> {
    Chart::fitted(x_max, y_max)?
        .with_labels(true)
        .with_scope(scope)
        .with_points(points.iter().copied())
        .to_svg()
}
