//! Point markers

use super::defaults;
use super::geometry::map_to_canvas;
use super::layout::ChartLayout;
use super::primitive::{CircleMark, Primitive};
use crate::canvas::Canvas;
use crate::types::{DataPoint, Steps};

/// Look of a point marker
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill: String,
    pub stroke: Option<String>,
}

impl MarkerStyle {
    pub fn filled(fill: impl Into<String>) -> Self {
        Self {
            radius: defaults::MARKER_RADIUS,
            fill: fill.into(),
            stroke: None,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self::filled(defaults::MARKER_INSIDE_FILL)
    }
}

/// Marker primitive for a data point
pub fn point_primitive(layout: &ChartLayout, steps: Steps, point: DataPoint, style: &MarkerStyle) -> Primitive {
    CircleMark {
        center: map_to_canvas(point, steps, layout),
        radius: style.radius,
        fill: style.fill.clone(),
        stroke: style.stroke.clone(),
    }
    .into()
}

/// Append a circle marker at the canvas position of `point`
pub fn draw_point<C: Canvas>(
    canvas: &mut C,
    layout: &ChartLayout,
    steps: Steps,
    point: DataPoint,
    style: &MarkerStyle,
) -> C::Element {
    let root = canvas.root();
    point_primitive(layout, steps, point, style).emit(canvas, root)
}
