//! Coordinate mapping between data space and canvas space

use glam::{DVec2, dvec2};

use super::layout::ChartLayout;
use crate::types::{CanvasRect, DataPoint, Scope, Steps};

/// Map a data point to canvas pixels.
///
/// Data y grows upward, canvas y grows downward, so y is subtracted from
/// the baseline.
#[inline]
pub fn map_to_canvas(point: DataPoint, steps: Steps, layout: &ChartLayout) -> DVec2 {
    dvec2(
        layout.origin_x + point.x * steps.x,
        layout.baseline_y - point.y * steps.y,
    )
}

/// Inverse of [`map_to_canvas`]. `None` when either step is zero.
pub fn map_to_data(point: DVec2, steps: Steps, layout: &ChartLayout) -> Option<DataPoint> {
    if steps.x == 0.0 || steps.y == 0.0 {
        return None;
    }
    Some(DataPoint::new(
        (point.x - layout.origin_x) / steps.x,
        (layout.baseline_y - point.y) / steps.y,
    ))
}

/// Canvas rectangle covering a data-space scope.
///
/// The top edge comes from `max_y` because of the y inversion. An inverted
/// scope yields a negative width or height.
pub fn region_rect(layout: &ChartLayout, steps: Steps, scope: &Scope) -> CanvasRect {
    let top_left = map_to_canvas(DataPoint::new(scope.min_x, scope.max_y), steps, layout);
    CanvasRect {
        origin: top_left,
        size: dvec2(scope.width() * steps.x, scope.height() * steps.y),
    }
}

/// True iff `(point_x, point_y)` lies in the closed rectangle
/// `[rect_x, rect_x + width] × [rect_y, rect_y + height]`.
#[inline]
pub fn is_inside_region(
    point_x: f64,
    point_y: f64,
    rect_x: f64,
    rect_y: f64,
    width: f64,
    height: f64,
) -> bool {
    point_x >= rect_x
        && point_x <= rect_x + width
        && point_y >= rect_y
        && point_y <= rect_y + height
}
