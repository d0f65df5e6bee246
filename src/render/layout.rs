//! Chart layout configuration

use glam::{DVec2, dvec2};

use super::defaults;
use crate::errors::{ChartError, Result};
use crate::types::{Axis, Steps};

/// Where the chart sits on the canvas and how its furniture is styled.
///
/// The data origin `(0, 0)` maps to `(origin_x, baseline_y)`. The x-axis
/// line runs from `origin_x - margin_left` to `width - margin_right`; the
/// y-axis line runs from `margin_top` down to `baseline_y`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub origin_x: f64,
    pub baseline_y: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    /// Length of tick marks, pointing away from the plot
    pub tick_length: f64,
    /// Distance from the baseline to x tick labels
    pub x_label_offset: f64,
    /// Horizontal position of y tick labels
    pub y_label_x: f64,
    pub label_font_size: f64,
    pub axis_stroke_width: f64,
    pub axis_stroke: String,
    pub region_fill: String,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: defaults::WIDTH,
            height: defaults::HEIGHT,
            origin_x: defaults::ORIGIN_X,
            baseline_y: defaults::BASELINE_Y,
            margin_left: defaults::MARGIN_LEFT,
            margin_right: defaults::MARGIN_RIGHT,
            margin_top: defaults::MARGIN_TOP,
            tick_length: defaults::TICK_LENGTH,
            x_label_offset: defaults::X_LABEL_OFFSET,
            y_label_x: defaults::Y_LABEL_X,
            label_font_size: defaults::LABEL_FONT_SIZE,
            axis_stroke_width: defaults::AXIS_STROKE_WIDTH,
            axis_stroke: defaults::AXIS_STROKE.to_string(),
            region_fill: defaults::REGION_FILL.to_string(),
        }
    }
}

impl ChartLayout {
    /// Canvas position of the data origin
    #[inline]
    pub fn origin(&self) -> DVec2 {
        dvec2(self.origin_x, self.baseline_y)
    }

    /// Endpoints of the x-axis line
    pub fn x_axis(&self) -> (DVec2, DVec2) {
        (
            dvec2(self.origin_x - self.margin_left, self.baseline_y),
            dvec2(self.width - self.margin_right, self.baseline_y),
        )
    }

    /// Endpoints of the y-axis line (top first)
    pub fn y_axis(&self) -> (DVec2, DVec2) {
        (
            dvec2(self.origin_x, self.margin_top),
            dvec2(self.origin_x, self.baseline_y),
        )
    }

    /// Pixels available from the origin to the end of each axis
    pub fn plot_extent(&self) -> DVec2 {
        dvec2(
            self.width - self.margin_right - self.origin_x,
            self.baseline_y - self.margin_top,
        )
    }
}

impl Steps {
    /// Steps that stretch `[0, x_max] × [0, y_max]` over the full axis lines
    pub fn fit(layout: &ChartLayout, x_max: f64, y_max: f64) -> Result<Steps> {
        let extent = layout.plot_extent();
        let x = fit_axis(Axis::X, extent.x, x_max)?;
        let y = fit_axis(Axis::Y, extent.y, y_max)?;
        Steps::new(x, y)
    }
}

fn fit_axis(axis: Axis, pixels: f64, max: f64) -> Result<f64> {
    super::axes::check_extent(axis, max)?;
    if max == 0.0 {
        return Err(ChartError::EmptyExtent { axis });
    }
    Ok(pixels / max)
}
