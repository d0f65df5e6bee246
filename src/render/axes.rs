//! Axis, tick and tick-label rendering

use glam::dvec2;

use super::layout::ChartLayout;
use super::primitive::{LineMark, Primitive, TextAnchor, TextMark, emit_all};
use super::svg::fmt_num;
use crate::canvas::Canvas;
use crate::errors::{ChartError, Result, ensure_finite};
use crate::types::{Axis, Steps};

/// How much [`draw_axes`] appended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisStats {
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub labels: usize,
}

/// An axis extent must be finite, non-negative and small enough to tick
pub(crate) fn check_extent(axis: Axis, max: f64) -> Result<f64> {
    let what = match axis {
        Axis::X => "x extent",
        Axis::Y => "y extent",
    };
    let max = ensure_finite(what, max)?;
    if max < 0.0 {
        return Err(ChartError::NegativeExtent { axis, value: max });
    }
    if max >= MAX_TICKS as f64 {
        return Err(ChartError::TooManyTicks {
            axis,
            value: max,
            limit: MAX_TICKS,
        });
    }
    Ok(max)
}

/// Most ticks a single axis may have
pub const MAX_TICKS: u64 = 10_000;

/// Integer data units `0, 1, ..` up to and including `max`
fn tick_units(max: f64) -> impl Iterator<Item = f64> {
    let last = max.floor() as u64;
    (0..=last).map(|i| i as f64)
}

/// Lay out both axes, their ticks and (optionally) tick labels.
///
/// X ticks hang below the baseline, y ticks stick out left of the origin.
/// Y labels run top-down: the `i`-th label reads `floor(y_max) - i` and sits
/// next to the tick for that value, so a fractional `y_max` has no label of
/// its own.
pub fn axis_primitives(
    layout: &ChartLayout,
    x_max: f64,
    y_max: f64,
    steps: Steps,
    labels: bool,
) -> Result<Vec<Primitive>> {
    let x_max = check_extent(Axis::X, x_max)?;
    let y_max = check_extent(Axis::Y, y_max)?;
    let steps = steps.validate()?;

    let stroke = layout.axis_stroke.as_str();
    let mut prims: Vec<Primitive> = Vec::new();

    let (x_start, x_end) = layout.x_axis();
    prims.push(LineMark::new(x_start, x_end, stroke).with_stroke_width(layout.axis_stroke_width).into());
    let (y_top, y_bottom) = layout.y_axis();
    prims.push(LineMark::new(y_top, y_bottom, stroke).with_stroke_width(layout.axis_stroke_width).into());

    for i in tick_units(x_max) {
        let x = layout.origin_x + i * steps.x;
        prims.push(
            LineMark::new(
                dvec2(x, layout.baseline_y),
                dvec2(x, layout.baseline_y + layout.tick_length),
                stroke,
            )
            .into(),
        );
        if labels {
            prims.push(
                TextMark::new(
                    dvec2(x, layout.baseline_y + layout.x_label_offset),
                    fmt_num(i),
                    layout.label_font_size,
                )
                .with_anchor(TextAnchor::Middle)
                .into(),
            );
        }
    }

    let top_unit = y_max.floor();
    for i in tick_units(y_max) {
        let y = layout.baseline_y - i * steps.y;
        prims.push(
            LineMark::new(
                dvec2(layout.origin_x, y),
                dvec2(layout.origin_x - layout.tick_length, y),
                stroke,
            )
            .into(),
        );
        if labels {
            let value = top_unit - i;
            prims.push(
                TextMark::new(
                    dvec2(layout.y_label_x, layout.baseline_y - value * steps.y),
                    fmt_num(value),
                    layout.label_font_size,
                )
                .with_anchor(TextAnchor::Middle)
                .with_middle_baseline()
                .into(),
            );
        }
    }

    Ok(prims)
}

/// Draw the axes onto the canvas root. Appends only; call on a cleared
/// canvas to redraw.
pub fn draw_axes<C: Canvas>(
    canvas: &mut C,
    layout: &ChartLayout,
    x_max: f64,
    y_max: f64,
    steps: Steps,
    labels: bool,
) -> Result<AxisStats> {
    let prims = axis_primitives(layout, x_max, y_max, steps, labels)?;

    let x_ticks = tick_units(x_max).count();
    let y_ticks = tick_units(y_max).count();
    let stats = AxisStats {
        x_ticks,
        y_ticks,
        labels: if labels { x_ticks + y_ticks } else { 0 },
    };
    crate::log::debug!(
        x_ticks = stats.x_ticks,
        y_ticks = stats.y_ticks,
        labels = stats.labels,
        "draw_axes"
    );

    emit_all(canvas, &prims);
    Ok(stats)
}
