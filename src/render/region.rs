//! Scope rectangle rendering

use super::geometry::region_rect;
use super::layout::ChartLayout;
use super::primitive::{Primitive, RectMark};
use crate::canvas::Canvas;
use crate::errors::{ChartError, Result};
use crate::types::{Scope, Steps};

/// Draw the scope as a filled rectangle behind whatever comes next.
///
/// A missing scope is an error and nothing is appended. An inverted scope
/// is drawn as computed (negative width or height) with a warning.
pub fn draw_region<C: Canvas>(
    canvas: &mut C,
    layout: &ChartLayout,
    steps: Steps,
    scope: Option<&Scope>,
) -> Result<C::Element> {
    let scope = scope.ok_or(ChartError::MissingScope)?;
    if scope.is_inverted() {
        crate::log::warn!(?scope, "drawing inverted scope");
    }

    let rect = region_rect(layout, steps, scope);
    crate::log::debug!(
        x = rect.x(),
        y = rect.y(),
        width = rect.width(),
        height = rect.height(),
        "draw_region"
    );

    let root = canvas.root();
    Ok(Primitive::from(RectMark::new(rect, layout.region_fill.as_str())).emit(canvas, root))
}
