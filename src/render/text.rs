//! Free-standing text labels

use glam::DVec2;

use super::primitive::{Primitive, TextMark};
use crate::canvas::Canvas;

/// Append a text label at a canvas position. The content is used verbatim.
pub fn add_text<C: Canvas>(
    canvas: &mut C,
    position: DVec2,
    content: &str,
    font_size: f64,
    color: &str,
) -> C::Element {
    let root = canvas.root();
    Primitive::from(TextMark::new(position, content, font_size).with_fill(color)).emit(canvas, root)
}
