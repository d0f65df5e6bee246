//! The drawing surface renderers append to.
//!
//! Renderers only ever create elements, set their attributes and text, and
//! append them to a parent. Anything that can do those four things can
//! receive a chart: the in-memory [`SvgDocument`](crate::render::svg::SvgDocument),
//! a DOM binding, or a recording harness in tests.

use std::fmt;

use crate::render::svg::fmt_num;

/// Kind of element a canvas can create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Svg,
    Group,
    Line,
    Rect,
    Circle,
    Text,
}

impl ElementKind {
    /// SVG tag name for this kind
    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Svg => "svg",
            ElementKind::Group => "g",
            ElementKind::Line => "line",
            ElementKind::Rect => "rect",
            ElementKind::Circle => "circle",
            ElementKind::Text => "text",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Attribute value: numbers are kept as numbers until serialization
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Number(f64),
    Str(String),
}

impl AttrValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            AttrValue::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            AttrValue::Number(_) => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Number(n) => f.write_str(&fmt_num(*n)),
            AttrValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

/// A surface that elements can be appended to.
///
/// Methods take `&mut self`: a rendering pass has exclusive access to the
/// canvas for its duration.
pub trait Canvas {
    /// Handle to an element owned by the canvas
    type Element: Copy + fmt::Debug;

    /// The top-level element renderers append to
    fn root(&self) -> Self::Element;

    /// Create a detached element
    fn create_element(&mut self, kind: ElementKind) -> Self::Element;

    /// Set attributes on an element, replacing any with the same name
    fn set_attributes(&mut self, element: Self::Element, attributes: &[(&str, AttrValue)]);

    /// Replace the text content of an element
    fn set_text(&mut self, element: Self::Element, text: &str);

    /// Append `child` as the last child of `parent`
    fn append_child(&mut self, parent: Self::Element, child: Self::Element);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_display_without_trailing_zeros() {
        assert_eq!(AttrValue::from(260.0).to_string(), "260");
        assert_eq!(AttrValue::from(2.5).to_string(), "2.5");
        assert_eq!(AttrValue::from("lightgray").to_string(), "lightgray");
    }

    #[test]
    fn accessors_match_variant() {
        assert_eq!(AttrValue::from(1.0).as_number(), Some(1.0));
        assert_eq!(AttrValue::from(1.0).as_str(), None);
        assert_eq!(AttrValue::from("a").as_str(), Some("a"));
    }

    #[test]
    fn tags() {
        assert_eq!(ElementKind::Group.tag(), "g");
        assert_eq!(ElementKind::Text.to_string(), "text");
    }
}
