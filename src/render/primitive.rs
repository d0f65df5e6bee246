//! Drawing primitives
//!
//! Renderers first lay out a list of [`Primitive`]s (pure arithmetic, easy
//! to test) and then emit them onto a [`Canvas`].

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::canvas::{AttrValue, Canvas, ElementKind};
use crate::types::CanvasRect;

/// Common behavior for all primitives
#[enum_dispatch]
pub trait Draw {
    /// Element kind the primitive becomes
    fn kind(&self) -> ElementKind;

    /// Attributes in emission order
    fn attributes(&self) -> Vec<(&'static str, AttrValue)>;

    /// Text content, for primitives that have one
    fn content(&self) -> Option<&str> {
        None
    }
}

/// A straight stroked segment
#[derive(Debug, Clone, PartialEq)]
pub struct LineMark {
    pub from: DVec2,
    pub to: DVec2,
    pub stroke: String,
    pub stroke_width: Option<f64>,
}

impl LineMark {
    pub fn new(from: DVec2, to: DVec2, stroke: impl Into<String>) -> Self {
        Self {
            from,
            to,
            stroke: stroke.into(),
            stroke_width: None,
        }
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }
}

impl Draw for LineMark {
    fn kind(&self) -> ElementKind {
        ElementKind::Line
    }

    fn attributes(&self) -> Vec<(&'static str, AttrValue)> {
        let mut attrs: Vec<(&'static str, AttrValue)> = vec![
            ("x1", self.from.x.into()),
            ("y1", self.from.y.into()),
            ("x2", self.to.x.into()),
            ("y2", self.to.y.into()),
            ("stroke", self.stroke.clone().into()),
        ];
        if let Some(width) = self.stroke_width {
            attrs.push(("stroke-width", width.into()));
        }
        attrs
    }
}

/// A filled rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct RectMark {
    pub rect: CanvasRect,
    pub fill: String,
}

impl RectMark {
    pub fn new(rect: CanvasRect, fill: impl Into<String>) -> Self {
        Self {
            rect,
            fill: fill.into(),
        }
    }
}

impl Draw for RectMark {
    fn kind(&self) -> ElementKind {
        ElementKind::Rect
    }

    fn attributes(&self) -> Vec<(&'static str, AttrValue)> {
        vec![
            ("x", self.rect.x().into()),
            ("y", self.rect.y().into()),
            ("width", self.rect.width().into()),
            ("height", self.rect.height().into()),
            ("fill", self.fill.clone().into()),
        ]
    }
}

/// A filled circle, used for point markers
#[derive(Debug, Clone, PartialEq)]
pub struct CircleMark {
    pub center: DVec2,
    pub radius: f64,
    pub fill: String,
    pub stroke: Option<String>,
}

impl Draw for CircleMark {
    fn kind(&self) -> ElementKind {
        ElementKind::Circle
    }

    fn attributes(&self) -> Vec<(&'static str, AttrValue)> {
        let mut attrs: Vec<(&'static str, AttrValue)> = vec![
            ("cx", self.center.x.into()),
            ("cy", self.center.y.into()),
            ("r", self.radius.into()),
            ("fill", self.fill.clone().into()),
        ];
        if let Some(stroke) = &self.stroke {
            attrs.push(("stroke", stroke.clone().into()));
        }
        attrs
    }
}

/// Horizontal text alignment relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// A text label
#[derive(Debug, Clone, PartialEq)]
pub struct TextMark {
    pub position: DVec2,
    pub content: String,
    pub font_size: f64,
    pub fill: Option<String>,
    pub anchor: Option<TextAnchor>,
    /// Centre the glyphs vertically on `position`
    pub middle_baseline: bool,
}

impl TextMark {
    pub fn new(position: DVec2, content: impl Into<String>, font_size: f64) -> Self {
        Self {
            position,
            content: content.into(),
            font_size,
            fill: None,
            anchor: None,
            middle_baseline: false,
        }
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn with_middle_baseline(mut self) -> Self {
        self.middle_baseline = true;
        self
    }
}

impl Draw for TextMark {
    fn kind(&self) -> ElementKind {
        ElementKind::Text
    }

    fn attributes(&self) -> Vec<(&'static str, AttrValue)> {
        let mut attrs: Vec<(&'static str, AttrValue)> =
            vec![("x", self.position.x.into()), ("y", self.position.y.into())];
        if let Some(anchor) = self.anchor {
            attrs.push(("text-anchor", anchor.as_str().into()));
        }
        if self.middle_baseline {
            attrs.push(("dominant-baseline", "middle".into()));
        }
        attrs.push(("font-size", self.font_size.into()));
        if let Some(fill) = &self.fill {
            attrs.push(("fill", fill.clone().into()));
        }
        attrs
    }

    fn content(&self) -> Option<&str> {
        Some(&self.content)
    }
}

/// Any drawable primitive
#[enum_dispatch(Draw)]
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line(LineMark),
    Rect(RectMark),
    Circle(CircleMark),
    Text(TextMark),
}

impl Primitive {
    /// Create the element, set its attributes and text, and append it to `parent`
    pub fn emit<C: Canvas>(&self, canvas: &mut C, parent: C::Element) -> C::Element {
        let element = canvas.create_element(self.kind());
        canvas.set_attributes(element, &self.attributes());
        if let Some(text) = self.content() {
            canvas.set_text(element, text);
        }
        canvas.append_child(parent, element);
        element
    }
}

/// Emit a batch of primitives onto the canvas root
pub fn emit_all<C: Canvas>(canvas: &mut C, primitives: &[Primitive]) -> Vec<C::Element> {
    let root = canvas.root();
    primitives.iter().map(|p| p.emit(canvas, root)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::svg::SvgDocument;
    use glam::dvec2;

    #[test]
    fn line_without_width_omits_attribute() {
        let line = LineMark::new(dvec2(40.0, 260.0), dvec2(40.0, 265.0), "black");
        let names: Vec<_> = line.attributes().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["x1", "y1", "x2", "y2", "stroke"]);
    }

    #[test]
    fn dispatch_reaches_the_variant() {
        let prim = Primitive::from(TextMark::new(dvec2(1.0, 2.0), "hi", 12.0));
        assert_eq!(prim.kind(), ElementKind::Text);
        assert_eq!(prim.content(), Some("hi"));

        let prim = Primitive::from(RectMark::new(CanvasRect::new(0.0, 0.0, 1.0, 1.0), "gray"));
        assert_eq!(prim.content(), None);
    }

    #[test]
    fn emit_appends_to_parent() {
        let mut doc = SvgDocument::new(100.0, 100.0);
        let prims = vec![
            Primitive::from(LineMark::new(dvec2(0.0, 0.0), dvec2(1.0, 1.0), "black")),
            Primitive::from(TextMark::new(dvec2(5.0, 5.0), "", 10.0).with_fill("red")),
        ];
        let elements = emit_all(&mut doc, &prims);

        let root = doc.root();
        assert_eq!(doc.children(root), elements.as_slice());
        assert_eq!(doc.text(elements[1]), Some(""));
        assert_eq!(doc.attribute(elements[1], "fill"), Some(&AttrValue::from("red")));
    }
}
