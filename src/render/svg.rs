//! In-memory SVG document and serialization

use std::fmt::{self, Write as _};

use crate::canvas::{AttrValue, Canvas, ElementKind};

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Handle to a node inside an [`SvgDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    kind: ElementKind,
    attributes: Vec<(String, AttrValue)>,
    text: Option<String>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }
}

/// Arena-backed SVG tree implementing [`Canvas`].
///
/// Nodes that are created but never appended stay in the arena and are not
/// serialized.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    nodes: Vec<Node>,
}

impl SvgDocument {
    /// Create an empty document with the given pixel size
    pub fn new(width: f64, height: f64) -> Self {
        let mut root = Node::new(ElementKind::Svg);
        root.attributes = vec![
            ("xmlns".to_string(), AttrValue::from(SVG_NS)),
            ("width".to_string(), AttrValue::from(width)),
            ("height".to_string(), AttrValue::from(height)),
            (
                "viewBox".to_string(),
                AttrValue::from(format!("0 0 {} {}", fmt_num(width), fmt_num(height))),
            ),
        ];
        Self { nodes: vec![root] }
    }

    pub fn kind(&self, element: NodeId) -> ElementKind {
        self.nodes[element.0].kind
    }

    pub fn children(&self, element: NodeId) -> &[NodeId] {
        &self.nodes[element.0].children
    }

    pub fn attribute(&self, element: NodeId, name: &str) -> Option<&AttrValue> {
        self.nodes[element.0]
            .attributes
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v)
    }

    pub fn text(&self, element: NodeId) -> Option<&str> {
        self.nodes[element.0].text.as_deref()
    }

    /// Count elements of `kind` reachable from the root (the root excluded)
    pub fn count(&self, kind: ElementKind) -> usize {
        let mut stack = self.children(self.root()).to_vec();
        let mut count = 0;
        while let Some(id) = stack.pop() {
            if self.kind(id) == kind {
                count += 1;
            }
            stack.extend_from_slice(self.children(id));
        }
        count
    }

    /// Number of nodes held by the document, the root and detached nodes included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Drop every node except the root so the chart can be redrawn.
    ///
    /// Handles to anything but the root are invalid afterwards.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0].children.clear();
    }

    /// Serialize the tree reachable from the root
    pub fn to_svg_string(&self) -> String {
        self.to_string()
    }

    fn write_node(&self, out: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let node = &self.nodes[id.0];
        let indent = "  ".repeat(depth);
        write!(out, "{indent}<{}", node.kind.tag())?;
        for (name, value) in &node.attributes {
            write!(out, " {name}=\"{}\"", escape_xml(&value.to_string(), true))?;
        }

        match (&node.text, node.children.is_empty()) {
            (None, true) => writeln!(out, "/>"),
            (Some(text), true) => writeln!(out, ">{}</{}>", escape_xml(text, false), node.kind.tag()),
            (text, false) => {
                out.write_char('>')?;
                if let Some(text) = text {
                    out.write_str(&escape_xml(text, false))?;
                }
                out.write_char('\n')?;
                for &child in &node.children {
                    self.write_node(out, child, depth + 1)?;
                }
                writeln!(out, "{indent}</{}>", node.kind.tag())
            }
        }
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.root(), 0)
    }
}

impl Canvas for SvgDocument {
    type Element = NodeId;

    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn create_element(&mut self, kind: ElementKind) -> NodeId {
        self.nodes.push(Node::new(kind));
        NodeId(self.nodes.len() - 1)
    }

    fn set_attributes(&mut self, element: NodeId, attributes: &[(&str, AttrValue)]) {
        let node = &mut self.nodes[element.0];
        for (name, value) in attributes {
            match node.attributes.iter_mut().find(|(n, _)| n.as_str() == *name) {
                Some((_, existing)) => *existing = value.clone(),
                None => node.attributes.push((name.to_string(), value.clone())),
            }
        }
    }

    fn set_text(&mut self, element: NodeId, text: &str) {
        self.nodes[element.0].text = Some(text.to_string());
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
    }
}

/// Escape text for XML output. Quotes are only escaped inside attributes.
fn escape_xml(s: &str, attribute: bool) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' if attribute => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}

/// Format a number like C's `%g`: 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // below this the rounding scale overflows to infinity
    if value.abs() < 1e-300 {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (sig_figs - 1 - magnitude).max(0);
    let scale = 10_f64.powi(decimals);
    let rounded = (value * scale).round() / scale;

    let s = format!("{:.prec$}", rounded, prec = decimals as usize);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_trims_zeros() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(90.0), "90");
        assert_eq!(fmt_num(-12.5), "-12.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.333333");
        assert_eq!(fmt_num(2_000_000.0), "2000000");
    }

    #[test]
    fn fmt_num_flushes_tiny_values_to_zero() {
        assert_eq!(fmt_num(1e-310), "0");
        assert_eq!(fmt_num(-5e-320), "0");
        assert_eq!(fmt_num(f64::MIN_POSITIVE), "0");
        assert_eq!(fmt_num(1.5e-7), "0.00000015");
    }

    #[test]
    fn empty_document() {
        let doc = SvgDocument::new(400.0, 300.0);
        assert_eq!(
            doc.to_svg_string(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"400\" height=\"300\" viewBox=\"0 0 400 300\"/>\n"
        );
    }

    #[test]
    fn set_attributes_replaces_by_name() {
        let mut doc = SvgDocument::new(10.0, 10.0);
        let rect = doc.create_element(ElementKind::Rect);
        doc.set_attributes(rect, &[("x", 1.0.into()), ("fill", "red".into())]);
        doc.set_attributes(rect, &[("fill", "blue".into())]);
        assert_eq!(doc.attribute(rect, "x"), Some(&AttrValue::Number(1.0)));
        assert_eq!(doc.attribute(rect, "fill").and_then(AttrValue::as_str), Some("blue"));
    }

    #[test]
    fn detached_nodes_are_not_serialized() {
        let mut doc = SvgDocument::new(10.0, 10.0);
        let _orphan = doc.create_element(ElementKind::Line);
        assert_eq!(doc.count(ElementKind::Line), 0);
        assert!(!doc.to_svg_string().contains("<line"));
    }

    #[test]
    fn text_is_escaped() {
        let mut doc = SvgDocument::new(10.0, 10.0);
        let text = doc.create_element(ElementKind::Text);
        doc.set_attributes(text, &[("fill", "a\"b".into())]);
        doc.set_text(text, "x < y & \"z\"");
        let root = doc.root();
        doc.append_child(root, text);

        let svg = doc.to_svg_string();
        assert!(svg.contains("<text fill=\"a&quot;b\">x &lt; y &amp; \"z\"</text>"), "{svg}");
    }

    #[test]
    fn nested_groups_are_indented() {
        let mut doc = SvgDocument::new(10.0, 10.0);
        let group = doc.create_element(ElementKind::Group);
        let circle = doc.create_element(ElementKind::Circle);
        doc.set_attributes(circle, &[("r", 2.0.into())]);
        doc.append_child(group, circle);
        let root = doc.root();
        doc.append_child(root, group);

        let svg = doc.to_svg_string();
        assert!(svg.contains("\n  <g>\n    <circle r=\"2\"/>\n  </g>\n"), "{svg}");
        assert_eq!(doc.count(ElementKind::Circle), 1);
    }

    #[test]
    fn clear_detaches_children() {
        let mut doc = SvgDocument::new(10.0, 10.0);
        let line = doc.create_element(ElementKind::Line);
        let root = doc.root();
        doc.append_child(root, line);
        assert_eq!(doc.count(ElementKind::Line), 1);

        doc.clear();
        assert_eq!(doc.count(ElementKind::Line), 0);
        assert!(doc.children(root).is_empty());
        assert_eq!(doc.node_count(), 1);
    }

    #[test]
    fn clear_releases_detached_nodes() {
        let mut doc = SvgDocument::new(10.0, 10.0);
        let _orphan = doc.create_element(ElementKind::Rect);
        doc.clear();
        assert_eq!(doc.node_count(), 1);

        let line = doc.create_element(ElementKind::Line);
        let root = doc.root();
        doc.append_child(root, line);
        assert_eq!(doc.node_count(), 2);
        assert_eq!(doc.kind(line), ElementKind::Line);
    }
}
