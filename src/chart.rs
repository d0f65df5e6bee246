//! A whole chart: axes, scope, points and annotations drawn in one pass

use glam::DVec2;

use crate::canvas::Canvas;
use crate::errors::Result;
use crate::render::defaults;
use crate::render::{
    AxisStats, ChartLayout, MarkerStyle, SvgDocument, add_text, draw_axes, draw_point, draw_region,
    map_to_data, region_rect,
};
use crate::types::{DataPoint, Scope, Steps};

/// Text placed at a fixed canvas position
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub position: DVec2,
    pub content: String,
    pub font_size: f64,
    pub color: String,
}

impl Annotation {
    pub fn new(position: DVec2, content: impl Into<String>) -> Self {
        Self {
            position,
            content: content.into(),
            font_size: defaults::LABEL_FONT_SIZE,
            color: defaults::TEXT_FILL.to_string(),
        }
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// Everything needed to draw a chart.
///
/// Drawing order is axes, scope, points, annotations, so markers sit on top
/// of the scope rectangle.
#[derive(Debug, Clone)]
pub struct Chart {
    pub layout: ChartLayout,
    pub steps: Steps,
    pub x_max: f64,
    pub y_max: f64,
    pub labels: bool,
    pub scope: Option<Scope>,
    pub points: Vec<DataPoint>,
    pub annotations: Vec<Annotation>,
    /// Marker for points inside the scope (or all points when there is none)
    pub inside: MarkerStyle,
    pub outside: MarkerStyle,
}

impl Chart {
    pub fn new(layout: ChartLayout, steps: Steps, x_max: f64, y_max: f64) -> Self {
        Self {
            layout,
            steps,
            x_max,
            y_max,
            labels: false,
            scope: None,
            points: Vec::new(),
            annotations: Vec::new(),
            inside: MarkerStyle::filled(defaults::MARKER_INSIDE_FILL),
            outside: MarkerStyle::filled(defaults::MARKER_OUTSIDE_FILL),
        }
    }

    /// Default layout with steps fitted to the extents
    pub fn fitted(x_max: f64, y_max: f64) -> Result<Self> {
        let layout = ChartLayout::default();
        let steps = Steps::fit(&layout, x_max, y_max)?;
        Ok(Self::new(layout, steps, x_max, y_max))
    }

    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn with_points(mut self, points: impl IntoIterator<Item = DataPoint>) -> Self {
        self.points.extend(points);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_marker_styles(mut self, inside: MarkerStyle, outside: MarkerStyle) -> Self {
        self.inside = inside;
        self.outside = outside;
        self
    }

    /// Marker style for a point, depending on whether the scope holds it
    pub fn marker_for(&self, point: DataPoint) -> &MarkerStyle {
        match &self.scope {
            Some(scope) if !scope.contains(point) => &self.outside,
            _ => &self.inside,
        }
    }

    /// Whether a canvas position falls inside the drawn scope rectangle
    pub fn hit_test(&self, position: DVec2) -> bool {
        self.scope
            .as_ref()
            .is_some_and(|scope| region_rect(&self.layout, self.steps, scope).contains(position))
    }

    /// Data-space coordinates of a canvas position
    pub fn data_at(&self, position: DVec2) -> Option<DataPoint> {
        map_to_data(position, self.steps, &self.layout)
    }

    /// Draw the chart onto `canvas`. Appends only.
    pub fn render<C: Canvas>(&self, canvas: &mut C) -> Result<AxisStats> {
        let stats = draw_axes(
            canvas,
            &self.layout,
            self.x_max,
            self.y_max,
            self.steps,
            self.labels,
        )?;

        if self.scope.is_some() {
            draw_region(canvas, &self.layout, self.steps, self.scope.as_ref())?;
        }

        for &point in &self.points {
            draw_point(canvas, &self.layout, self.steps, point, self.marker_for(point));
        }

        for note in &self.annotations {
            add_text(canvas, note.position, &note.content, note.font_size, &note.color);
        }

        crate::log::debug!(
            points = self.points.len(),
            annotations = self.annotations.len(),
            has_scope = self.scope.is_some(),
            "chart rendered"
        );
        Ok(stats)
    }

    /// Render into a fresh [`SvgDocument`] sized by the layout
    pub fn to_document(&self) -> Result<SvgDocument> {
        let mut doc = SvgDocument::new(self.layout.width, self.layout.height);
        self.render(&mut doc)?;
        Ok(doc)
    }

    /// Render and serialize to an SVG string
    pub fn to_svg(&self) -> Result<String> {
        Ok(self.to_document()?.to_svg_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ElementKind;
    use crate::errors::ChartError;
    use glam::dvec2;

    fn chart() -> Chart {
        Chart::new(ChartLayout::default(), Steps::uniform(50.0).unwrap(), 5.0, 3.0)
    }

    #[test]
    fn marker_depends_on_scope() {
        let chart = chart().with_scope(Scope::new(1.0, 3.0, 0.0, 2.0).unwrap());
        assert_eq!(chart.marker_for(DataPoint::new(2.0, 1.0)).fill, "green");
        assert_eq!(chart.marker_for(DataPoint::new(4.0, 1.0)).fill, "red");
    }

    #[test]
    fn without_scope_everything_is_inside() {
        let chart = chart();
        assert_eq!(chart.marker_for(DataPoint::new(4.0, 1.0)).fill, "green");
        assert!(!chart.hit_test(dvec2(100.0, 200.0)));
    }

    #[test]
    fn hit_test_uses_canvas_rect() {
        let chart = chart().with_scope(Scope::new(1.0, 3.0, 0.0, 2.0).unwrap());
        assert!(chart.hit_test(dvec2(90.0, 160.0)));
        assert!(chart.hit_test(dvec2(190.0, 260.0)));
        assert!(!chart.hit_test(dvec2(191.0, 200.0)));
    }

    #[test]
    fn data_at_inverts_mapping() {
        let chart = chart();
        assert_eq!(chart.data_at(dvec2(140.0, 160.0)), Some(DataPoint::new(2.0, 2.0)));
    }

    #[test]
    fn render_draws_everything() {
        let chart = chart()
            .with_labels(true)
            .with_scope(Scope::new(1.0, 3.0, 0.0, 2.0).unwrap())
            .with_points([DataPoint::new(2.0, 1.0), DataPoint::new(4.0, 2.5)])
            .with_annotation(Annotation::new(dvec2(200.0, 15.0), "2 of 2 locked"));
        let doc = chart.to_document().unwrap();

        assert_eq!(doc.count(ElementKind::Rect), 1);
        assert_eq!(doc.count(ElementKind::Circle), 2);
        assert_eq!(doc.count(ElementKind::Text), 6 + 4 + 1);
        assert_eq!(doc.count(ElementKind::Line), 2 + 6 + 4);
    }

    #[test]
    fn render_without_scope_skips_region() {
        let doc = chart().to_document().unwrap();
        assert_eq!(doc.count(ElementKind::Rect), 0);
    }

    #[test]
    fn fitted_rejects_empty_extent() {
        assert_eq!(
            Chart::fitted(0.0, 3.0).unwrap_err(),
            ChartError::EmptyExtent { axis: crate::types::Axis::X }
        );
        let chart = Chart::fitted(7.0, 4.0).unwrap();
        assert_eq!(chart.steps, Steps { x: 50.0, y: 60.0 });
    }
}
