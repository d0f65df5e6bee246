//! Value types shared by the renderers.
//!
//! Data space is y-up and unitless; canvas space is y-down pixels and is
//! represented with [`glam::DVec2`].

use std::fmt;

use glam::{DVec2, dvec2};

use crate::errors::{ChartError, Result, ensure_finite};
use crate::render::geometry::is_inside_region;

/// One of the two chart axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// A point in data space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in data space highlighted on the chart.
///
/// The fields are public so a scope can be built from a literal; such a
/// scope may be inverted, in which case the region renderer draws it as
/// computed. Use [`Scope::new`] to get a checked one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scope {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Scope {
    /// Create a scope, rejecting non-finite bounds and inverted ranges
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self> {
        ensure_finite("scope min x", min_x)?;
        ensure_finite("scope max x", max_x)?;
        ensure_finite("scope min y", min_y)?;
        ensure_finite("scope max y", max_y)?;
        if min_x > max_x {
            return Err(ChartError::InvertedScope {
                axis: Axis::X,
                min: min_x,
                max: max_x,
            });
        }
        if min_y > max_y {
            return Err(ChartError::InvertedScope {
                axis: Axis::Y,
                min: min_y,
                max: max_y,
            });
        }
        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True if either range has `min > max`
    pub fn is_inverted(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Data-space containment, inclusive on all four edges
    pub fn contains(&self, point: DataPoint) -> bool {
        is_inside_region(
            point.x,
            point.y,
            self.min_x,
            self.min_y,
            self.width(),
            self.height(),
        )
    }
}

/// Pixels per data unit along each axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steps {
    pub x: f64,
    pub y: f64,
}

impl Steps {
    /// Create step factors, rejecting NaN and infinities
    pub fn new(x: f64, y: f64) -> Result<Self> {
        Ok(Self {
            x: ensure_finite("x step", x)?,
            y: ensure_finite("y step", y)?,
        })
    }

    /// Same factor on both axes
    pub fn uniform(step: f64) -> Result<Self> {
        Self::new(step, step)
    }

    pub(crate) fn validate(self) -> Result<Self> {
        Self::new(self.x, self.y)
    }
}

/// Axis-aligned rectangle in canvas space (y-down, `origin` is the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasRect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl CanvasRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: dvec2(x, y),
            size: dvec2(width, height),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.origin.y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Closed-rectangle hit test in canvas space
    pub fn contains(&self, point: DVec2) -> bool {
        is_inside_region(
            point.x,
            point.y,
            self.origin.x,
            self.origin.y,
            self.size.x,
            self.size.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_new_accepts_degenerate_ranges() {
        let scope = Scope::new(1.0, 1.0, 2.0, 2.0).unwrap();
        assert_eq!(scope.width(), 0.0);
        assert_eq!(scope.height(), 0.0);
    }

    #[test]
    fn scope_new_rejects_inverted_x() {
        let err = Scope::new(3.0, 1.0, 0.0, 2.0).unwrap_err();
        assert_eq!(
            err,
            ChartError::InvertedScope {
                axis: Axis::X,
                min: 3.0,
                max: 1.0
            }
        );
    }

    #[test]
    fn scope_new_rejects_inverted_y() {
        let err = Scope::new(0.0, 1.0, 5.0, 2.0).unwrap_err();
        assert!(matches!(err, ChartError::InvertedScope { axis: Axis::Y, .. }));
    }

    #[test]
    fn scope_new_rejects_nan() {
        let err = Scope::new(f64::NAN, 1.0, 0.0, 2.0).unwrap_err();
        assert!(matches!(err, ChartError::NonFinite { what: "scope min x", .. }));
    }

    #[test]
    fn literal_scope_can_be_inverted() {
        let scope = Scope {
            min_x: 2.0,
            max_x: 1.0,
            min_y: 0.0,
            max_y: 1.0,
        };
        assert!(scope.is_inverted());
        assert!(scope.width() < 0.0);
    }

    #[test]
    fn scope_contains_is_inclusive() {
        let scope = Scope::new(1.0, 3.0, 0.0, 2.0).unwrap();
        assert!(scope.contains(DataPoint::new(1.0, 0.0)));
        assert!(scope.contains(DataPoint::new(3.0, 2.0)));
        assert!(scope.contains(DataPoint::new(2.0, 1.0)));
        assert!(!scope.contains(DataPoint::new(3.01, 1.0)));
        assert!(!scope.contains(DataPoint::new(2.0, -0.01)));
    }

    #[test]
    fn steps_reject_infinity() {
        assert!(Steps::new(f64::INFINITY, 1.0).is_err());
        assert!(Steps::new(1.0, f64::NAN).is_err());
        assert_eq!(Steps::uniform(50.0).unwrap(), Steps { x: 50.0, y: 50.0 });
    }

    #[test]
    fn canvas_rect_contains_edges() {
        let rect = CanvasRect::new(90.0, 160.0, 100.0, 100.0);
        assert!(rect.contains(dvec2(90.0, 160.0)));
        assert!(rect.contains(dvec2(190.0, 260.0)));
        assert!(!rect.contains(dvec2(89.9, 200.0)));
    }

    #[test]
    fn axis_display() {
        assert_eq!(Axis::X.to_string(), "x");
        assert_eq!(Axis::Y.to_string(), "y");
    }
}
