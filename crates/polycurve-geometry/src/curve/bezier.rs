//! Bezier curve built up one control point at a time.

use polycurve_core::traits::{BoundingBox, Validate};
use polycurve_core::{PolycurveError, Result};
use polycurve_math::{Aabb2, DVec2, Point2};
use serde::{Deserialize, Serialize};

use super::Curve;
use crate::casteljau::{self, MIN_CONTROL_POINTS};

/// A Bezier curve of degree `n - 1` over `n` ordered control points.
///
/// Points are only ever appended; insertion order defines the shape.
/// Duplicate and collinear points are allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BezierCurve {
    control_points: Vec<Point2>,
}

impl BezierCurve {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: impl IntoIterator<Item = Point2>) -> Self {
        Self {
            control_points: points.into_iter().collect(),
        }
    }

    /// Append the control point `(x, y)`.
    pub fn add_point(&mut self, x: f64, y: f64) {
        self.push(DVec2::new(x, y));
    }

    pub fn push(&mut self, point: Point2) {
        self.control_points.push(point);
    }

    pub fn control_points(&self) -> &[Point2] {
        &self.control_points
    }

    pub fn len(&self) -> usize {
        self.control_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }

    /// Evaluate the curve position at `t` in `[0, 1]`.
    ///
    /// # Errors
    /// * [`PolycurveError::InvalidParameter`] if `t` is outside `[0, 1]` (checked first).
    /// * [`PolycurveError::InsufficientPoints`] if fewer than two points were added.
    pub fn evaluate(&self, t: f64) -> Result<Point2> {
        casteljau::curve_point(&self.control_points, t)
    }
}

impl FromIterator<Point2> for BezierCurve {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}

impl Curve for BezierCurve {
    fn point_at(&self, t: f64) -> Result<Point2> {
        self.evaluate(t)
    }

    fn degree(&self) -> usize {
        self.control_points.len().saturating_sub(1)
    }
}

impl Validate for BezierCurve {
    fn validate(&self) -> Result<()> {
        PolycurveError::check_point_count(self.control_points.len(), MIN_CONTROL_POINTS)
    }
}

impl BoundingBox for BezierCurve {
    type Point = Point2;

    /// The curve lies inside the convex hull of its control points, so this
    /// box bounds every evaluated position.
    fn bounding_box(&self) -> Option<(Point2, Point2)> {
        Aabb2::from_points(&self.control_points).map(|aabb| (aabb.min, aabb.max))
    }
}
