//! Curve traits and implementations.

mod bezier;
mod line;

use polycurve_core::{Result, Tolerance};
use polycurve_math::{points_eq, Point2};

pub use bezier::BezierCurve;
pub use line::Line;

/// Trait for parametric curves in the plane.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    ///
    /// Fails when `t` lies outside [`Curve::domain`] or the curve cannot be
    /// evaluated in its current state.
    fn point_at(&self, t: f64) -> Result<Point2>;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    /// Polynomial degree of the curve.
    fn degree(&self) -> usize;

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        let (t_min, t_max) = self.domain();
        match (self.point_at(t_min), self.point_at(t_max)) {
            (Ok(start), Ok(end)) => points_eq(start, end, Tolerance::default()),
            _ => false,
        }
    }
}
