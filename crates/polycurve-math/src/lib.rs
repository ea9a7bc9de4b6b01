//! Polycurve math primitives: 2D points, vectors, and bounding boxes.

pub mod aabb;

pub use aabb::Aabb2;
pub use glam::{dvec2, DVec2};

use polycurve_core::Tolerance;

pub type Point2 = DVec2;
pub type Vector2 = DVec2;

/// Linear interpolation `a + (b - a) * t`, applied per coordinate.
#[inline]
pub fn lerp(a: Point2, b: Point2, t: f64) -> Point2 {
    a + (b - a) * t
}

/// Check if two points coincide coordinate-wise within `tol`.
pub fn points_eq(a: Point2, b: Point2, tol: Tolerance) -> bool {
    tol.linear_eq(a.x, b.x) && tol.linear_eq(a.y, b.y)
}
