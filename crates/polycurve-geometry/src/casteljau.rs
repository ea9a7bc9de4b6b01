//! De Casteljau algorithm for Bezier evaluation over an arbitrary number of control points.

use polycurve_core::{PolycurveError, Result};
use polycurve_math::{lerp, Point2};

/// Fewest control points that still describe a curve.
pub const MIN_CONTROL_POINTS: usize = 2;

/// Evaluate the Bezier curve defined by `control_points` at parameter `t`.
///
/// `t` is checked before the point count. Two points reduce to plain linear
/// interpolation; longer sequences are blended pairwise in a working buffer
/// that shrinks by one point per pass. `control_points` is never modified.
pub fn curve_point(control_points: &[Point2], t: f64) -> Result<Point2> {
    let t = PolycurveError::check_parameter(t)?;
    PolycurveError::check_point_count(control_points.len(), MIN_CONTROL_POINTS)?;

    if let [p0, p1] = control_points {
        return Ok(lerp(*p0, *p1, t));
    }

    let mut work = control_points.to_vec();
    for level in (1..work.len()).rev() {
        for i in 0..level {
            work[i] = lerp(work[i], work[i + 1], t);
        }
    }

    Ok(work[0])
}
