//! Sampling utilities for turning a curve into a polyline for plotting.

use polycurve_core::{PolycurveError, Result, Tolerance};
use polycurve_math::Point2;

use crate::curve::Curve;

/// Lazily yield `count` evenly spaced parameters across `(t_min, t_max)`.
///
/// Both endpoints are always included, so `count` must be at least 2.
/// Nothing is allocated up front, so callers can stream arbitrarily many samples.
pub fn uniform_parameters(
    (t_min, t_max): (f64, f64),
    count: usize,
) -> Result<impl Iterator<Item = f64>> {
    if count < 2 {
        return Err(PolycurveError::InvalidOperation(format!(
            "uniform sampling needs at least 2 samples, got {}",
            count
        )));
    }

    let last = count - 1;
    Ok((0..count).map(move |i| {
        // Pin the final sample so rounding cannot push it past t_max.
        if i == last {
            t_max
        } else {
            t_min + (t_max - t_min) * i as f64 / last as f64
        }
    }))
}

/// Sample `count` points at evenly spaced parameters across the curve domain.
pub fn sample_uniform(curve: &dyn Curve, count: usize) -> Result<Vec<Point2>> {
    let points = uniform_parameters(curve.domain(), count)?
        .map(|t| curve.point_at(t))
        .collect::<Result<Vec<_>>>()?;

    log::debug!("sampled {} points uniformly (degree {})", count, curve.degree());
    Ok(points)
}

/// Convert a curve to a polyline using adaptive subdivision.
///
/// Segments are split while the curve midpoint deviates from the chord
/// midpoint by more than `tolerance.linear`.
///
/// # Arguments
/// * `curve` - The curve to flatten
/// * `tolerance` - Maximum allowed deviation from the true curve, must be positive
///
/// # Returns
/// Points from `t_min` to `t_max` approximating the curve.
pub fn curve_to_polyline(curve: &dyn Curve, tolerance: Tolerance) -> Result<Vec<Point2>> {
    if tolerance.linear.is_nan() || tolerance.linear <= 0.0 {
        return Err(PolycurveError::InvalidOperation(format!(
            "flattening tolerance must be positive, got {}",
            tolerance.linear
        )));
    }

    let (t_min, t_max) = curve.domain();
    let start = curve.point_at(t_min)?;
    let end = curve.point_at(t_max)?;
    let mut points = vec![start];
    subdivide_curve(
        curve,
        (t_min, start),
        (t_max, end),
        tolerance.linear,
        &mut points,
        0,
    )?;

    log::debug!(
        "flattened degree {} curve into {} points (tolerance {})",
        curve.degree(),
        points.len(),
        tolerance.linear
    );
    Ok(points)
}

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

/// Depth reached unconditionally; a single midpoint probe misses S-shaped spans.
const MIN_DEPTH: u32 = 2;

fn subdivide_curve(
    curve: &dyn Curve,
    (t0, p0): (f64, Point2),
    (t1, p1): (f64, Point2),
    tolerance: f64,
    points: &mut Vec<Point2>,
    depth: u32,
) -> Result<()> {
    if depth >= MAX_DEPTH {
        log::trace!("max subdivision depth reached at t = {}", t1);
        points.push(p1);
        return Ok(());
    }

    let t_mid = (t0 + t1) * 0.5;
    let p_mid = curve.point_at(t_mid)?;

    let chord_mid = (p0 + p1) * 0.5;
    let deviation = (p_mid - chord_mid).length();

    if depth < MIN_DEPTH || deviation > tolerance {
        subdivide_curve(curve, (t0, p0), (t_mid, p_mid), tolerance, points, depth + 1)?;
        subdivide_curve(curve, (t_mid, p_mid), (t1, p1), tolerance, points, depth + 1)?;
    } else {
        points.push(p1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{BezierCurve, Line};
    use polycurve_math::dvec2;

    #[test]
    fn test_sample_uniform_line() {
        let line = Line::new(dvec2(0.0, 0.0), dvec2(4.0, 2.0));
        let pts = sample_uniform(&line, 5).unwrap();
        assert_eq!(pts.len(), 5);
        for (i, p) in pts.iter().enumerate() {
            assert!((p.x - i as f64).abs() < 1e-12);
            assert!((p.y - i as f64 * 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sample_uniform_rejects_too_few() {
        let line = Line::new(dvec2(0.0, 0.0), dvec2(1.0, 0.0));
        assert!(matches!(
            sample_uniform(&line, 1),
            Err(PolycurveError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_uniform_parameters_are_lazy() {
        // A huge count must not allocate before the first sample is consumed.
        let mut params = uniform_parameters((0.0, 1.0), usize::MAX).unwrap();
        assert_eq!(params.next(), Some(0.0));
        let second = params.next().unwrap();
        assert!(second > 0.0 && second < 1e-15);
    }

    #[test]
    fn test_uniform_parameters_pin_endpoints() {
        let params: Vec<f64> = uniform_parameters((0.0, 1.0), 3).unwrap().collect();
        assert_eq!(params, vec![0.0, 0.5, 1.0]);
        assert!(uniform_parameters((0.0, 1.0), 0).is_err());
    }

    #[test]
    fn test_sample_uniform_propagates_curve_errors() {
        let mut curve = BezierCurve::new();
        curve.add_point(0.0, 0.0);
        assert_eq!(
            sample_uniform(&curve, 10),
            Err(PolycurveError::InsufficientPoints {
                required: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_polyline_of_line_is_minimal() {
        let line = Line::new(dvec2(0.0, 0.0), dvec2(1.0, 1.0));
        let pts = curve_to_polyline(&line, Tolerance::new(1e-6)).unwrap();
        // Straight input stops right after the forced minimum depth.
        assert_eq!(pts.len(), (1 << MIN_DEPTH) + 1);
        assert_eq!(pts[0], dvec2(0.0, 0.0));
        assert_eq!(*pts.last().unwrap(), dvec2(1.0, 1.0));
    }

    #[test]
    fn test_polyline_refines_curved_input() {
        let curve = BezierCurve::from_points([
            dvec2(0.0, 0.0),
            dvec2(0.5, 1.0),
            dvec2(1.0, 0.0),
        ]);
        let coarse = curve_to_polyline(&curve, Tolerance::loose()).unwrap();
        let fine = curve_to_polyline(&curve, Tolerance::tight()).unwrap();
        assert!(fine.len() > coarse.len());
        // Tight flattening runs into the depth cap.
        assert_eq!(fine.len(), (1 << MAX_DEPTH) + 1);
        assert_eq!(*fine.last().unwrap(), curve.evaluate(1.0).unwrap());
    }

    #[test]
    fn test_polyline_rejects_bad_tolerance() {
        let line = Line::new(dvec2(0.0, 0.0), dvec2(1.0, 1.0));
        assert!(curve_to_polyline(&line, Tolerance::new(0.0)).is_err());
        assert!(curve_to_polyline(&line, Tolerance::new(-1e-3)).is_err());
        assert!(curve_to_polyline(&line, Tolerance::new(f64::NAN)).is_err());
    }
}
