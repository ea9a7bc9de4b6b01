//! Line segment curve.

use polycurve_core::{PolycurveError, Result};
use polycurve_math::{lerp, Point2};
use serde::{Deserialize, Serialize};

use super::Curve;

/// A line segment from `start` to `end`, parameterized over `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point2,
    pub end: Point2,
}

impl Line {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }
}

impl Curve for Line {
    fn point_at(&self, t: f64) -> Result<Point2> {
        let t = PolycurveError::check_parameter(t)?;
        Ok(lerp(self.start, self.end, t))
    }

    fn degree(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polycurve_math::DVec2;

    #[test]
    fn test_line_point_at() {
        let line = Line::new(DVec2::new(0.0, 0.0), DVec2::new(2.0, 4.0));
        let p = line.point_at(0.5).unwrap();
        assert!((p.x - 1.0).abs() < 1e-10);
        assert!((p.y - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_line_endpoints() {
        let line = Line::new(DVec2::new(1.0, 2.0), DVec2::new(4.0, 5.0));
        let p0 = line.point_at(0.0).unwrap();
        let p1 = line.point_at(1.0).unwrap();
        assert!((p0 - line.start).length() < 1e-10);
        assert!((p1 - line.end).length() < 1e-10);
    }

    #[test]
    fn test_line_rejects_out_of_domain() {
        let line = Line::new(DVec2::ZERO, DVec2::X);
        assert_eq!(
            line.point_at(1.5),
            Err(PolycurveError::InvalidParameter(1.5))
        );
    }

    #[test]
    fn test_line_domain_and_degree() {
        let line = Line::new(DVec2::ZERO, DVec2::X);
        assert_eq!(line.domain(), (0.0, 1.0));
        assert_eq!(line.degree(), 1);
        assert!(!line.is_closed());
    }
}
