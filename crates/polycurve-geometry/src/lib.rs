//! Polycurve geometry: control-point curves, de Casteljau evaluation, and sampling.

pub mod casteljau;
pub mod curve;
pub mod tessellate;

pub use curve::{BezierCurve, Curve, Line};
