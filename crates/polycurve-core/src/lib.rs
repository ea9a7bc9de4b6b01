//! Polycurve core: errors, tolerances, and shared traits.

pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{PolycurveError, Result};
pub use tolerance::Tolerance;
