use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolycurveError {
    #[error("Invalid parameter: t = {0} is outside [0, 1]")]
    InvalidParameter(f64),

    #[error("Insufficient points: need at least {required}, found {found}")]
    InsufficientPoints { required: usize, found: usize },

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl PolycurveError {
    /// Reject a curve parameter outside the closed unit interval.
    ///
    /// NaN never lies inside the interval and is rejected too.
    pub fn check_parameter(t: f64) -> Result<f64> {
        if (0.0..=1.0).contains(&t) {
            Ok(t)
        } else {
            Err(Self::InvalidParameter(t))
        }
    }

    pub fn check_point_count(found: usize, required: usize) -> Result<()> {
        if found < required {
            return Err(Self::InsufficientPoints { required, found });
        }
        Ok(())
    }
}

pub type Result<T> = std::result::Result<T, PolycurveError>;
