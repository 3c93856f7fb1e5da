//! Validation errors raised while constructing celestial objects

use thiserror::Error;

/// Reasons an entity fails validation at construction time
///
/// Validation runs before an object becomes usable: a `Star`, `Planet` or
/// `Galaxy` value that exists has passed every check.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} cannot be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be in {range}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        range: &'static str,
    },

    #[error("atmosphere concentration for {gas} must be finite, got {value}")]
    InvalidAtmosphere { gas: String, value: f64 },
}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    // NaN fails the comparison and is rejected
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NonPositive { field, value })
    }
}

pub(crate) fn ensure_non_negative(
    field: &'static str,
    value: f64,
) -> Result<f64, ValidationError> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::Negative { field, value })
    }
}
