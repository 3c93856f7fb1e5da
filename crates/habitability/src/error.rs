//! Physics errors raised by the calculators

use thiserror::Error;

/// Numerical cause of a failed calculation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericError {
    #[error("effective flux for {model} is {flux}, expected a positive value")]
    NonPositiveFlux { model: &'static str, flux: f64 },

    #[error("{quantity} evaluated to {value}")]
    NonFinite { quantity: &'static str, value: f64 },
}

/// A calculation could not produce a result
///
/// Numerical failures keep their cause reachable through
/// [`std::error::Error::source`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    #[error("planet {planet} has no host star")]
    MissingHost { planet: String },

    #[error("habitable zone calculation failed")]
    HabitableZone {
        #[source]
        source: NumericError,
    },

    #[error("temperature calculation failed for {planet}")]
    Temperature {
        planet: String,
        #[source]
        source: NumericError,
    },

    #[error("orbital position calculation failed for {planet}")]
    OrbitalPosition {
        planet: String,
        #[source]
        source: NumericError,
    },

    #[error("orbital period calculation failed for {planet}")]
    OrbitalPeriod {
        planet: String,
        #[source]
        source: NumericError,
    },
}

/// Pass `value` through if finite
pub(crate) fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64, NumericError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NumericError::NonFinite { quantity, value })
    }
}
