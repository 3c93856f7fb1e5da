//! Properties shared by every celestial body

use serde::Serialize;

use crate::error::{ensure_non_negative, ensure_positive, ValidationError};

/// Common capability of stars and planets
///
/// Units of `mass` and `radius` depend on the implementor: stars use solar
/// units (M☉, R☉), planets use Earth units (M⊕, R⊕). `age` is always in
/// billions of years.
pub trait CelestialObject {
    /// Identifier of the body
    fn name(&self) -> &str;

    /// Mass in the implementor's mass unit
    fn mass(&self) -> f64;

    /// Radius in the implementor's length unit
    fn radius(&self) -> f64;

    /// Age in billions of years (Gyr)
    fn age(&self) -> f64;
}

/// Validated name/mass/radius/age record embedded in `Star` and `Planet`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct BodyCore {
    pub(crate) name: String,
    pub(crate) mass: f64,
    pub(crate) radius: f64,
    pub(crate) age: f64,
}

impl BodyCore {
    /// Checks mass, radius then age, in that order
    pub(crate) fn new(
        name: String,
        mass: f64,
        radius: f64,
        age: f64,
    ) -> Result<Self, ValidationError> {
        let mass = ensure_positive("mass", mass)?;
        let radius = ensure_positive("radius", radius)?;
        let age = ensure_non_negative("age", age)?;

        Ok(Self {
            name,
            mass,
            radius,
            age,
        })
    }
}
