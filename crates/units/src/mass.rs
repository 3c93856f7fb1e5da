use serde::{Deserialize, Serialize};

use crate::constants::{EARTH_MASS_KG, SOLAR_MASS_KG};

/// Earth masses per solar mass (M☉/M⊕)
pub const EARTH_MASSES_PER_SOLAR: f64 = SOLAR_MASS_KG / EARTH_MASS_KG;

/// A mass stored in solar masses
///
/// Stars are described in M☉ and planets in M⊕; both convert to kilograms
/// for the SI formulas.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let sun = Mass::from_solar_masses(1.0);
/// let earth = Mass::from_earth_masses(1.0);
///
/// assert_eq!(sun.to_kg(), 1.989e30);
/// assert!((earth.to_kg() / 5.972e24 - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    /// From solar masses
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// From Earth masses
    ///
    /// One solar mass is approximately 333,000 Earth masses.
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value / EARTH_MASSES_PER_SOLAR)
    }

    /// From kilograms
    pub fn from_kg(value: f64) -> Self {
        Self(value / SOLAR_MASS_KG)
    }

    /// In solar masses
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    /// In Earth masses
    pub fn to_earth_masses(&self) -> f64 {
        self.0 * EARTH_MASSES_PER_SOLAR
    }

    /// In kilograms
    pub fn to_kg(&self) -> f64 {
        self.0 * SOLAR_MASS_KG
    }
}
