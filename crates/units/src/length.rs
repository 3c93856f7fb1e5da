use serde::{Deserialize, Serialize};

use crate::constants::{
    AU_TO_METERS, EARTH_RADIUS_M, LIGHT_YEAR_TO_METERS, PARSEC_TO_METERS, SOLAR_RADIUS_M,
};

/// A distance stored in astronomical units
///
/// AU is the unit every habitable-zone boundary and orbital distance is
/// quoted in; SI meters are derived on demand.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let earth_orbit = Length::from_au(1.0);
/// assert_eq!(earth_orbit.to_m(), 1.496e11);
///
/// let sun = Length::from_solar_radii(1.0);
/// assert!(sun.to_au() < 0.005);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    /// From astronomical units
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// From meters
    pub fn from_meters(value: f64) -> Self {
        Self(value / AU_TO_METERS)
    }

    /// From Earth radii
    pub fn from_earth_radii(value: f64) -> Self {
        Self(value * EARTH_RADIUS_M / AU_TO_METERS)
    }

    /// From solar radii
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_M / AU_TO_METERS)
    }

    /// From parsecs
    pub fn from_parsecs(value: f64) -> Self {
        Self(value * PARSEC_TO_METERS / AU_TO_METERS)
    }

    /// From light years
    pub fn from_light_years(value: f64) -> Self {
        Self(value * LIGHT_YEAR_TO_METERS / AU_TO_METERS)
    }

    /// In astronomical units
    pub fn to_au(&self) -> f64 {
        self.0
    }

    /// In meters
    pub fn to_m(&self) -> f64 {
        self.0 * AU_TO_METERS
    }

    /// In Earth radii
    pub fn to_earth_radii(&self) -> f64 {
        self.to_m() / EARTH_RADIUS_M
    }

    /// In solar radii
    pub fn to_solar_radii(&self) -> f64 {
        self.to_m() / SOLAR_RADIUS_M
    }

    /// In parsecs
    pub fn to_parsecs(&self) -> f64 {
        self.to_m() / PARSEC_TO_METERS
    }

    /// In light years
    pub fn to_light_years(&self) -> f64 {
        self.to_m() / LIGHT_YEAR_TO_METERS
    }
}
