//! Orbital stability from the Hill sphere and the Roche limit
//!
//! Values are taken straight from the planet and host records with no unit
//! conversion: semi-major axis in AU, planet mass in M⊕, stellar mass in M☉
//! and stellar radius in R☉. The comparison is a coarse heuristic and only
//! meaningful for callers using those conventions consistently.

use serde::Serialize;

use celestial::{CelestialObject, Planet};

use crate::error::PhysicsError;

/// Roche limit coefficient for a fluid body
const ROCHE_COEFFICIENT: f64 = 2.44;

/// Hill radius `a × (m_p / (3 m_s))^(1/3)`
pub fn hill_radius(semi_major_axis: f64, planet_mass: f64, star_mass: f64) -> f64 {
    semi_major_axis * (planet_mass / (3.0 * star_mass)).cbrt()
}

/// Roche limit `2.44 × R_s × (m_s / m_p)^(1/3)`
pub fn roche_limit(star_radius: f64, star_mass: f64, planet_mass: f64) -> f64 {
    ROCHE_COEFFICIENT * star_radius * (star_mass / planet_mass).cbrt()
}

/// Both radii behind a stability verdict
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StabilityAssessment {
    pub hill_radius: f64,
    pub roche_limit: f64,
    /// Hill radius strictly exceeds the Roche limit
    pub stable: bool,
}

/// Compare the planet's Hill radius against its Roche limit
///
/// # Errors
/// [`PhysicsError::MissingHost`] if the planet is not attached to a star.
pub fn assess_orbital_stability(planet: &Planet) -> Result<StabilityAssessment, PhysicsError> {
    let host = planet.host().ok_or_else(|| PhysicsError::MissingHost {
        planet: planet.name().to_string(),
    })?;

    let hill = hill_radius(planet.orbital_distance(), planet.mass(), host.mass);
    let roche = roche_limit(host.radius, host.mass, planet.mass());

    Ok(StabilityAssessment {
        hill_radius: hill,
        roche_limit: roche,
        stable: hill > roche,
    })
}

/// Whether the planet's orbit is stable against its host
///
/// # Examples
/// ```
/// use celestial::{PlanetParams, StarParams};
/// use habitability::stability::calculate_orbital_stability;
///
/// let mut sun = StarParams::solar("Sun").build().unwrap();
/// sun.add_planet(PlanetParams::new("Far", 1.0, 1.0, 4.5, 10.0, 0.0).build().unwrap());
///
/// assert!(calculate_orbital_stability(&sun.planets()[0]).unwrap());
/// ```
pub fn calculate_orbital_stability(planet: &Planet) -> Result<bool, PhysicsError> {
    Ok(assess_orbital_stability(planet)?.stable)
}
