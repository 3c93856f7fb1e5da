//! Planetary equilibrium temperature with a simple greenhouse adjustment
//!
//! The greenhouse factor is a linear weighting of gas concentrations, not a
//! radiative transfer model.

use std::f64::consts::PI;

use celestial::{Atmosphere, CelestialObject, Planet, Star};
use units::constants::{SOLAR_LUMINOSITY_W, STEFAN_BOLTZMANN};
use units::Length;

use crate::error::{ensure_finite, PhysicsError};

/// Warming weight per unit concentration for each recognized gas
pub static GREENHOUSE_WEIGHTS: [(&str, f64); 5] = [
    ("CO2", 0.3),
    ("CH4", 0.4),
    ("H2O", 0.2),
    ("N2", 0.05),
    ("O2", 0.05),
];

/// Weight of a gas, if it contributes to warming
pub fn greenhouse_weight(gas: &str) -> Option<f64> {
    GREENHOUSE_WEIGHTS
        .iter()
        .find(|(name, _)| *name == gas)
        .map(|(_, weight)| *weight)
}

/// Multiplicative warming from the atmosphere
///
/// `1 + Σ weight × concentration`; unrecognized gases contribute nothing.
///
/// # Examples
/// ```
/// use celestial::Atmosphere;
/// use habitability::temperature::greenhouse_factor;
///
/// assert_eq!(greenhouse_factor(&Atmosphere::empty()), 1.0);
/// let co2 = Atmosphere::new([("CO2", 1.0)]).unwrap();
/// assert!((greenhouse_factor(&co2) - 1.3).abs() < 1e-12);
/// ```
pub fn greenhouse_factor(atmosphere: &Atmosphere) -> f64 {
    1.0 + atmosphere
        .iter()
        .filter_map(|(gas, concentration)| greenhouse_weight(gas).map(|w| w * concentration))
        .sum::<f64>()
}

/// Blackbody equilibrium temperature in Kelvin
///
/// Stellar flux at the semi-major axis is raised by `1/sqrt(1 - e²)` to
/// approximate the orbit-averaged flux, then balanced against emission over
/// the whole sphere.
///
/// # Arguments
/// * `luminosity` - Stellar luminosity (L☉)
/// * `distance` - Semi-major axis
/// * `eccentricity` - Orbital eccentricity
/// * `albedo` - Bond albedo
pub fn equilibrium_temperature(
    luminosity: f64,
    distance: Length,
    eccentricity: f64,
    albedo: f64,
) -> f64 {
    let flux = luminosity * SOLAR_LUMINOSITY_W / (4.0 * PI * distance.to_m().powi(2));
    let average_flux = flux * (1.0 / (1.0 - eccentricity.powi(2))).sqrt();
    (average_flux * (1.0 - albedo) / (4.0 * STEFAN_BOLTZMANN)).powf(0.25)
}

/// Equilibrium temperature of `planet` around `star`, with greenhouse warming
///
/// The greenhouse factor is applied only when the atmosphere has gases.
///
/// # Errors
/// [`PhysicsError::Temperature`] when the result is not finite.
pub fn calculate_planet_temperature(planet: &Planet, star: &Star) -> Result<f64, PhysicsError> {
    let mut temperature = equilibrium_temperature(
        star.luminosity(),
        Length::from_au(planet.orbital_distance()),
        planet.eccentricity(),
        planet.albedo(),
    );
    if !planet.atmosphere().is_empty() {
        temperature *= greenhouse_factor(planet.atmosphere());
    }

    let temperature = ensure_finite("temperature", temperature).map_err(|source| {
        PhysicsError::Temperature {
            planet: planet.name().to_string(),
            source,
        }
    })?;

    tracing::debug!(planet = %planet.name(), star = %star.name(), temperature, "computed temperature");
    Ok(temperature)
}
