//! Simplified Keplerian orbital dynamics
//!
//! Positions use a first-order eccentric anomaly `E ≈ M + e sin M` instead of
//! an iterative Kepler solve; accuracy degrades as eccentricity grows.

use std::f64::consts::PI;

use nalgebra::Point3;

use celestial::{CelestialObject, Planet};
use units::constants::G;
use units::{Length, Mass, Time};

use crate::error::{ensure_finite, PhysicsError};

/// Position of a planet relative to its star at `time_days` after periapsis
///
/// Returned in AU. The orbit lies in the x–y plane before inclination is
/// applied about the x axis; the periapsis is on +x.
///
/// # Errors
/// [`PhysicsError::OrbitalPosition`] when a coordinate is not finite, for
/// example with a non-finite time.
///
/// # Examples
/// ```
/// use celestial::PlanetParams;
/// use habitability::dynamics::calculate_orbital_position;
///
/// let planet = PlanetParams::new("P", 1.0, 1.0, 4.5, 2.0, 0.0).build().unwrap();
/// let start = calculate_orbital_position(&planet, 0.0).unwrap();
/// assert_eq!((start.x, start.y, start.z), (2.0, 0.0, 0.0));
/// ```
pub fn calculate_orbital_position(
    planet: &Planet,
    time_days: f64,
) -> Result<Point3<f64>, PhysicsError> {
    let a = planet.orbital_distance();
    let e = planet.eccentricity();
    let inclination = planet.inclination().to_radians();

    let mean_motion = 2.0 * PI / planet.orbital_period();
    let mean_anomaly = mean_motion * time_days;
    let eccentric_anomaly = mean_anomaly + e * mean_anomaly.sin();
    let true_anomaly =
        2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * (eccentric_anomaly / 2.0).tan()).atan();

    let r = a * (1.0 - e.powi(2)) / (1.0 + e * true_anomaly.cos());
    let position = Point3::new(
        r * true_anomaly.cos(),
        r * true_anomaly.sin() * inclination.cos(),
        r * true_anomaly.sin() * inclination.sin(),
    );

    let to_error = |source| PhysicsError::OrbitalPosition {
        planet: planet.name().to_string(),
        source,
    };
    ensure_finite("x", position.x).map_err(to_error)?;
    ensure_finite("y", position.y).map_err(to_error)?;
    ensure_finite("z", position.z).map_err(to_error)?;

    Ok(position)
}

/// `samples` positions spread evenly over one orbital period, starting at t = 0
pub fn orbital_track(planet: &Planet, samples: usize) -> Result<Vec<Point3<f64>>, PhysicsError> {
    let step = planet.orbital_period() / samples.max(1) as f64;
    (0..samples)
        .map(|i| calculate_orbital_position(planet, i as f64 * step))
        .collect()
}

/// Escape velocity at the surface in m/s
///
/// `sqrt(2 G m / r)` with mass and radius converted from Earth units.
pub fn calculate_escape_velocity(planet: &Planet) -> f64 {
    let mass = Mass::from_earth_masses(planet.mass()).to_kg();
    let radius = Length::from_earth_radii(planet.radius()).to_m();
    (2.0 * G * mass / radius).sqrt()
}

/// Surface gravity in m/s² derived from mass and radius
pub fn surface_gravity(planet: &Planet) -> f64 {
    let mass = Mass::from_earth_masses(planet.mass()).to_kg();
    let radius = Length::from_earth_radii(planet.radius()).to_m();
    G * mass / radius.powi(2)
}

/// Kepler's third law period in days: `2π sqrt(a³ / (G M))`
///
/// # Errors
/// [`PhysicsError::MissingHost`] if the planet is not attached to a star,
/// [`PhysicsError::OrbitalPeriod`] if the result is not finite.
pub fn calculate_orbital_period(planet: &Planet) -> Result<f64, PhysicsError> {
    let host = planet.host().ok_or_else(|| PhysicsError::MissingHost {
        planet: planet.name().to_string(),
    })?;

    let a = Length::from_au(planet.orbital_distance()).to_m();
    let star_mass = Mass::from_solar_masses(host.mass).to_kg();
    let period = Time::from_seconds(2.0 * PI * (a.powi(3) / (G * star_mass)).sqrt());

    ensure_finite("orbital period", period.to_days()).map_err(|source| {
        PhysicsError::OrbitalPeriod {
            planet: planet.name().to_string(),
            source,
        }
    })
}
