//! Per-system summary combining every calculator
//!
//! A [`SystemReport`] is the render request handed to external plotting: the
//! star, its habitable zone and the derived properties of each planet.

use nalgebra::Point3;
use serde::Serialize;

use celestial::{CelestialObject, Planet, Star};

use crate::dynamics::{
    calculate_escape_velocity, calculate_orbital_period, orbital_track, surface_gravity,
};
use crate::error::PhysicsError;
use crate::habitable_zone::{calculate_habitable_zone, HabitableZone};
use crate::stability::{assess_orbital_stability, StabilityAssessment};
use crate::temperature::calculate_planet_temperature;

/// Stellar properties echoed into a report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarSummary {
    pub name: String,
    pub spectral_type: Option<String>,
    pub mass: f64,
    pub radius: f64,
    pub age: f64,
    pub luminosity: f64,
    pub temperature: f64,
    pub metallicity: f64,
    pub activity: f64,
    pub position: Point3<f64>,
}

impl From<&Star> for StarSummary {
    fn from(star: &Star) -> Self {
        Self {
            name: star.name().to_string(),
            spectral_type: star.spectral_type().map(str::to_string),
            mass: star.mass(),
            radius: star.radius(),
            age: star.age(),
            luminosity: star.luminosity(),
            temperature: star.temperature(),
            metallicity: star.metallicity(),
            activity: star.activity(),
            position: star.position(),
        }
    }
}

/// Derived properties of one planet
///
/// Fields backed by a fallible calculation are `None` when that calculation
/// failed; the failure is logged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetReport {
    pub name: String,
    /// AU
    pub orbital_distance: f64,
    pub eccentricity: f64,
    /// K
    pub temperature: Option<f64>,
    pub stability: Option<StabilityAssessment>,
    /// Kepler period in days
    pub period: Option<f64>,
    /// m/s
    pub escape_velocity: f64,
    /// m/s²
    pub surface_gravity: f64,
    pub in_conservative_zone: bool,
    pub in_optimistic_zone: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<Vec<Point3<f64>>>,
}

/// Habitable zone and planet properties for one star
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemReport {
    pub star: StarSummary,
    pub habitable_zone: HabitableZone,
    pub planets: Vec<PlanetReport>,
}

impl SystemReport {
    /// Report on `star` and every attached planet
    ///
    /// # Errors
    /// Only a habitable zone failure aborts the report. Planet-level
    /// failures leave the affected fields empty.
    pub fn for_star(star: &Star) -> Result<Self, PhysicsError> {
        Self::build(star, None)
    }

    /// Like [`SystemReport::for_star`], with `samples` orbit positions per planet
    pub fn with_tracks(star: &Star, samples: usize) -> Result<Self, PhysicsError> {
        Self::build(star, Some(samples))
    }

    fn build(star: &Star, track_samples: Option<usize>) -> Result<Self, PhysicsError> {
        let habitable_zone = calculate_habitable_zone(star)?;
        let planets = star
            .planets()
            .iter()
            .map(|planet| planet_report(planet, star, &habitable_zone, track_samples))
            .collect();

        Ok(Self {
            star: StarSummary::from(star),
            habitable_zone,
            planets,
        })
    }

    pub fn planet(&self, name: &str) -> Option<&PlanetReport> {
        self.planets.iter().find(|p| p.name == name)
    }
}

fn within((inner, outer): (f64, f64), distance: f64) -> bool {
    (inner..=outer).contains(&distance)
}

fn recover<T>(planet: &Planet, result: Result<T, PhysicsError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(planet = %planet.name(), error = %err, "omitting value from report");
            None
        }
    }
}

fn planet_report(
    planet: &Planet,
    star: &Star,
    zone: &HabitableZone,
    track_samples: Option<usize>,
) -> PlanetReport {
    let distance = planet.orbital_distance();

    PlanetReport {
        name: planet.name().to_string(),
        orbital_distance: distance,
        eccentricity: planet.eccentricity(),
        temperature: recover(planet, calculate_planet_temperature(planet, star)),
        stability: recover(planet, assess_orbital_stability(planet)),
        period: recover(planet, calculate_orbital_period(planet)),
        escape_velocity: calculate_escape_velocity(planet),
        surface_gravity: surface_gravity(planet),
        in_conservative_zone: within(zone.conservative(), distance),
        in_optimistic_zone: within(zone.optimistic(), distance),
        track: track_samples.and_then(|samples| recover(planet, orbital_track(planet, samples))),
    }
}
