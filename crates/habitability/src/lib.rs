//! Habitability and orbital dynamics calculators
//!
//! Pure functions over validated [`celestial`] entities: habitable zone
//! boundaries, equilibrium temperature, orbital stability and simplified
//! Keplerian motion, plus a [`SystemReport`] composing them for one star.

pub mod dynamics;
pub mod error;
pub mod habitable_zone;
pub mod report;
pub mod stability;
pub mod temperature;

#[cfg(test)]
mod dynamics_test;
#[cfg(test)]
mod temperature_test;

pub use dynamics::{
    calculate_escape_velocity, calculate_orbital_period, calculate_orbital_position,
    orbital_track, surface_gravity,
};
pub use error::{NumericError, PhysicsError};
pub use habitable_zone::{calculate_habitable_zone, Boundary, HabitableZone, HzModel};
pub use report::{PlanetReport, StarSummary, SystemReport};
pub use stability::{assess_orbital_stability, calculate_orbital_stability, StabilityAssessment};
pub use temperature::{calculate_planet_temperature, greenhouse_factor};
