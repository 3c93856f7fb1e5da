//! Celestial entity model
//!
//! Validated records for stars, planets and galaxies. Every entity is built
//! through a parameter record whose `build` runs all invariant checks, so an
//! existing value is always valid. The only mutations are appending a planet
//! to a star and a star to a galaxy.

pub mod atmosphere;
pub mod body;
pub mod error;
pub mod galaxy;
pub mod planet;
pub mod sampling;
pub mod star;

#[cfg(test)]
mod galaxy_test;

pub use atmosphere::Atmosphere;
pub use body::CelestialObject;
pub use error::ValidationError;
pub use galaxy::{Galaxy, GalaxyParams};
pub use planet::{HostStar, Planet, PlanetParams};
pub use star::{Star, StarParams, StarPreset};
