//! Galaxy container and star queries

use std::ops::RangeInclusive;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::body::CelestialObject;
use crate::error::{ensure_non_negative, ensure_positive, ValidationError};
use crate::star::{Star, StarParams};

/// Host masses similar to the Sun (M☉)
const HABITABLE_MASS: RangeInclusive<f64> = 0.8..=1.2;
/// Minimum age allowing time for life to develop (Gyr)
const HABITABLE_MIN_AGE: f64 = 1.0;
/// Metallicity range for rocky-planet formation ([Fe/H])
const HABITABLE_METALLICITY: RangeInclusive<f64> = -0.5..=0.5;

/// Construction parameters for a [`Galaxy`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalaxyParams {
    pub name: String,
    /// Morphological category (Spiral, Elliptical, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Distance from the origin in parsecs
    pub distance: f64,
    /// Diameter in light years
    pub size: f64,
    /// Solar masses
    pub mass: f64,
    /// Gyr
    pub age: f64,
    #[serde(default)]
    pub stars: Vec<StarParams>,
    #[serde(default)]
    pub position: [f64; 3],
}

impl GalaxyParams {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        distance: f64,
        size: f64,
        mass: f64,
        age: f64,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            distance,
            size,
            mass,
            age,
            stars: Vec::new(),
            position: [0.0; 3],
        }
    }

    /// Validate and build the galaxy, including any listed stars
    pub fn build(self) -> Result<Galaxy, ValidationError> {
        Galaxy::try_from(self)
    }
}

/// A validated galaxy owning an ordered collection of stars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GalaxyParams")]
pub struct Galaxy {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    distance: f64,
    size: f64,
    mass: f64,
    age: f64,
    stars: Vec<Star>,
    position: [f64; 3],
}

impl TryFrom<GalaxyParams> for Galaxy {
    type Error = ValidationError;

    fn try_from(params: GalaxyParams) -> Result<Self, Self::Error> {
        let distance = ensure_non_negative("distance", params.distance)?;
        let size = ensure_positive("size", params.size)?;
        let mass = ensure_positive("mass", params.mass)?;
        let age = ensure_positive("age", params.age)?;

        let stars = params
            .stars
            .into_iter()
            .map(StarParams::build)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: params.name,
            kind: params.kind,
            distance,
            size,
            mass,
            age,
            stars,
            position: params.position,
        })
    }
}

impl Galaxy {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Morphological category label
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Distance from the origin in parsecs
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Diameter in light years
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Total mass in solar masses
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Age in Gyr
    pub fn age(&self) -> f64 {
        self.age
    }

    pub fn position(&self) -> Point3<f64> {
        Point3::from(self.position)
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Append a star to the galaxy
    pub fn add_star(&mut self, star: Star) {
        self.stars.push(star);
    }

    /// Stars that could plausibly host habitable planets
    ///
    /// Sun-like mass (0.8-1.2 M☉), at least 1 Gyr old, and [Fe/H] within
    /// ±0.5 dex.
    pub fn habitable_stars(&self) -> Vec<&Star> {
        self.stars
            .iter()
            .filter(|star| {
                HABITABLE_MASS.contains(&star.mass())
                    && star.age() >= HABITABLE_MIN_AGE
                    && HABITABLE_METALLICITY.contains(&star.metallicity())
            })
            .collect()
    }

    /// Stars within `radius` parsecs of `center` (boundary inclusive)
    pub fn stars_in_region(&self, center: Point3<f64>, radius: f64) -> Vec<&Star> {
        self.stars
            .iter()
            .filter(|star| nalgebra::distance(&center, &star.position()) <= radius)
            .collect()
    }
}
