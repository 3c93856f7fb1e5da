//! Planet representation and its host-star back-reference

use serde::{Deserialize, Serialize};

use crate::atmosphere::Atmosphere;
use crate::body::{BodyCore, CelestialObject};
use crate::error::{ensure_positive, ValidationError};
use crate::star::Star;

/// Host star properties carried by an attached planet
///
/// A value snapshot of the owning star, set by [`Star::add_planet`]. Star
/// attributes never change after construction, so the snapshot stays in
/// sync without the planet holding a reference into its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostStar {
    /// Name of the owning star
    pub name: String,
    /// Stellar mass in solar masses (M☉)
    pub mass: f64,
    /// Stellar radius in solar radii (R☉)
    pub radius: f64,
    /// Stellar luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    /// Effective temperature (K)
    pub temperature: f64,
}

impl From<&Star> for HostStar {
    fn from(star: &Star) -> Self {
        Self {
            name: star.name().to_string(),
            mass: star.mass(),
            radius: star.radius(),
            luminosity: star.luminosity(),
            temperature: star.temperature(),
        }
    }
}

/// Construction parameters for a [`Planet`]
///
/// Mass is in Earth masses and radius in Earth radii. Optional attributes
/// start at Earth-like defaults; `build` validates everything.
///
/// # Examples
/// ```
/// use celestial::{Atmosphere, PlanetParams};
///
/// let earth = PlanetParams::new("Earth", 1.0, 1.0, 4.5, 1.0, 0.017)
///     .with_atmosphere(Atmosphere::earth_like())
///     .build()
///     .unwrap();
/// assert_eq!(earth.albedo(), 0.3);
///
/// assert!(PlanetParams::new("Rogue", 1.0, 1.0, 4.5, 1.0, 1.0).build().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetParams {
    pub name: String,
    /// Earth masses (M⊕)
    pub mass: f64,
    /// Earth radii (R⊕)
    pub radius: f64,
    /// Gyr
    pub age: f64,
    /// Semi-major axis in AU
    pub orbital_distance: f64,
    #[serde(default)]
    pub atmosphere: Atmosphere,
    /// Surface gravity (m/s²)
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    pub eccentricity: f64,
    /// Degrees
    #[serde(default)]
    pub inclination: f64,
    /// Bond albedo
    #[serde(default = "default_albedo")]
    pub albedo: f64,
    /// Hours
    #[serde(default = "default_rotation_period")]
    pub rotation_period: f64,
    /// Days
    #[serde(default = "default_orbital_period")]
    pub orbital_period: f64,
    /// g/cm³
    #[serde(default = "default_mean_density")]
    pub mean_density: f64,
    /// Kelvin
    #[serde(default)]
    pub surface_temperature: Option<f64>,
    /// Relative to Earth's field
    #[serde(default)]
    pub magnetic_field: Option<f64>,
}

fn default_gravity() -> f64 {
    9.81
}

fn default_albedo() -> f64 {
    0.3
}

fn default_rotation_period() -> f64 {
    24.0
}

fn default_orbital_period() -> f64 {
    365.25
}

fn default_mean_density() -> f64 {
    5.51
}

impl PlanetParams {
    /// Parameters with the required attributes and Earth-like defaults
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        radius: f64,
        age: f64,
        orbital_distance: f64,
        eccentricity: f64,
    ) -> Self {
        Self {
            name: name.into(),
            mass,
            radius,
            age,
            orbital_distance,
            atmosphere: Atmosphere::empty(),
            gravity: default_gravity(),
            eccentricity,
            inclination: 0.0,
            albedo: default_albedo(),
            rotation_period: default_rotation_period(),
            orbital_period: default_orbital_period(),
            mean_density: default_mean_density(),
            surface_temperature: None,
            magnetic_field: None,
        }
    }

    pub fn with_atmosphere(mut self, atmosphere: Atmosphere) -> Self {
        self.atmosphere = atmosphere;
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_inclination(mut self, degrees: f64) -> Self {
        self.inclination = degrees;
        self
    }

    pub fn with_albedo(mut self, albedo: f64) -> Self {
        self.albedo = albedo;
        self
    }

    pub fn with_orbital_period(mut self, days: f64) -> Self {
        self.orbital_period = days;
        self
    }

    /// Validate and build the planet
    pub fn build(self) -> Result<Planet, ValidationError> {
        Planet::try_from(self)
    }
}

/// A validated planet
///
/// Planets are created unattached; [`Star::add_planet`] sets the host
/// back-reference when the planet joins a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlanetParams")]
pub struct Planet {
    #[serde(flatten)]
    body: BodyCore,
    orbital_distance: f64,
    atmosphere: Atmosphere,
    gravity: f64,
    eccentricity: f64,
    inclination: f64,
    albedo: f64,
    rotation_period: f64,
    orbital_period: f64,
    mean_density: f64,
    surface_temperature: Option<f64>,
    magnetic_field: Option<f64>,
    #[serde(skip)]
    host: Option<HostStar>,
}

impl TryFrom<PlanetParams> for Planet {
    type Error = ValidationError;

    fn try_from(params: PlanetParams) -> Result<Self, Self::Error> {
        let body = BodyCore::new(params.name, params.mass, params.radius, params.age)?;

        let orbital_distance = ensure_positive("orbital_distance", params.orbital_distance)?;
        if !(0.0..1.0).contains(&params.eccentricity) {
            return Err(ValidationError::OutOfRange {
                field: "eccentricity",
                value: params.eccentricity,
                range: "[0, 1)",
            });
        }
        let orbital_period = ensure_positive("orbital_period", params.orbital_period)?;

        Ok(Self {
            body,
            orbital_distance,
            atmosphere: params.atmosphere,
            gravity: params.gravity,
            eccentricity: params.eccentricity,
            inclination: params.inclination,
            albedo: params.albedo,
            rotation_period: params.rotation_period,
            orbital_period,
            mean_density: params.mean_density,
            surface_temperature: params.surface_temperature,
            magnetic_field: params.magnetic_field,
            host: None,
        })
    }
}

impl CelestialObject for Planet {
    fn name(&self) -> &str {
        &self.body.name
    }

    fn mass(&self) -> f64 {
        self.body.mass
    }

    fn radius(&self) -> f64 {
        self.body.radius
    }

    fn age(&self) -> f64 {
        self.body.age
    }
}

impl Planet {
    /// Semi-major axis in AU
    pub fn orbital_distance(&self) -> f64 {
        self.orbital_distance
    }

    pub fn atmosphere(&self) -> &Atmosphere {
        &self.atmosphere
    }

    /// Surface gravity as given at construction (m/s²)
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Orbital inclination in degrees
    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    /// Bond albedo
    pub fn albedo(&self) -> f64 {
        self.albedo
    }

    /// Rotation period in hours
    pub fn rotation_period(&self) -> f64 {
        self.rotation_period
    }

    /// Orbital period in days
    pub fn orbital_period(&self) -> f64 {
        self.orbital_period
    }

    /// Mean density in g/cm³
    pub fn mean_density(&self) -> f64 {
        self.mean_density
    }

    /// Measured surface temperature in Kelvin, if known
    pub fn surface_temperature(&self) -> Option<f64> {
        self.surface_temperature
    }

    /// Magnetic field strength relative to Earth, if known
    pub fn magnetic_field(&self) -> Option<f64> {
        self.magnetic_field
    }

    /// The star this planet orbits, once attached
    pub fn host(&self) -> Option<&HostStar> {
        self.host.as_ref()
    }

    pub(crate) fn attach_to(&mut self, host: HostStar) {
        self.host = Some(host);
    }
}
