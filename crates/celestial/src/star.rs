//! Star representation, construction and reference presets

use std::fmt;
use std::str::FromStr;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::body::{BodyCore, CelestialObject};
use crate::error::{ensure_non_negative, ensure_positive, ValidationError};
use crate::planet::{HostStar, Planet, PlanetParams};

/// Classical HZ inner-edge flux (S/S☉)
const CLASSIC_INNER_FLUX: f64 = 1.1;
/// Classical HZ outer-edge flux (S/S☉)
const CLASSIC_OUTER_FLUX: f64 = 0.53;

/// Construction parameters for a [`Star`]
///
/// Mass, radius and luminosity are in solar units, age in Gyr, position in
/// parsecs. Planets listed here are validated and attached by `build`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarParams {
    pub name: String,
    pub mass: f64,
    pub radius: f64,
    pub age: f64,
    pub luminosity: f64,
    /// Effective temperature (K)
    pub temperature: f64,
    /// [Fe/H] in dex (0.0 = solar)
    #[serde(default)]
    pub metallicity: f64,
    /// Activity level on a 0-1 scale
    #[serde(default)]
    pub activity: f64,
    /// km/s
    #[serde(default)]
    pub rotation_velocity: f64,
    #[serde(default)]
    pub spectral_type: Option<String>,
    #[serde(default)]
    pub planets: Vec<PlanetParams>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl StarParams {
    /// Parameters with the required attributes; the rest start at solar values
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        radius: f64,
        age: f64,
        luminosity: f64,
        temperature: f64,
    ) -> Self {
        Self {
            name: name.into(),
            mass,
            radius,
            age,
            luminosity,
            temperature,
            metallicity: 0.0,
            activity: 0.0,
            rotation_velocity: 0.0,
            spectral_type: None,
            planets: Vec::new(),
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// The Sun: 1 M☉, 1 R☉, 4.6 Gyr, 1 L☉, 5778 K
    pub fn solar(name: impl Into<String>) -> Self {
        Self::new(name, 1.0, 1.0, 4.6, 1.0, 5778.0).with_spectral_type("G2V")
    }

    pub fn with_metallicity(mut self, metallicity: f64) -> Self {
        self.metallicity = metallicity;
        self
    }

    pub fn with_activity(mut self, activity: f64) -> Self {
        self.activity = activity;
        self
    }

    pub fn with_spectral_type(mut self, spectral_type: impl Into<String>) -> Self {
        self.spectral_type = Some(spectral_type.into());
        self
    }

    /// Galactic coordinates in parsecs
    pub fn with_position(mut self, x: f64, y: f64, z: f64) -> Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    pub fn with_planet(mut self, planet: PlanetParams) -> Self {
        self.planets.push(planet);
        self
    }

    /// Validate and build the star, attaching any listed planets
    pub fn build(self) -> Result<Star, ValidationError> {
        Star::try_from(self)
    }
}

/// A validated star and the planets it owns
///
/// # Examples
/// ```
/// use celestial::{PlanetParams, StarParams};
///
/// let mut sun = StarParams::solar("Sun").build().unwrap();
/// let earth = PlanetParams::new("Earth", 1.0, 1.0, 4.5, 1.0, 0.017).build().unwrap();
/// sun.add_planet(earth);
///
/// assert_eq!(sun.planets()[0].host().map(|h| h.name.as_str()), Some("Sun"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StarParams")]
pub struct Star {
    #[serde(flatten)]
    body: BodyCore,
    luminosity: f64,
    temperature: f64,
    metallicity: f64,
    activity: f64,
    rotation_velocity: f64,
    spectral_type: Option<String>,
    planets: Vec<Planet>,
    x: f64,
    y: f64,
    z: f64,
}

impl TryFrom<StarParams> for Star {
    type Error = ValidationError;

    fn try_from(params: StarParams) -> Result<Self, Self::Error> {
        let body = BodyCore::new(params.name, params.mass, params.radius, params.age)?;

        let luminosity = ensure_positive("luminosity", params.luminosity)?;
        let temperature = ensure_positive("temperature", params.temperature)?;
        if !(0.0..=1.0).contains(&params.activity) {
            return Err(ValidationError::OutOfRange {
                field: "activity",
                value: params.activity,
                range: "[0, 1]",
            });
        }
        let rotation_velocity = ensure_non_negative("rotation_velocity", params.rotation_velocity)?;

        let mut star = Self {
            body,
            luminosity,
            temperature,
            metallicity: params.metallicity,
            activity: params.activity,
            rotation_velocity,
            spectral_type: params.spectral_type,
            planets: Vec::with_capacity(params.planets.len()),
            x: params.x,
            y: params.y,
            z: params.z,
        };

        for planet in params.planets {
            star.add_planet(planet.build()?);
        }

        Ok(star)
    }
}

impl CelestialObject for Star {
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

impl Star {
    /// Luminosity in solar luminosities (L☉)
    pub fn luminosity(&self) -> f64 {
        self.luminosity
    }

    /// Effective temperature in Kelvin
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Metallicity [Fe/H] in dex
    pub fn metallicity(&self) -> f64 {
        self.metallicity
    }

    /// Activity level (0-1)
    pub fn activity(&self) -> f64 {
        self.activity
    }

    /// Rotation velocity in km/s
    pub fn rotation_velocity(&self) -> f64 {
        self.rotation_velocity
    }

    pub fn spectral_type(&self) -> Option<&str> {
        self.spectral_type.as_deref()
    }

    /// Planets in the order they were added
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Look up an attached planet by name
    pub fn planet(&self, name: &str) -> Option<&Planet> {
        self.planets.iter().find(|p| p.name() == name)
    }

    /// Galactic coordinates in parsecs
    pub fn position(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    /// Attach a planet to this star
    ///
    /// Sets the planet's host back-reference, replacing any previous one.
    pub fn add_planet(&mut self, mut planet: Planet) {
        planet.attach_to(HostStar::from(&*self));
        tracing::debug!(star = %self.name(), planet = %planet.name(), "attached planet");
        self.planets.push(planet);
    }

    /// Basic habitable zone estimate `(inner, outer)` in AU
    ///
    /// Classical flux limits of 1.1 and 0.53 S☉, with no age or activity
    /// correction.
    pub fn estimate_habitable_zone(&self) -> (f64, f64) {
        let inner = (self.luminosity / CLASSIC_INNER_FLUX).sqrt();
        let outer = (self.luminosity / CLASSIC_OUTER_FLUX).sqrt();
        (inner, outer)
    }
}

/// Reference star types offered for quick exploration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarPreset {
    /// G2V, Sun-like
    SunLike,
    /// M5V red dwarf
    RedDwarf,
    /// F0V, hot
    Hot,
    /// K2V, orange
    Orange,
}

impl StarPreset {
    pub const ALL: [StarPreset; 4] = [Self::SunLike, Self::RedDwarf, Self::Hot, Self::Orange];

    /// Effective temperature in Kelvin
    pub fn temperature(&self) -> f64 {
        match self {
            Self::SunLike => 5778.0,
            Self::RedDwarf => 3042.0,
            Self::Hot => 7220.0,
            Self::Orange => 4400.0,
        }
    }

    /// Luminosity in L☉
    pub fn luminosity(&self) -> f64 {
        match self {
            Self::SunLike => 1.0,
            Self::RedDwarf => 0.0017,
            Self::Hot => 6.3,
            Self::Orange => 0.29,
        }
    }

    /// Typical `(mass M☉, radius R☉)` for the spectral type
    pub fn mass_and_radius(&self) -> (f64, f64) {
        match self {
            Self::SunLike => (1.0, 1.0),
            Self::RedDwarf => (0.16, 0.2),
            Self::Hot => (1.6, 1.7),
            Self::Orange => (0.78, 0.8),
        }
    }

    pub fn spectral_type(&self) -> &'static str {
        match self {
            Self::SunLike => "G2V",
            Self::RedDwarf => "M5V",
            Self::Hot => "F0V",
            Self::Orange => "K2V",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::SunLike => "G2V (Sun-like)",
            Self::RedDwarf => "M5V (Red Dwarf)",
            Self::Hot => "F0V (Hot)",
            Self::Orange => "K2V (Orange)",
        }
    }

    /// Star parameters for this preset at solar age
    pub fn params(&self, name: impl Into<String>) -> StarParams {
        let (mass, radius) = self.mass_and_radius();
        StarParams::new(name, mass, radius, 4.6, self.luminosity(), self.temperature())
            .with_spectral_type(self.spectral_type())
    }
}

impl fmt::Display for StarPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for StarPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "g2v" | "sun" | "sun-like" => Ok(Self::SunLike),
            "m5v" | "red-dwarf" => Ok(Self::RedDwarf),
            "f0v" | "hot" => Ok(Self::Hot),
            "k2v" | "orange" => Ok(Self::Orange),
            other => Err(format!(
                "unknown star preset '{}', expected one of g2v, m5v, f0v, k2v",
                other
            )),
        }
    }
}
