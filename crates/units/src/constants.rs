//! Physical constants in SI units
//!
//! A single fixed table shared by every calculator. Values follow IAU/CODATA
//! conventions at the precision the habitability models were calibrated with.

/// One astronomical unit in meters
pub const AU_TO_METERS: f64 = 1.496e11;

/// Solar mass in kilograms
pub const SOLAR_MASS_KG: f64 = 1.989e30;

/// Solar radius in meters
pub const SOLAR_RADIUS_M: f64 = 6.957e8;

/// Solar luminosity in watts
pub const SOLAR_LUMINOSITY_W: f64 = 3.828e26;

/// Earth mass in kilograms
pub const EARTH_MASS_KG: f64 = 5.972e24;

/// Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6.371e6;

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67430e-11;

/// Stefan-Boltzmann constant (W·m⁻²·K⁻⁴)
pub const STEFAN_BOLTZMANN: f64 = 5.670374419e-8;

/// Planck constant (J·s)
pub const PLANCK: f64 = 6.62607015e-34;

/// Speed of light in vacuum (m/s)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Offset between the Kelvin and Celsius scales
pub const KELVIN_TO_CELSIUS: f64 = 273.15;

/// One parsec in meters
pub const PARSEC_TO_METERS: f64 = 3.0857e16;

/// One light year in meters
pub const LIGHT_YEAR_TO_METERS: f64 = 9.4607e15;

/// Seconds in one day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Sun's effective temperature used as the zero point of the HZ flux fits (K)
pub const SOLAR_TEMPERATURE_K: f64 = 5780.0;
