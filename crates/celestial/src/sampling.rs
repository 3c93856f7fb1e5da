//! Reproducible synthetic star fields
//!
//! Generates main-sequence stars with plausible mass, luminosity,
//! temperature, age, metallicity and position distributions. Used for demos
//! and for exercising the galaxy queries without a catalog.

use std::f64::consts::PI;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use units::Length;

use crate::error::ValidationError;
use crate::galaxy::{Galaxy, GalaxyParams};
use crate::star::StarParams;

/// Solar effective temperature (K)
const SOLAR_TEMPERATURE: f64 = 5778.0;
/// Upper mass limit for sampled stars (M☉)
const MAX_STELLAR_MASS: f64 = 10.0;

/// Sample from a Gaussian (normal) distribution using Box-Muller transform
pub fn sample_gaussian(rng: &mut ChaChaRng, mean: f64, std_dev: f64) -> f64 {
    // Shift into (0, 1] so ln(u1) stays finite
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Sample from p(x) ∝ x^α between x_min and x_max by inverse transform
pub fn sample_power_law(rng: &mut ChaChaRng, x_min: f64, x_max: f64, alpha: f64) -> f64 {
    let u: f64 = rng.random();
    let alpha1 = alpha + 1.0;
    (u * (x_max.powf(alpha1) - x_min.powf(alpha1)) + x_min.powf(alpha1)).powf(1.0 / alpha1)
}

/// Sample stellar mass from a Kroupa (2001) broken power law
///
/// - 0.08 ≤ M < 0.5 M☉: α = -1.3
/// - M ≥ 0.5 M☉: α = -2.3
pub fn sample_mass_kroupa(rng: &mut ChaChaRng, max_mass: f64) -> f64 {
    let rand: f64 = rng.random();

    if rand < 0.80 {
        sample_power_law(rng, 0.08, max_mass.min(0.5), -1.3)
    } else if rand < 0.95 {
        sample_power_law(rng, 0.5, max_mass.min(1.0), -2.3)
    } else {
        sample_power_law(rng, 1.0, max_mass, -2.3)
    }
}

/// Main-sequence mass-luminosity relation (L☉ from M☉)
pub fn main_sequence_luminosity(mass: f64) -> f64 {
    match mass {
        m if m < 0.43 => 0.23 * m.powf(2.3),
        m if m < 2.0 => m.powi(4),
        m if m < 55.0 => 1.4 * m.powf(3.5),
        m => 32_000.0 * m,
    }
}

/// Main-sequence mass-radius relation (R☉ from M☉)
pub fn main_sequence_radius(mass: f64) -> f64 {
    mass.powf(0.8)
}

/// Effective temperature from luminosity and radius via Stefan-Boltzmann
///
/// T = T☉ × (L / R²)^0.25
pub fn effective_temperature(luminosity: f64, radius: f64) -> f64 {
    SOLAR_TEMPERATURE * (luminosity / radius.powi(2)).powf(0.25)
}

/// Uniformly distributed point inside a sphere of `radius`, by rejection
fn sample_in_sphere(rng: &mut ChaChaRng, radius: f64) -> [f64; 3] {
    loop {
        let x = rng.random_range(-1.0..=1.0);
        let y = rng.random_range(-1.0..=1.0);
        let z = rng.random_range(-1.0..=1.0);
        if x * x + y * y + z * z <= 1.0 {
            return [x * radius, y * radius, z * radius];
        }
    }
}

/// Sample a single main-sequence star at a random position
pub fn sample_star(rng: &mut ChaChaRng, name: impl Into<String>, field_radius: f64) -> StarParams {
    let mass = sample_mass_kroupa(rng, MAX_STELLAR_MASS);
    let luminosity = main_sequence_luminosity(mass);
    let radius = main_sequence_radius(mass);
    let temperature = effective_temperature(luminosity, radius);
    let age = rng.random_range(0.1..10.0);
    let metallicity = sample_gaussian(rng, 0.0, 0.2).clamp(-1.0, 0.5);
    let activity = rng.random_range(0.0..0.3);
    let [x, y, z] = sample_in_sphere(rng, field_radius);

    StarParams::new(name, mass, radius, age, luminosity, temperature)
        .with_metallicity(metallicity)
        .with_activity(activity)
        .with_position(x, y, z)
}

/// Build a reproducible synthetic galaxy of `count` stars
///
/// Stars are spread uniformly through a sphere of `field_radius` parsecs
/// around the origin. The same seed always yields the same galaxy.
///
/// # Examples
/// ```
/// use celestial::sampling::synthetic_galaxy;
///
/// let a = synthetic_galaxy(42, 100, 50.0).unwrap();
/// let b = synthetic_galaxy(42, 100, 50.0).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.stars().len(), 100);
/// ```
pub fn synthetic_galaxy(
    seed: u64,
    count: usize,
    field_radius: f64,
) -> Result<Galaxy, ValidationError> {
    let mut rng = ChaChaRng::seed_from_u64(seed);

    let stars: Vec<StarParams> = (0..count)
        .map(|i| sample_star(&mut rng, format!("SYN-{:05}", i + 1), field_radius))
        .collect();
    let total_mass: f64 = stars.iter().map(|s| s.mass).sum();

    let mut params = GalaxyParams::new(
        format!("Synthetic-{}", seed),
        "Synthetic",
        0.0,
        Length::from_parsecs(2.0 * field_radius).to_light_years(),
        total_mass.max(f64::MIN_POSITIVE),
        13.0,
    );
    params.stars = stars;

    tracing::debug!(seed, count, field_radius, "sampled synthetic galaxy");
    params.build()
}
