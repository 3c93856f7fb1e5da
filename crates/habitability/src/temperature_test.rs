//! Tests for equilibrium temperature and greenhouse warming

use approx::assert_relative_eq;

use celestial::{Atmosphere, PlanetParams, StarParams};
use units::Length;

use crate::temperature::{
    calculate_planet_temperature, equilibrium_temperature, greenhouse_factor, greenhouse_weight,
};

// ========== Greenhouse Factor Tests ==========

#[test]
fn test_greenhouse_factor_empty() {
    assert_eq!(greenhouse_factor(&Atmosphere::empty()), 1.0);
}

#[test]
fn test_greenhouse_factor_pure_co2() {
    let atmosphere = Atmosphere::new([("CO2", 1.0)]).unwrap();
    assert_relative_eq!(greenhouse_factor(&atmosphere), 1.3);
}

#[test]
fn test_greenhouse_factor_unknown_gas_ignored() {
    let atmosphere = Atmosphere::new([("Ar", 0.9), ("He", 0.1)]).unwrap();
    assert_eq!(greenhouse_factor(&atmosphere), 1.0);
    assert!(greenhouse_weight("Ar").is_none());
}

#[test]
fn test_greenhouse_factor_weighted_sum() {
    let atmosphere =
        Atmosphere::new([("CH4", 0.5), ("H2O", 0.5), ("N2", 1.0), ("O2", 1.0)]).unwrap();
    // 0.4 * 0.5 + 0.2 * 0.5 + 0.05 + 0.05
    assert_relative_eq!(greenhouse_factor(&atmosphere), 1.4, max_relative = 1e-12);
}

#[test]
fn test_greenhouse_factor_unbounded() {
    let atmosphere = Atmosphere::new([("CO2", 100.0)]).unwrap();
    assert_relative_eq!(greenhouse_factor(&atmosphere), 31.0, max_relative = 1e-12);
}

#[test]
fn test_earth_like_factor() {
    let factor = greenhouse_factor(&Atmosphere::earth_like());
    assert_relative_eq!(factor, 1.0 + 0.78 * 0.05 + 0.21 * 0.05 + 0.0004 * 0.3, max_relative = 1e-12);
}

// ========== Equilibrium Temperature Tests ==========

#[test]
fn test_equilibrium_temperature_earth() {
    let temp = equilibrium_temperature(1.0, Length::from_au(1.0), 0.0, 0.3);
    assert!(
        (temp - 254.6).abs() < 0.5,
        "Earth equilibrium temp should be ~255K, got {}",
        temp
    );
}

#[test]
fn test_equilibrium_temperature_inverse_sqrt_distance() {
    let near = equilibrium_temperature(1.0, Length::from_au(1.0), 0.0, 0.3);
    let far = equilibrium_temperature(1.0, Length::from_au(4.0), 0.0, 0.3);
    assert_relative_eq!(near / far, 2.0, max_relative = 1e-12);
}

#[test]
fn test_eccentricity_raises_temperature() {
    let circular = equilibrium_temperature(1.0, Length::from_au(1.0), 0.0, 0.3);
    let eccentric = equilibrium_temperature(1.0, Length::from_au(1.0), 0.6, 0.3);
    // Average flux scales by 1/sqrt(1 - 0.36) = 1.25
    assert_relative_eq!(eccentric / circular, 1.25_f64.powf(0.25), max_relative = 1e-12);
}

#[test]
fn test_full_albedo_is_zero_kelvin() {
    assert_eq!(equilibrium_temperature(1.0, Length::from_au(1.0), 0.0, 1.0), 0.0);
}

// ========== Planet Temperature Tests ==========

#[test]
fn test_planet_temperature_airless() {
    let sun = StarParams::solar("Sun").build().unwrap();
    let planet = PlanetParams::new("Rock", 1.0, 1.0, 4.5, 1.0, 0.0).build().unwrap();

    let temp = calculate_planet_temperature(&planet, &sun).unwrap();
    assert_relative_eq!(
        temp,
        equilibrium_temperature(1.0, Length::from_au(1.0), 0.0, 0.3)
    );
}

#[test]
fn test_planet_temperature_with_atmosphere() {
    let sun = StarParams::solar("Sun").build().unwrap();
    let planet = PlanetParams::new("Earth", 1.0, 1.0, 4.5, 1.0, 0.0)
        .with_atmosphere(Atmosphere::earth_like())
        .build()
        .unwrap();

    let temp = calculate_planet_temperature(&planet, &sun).unwrap();
    let airless = equilibrium_temperature(1.0, Length::from_au(1.0), 0.0, 0.3);
    assert_relative_eq!(
        temp,
        airless * greenhouse_factor(&Atmosphere::earth_like()),
        max_relative = 1e-12
    );
    assert!((temp - 267.2).abs() < 0.5, "got {}", temp);
}

#[test]
fn test_planet_temperature_uses_given_star() {
    // The star argument is used even when the planet is unattached
    let bright = StarParams::new("Bright", 1.0, 1.0, 4.6, 16.0, 5778.0).build().unwrap();
    let sun = StarParams::solar("Sun").build().unwrap();
    let planet = PlanetParams::new("P", 1.0, 1.0, 4.5, 1.0, 0.0).build().unwrap();

    let hot = calculate_planet_temperature(&planet, &bright).unwrap();
    let mild = calculate_planet_temperature(&planet, &sun).unwrap();
    assert_relative_eq!(hot / mild, 2.0, max_relative = 1e-12);
}
