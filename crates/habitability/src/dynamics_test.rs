//! Tests for orbital position, period and surface quantities

use approx::assert_relative_eq;
use nalgebra::Point3;

use celestial::{Planet, PlanetParams, StarParams};

use crate::dynamics::{
    calculate_escape_velocity, calculate_orbital_period, calculate_orbital_position,
    orbital_track, surface_gravity,
};
use crate::error::{NumericError, PhysicsError};

fn planet(distance: f64, eccentricity: f64) -> Planet {
    PlanetParams::new("P", 1.0, 1.0, 4.5, distance, eccentricity)
        .build()
        .unwrap()
}

fn assert_points_close(a: Point3<f64>, b: Point3<f64>) {
    assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
    assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
    assert_relative_eq!(a.z, b.z, epsilon = 1e-9);
}

// ========== Position Tests ==========

#[test]
fn test_position_at_epoch_circular() {
    let position = calculate_orbital_position(&planet(1.5, 0.0), 0.0).unwrap();
    assert_eq!(position, Point3::new(1.5, 0.0, 0.0));
}

#[test]
fn test_position_at_epoch_is_periapsis() {
    let position = calculate_orbital_position(&planet(2.0, 0.5), 0.0).unwrap();
    assert_relative_eq!(position.x, 1.0, max_relative = 1e-12);
    assert_eq!(position.y, 0.0);
    assert_eq!(position.z, 0.0);
}

#[test]
fn test_position_is_periodic() {
    let p = PlanetParams::new("P", 1.0, 1.0, 4.5, 1.3, 0.2)
        .with_inclination(15.0)
        .with_orbital_period(400.0)
        .build()
        .unwrap();

    for t in [13.0, 97.5, 250.0] {
        let first = calculate_orbital_position(&p, t).unwrap();
        let later = calculate_orbital_position(&p, t + 400.0).unwrap();
        assert_points_close(first, later);
    }
}

#[test]
fn test_circular_quarter_orbit() {
    let p = planet(1.0, 0.0);
    let quarter = calculate_orbital_position(&p, 365.25 / 4.0).unwrap();
    assert_points_close(quarter, Point3::new(0.0, 1.0, 0.0));
}

#[test]
fn test_distance_stays_between_apsides() {
    let p = planet(1.0, 0.3);
    for i in 0..36 {
        let r = calculate_orbital_position(&p, i as f64 * 10.0)
            .unwrap()
            .coords
            .norm();
        assert!(r >= 0.7 - 1e-9 && r <= 1.3 + 1e-9, "r = {}", r);
    }
}

#[test]
fn test_inclination_tilts_orbit_about_x() {
    let p = PlanetParams::new("P", 1.0, 1.0, 4.5, 1.0, 0.0)
        .with_inclination(90.0)
        .build()
        .unwrap();
    let quarter = calculate_orbital_position(&p, 365.25 / 4.0).unwrap();
    assert_points_close(quarter, Point3::new(0.0, 0.0, 1.0));
}

#[test]
fn test_non_finite_time_fails() {
    let err = calculate_orbital_position(&planet(1.0, 0.1), f64::NAN).unwrap_err();
    assert!(matches!(
        err,
        PhysicsError::OrbitalPosition {
            source: NumericError::NonFinite { .. },
            ..
        }
    ));
}

#[test]
fn test_orbital_track() {
    let p = planet(1.0, 0.1);
    let track = orbital_track(&p, 90).unwrap();
    assert_eq!(track.len(), 90);
    assert_points_close(track[0], calculate_orbital_position(&p, 0.0).unwrap());
    assert!(orbital_track(&p, 0).unwrap().is_empty());
}

// ========== Period Tests ==========

#[test]
fn test_earth_period() {
    let mut sun = StarParams::solar("Sun").build().unwrap();
    sun.add_planet(planet(1.0, 0.017));

    let period = calculate_orbital_period(&sun.planets()[0]).unwrap();
    assert!((period - 365.25).abs() < 0.5, "period {}", period);
}

#[test]
fn test_period_scales_with_three_halves_power() {
    let mut sun = StarParams::solar("Sun").build().unwrap();
    sun.add_planet(planet(1.0, 0.0));
    sun.add_planet(planet(4.0, 0.0));

    let inner = calculate_orbital_period(&sun.planets()[0]).unwrap();
    let outer = calculate_orbital_period(&sun.planets()[1]).unwrap();
    assert_relative_eq!(outer / inner, 8.0, max_relative = 1e-12);
}

#[test]
fn test_period_missing_host() {
    let err = calculate_orbital_period(&planet(1.0, 0.0)).unwrap_err();
    assert!(matches!(err, PhysicsError::MissingHost { .. }));
}

// ========== Surface Tests ==========

#[test]
fn test_earth_escape_velocity() {
    let v = calculate_escape_velocity(&planet(1.0, 0.0));
    assert_relative_eq!(v, 11186.0, epsilon = 5.0);
}

#[test]
fn test_earth_surface_gravity() {
    let g = surface_gravity(&planet(1.0, 0.0));
    assert_relative_eq!(g, 9.82, epsilon = 0.01);
}

#[test]
fn test_escape_velocity_scaling() {
    let big = PlanetParams::new("Big", 4.0, 1.0, 4.5, 1.0, 0.0).build().unwrap();
    let ratio = calculate_escape_velocity(&big) / calculate_escape_velocity(&planet(1.0, 0.0));
    assert_relative_eq!(ratio, 2.0, max_relative = 1e-12);
}
