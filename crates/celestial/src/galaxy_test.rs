//! Tests for the galaxy container and its star queries

use nalgebra::Point3;

use crate::body::CelestialObject;
use crate::error::ValidationError;
use crate::galaxy::{Galaxy, GalaxyParams};
use crate::star::StarParams;

fn milky_way() -> Galaxy {
    GalaxyParams::new("Milky Way", "Spiral", 0.0, 100_000.0, 1.5e12, 13.6)
        .build()
        .unwrap()
}

fn star(name: &str, mass: f64, age: f64, metallicity: f64) -> StarParams {
    StarParams::new(name, mass, 1.0, age, 1.0, 5778.0).with_metallicity(metallicity)
}

fn names<'a>(stars: &[&'a crate::star::Star]) -> Vec<&'a str> {
    stars.iter().map(|s| s.name()).collect()
}

// ========== Validation Tests ==========

#[test]
fn test_valid_galaxy() {
    let galaxy = milky_way();
    assert_eq!(galaxy.name(), "Milky Way");
    assert_eq!(galaxy.kind(), "Spiral");
    assert!(galaxy.stars().is_empty());
    assert_eq!(galaxy.position(), Point3::origin());
}

#[test]
fn test_negative_distance_rejected() {
    let result = GalaxyParams::new("G", "Spiral", -1.0, 1.0, 1.0, 1.0).build();
    assert!(matches!(
        result,
        Err(ValidationError::Negative {
            field: "distance",
            ..
        })
    ));
}

#[test]
fn test_non_positive_size_mass_age_rejected() {
    let cases = [
        ("size", GalaxyParams::new("G", "Spiral", 0.0, 0.0, 1.0, 1.0)),
        ("mass", GalaxyParams::new("G", "Spiral", 0.0, 1.0, 0.0, 1.0)),
        ("age", GalaxyParams::new("G", "Spiral", 0.0, 1.0, 1.0, 0.0)),
    ];
    for (expected, params) in cases {
        match params.build() {
            Err(ValidationError::NonPositive { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected {} to be rejected, got {:?}", expected, other),
        }
    }
}

#[test]
fn test_deserialize_with_stars() {
    let json = r#"{
        "name": "Andromeda", "type": "Spiral", "distance": 778000.0,
        "size": 220000.0, "mass": 1.0e12, "age": 10.0,
        "stars": [
            {"name": "A", "mass": 1.0, "radius": 1.0, "age": 4.6,
             "luminosity": 1.0, "temperature": 5778.0}
        ]
    }"#;
    let galaxy: Galaxy = serde_json::from_str(json).unwrap();
    assert_eq!(galaxy.kind(), "Spiral");
    assert_eq!(galaxy.stars().len(), 1);
}

// ========== Query Tests ==========

#[test]
fn test_habitable_stars_filter() {
    let mut galaxy = milky_way();
    for params in [
        star("A", 1.0, 4.6, 0.0),
        star("B", 0.5, 4.6, 0.0),
        star("C", 1.0, 0.5, 0.0),
        star("D", 1.0, 4.6, 0.8),
    ] {
        galaxy.add_star(params.build().unwrap());
    }

    assert_eq!(names(&galaxy.habitable_stars()), vec!["A"]);
}

#[test]
fn test_habitable_stars_boundaries_inclusive() {
    let mut galaxy = milky_way();
    for params in [
        star("low-mass", 0.8, 1.0, -0.5),
        star("high-mass", 1.2, 1.0, 0.5),
        star("too-light", 0.79, 5.0, 0.0),
        star("too-heavy", 1.21, 5.0, 0.0),
        star("metal-poor", 1.0, 5.0, -0.51),
    ] {
        galaxy.add_star(params.build().unwrap());
    }

    assert_eq!(
        names(&galaxy.habitable_stars()),
        vec!["low-mass", "high-mass"]
    );
}

#[test]
fn test_habitable_stars_preserves_order() {
    let mut galaxy = milky_way();
    for name in ["Z", "M", "A"] {
        galaxy.add_star(star(name, 1.0, 5.0, 0.0).build().unwrap());
    }
    assert_eq!(names(&galaxy.habitable_stars()), vec!["Z", "M", "A"]);
}

#[test]
fn test_stars_in_region() {
    let mut galaxy = milky_way();
    galaxy.add_star(star("near", 1.0, 5.0, 0.0).with_position(1.0, 0.0, 0.0).build().unwrap());
    galaxy.add_star(star("edge", 1.0, 5.0, 0.0).with_position(0.0, 3.0, 4.0).build().unwrap());
    galaxy.add_star(star("far", 1.0, 5.0, 0.0).with_position(10.0, 0.0, 0.0).build().unwrap());

    let found = galaxy.stars_in_region(Point3::origin(), 5.0);
    assert_eq!(names(&found), vec!["near", "edge"]);

    let around_far = galaxy.stars_in_region(Point3::new(10.0, 0.0, 0.0), 1.0);
    assert_eq!(names(&around_far), vec!["far"]);
}

#[test]
fn test_empty_galaxy_queries() {
    let galaxy = milky_way();
    assert!(galaxy.habitable_stars().is_empty());
    assert!(galaxy.stars_in_region(Point3::origin(), 1e9).is_empty());
}
