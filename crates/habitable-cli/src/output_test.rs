use nalgebra::Point3;

use celestial::{PlanetParams, StarParams};
use habitability::{calculate_habitable_zone, SystemReport};

use crate::output::{write_position, write_report, write_stars, write_zone};

fn render<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
{
    let mut buffer = Vec::new();
    f(&mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_zone_lists_every_model() {
    let sun = StarParams::solar("Sun").build().unwrap();
    let zone = calculate_habitable_zone(&sun).unwrap();
    let text = render(|out| write_zone(out, &sun, &zone));

    assert!(text.starts_with("Sun (G2V)"));
    for model in ["recent_venus", "runaway_greenhouse", "early_mars", "classic"] {
        assert!(text.contains(model), "missing {} in\n{}", model, text);
    }
    assert!(text.contains("Conservative zone: 0.9503 - 1.6761 AU"), "{}", text);
}

#[test]
fn test_report_classifies_planets() {
    let sun = StarParams::solar("Sun")
        .with_planet(PlanetParams::new("Earth", 1.0, 1.0, 4.5, 1.0, 0.017))
        .with_planet(PlanetParams::new("Far", 1.0, 1.0, 4.5, 30.0, 0.0))
        .build()
        .unwrap();
    let report = SystemReport::for_star(&sun).unwrap();
    let text = render(|out| write_report(out, &sun, &report));

    assert!(text.contains("Earth at 1.000 AU"));
    assert!(text.contains("unstable, conservative HZ"));
    assert!(text.contains("stable, outside HZ"));
}

#[test]
fn test_report_without_planets() {
    let sun = StarParams::solar("Sun").build().unwrap();
    let report = SystemReport::for_star(&sun).unwrap();
    assert!(render(|out| write_report(out, &sun, &report)).ends_with("No planets\n"));
}

#[test]
fn test_position_line() {
    let text = render(|out| write_position(out, "Earth", 0.0, &Point3::new(1.0, 0.0, 0.0)));
    assert_eq!(
        text,
        "Earth at t = 0 d: (1.000000, 0.000000, 0.000000) AU, r = 1.000000 AU\n"
    );
}

#[test]
fn test_star_listing_counts() {
    let stars = [
        StarParams::solar("A").build().unwrap(),
        StarParams::solar("B").build().unwrap(),
    ];
    let mut buffer = Vec::new();
    let count = write_stars(&mut buffer, stars.iter()).unwrap();
    assert_eq!(count, 2);
    assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 2);
}
