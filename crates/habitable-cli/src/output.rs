//! Plain-text rendering of calculation results

use std::io::{self, Write};

use nalgebra::Point3;

use celestial::{CelestialObject, Star};
use habitability::{Boundary, HabitableZone, SystemReport};

fn star_line(out: &mut impl Write, star: &Star) -> io::Result<()> {
    writeln!(
        out,
        "{} ({}): {:.3} M☉, {:.3} R☉, {:.4} L☉, {:.0} K, {:.2} Gyr",
        star.name(),
        star.spectral_type().unwrap_or("unclassified"),
        star.mass(),
        star.radius(),
        star.luminosity(),
        star.temperature(),
        star.age()
    )
}

pub fn write_zone(out: &mut impl Write, star: &Star, zone: &HabitableZone) -> io::Result<()> {
    star_line(out, star)?;
    writeln!(out, "Correction factor: {:.4}", zone.correction_factor())?;
    writeln!(out)?;
    for (model, boundary) in zone.iter() {
        match boundary {
            Boundary::Distance(d) => writeln!(out, "  {:<20} {:>10.4} AU", model.name(), d)?,
            Boundary::Range { inner, outer } => writeln!(
                out,
                "  {:<20} {:>10.4} - {:.4} AU",
                model.name(),
                inner,
                outer
            )?,
        }
    }
    let (inner, outer) = zone.conservative();
    writeln!(out, "\nConservative zone: {:.4} - {:.4} AU", inner, outer)?;
    let (inner, outer) = zone.optimistic();
    writeln!(out, "Optimistic zone:   {:.4} - {:.4} AU", inner, outer)
}

fn optional(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.*}", precision, v))
}

pub fn write_report(out: &mut impl Write, star: &Star, report: &SystemReport) -> io::Result<()> {
    write_zone(out, star, &report.habitable_zone)?;

    if report.planets.is_empty() {
        return writeln!(out, "\nNo planets");
    }

    writeln!(out, "\nPlanets:")?;
    for planet in &report.planets {
        let zone = match (planet.in_conservative_zone, planet.in_optimistic_zone) {
            (true, _) => "conservative HZ",
            (false, true) => "optimistic HZ",
            _ => "outside HZ",
        };
        let stability = match planet.stability {
            Some(s) if s.stable => "stable",
            Some(_) => "unstable",
            None => "unknown",
        };
        writeln!(
            out,
            "  {} at {:.3} AU (e = {:.3}): {} K, period {} d, v_esc {:.0} m/s, g {:.2} m/s², {}, {}",
            planet.name,
            planet.orbital_distance,
            planet.eccentricity,
            optional(planet.temperature, 1),
            optional(planet.period, 1),
            planet.escape_velocity,
            planet.surface_gravity,
            stability,
            zone
        )?;
    }
    Ok(())
}

pub fn write_position(
    out: &mut impl Write,
    planet: &str,
    time: f64,
    position: &Point3<f64>,
) -> io::Result<()> {
    writeln!(
        out,
        "{} at t = {} d: ({:.6}, {:.6}, {:.6}) AU, r = {:.6} AU",
        planet,
        time,
        position.x,
        position.y,
        position.z,
        position.coords.norm()
    )
}

pub fn write_stars<'a>(
    out: &mut impl Write,
    stars: impl IntoIterator<Item = &'a Star>,
) -> io::Result<usize> {
    let mut count = 0;
    for star in stars {
        let p = star.position();
        writeln!(
            out,
            "  {:<12} {:>6.3} M☉ {:>6.2} Gyr [Fe/H] {:>5.2}  ({:.2}, {:.2}, {:.2}) pc",
            star.name(),
            star.mass(),
            star.age(),
            star.metallicity(),
            p.x,
            p.y,
            p.z
        )?;
        count += 1;
    }
    Ok(count)
}
