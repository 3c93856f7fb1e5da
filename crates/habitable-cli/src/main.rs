use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nalgebra::Point3;
use tracing_subscriber::EnvFilter;

use celestial::sampling::synthetic_galaxy;
use celestial::{CelestialObject, Galaxy, StarParams, StarPreset};
use habitability::{calculate_habitable_zone, calculate_orbital_position, SystemReport};

mod cache;
mod config;
mod input;
mod output;

#[cfg(test)]
mod output_test;

use cache::DataCache;
use config::Settings;

#[derive(Parser)]
#[command(name = "habitable")]
#[command(about = "Habitable zone and orbital dynamics calculator")]
struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Neither read nor write the simulation cache
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habitable zone boundaries for a star
    Zone {
        /// Reference star type: g2v, m5v, f0v or k2v
        #[arg(short, long, default_value = "g2v")]
        preset: StarPreset,
        /// Effective temperature (K)
        #[arg(long)]
        temperature: Option<f64>,
        /// Luminosity (L☉)
        #[arg(long)]
        luminosity: Option<f64>,
        /// Mass (M☉)
        #[arg(long)]
        mass: Option<f64>,
        /// Radius (R☉)
        #[arg(long)]
        radius: Option<f64>,
        /// Age (Gyr)
        #[arg(long)]
        age: Option<f64>,
        /// Activity level (0-1)
        #[arg(long)]
        activity: Option<f64>,
        /// Metallicity [Fe/H]
        #[arg(long)]
        metallicity: Option<f64>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Full report for a star system file
    Report {
        /// System JSON file (a star with its planets)
        system: PathBuf,
        /// Print the render request as JSON
        #[arg(long)]
        json: bool,
        /// Include orbit tracks, optionally with a sample count
        #[arg(long, num_args = 0..=1)]
        track: Option<Option<usize>>,
    },

    /// Position of one planet at a given time
    Orbit {
        /// System JSON file
        system: PathBuf,
        #[arg(short, long)]
        planet: String,
        /// Days since periapsis
        #[arg(short, long, default_value = "0")]
        time: f64,
    },

    /// Query stars in a galaxy file or a synthetic star field
    Galaxy {
        /// Galaxy JSON file
        #[arg(required_unless_present = "synthetic")]
        file: Option<PathBuf>,
        /// Generate this many synthetic stars instead of reading a file
        #[arg(long, conflicts_with = "file")]
        synthetic: Option<usize>,
        #[arg(long, default_value = "42")]
        seed: u64,
        /// Radius of the synthetic field (pc)
        #[arg(long, default_value = "100")]
        field_radius: f64,
        /// Keep only potential habitable-planet hosts
        #[arg(long)]
        habitable: bool,
        /// Region center as "x,y,z" in parsecs
        #[arg(long, value_parser = parse_point, requires = "radius")]
        center: Option<Point3<f64>>,
        /// Region radius (pc)
        #[arg(long)]
        radius: Option<f64>,
        #[arg(long)]
        json: bool,
    },
}

fn parse_point(s: &str) -> Result<Point3<f64>, String> {
    let coords = s
        .split(',')
        .map(|c| c.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("invalid coordinate in '{}': {}", s, err))?;

    match coords.as_slice() {
        [x, y, z] => Ok(Point3::new(*x, *y, *z)),
        _ => Err(format!("expected x,y,z, got '{}'", s)),
    }
}

fn init_logging(debug: bool, default_level: &str) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_settings(path: Option<&Path>) -> Result<(Settings, Option<PathBuf>)> {
    let Some(path) = path else {
        return Ok((Settings::default(), None));
    };
    match Settings::load(path)? {
        Some(settings) => Ok((settings, None)),
        None => Ok((Settings::default(), Some(path.to_path_buf()))),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (settings, missing_config) = load_settings(cli.config.as_deref())?;
    init_logging(cli.debug, &settings.log_level);
    if let Some(path) = missing_config {
        tracing::warn!(path = %path.display(), "configuration file not found, using defaults");
    }
    for key in settings.extra.keys() {
        tracing::debug!(key = %key, "unrecognized configuration key kept");
    }

    let mut cache = if cli.no_cache {
        tracing::info!("cache disabled");
        None
    } else {
        let path = settings.cache_path();
        let cache = DataCache::load(&path)
            .with_context(|| format!("loading cache {}", path.display()))?;
        tracing::debug!(
            path = %cache.path().display(),
            entries = cache.data().as_object().map_or(0, |entries| entries.len()),
            "cache ready"
        );
        Some(cache)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Zone {
            preset,
            temperature,
            luminosity,
            mass,
            radius,
            age,
            activity,
            metallicity,
            json,
        } => {
            let mut params: StarParams = preset.params(preset.spectral_type());
            params.temperature = temperature.unwrap_or(params.temperature);
            params.luminosity = luminosity.unwrap_or(params.luminosity);
            params.mass = mass.unwrap_or(params.mass);
            params.radius = radius.unwrap_or(params.radius);
            params.age = age.unwrap_or(params.age);
            params.activity = activity.unwrap_or(params.activity);
            params.metallicity = metallicity.unwrap_or(params.metallicity);

            let star = params.build().context("invalid star parameters")?;
            let zone = calculate_habitable_zone(&star)?;

            if json {
                serde_json::to_writer_pretty(&mut out, &zone)?;
                writeln!(out)?;
            } else {
                output::write_zone(&mut out, &star, &zone)?;
            }
        }

        Commands::Report {
            system,
            json,
            track,
        } => {
            let star = input::load_system(&settings.resolve(&system))?;
            let report = match track {
                Some(samples) => SystemReport::with_tracks(
                    &star,
                    samples.unwrap_or(settings.track_samples),
                )?,
                None => SystemReport::for_star(&star)?,
            };

            if let Some(cache) = cache.as_mut() {
                let key = format!("report:{}", star.name());
                if cache.get(&key).is_some() {
                    tracing::debug!(key = %key, "replacing cached report");
                }
                cache.insert(key, serde_json::to_value(&report)?);
            }

            if json {
                serde_json::to_writer_pretty(&mut out, &report)?;
                writeln!(out)?;
            } else {
                output::write_report(&mut out, &star, &report)?;
            }
        }

        Commands::Orbit {
            system,
            planet,
            time,
        } => {
            let star = input::load_system(&settings.resolve(&system))?;
            let body = star
                .planet(&planet)
                .with_context(|| format!("no planet named {} orbits {}", planet, star.name()))?;
            let position = calculate_orbital_position(body, time)?;
            output::write_position(&mut out, &planet, time, &position)?;
        }

        Commands::Galaxy {
            file,
            synthetic,
            seed,
            field_radius,
            habitable,
            center,
            radius,
            json,
        } => {
            let galaxy: Galaxy = match (synthetic, file) {
                (Some(count), _) => synthetic_galaxy(seed, count, field_radius)
                    .context("invalid synthetic galaxy parameters")?,
                (None, Some(file)) => input::load_galaxy(&settings.resolve(&file))?,
                (None, None) => anyhow::bail!("either a galaxy file or --synthetic is required"),
            };

            let mut stars: Vec<_> = if habitable {
                galaxy.habitable_stars()
            } else {
                galaxy.stars().iter().collect()
            };
            if let Some(radius) = radius {
                let center = center.unwrap_or_else(Point3::origin);
                let region = galaxy.stars_in_region(center, radius);
                stars.retain(|star| region.iter().any(|s| std::ptr::eq(*s, *star)));
            }

            if json {
                serde_json::to_writer_pretty(&mut out, &stars)?;
                writeln!(out)?;
            } else {
                writeln!(
                    out,
                    "{} ({}): {} stars",
                    galaxy.name(),
                    galaxy.kind(),
                    galaxy.stars().len()
                )?;
                let shown = output::write_stars(&mut out, stars.iter().copied())?;
                writeln!(out, "{} matching", shown)?;
            }
        }
    }

    if let Some(cache) = cache.as_ref().filter(|c| c.is_cached()) {
        cache.save().context("saving cache")?;
    }

    Ok(())
}
