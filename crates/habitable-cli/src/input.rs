//! Loading systems and galaxies from JSON files

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use celestial::{Galaxy, Star};

fn load<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {} file {}", what, path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("invalid {} file {}", what, path.display()))
}

/// A star and its planets
pub fn load_system(path: &Path) -> Result<Star> {
    let star: Star = load(path, "system")?;
    tracing::debug!(path = %path.display(), planets = star.planets().len(), "loaded system");
    Ok(star)
}

pub fn load_galaxy(path: &Path) -> Result<Galaxy> {
    let galaxy: Galaxy = load(path, "galaxy")?;
    tracing::debug!(path = %path.display(), stars = galaxy.stars().len(), "loaded galaxy");
    Ok(galaxy)
}
