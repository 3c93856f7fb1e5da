//! JSON settings file

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Runtime settings
///
/// Keys present in the file override the defaults; keys this version does
/// not know are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base directory for relative input paths and the cache
    pub data_dir: PathBuf,
    /// Cache location, relative to `data_dir`
    pub cache_file: PathBuf,
    /// Orbit track resolution when `--track` has no value
    pub track_samples: usize,
    /// Default tracing filter
    pub log_level: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            cache_file: PathBuf::from("cache/simulation_data.json"),
            track_samples: 90,
            log_level: "info".to_string(),
            extra: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Read settings from `path`
    ///
    /// Returns `Ok(None)` when the file does not exist so the caller can
    /// warn and fall back to defaults.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Resolve a relative path against `data_dir`
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }

    pub fn cache_path(&self) -> PathBuf {
        self.resolve(&self.cache_file)
    }
}
