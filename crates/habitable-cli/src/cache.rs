//! On-disk JSON cache of computed results

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to access cache file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cache file {path} is not valid JSON")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Previously computed results keyed by entry name
#[derive(Debug, Clone, PartialEq)]
pub struct DataCache {
    path: PathBuf,
    data: Value,
    cached: bool,
}

impl DataCache {
    /// Load the cache at `path`, or a placeholder when no file exists
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();
        match fs::read_to_string(&path) {
            Ok(contents) => {
                let data = serde_json::from_str(&contents).map_err(|source| CacheError::Json {
                    path: path.clone(),
                    source,
                })?;
                tracing::info!(path = %path.display(), "loaded cached simulation data");
                Ok(Self {
                    path,
                    data,
                    cached: true,
                })
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "no simulation cache found");
                Ok(Self {
                    path,
                    data: json!({"status": "no cached data, simulation needed"}),
                    cached: false,
                })
            }
            Err(source) => Err(CacheError::Io { path, source }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cached contents, or the placeholder blob
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Whether the contents came from disk
    pub fn is_cached(&self) -> bool {
        self.cached
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        if self.cached {
            self.data.get(key)
        } else {
            None
        }
    }

    /// Store `value` under `key`, replacing the placeholder if present
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        if !self.cached || !self.data.is_object() {
            self.data = Value::Object(Map::new());
            self.cached = true;
        }
        if let Value::Object(entries) = &mut self.data {
            entries.insert(key.into(), value);
        }
    }

    /// Write the cache as pretty JSON, creating parent directories
    pub fn save(&self) -> Result<(), CacheError> {
        let io_error = |source| CacheError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let contents = serde_json::to_string_pretty(&self.data).map_err(|source| {
            CacheError::Json {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, contents).map_err(io_error)?;

        tracing::debug!(path = %self.path.display(), "saved simulation cache");
        Ok(())
    }
}
