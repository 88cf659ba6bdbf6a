//! Shared RON loading for the files under `assets/data/`.

use bevy::prelude::*;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use super::error::ConfigError;

/// Root directory for data files.
pub const DATA_DIR: &str = "assets/data";

/// Parse RON text, tagging errors with `path`.
pub fn parse_ron<T: DeserializeOwned>(path: &str, contents: &str) -> Result<T, ConfigError> {
    ron::from_str(contents).map_err(|e| ConfigError::Parse {
        path: path.to_string(),
        details: e.to_string(),
    })
}

/// Read and parse a RON file.
pub fn read_ron<T: DeserializeOwned>(path: &str) -> Result<T, ConfigError> {
    if !Path::new(path).exists() {
        return Err(ConfigError::FileNotFound(path.to_string()));
    }

    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_string(),
        details: e.to_string(),
    })?;

    parse_ron(path, &contents)
}

/// Load a data file, falling back to defaults.
///
/// A missing file is only a warning. Anything else (unreadable, malformed,
/// rejected by `validate`) is an error, but gameplay continues on defaults.
pub fn load_or_default<T, F>(path: &str, validate: F) -> T
where
    T: DeserializeOwned + Default,
    F: FnOnce(&T) -> Result<(), ConfigError>,
{
    let loaded = read_ron::<T>(path).and_then(|value| validate(&value).map(|()| value));

    match loaded {
        Ok(value) => {
            info!("Loaded {}", path);
            value
        }
        Err(ConfigError::FileNotFound(_)) => {
            warn!("Could not find {}. Using defaults.", path);
            T::default()
        }
        Err(e) => {
            error!("{}. Using defaults.", e);
            T::default()
        }
    }
}
