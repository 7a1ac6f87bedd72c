//! TOML configuration loading.
//!
//! Each engine crate owns its own `serde`-deserializable config struct whose
//! `Default` matches the built-in behavior. This module only knows how to get
//! one of them off disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for the requested type.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load a config from a TOML file.
///
/// A missing file yields `T::default()`, matching how optional config files
/// are treated elsewhere in the workspace.
pub fn load_toml<T>(path: &Path) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_toml(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a config from TOML text.
pub fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T, toml::de::Error> {
    toml::from_str(content)
}
