//! Host-override config-file loading.
//!
//! The config file is optional JSON of the form
//! `{ "hosts": { "literal-hostname": "replacement-hostname" } }`.
//! Unlike test definitions, a config file that fails to load is fatal at
//! startup: a run with half-applied overrides would test the wrong
//! targets.

use std::path::Path;

use argonaut_domain::HostOverrides;
use serde::Deserialize;
use thiserror::Error;
use tokio::fs;

/// Errors loading the config file. Always fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that failed.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid config JSON.
    #[error("malformed config file {path}: {source}")]
    Parse {
        /// Path that failed.
        path: std::path::PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    hosts: HostOverrides,
}

/// Loads the host-override table from `path`.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the file cannot be read or parsed.
pub async fn load_host_overrides(path: &Path) -> Result<HostOverrides, ConfigError> {
    let contents = fs::read_to_string(path).await.map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: ConfigFile =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(config.hosts)
}
