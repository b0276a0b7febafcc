//! Loading a `SimulationConfig` from a JSON file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pronav_core::config::{ConfigError, SimulationConfig};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to start loop thread: {0}")]
    Thread(#[source] io::Error),
    #[error("{0}")]
    Usage(String),
}

/// Read and parse a config file. Missing fields take their defaults.
///
/// The result is not validated here; `Simulation::new` does that.
pub fn load_config(path: &Path) -> Result<SimulationConfig, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config(text: &str) -> Result<SimulationConfig, serde_json::Error> {
    serde_json::from_str(text)
}
