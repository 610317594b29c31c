//! Configuration loading from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::MockConfig;
use crate::config::validation::{validate, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    Io(io::Error),

    #[error("config file is not valid JSON: {0}")]
    Malformed(serde_json::Error),

    #[error("config rejected: {}", format_violations(.0))]
    Schema(Vec<ValidationError>),
}

fn format_violations(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Load and validate a configuration document from a JSON file.
///
/// Either every invariant of the data model holds for the returned config,
/// or no config is returned. Syntax errors surface as [`ConfigError::Malformed`],
/// structural and semantic ones as [`ConfigError::Schema`].
pub fn load_config(path: &Path) -> Result<MockConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Io(e),
    })?;

    let raw: serde_json::Value = serde_json::from_str(&text).map_err(ConfigError::Malformed)?;
    let config: MockConfig = serde_json::from_value(raw)
        .map_err(|e| ConfigError::Schema(vec![ValidationError::Structure(e.to_string())]))?;

    validate(&config).map_err(ConfigError::Schema)?;

    Ok(config)
}
