//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ResponderConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ResponderConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ResponderConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load the file if one is given, otherwise use defaults.
///
/// A load failure also yields the defaults, together with the error so the
/// caller can report it once logging is up.
pub fn load_or_default(path: Option<&Path>) -> (ResponderConfig, Option<ConfigError>) {
    match path.map(load_config) {
        None => (ResponderConfig::default(), None),
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (ResponderConfig::default(), Some(err)),
    }
}
