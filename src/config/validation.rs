//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject headers that would break CGI framing
//! - Check the log level is one the subscriber understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ResponderConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::cgi::response::check_header;
use crate::config::schema::ResponderConfig;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("header {name:?}: {reason}")]
    InvalidHeader { name: String, reason: &'static str },

    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ResponderConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.page.title.trim().is_empty() {
        errors.push(ValidationError::EmptyField("page.title"));
    }
    if config.page.back_link.trim().is_empty() {
        errors.push(ValidationError::EmptyField("page.back_link"));
    }

    for header in &config.response.extra_headers {
        if let Err(reason) = check_header(&header.name, &header.value) {
            errors.push(ValidationError::InvalidHeader {
                name: header.name.clone(),
                reason,
            });
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
