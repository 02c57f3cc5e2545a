//! Configuration schema definitions.
//!
//! All types derive `Deserialize` for loading from the config file.

use serde::Deserialize;

/// Root configuration for the responder.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ResponderConfig {
    /// Page text and optional sections.
    pub page: PageConfig,

    /// Additional response headers.
    pub response: ResponseConfig,

    /// Hardening headers.
    pub security: SecurityConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Page content settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Document title and heading.
    pub title: String,

    /// Target of the "Back to Home" link.
    pub back_link: String,

    /// List decoded query parameters.
    pub show_parameters: bool,

    /// Show the environment table.
    pub show_environment: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Rust CGI Demo".to_string(),
            back_link: "/".to_string(),
            show_parameters: true,
            show_environment: true,
        }
    }
}

/// Response header settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ResponseConfig {
    /// Written after Content-Type, in order.
    pub extra_headers: Vec<HeaderConfig>,
}

/// A single configured header.
#[derive(Debug, Clone, Deserialize)]
pub struct HeaderConfig {
    pub name: String,
    pub value: String,
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SecurityConfig {
    /// Add `X-Content-Type-Options` and `Cache-Control` headers.
    pub enable_headers: bool,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error, off).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}
