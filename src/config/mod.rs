//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML, path from --config or CGI_INFO_CONFIG)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → ResponderConfig (validated, immutable)
//!     → owned by the Responder for the single invocation
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; running without a file is the normal case
//! - A broken file falls back to defaults so the request still gets a page
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::ResponderConfig;
pub use schema::{HeaderConfig, ObservabilityConfig, PageConfig, ResponseConfig, SecurityConfig};
