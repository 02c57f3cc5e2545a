//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! responder, config loader, main
//!     → logging.rs (structured log events)
//!     → standard error (the web server's error log)
//! ```
//!
//! # Design Decisions
//! - Standard output carries the CGI response, so logs never go there
//! - Log level comes from config, overridable with RUST_LOG

pub mod logging;

pub use logging::init_logging;
