//! CGI responder library.
//!
//! Reads request metadata from an explicit environment mapping, renders an
//! HTML page with every request-derived value escaped, and writes it in CGI
//! framing: header block, blank line, body.

pub mod cgi;
pub mod config;
pub mod observability;
pub mod render;
pub mod responder;

pub use cgi::{CgiError, CgiResponse, RequestContext};
pub use config::ResponderConfig;
pub use responder::Responder;
