//! CGI protocol adapter.
//!
//! # Data Flow
//! ```text
//! process environment (untrusted, supplied by the web server)
//!     → request.rs (RequestContext with fallbacks, never fails)
//!     → [render layer builds an escaped page model]
//!     → response.rs (header block, blank line, body)
//!     → standard output
//! ```
//!
//! # Design Decisions
//! - The environment is passed in explicitly; nothing here reads globals
//! - Escaping lives next to the protocol because every request value is
//!   attacker-influenced
//! - Framing is enforced by the type that writes it, not by callers

pub mod error;
pub mod escape;
pub mod request;
pub mod response;

pub use error::{CgiError, CgiResult};
pub use escape::{escape_html, SafeHtml};
pub use request::RequestContext;
pub use response::{CgiResponse, Header, CONTENT_TYPE_HTML};
