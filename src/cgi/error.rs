//! CGI response errors.

use thiserror::Error;

/// Errors that can occur while producing a CGI response.
///
/// A missing environment variable is never an error; the request reader
/// substitutes a fallback instead.
#[derive(Debug, Error)]
pub enum CgiError {
    /// The output channel could not be written or flushed.
    #[error("failed to write CGI response: {0}")]
    Write(#[from] std::io::Error),

    /// A header would break the response framing.
    #[error("invalid header {name:?}: {reason}")]
    InvalidHeader { name: String, reason: &'static str },
}

/// Result type for CGI operations.
pub type CgiResult<T> = Result<T, CgiError>;
