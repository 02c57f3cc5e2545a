//! Request context extraction.
//!
//! # Responsibilities
//! - Look up the CGI meta-variables this responder displays
//! - Substitute fallbacks for absent variables
//! - Keep present values verbatim, including empty strings
//!
//! # Design Decisions
//! - Input is any key/value iterator, so tests never touch the process env
//! - Reading cannot fail; there is no validation or normalization here

use std::collections::HashMap;
use std::env;

pub const REQUEST_METHOD: &str = "REQUEST_METHOD";
pub const QUERY_STRING: &str = "QUERY_STRING";
pub const REMOTE_ADDR: &str = "REMOTE_ADDR";
pub const SCRIPT_NAME: &str = "SCRIPT_NAME";
pub const SERVER_SOFTWARE: &str = "SERVER_SOFTWARE";
pub const GATEWAY_INTERFACE: &str = "GATEWAY_INTERFACE";

const FALLBACK_METHOD: &str = "UNKNOWN";
const FALLBACK_REMOTE_ADDR: &str = "unknown";
const FALLBACK_SERVER_SOFTWARE: &str = "unknown";
const FALLBACK_GATEWAY_INTERFACE: &str = "CGI/1.1";

/// Request attributes gathered once at process start.
///
/// All values are untrusted and must be escaped before they are embedded in
/// markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    method: String,
    query_string: String,
    remote_address: String,
    script_path: String,
    server_software: String,
    gateway_interface: String,
}

impl RequestContext {
    /// Build a context from an explicit environment mapping.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::from_map(&vars)
    }

    /// Build a context from an already collected mapping.
    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        let get = |key: &str, fallback: &str| {
            vars.get(key)
                .cloned()
                .unwrap_or_else(|| fallback.to_string())
        };

        Self {
            method: get(REQUEST_METHOD, FALLBACK_METHOD),
            query_string: get(QUERY_STRING, ""),
            remote_address: get(REMOTE_ADDR, FALLBACK_REMOTE_ADDR),
            script_path: get(SCRIPT_NAME, ""),
            server_software: get(SERVER_SOFTWARE, FALLBACK_SERVER_SOFTWARE),
            gateway_interface: get(GATEWAY_INTERFACE, FALLBACK_GATEWAY_INTERFACE),
        }
    }

    /// Snapshot the process environment.
    ///
    /// Non-UTF-8 values are converted lossily instead of being dropped.
    pub fn from_process_env() -> Self {
        Self::from_vars(env::vars_os().map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        }))
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    pub fn remote_address(&self) -> &str {
        &self.remote_address
    }

    pub fn script_path(&self) -> &str {
        &self.script_path
    }

    pub fn server_software(&self) -> &str {
        &self.server_software
    }

    pub fn gateway_interface(&self) -> &str {
        &self.gateway_interface
    }
}
