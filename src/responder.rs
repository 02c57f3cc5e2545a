//! Single-shot request handling.
//!
//! # Responsibilities
//! - Sample the dynamic facts for this invocation
//! - Render the page and frame it as a CGI response
//! - Add optional hardening and configured headers
//! - Write everything to the output sink in one pass

use std::io::Write;

use crate::cgi::{CgiResponse, CgiResult, RequestContext};
use crate::config::ResponderConfig;
use crate::render::{Chooser, Clock, DynamicFacts, PageModel, SystemClock, ThreadRngChooser};

/// Headers added when `security.enable_headers` is set.
pub const SECURITY_HEADERS: [(&str, &str); 2] = [
    ("X-Content-Type-Options", "nosniff"),
    ("Cache-Control", "no-store"),
];

/// Turns a request context into a written CGI response.
pub struct Responder<C, R> {
    config: ResponderConfig,
    clock: C,
    chooser: R,
}

impl Responder<SystemClock, ThreadRngChooser> {
    /// Responder using the local clock and the thread RNG.
    pub fn system(config: ResponderConfig) -> Self {
        Self::new(config, SystemClock, ThreadRngChooser)
    }
}

impl<C: Clock, R: Chooser> Responder<C, R> {
    pub fn new(config: ResponderConfig, clock: C, chooser: R) -> Self {
        Self {
            config,
            clock,
            chooser,
        }
    }

    pub fn config(&self) -> &ResponderConfig {
        &self.config
    }

    /// Build the full response without writing it.
    pub fn build_response(&mut self, ctx: &RequestContext) -> CgiResult<CgiResponse> {
        let facts = DynamicFacts::generate(&self.clock, &mut self.chooser);
        tracing::debug!(
            method = %ctx.method(),
            remote_address = %ctx.remote_address(),
            script_path = %ctx.script_path(),
            color = facts.color.as_str(),
            number = facts.number,
            "Rendering response"
        );

        let body = PageModel::build(ctx, &facts, &self.config.page).render();
        let mut response = CgiResponse::html(body);

        if self.config.security.enable_headers {
            for (name, value) in SECURITY_HEADERS {
                response.push_header(name, value)?;
            }
        }
        for header in &self.config.response.extra_headers {
            response.push_header(&header.name, &header.value)?;
        }

        Ok(response)
    }

    /// Build the response and write it to `out`.
    ///
    /// Returns the number of bytes written. Nothing is written if the
    /// response cannot be built.
    pub fn respond<W: Write>(&mut self, ctx: &RequestContext, out: &mut W) -> CgiResult<usize> {
        let response = self.build_response(ctx)?;
        let written = response.write_to(out)?;

        tracing::info!(
            bytes = written,
            headers = response.headers().len(),
            "Response written"
        );
        Ok(written)
    }
}
