//! Shared utilities for integration tests.

use std::process::{Command, Output};

use chrono::{NaiveDate, NaiveDateTime};
use cgi_info::render::facts::{FixedChooser, FixedClock};
use cgi_info::{RequestContext, Responder, ResponderConfig};

/// Tuesday, 2024-01-02 15:04:05.
#[allow(dead_code)]
pub fn fixed_instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(15, 4, 5)
        .unwrap()
}

/// Render a full response for `vars` with deterministic facts.
#[allow(dead_code)]
pub fn respond(vars: &[(&str, &str)], config: ResponderConfig) -> String {
    let ctx = RequestContext::from_vars(vars.iter().copied());
    let mut responder = Responder::new(
        config,
        FixedClock(fixed_instant()),
        FixedChooser { index: 3, number: 77 },
    );
    let mut out = Vec::new();
    responder.respond(&ctx, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Split a CGI response at the first blank line.
#[allow(dead_code)]
pub fn split_response(raw: &str) -> (&str, &str) {
    raw.split_once("\n\n").expect("response has no header separator")
}

/// Run the built binary with exactly the given environment.
#[allow(dead_code)]
pub fn run_binary(vars: &[(&str, &str)]) -> Output {
    run_binary_with_args(vars, &[])
}

/// Run the built binary with the given environment and argv.
#[allow(dead_code)]
pub fn run_binary_with_args(vars: &[(&str, &str)], args: &[&str]) -> Output {
    binary_command(vars)
        .args(args)
        .output()
        .expect("failed to run cgi-info")
}

/// Command for the built binary with exactly the given environment.
#[allow(dead_code)]
pub fn binary_command(vars: &[(&str, &str)]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_cgi-info"));
    command.env_clear().envs(vars.iter().copied());
    command
}
