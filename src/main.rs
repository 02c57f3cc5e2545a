//! CGI responder binary.
//!
//! Invoked once per request by the web server:
//!
//! ```text
//!  web server ──env──▶ RequestContext ──▶ Responder ──stdout──▶ web server
//!                                            │
//!                                            └──stderr──▶ error log
//! ```
//!
//! Exit status is 0 once the response is fully written and 1 when the
//! response could not be produced or written.

use std::env;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use cgi_info::cgi::request::GATEWAY_INTERFACE;
use cgi_info::config::load_or_default;
use cgi_info::observability::init_logging;
use cgi_info::{RequestContext, Responder};

const CONFIG_ENV: &str = "CGI_INFO_CONFIG";

#[derive(Parser, Debug, Default)]
#[command(name = "cgi-info")]
#[command(about = "CGI program that renders request details as HTML", long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(long)]
    log_level: Option<String>,

    /// Search keywords some servers pass for ISINDEX queries (ignored).
    #[arg(hide = true)]
    keywords: Vec<String>,
}

impl Cli {
    /// Settings taken from the environment only.
    fn from_env() -> Self {
        Self {
            config: env::var_os(CONFIG_ENV)
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            ..Self::default()
        }
    }

    /// Resolve settings for this invocation.
    ///
    /// Under CGI, argv carries ISINDEX words from the client's query string,
    /// so flags are only honoured for manual runs.
    fn resolve() -> Self {
        if env::var_os(GATEWAY_INTERFACE).is_some() {
            let mut cli = Self::from_env();
            cli.keywords = env::args().skip(1).collect();
            return cli;
        }
        // Never let clap print usage to stdout; that would corrupt the response.
        Self::try_parse().unwrap_or_else(|_| Self::from_env())
    }
}

fn main() -> ExitCode {
    let cli = Cli::resolve();

    let (config, config_error) = load_or_default(cli.config.as_deref());
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.observability.log_level.clone());
    init_logging(&level);

    if let Some(err) = config_error {
        tracing::warn!(error = %err, "Falling back to default configuration");
    }
    if !cli.keywords.is_empty() {
        tracing::debug!(count = cli.keywords.len(), "Ignoring command-line keywords");
    }

    let ctx = RequestContext::from_process_env();
    let mut responder = Responder::system(config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match responder.respond(&ctx, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Failed to produce response");
            ExitCode::FAILURE
        }
    }
}
