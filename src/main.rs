//! iamgate - Authenticate IAM credentials and resolve team metadata.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use iamgate::cli::output;
use iamgate::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("IAMGATE_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("iamgate=debug")
        } else {
            EnvFilter::new("iamgate=warn")
        }
    });

    let json_logs = std::env::var("IAMGATE_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);
    if json_logs {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    if let Err(e) = execute(cli.command, cli.config) {
        let suggestion = match &e {
            iamgate::error::Error::Config(iamgate::error::ConfigError::ShadowedAlias { .. }) => {
                Some("declare the more specific keyword first in [[teams]]")
            }
            iamgate::error::Error::Config(iamgate::error::ConfigError::NotFound(_)) => {
                Some("check --config or IAMGATE_CONFIG")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
