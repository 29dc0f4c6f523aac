//! Command-line interface.

pub mod completions;
pub mod handle;
pub mod login;
pub mod output;
pub mod team;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::error;

use crate::core::config::Config;
use crate::core::constants;
use crate::core::types::{CredentialPair, ResolutionOutcome};
use crate::error::{AuthFailure, Result};

/// iamgate - Authenticate IAM credentials and resolve team metadata.
#[derive(Parser)]
#[command(
    name = "iamgate",
    about = "Authenticate IAM credentials and resolve team metadata from user tags",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file (defaults to .iamgate.toml when present)
    #[arg(long, global = true, env = constants::CONFIG_ENV)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Authenticate an access key pair and show the resolved identity
    Login {
        /// Access key ID (prompted for when omitted)
        #[arg(long, env = "IAMGATE_ACCESS_KEY")]
        access_key: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Handle a Lambda proxy event and print the response
    Handle {
        /// Event file (reads stdin when omitted)
        path: Option<PathBuf>,
    },

    /// Show the canonical team keyword for labels
    Team {
        /// Team labels, e.g. "Equipo Darwin"
        #[arg(required = true)]
        labels: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the team keyword table in priority order
    Teams {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, config_path: Option<PathBuf>) -> Result<()> {
    use Command::*;

    let load = || Config::load(config_path.as_deref());

    match command {
        Login { access_key, json } => login::execute(&load()?, access_key, json),
        Handle { path } => handle::execute(&load()?, path.as_deref()),
        Team { labels, json } => team::normalize(&load()?, &labels, json),
        Teams { json } => team::list(&load()?, json),
        Completions { shell } => completions::execute(shell),
    }
}

/// Authenticate against AWS with a provider built for this call.
#[cfg(feature = "aws")]
pub fn authenticate(config: &Config, credentials: &CredentialPair) -> ResolutionOutcome {
    use crate::core::authenticator::Authenticator;
    use crate::core::provider::AwsProvider;

    credentials.validate()?;

    let provider = AwsProvider::connect(config).map_err(|e| {
        error!(error = %e, "failed to set up aws provider");
        AuthFailure::internal()
    })?;
    Authenticator::from_config(&provider, &provider, config).authenticate(credentials)
}

#[cfg(not(feature = "aws"))]
pub fn authenticate(_config: &Config, credentials: &CredentialPair) -> ResolutionOutcome {
    credentials.validate()?;
    error!("iamgate was built without the aws feature");
    Err(AuthFailure::internal())
}
