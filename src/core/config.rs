//! Configuration file management.
//!
//! Reads `.iamgate.toml` (or an explicit path) into an immutable [`Config`]
//! that is loaded once at startup and handed to the resolver and
//! authenticator.
//!
//! ```toml
//! region = "eu-west-1"
//! timeout_secs = 10
//!
//! [tags]
//! team = "Team"
//! email = "Email"
//! person = "Person"
//!
//! [[teams]]
//! keyword = "darwin"
//! aliases = ["darwin"]
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::core::constants;
use crate::core::team::{TeamGroup, TeamTable};
use crate::error::{ConfigError, Result};

/// Tag keys the resolver reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagKeys {
    pub team: String,
    pub email: String,
    pub person: String,
}

impl Default for TagKeys {
    fn default() -> Self {
        Self {
            team: constants::TEAM_TAG.to_string(),
            email: constants::EMAIL_TAG.to_string(),
            person: constants::PERSON_TAG.to_string(),
        }
    }
}

/// On-disk layout of the configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
    #[serde(default)]
    tags: TagKeys,
    #[serde(default)]
    teams: Option<Vec<TeamGroup>>,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// AWS region override for the provider clients.
    pub region: Option<String>,
    /// Deadline applied to each provider call.
    pub timeout: Option<Duration>,
    pub tags: TagKeys,
    pub teams: TeamTable,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `.iamgate.toml` in the
    /// working directory is used when present, otherwise built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for a missing explicit path, and
    /// `ConfigError::Parse` or a validation error for a bad file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()).into());
                }
                Self::from_file(path)
            }
            None => {
                let default = PathBuf::from(constants::CONFIG_FILE);
                if default.exists() {
                    Self::from_file(&default)
                } else {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and validate a specific file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config = Self::parse(&contents)?;

        debug!(
            teams = config.teams.groups().len(),
            region = ?config.region,
            "config loaded"
        );
        Ok(config)
    }

    /// Parse and validate TOML contents.
    pub fn parse(contents: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(contents).map_err(ConfigError::Parse)?;
        Self::validate(raw)
    }

    fn validate(raw: RawConfig) -> Result<Self> {
        if let Some(region) = &raw.region {
            if region.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "region",
                    reason: "region cannot be empty".to_string(),
                }
                .into());
            }
        }

        let timeout = match raw.timeout_secs {
            Some(0) => {
                return Err(ConfigError::InvalidValue {
                    field: "timeout_secs",
                    reason: "must be greater than zero".to_string(),
                }
                .into())
            }
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        for (field, value) in [
            ("tags.team", &raw.tags.team),
            ("tags.email", &raw.tags.email),
            ("tags.person", &raw.tags.person),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "tag key cannot be empty".to_string(),
                }
                .into());
            }
        }

        let teams = match raw.teams {
            Some(groups) if groups.is_empty() => {
                return Err(ConfigError::MissingField { field: "teams" }.into())
            }
            Some(groups) => TeamTable::new(groups)?,
            None => TeamTable::default(),
        };

        Ok(Self {
            region: raw.region,
            timeout,
            tags: raw.tags,
            teams,
        })
    }
}
