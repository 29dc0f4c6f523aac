//! Constants used throughout iamgate.
//!
//! Centralizes magic strings and default configuration values.

/// Configuration file name looked up in the working directory.
pub const CONFIG_FILE: &str = ".iamgate.toml";

/// Environment variable holding an explicit configuration path.
pub const CONFIG_ENV: &str = "IAMGATE_CONFIG";

/// Region used when neither config nor the AWS region chain provides one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Provider name attached to per-request static credentials.
pub const CREDENTIALS_PROVIDER_NAME: &str = "iamgate-request";

/// Default tag key carrying the free-text team label.
pub const TEAM_TAG: &str = "Team";

/// Default tag key carrying the user's email.
pub const EMAIL_TAG: &str = "Email";

/// Default tag key carrying the user's display name.
pub const PERSON_TAG: &str = "Person";

/// Built-in team keyword table, in priority order.
///
/// `saplcorp` must stay ahead of `sap`: every `saplcorp` alias contains `sap`.
pub const DEFAULT_TEAMS: &[(&str, &[&str])] = &[
    ("darwin", &["darwin"]),
    ("mulesoft", &["mulesoft", "mule soft", "mule-soft"]),
    ("saplcorp", &["saplcorp", "sapl corp", "sapl-corp"]),
    ("sap", &["sap"]),
];

/// CORS headers attached to every transport response.
pub const CORS_HEADERS: &[(&str, &str)] = &[
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
];
