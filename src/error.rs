//! Error types.
//!
//! `Error` is the crate-wide error returned by configuration, CLI and I/O
//! paths. Request-level failures are classified separately as
//! [`AuthFailure`] so the transport layer can map them onto a response.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Auth(#[from] AuthFailure),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Configuration loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("missing config field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("duplicate team keyword: {0}")]
    DuplicateKeyword(String),

    #[error("alias '{alias}' of '{keyword}' can never match: '{earlier}' of '{shadowed_by}' is checked first")]
    ShadowedAlias {
        keyword: String,
        alias: String,
        shadowed_by: String,
        earlier: String,
    },
}

/// Errors reported by the identity provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider answered and refused the call.
    #[error("{code} - {message}")]
    Rejected { code: String, message: String },

    /// The call never produced a usable answer (network, timeout, response shape).
    #[error("provider fault: {0}")]
    Fault(String),
}

impl ProviderError {
    pub fn rejected(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Machine-readable provider code, `Fault` for non-service errors.
    pub fn code(&self) -> &str {
        match self {
            Self::Rejected { code, .. } => code,
            Self::Fault(_) => "Fault",
        }
    }
}

/// Metadata lookup failed for a user.
///
/// Never fails a request: the resolver recovers it into default metadata.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("metadata unavailable for {username}: {source}")]
pub struct MetadataUnavailable {
    pub username: String,
    #[source]
    pub source: ProviderError,
}

/// Request failure categories surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    InvalidRequest,
    AuthenticationFailed,
    InternalError,
}

impl FailureKind {
    /// Stable machine-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::AuthenticationFailed => "authentication_failed",
            Self::InternalError => "internal_error",
        }
    }

    /// HTTP-equivalent status code.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest => 400,
            Self::AuthenticationFailed => 401,
            Self::InternalError => 500,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified request failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct AuthFailure {
    pub kind: FailureKind,
    /// Short heading shown as the response `error` field.
    pub title: &'static str,
    pub message: String,
}

impl AuthFailure {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::InvalidRequest,
            title: "Invalid request",
            message: message.into(),
        }
    }

    /// One or both credential fields are empty.
    pub fn missing_credentials() -> Self {
        Self {
            kind: FailureKind::InvalidRequest,
            title: "Missing credentials",
            message: "Both access_key and secret_key are required".to_string(),
        }
    }

    /// Credential rejected; carries the provider code and message verbatim.
    pub fn authentication_failed(code: &str, message: &str) -> Self {
        Self {
            kind: FailureKind::AuthenticationFailed,
            title: "Authentication failed",
            message: format!("AWS Error: {} - {}", code, message),
        }
    }

    /// Internal fault. Detail stays in the logs, callers get a generic message.
    pub fn internal() -> Self {
        Self {
            kind: FailureKind::InternalError,
            title: "Internal server error",
            message: "an internal error occurred while authenticating".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
