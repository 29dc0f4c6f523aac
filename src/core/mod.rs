//! Core library components.
//!
//! Credential validation, username derivation, tag-based metadata
//! resolution and team keyword normalization. Nothing here does terminal
//! output; the CLI and transport adapters sit on top.

pub mod arn;
pub mod authenticator;
pub mod config;
pub mod constants;
pub mod provider;
pub mod resolver;
pub mod response;
pub mod team;
pub mod types;
