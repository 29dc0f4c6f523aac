//! Test support utilities for iamgate integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use tempfile::TempDir;

/// Test environment with an isolated working directory.
///
/// Child processes use `.current_dir()` so tests can safely run in parallel.
pub struct Test {
    /// Temporary working directory (where `.iamgate.toml` is looked up)
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with `.iamgate.toml` written.
    pub fn with_config(contents: &str) -> Self {
        let t = Self::new();
        std::fs::write(t.dir.path().join(".iamgate.toml"), contents)
            .expect("failed to write config");
        t
    }

    /// Write a file into the working directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> std::path::PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write file");
        path
    }
}
