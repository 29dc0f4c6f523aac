//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an iamgate command isolated from the caller's environment.
    ///
    /// Returns a Command configured with:
    /// - Current directory set to the test working directory
    /// - iamgate variables cleared
    /// - AWS region pinned and instance metadata disabled, so nothing
    ///   waits on IMDS
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("iamgate").expect("failed to find iamgate binary");
        cmd.current_dir(self.dir.path());
        for var in [
            "IAMGATE_CONFIG",
            "IAMGATE_LOG",
            "IAMGATE_LOG_FORMAT",
            "IAMGATE_ACCESS_KEY",
            "IAMGATE_SECRET_KEY",
        ] {
            cmd.env_remove(var);
        }
        cmd.env("AWS_REGION", "us-east-1");
        cmd.env("AWS_EC2_METADATA_DISABLED", "true");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Shortcut for `iamgate team <label>...`.
    pub fn team(&self, labels: &[&str]) -> Output {
        self.cmd()
            .arg("team")
            .args(labels)
            .output()
            .expect("failed to run iamgate team")
    }

    /// Shortcut for `iamgate teams --json`.
    pub fn teams_json(&self) -> Output {
        self.cmd()
            .args(["teams", "--json"])
            .output()
            .expect("failed to run iamgate teams")
    }

    /// Shortcut for `iamgate handle` with the event on stdin.
    pub fn handle(&self, event: &str) -> Output {
        self.cmd()
            .arg("handle")
            .write_stdin(event)
            .output()
            .expect("failed to run iamgate handle")
    }
}
