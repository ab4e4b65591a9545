//! Git adapter shelling out to the system `git`.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use skillet_core::{
    application::{ApplicationError, ports::GitClient},
    error::SkilletResult,
};

/// Production git client invoking the `git` binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCliClient;

impl GitCliClient {
    pub fn new() -> Self {
        Self
    }
}

impl GitClient for GitCliClient {
    fn clone_repo(&self, url: &str, dest: &Path, depth_one: bool, quiet: bool) -> SkilletResult<()> {
        let mut cmd = Command::new("git");
        cmd.arg("clone");
        if depth_one {
            cmd.args(["--depth", "1"]);
        }
        if quiet {
            cmd.arg("--quiet");
        }
        cmd.arg(url).arg(dest);

        debug!(?cmd, "Running git clone");
        let output = cmd.output().map_err(|e| ApplicationError::GitCloneFailed {
            url: url.to_string(),
            reason: format!("failed to run git: {e}"),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ApplicationError::GitCloneFailed {
                url: url.to_string(),
                reason: stderr.trim().to_string(),
            }
            .into());
        }
        Ok(())
    }
}
