//! Infrastructure-bootstrap adapters.
//!
//! The bootstrap collaborator is an opaque capability from the core's point
//! of view: it receives the normalized delegate type and its workspace path
//! and either provisions the workspace or fails. [`WorkspaceBootstrapper`]
//! is the built-in provisioner; [`RecordingBootstrapper`] is a test double.

use std::sync::{Arc, Mutex};

use serde_json::json;
use tracing::debug;

use skillet_core::{
    application::{
        ApplicationError,
        ports::{BootstrapRequest, Filesystem, InfrastructureBootstrapper},
    },
    error::SkilletResult,
};

/// Name of the per-delegate config seed written into the workspace.
pub const DEPLOYER_CONFIG_FILE: &str = "deployer-config.json";

/// Built-in bootstrapper: seeds the delegate workspace with a starter
/// config the deployer reads on its first deploy.
pub struct WorkspaceBootstrapper {
    fs: Box<dyn Filesystem>,
}

impl WorkspaceBootstrapper {
    pub fn new(fs: Box<dyn Filesystem>) -> Self {
        Self { fs }
    }
}

impl InfrastructureBootstrapper for WorkspaceBootstrapper {
    fn bootstrap(&self, request: &BootstrapRequest) -> SkilletResult<()> {
        let seed = json!({
            "type": request.delegate_type.as_str(),
            "profile": request.profile,
            "userConfig": {},
        });
        let content = serde_json::to_string_pretty(&seed).map_err(|e| {
            ApplicationError::BootstrapFailed {
                reason: format!(
                    "failed to render deployer config for {}: {e}",
                    request.delegate_type
                ),
            }
        })?;

        let config_path = request.workspace.join(DEPLOYER_CONFIG_FILE);
        self.fs
            .write_file(&config_path, &content)
            .map_err(|e| ApplicationError::BootstrapFailed {
                reason: e.to_string(),
            })?;
        debug!(path = %config_path.display(), "Deployer workspace seeded");
        Ok(())
    }
}

/// Test double: records every request and can be primed to fail.
#[derive(Debug, Clone, Default)]
pub struct RecordingBootstrapper {
    calls: Arc<Mutex<Vec<BootstrapRequest>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl RecordingBootstrapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent bootstrap fail with `reason`.
    pub fn fail_with(&self, reason: &str) {
        *self.fail_with.lock().unwrap() = Some(reason.to_string());
    }

    /// The requests received so far.
    pub fn calls(&self) -> Vec<BootstrapRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl InfrastructureBootstrapper for RecordingBootstrapper {
    fn bootstrap(&self, request: &BootstrapRequest) -> SkilletResult<()> {
        self.calls.lock().unwrap().push(request.clone());
        if let Some(reason) = self.fail_with.lock().unwrap().clone() {
            return Err(ApplicationError::BootstrapFailed { reason }.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::filesystem::MemoryFilesystem;
    use skillet_core::domain::DeployDelegateType;

    fn request(workspace: &str) -> BootstrapRequest {
        BootstrapRequest {
            delegate_type: DeployDelegateType::new("cfn-deployer").unwrap(),
            workspace: PathBuf::from(workspace),
            profile: "default".into(),
            debug: false,
        }
    }

    #[test]
    fn workspace_bootstrapper_seeds_deployer_config() {
        let fs = MemoryFilesystem::new();
        let bootstrapper = WorkspaceBootstrapper::new(Box::new(fs.clone()));

        bootstrapper
            .bootstrap(&request("proj/infrastructure/cfn-deployer"))
            .unwrap();

        let content = fs
            .file_content(Path::new(
                "proj/infrastructure/cfn-deployer/deployer-config.json",
            ))
            .unwrap();
        assert!(content.contains("\"cfn-deployer\""));
        assert!(content.contains("\"default\""));
    }

    #[test]
    fn recording_bootstrapper_records_and_fails_on_demand() {
        let bootstrapper = RecordingBootstrapper::new();
        bootstrapper.bootstrap(&request("a")).unwrap();

        bootstrapper.fail_with("error");
        let err = bootstrapper.bootstrap(&request("b")).unwrap_err();
        assert_eq!(err.to_string(), "error");
        assert_eq!(bootstrapper.calls().len(), 2);
    }
}
