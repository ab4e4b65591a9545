//! Deploy-delegate initialization.
//!
//! Resolves the user's selection into a [`DeployDelegateType`], provisions
//! the delegate's infrastructure workspace, and hands off to the bootstrap
//! collaborator. Exactly one terminal outcome per invocation:
//!
//! - **Skipped** — the selection was the opt-out sentinel; `Ok(None)` with
//!   zero side effects.
//! - **Failed** — the bootstrap collaborator errored; its error is
//!   propagated verbatim and no type is resolved.
//! - **Done** — `Ok(Some(type))`.
//!
//! No retries happen here; retry policy, if any, belongs to the bootstrap
//! collaborator.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ProjectContext,
        ports::{BootstrapRequest, Filesystem, InfrastructureBootstrapper},
    },
    domain::{DeployDelegateType, SKIP_DEPLOY_DELEGATE},
    error::SkilletResult,
};

/// Directory under the project root holding per-delegate workspaces.
pub const INFRASTRUCTURE_DIR: &str = "infrastructure";

/// Bootstraps the deployment provider chosen for a new project.
pub struct DeployDelegateInitializer {
    fs: Box<dyn Filesystem>,
    bootstrapper: Box<dyn InfrastructureBootstrapper>,
}

impl DeployDelegateInitializer {
    pub fn new(fs: Box<dyn Filesystem>, bootstrapper: Box<dyn InfrastructureBootstrapper>) -> Self {
        Self { fs, bootstrapper }
    }

    /// Initialize the deploy delegate selected as `selected`.
    ///
    /// The resolved type is recorded into the resources config before the
    /// bootstrap runs (so the delegate can read it), but the config is only
    /// persisted to disk once the bootstrap succeeds — a failed bootstrap
    /// leaves `ask-resources.json` untouched on disk.
    #[instrument(skip_all, fields(selected, profile, debug))]
    pub fn initialize(
        &self,
        ctx: &mut ProjectContext,
        selected: &str,
        infra_path: &Path,
        profile: &str,
        debug: bool,
    ) -> SkilletResult<Option<DeployDelegateType>> {
        if selected == SKIP_DEPLOY_DELEGATE {
            info!("Deploy delegate selection skipped");
            return Ok(None);
        }

        let delegate_type = DeployDelegateType::new(selected)?;
        let workspace = infra_path
            .join(INFRASTRUCTURE_DIR)
            .join(delegate_type.as_str());
        self.fs.create_dir_all(&workspace)?;
        debug!(workspace = %workspace.display(), "Delegate workspace ensured");

        ctx.resources.set_skill_infra_type(profile, &delegate_type);

        self.bootstrapper.bootstrap(&BootstrapRequest {
            delegate_type: delegate_type.clone(),
            workspace,
            profile: profile.to_string(),
            debug,
        })?;

        ctx.save_resources(self.fs.as_ref())?;
        info!(%delegate_type, "Deploy delegate bootstrapped");
        Ok(Some(delegate_type))
    }
}
