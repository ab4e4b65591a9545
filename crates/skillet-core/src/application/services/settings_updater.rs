//! Post-scaffold mutation: re-parents a template clone as a fresh,
//! independently-named project.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{ProjectContext, ports::Filesystem},
    error::SkilletResult,
};

/// Applies user-chosen settings to a freshly loaded project.
pub struct SettingsUpdater {
    fs: Box<dyn Filesystem>,
}

impl SettingsUpdater {
    pub fn new(fs: Box<dyn Filesystem>) -> Self {
        Self { fs }
    }

    /// Apply the user's settings, in order:
    /// (a) set the manifest's skill display name and persist,
    /// (b) ensure a profile entry exists in the resources config and persist,
    /// (c) remove `<project_folder>/.git` (idempotent; the template clone
    ///     carries the template's history, not the new project's).
    ///
    /// Precondition: `ctx` was produced by a successful load; the structure
    /// is not re-validated here.
    #[instrument(skip_all, fields(skill_name, profile))]
    pub fn apply(
        &self,
        ctx: &mut ProjectContext,
        skill_name: &str,
        project_folder: &Path,
        profile: &str,
    ) -> SkilletResult<()> {
        ctx.manifest.set_skill_name(skill_name);
        ctx.save_manifest(self.fs.as_ref())?;

        ctx.resources.ensure_profile(profile);
        ctx.save_resources(self.fs.as_ref())?;

        self.fs.remove_dir_all(&project_folder.join(".git"))?;
        debug!("User settings applied");
        Ok(())
    }
}
