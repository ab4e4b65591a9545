//! The caller-owned project handle.
//!
//! The "one live instance, explicit lifecycle" invariant is carried by
//! ownership rather than by globals: [`ProjectContext`] is constructed only
//! by a fully successful
//! [`ProjectLoader::load`](crate::application::ProjectLoader::load), is
//! passed explicitly to the updater and the delegate initializer, and is
//! disposed by being dropped at the end of the command's scope.

use std::path::PathBuf;

use crate::application::ApplicationError;
use crate::application::ports::Filesystem;
use crate::domain::{Manifest, ResourcesConfig};
use crate::error::SkilletResult;

/// Both project models plus the on-disk locations they persist to.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub resources: ResourcesConfig,
    pub resources_path: PathBuf,
    pub manifest: Manifest,
    pub manifest_path: PathBuf,
}

impl ProjectContext {
    /// Persist the resources config back to `ask-resources.json`.
    pub fn save_resources(&self, fs: &dyn Filesystem) -> SkilletResult<()> {
        let content = self.resources.to_json_pretty().map_err(|e| {
            ApplicationError::ParseFailed {
                path: self.resources_path.clone(),
                reason: e.to_string(),
            }
        })?;
        fs.write_file(&self.resources_path, &content)
    }

    /// Persist the manifest back to `skill.json`.
    pub fn save_manifest(&self, fs: &dyn Filesystem) -> SkilletResult<()> {
        let content = self.manifest.to_json_pretty().map_err(|e| {
            ApplicationError::ParseFailed {
                path: self.manifest_path.clone(),
                reason: e.to_string(),
            }
        })?;
        fs.write_file(&self.manifest_path, &content)
    }
}
