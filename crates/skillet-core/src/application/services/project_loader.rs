//! Project-model loader: validates the on-disk layout of a scaffolded skill
//! project and loads both models into a [`ProjectContext`].
//!
//! The checks run in strict order and short-circuit on the first failure.
//! Each failure message names the specific path or field implicated — it is
//! the user's only diagnostic. No partially-loaded state escapes: the
//! context exists only once every gate has passed.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ProjectContext, ports::Filesystem},
    domain::{Manifest, ResourcesConfig},
    error::SkilletResult,
};

/// Name of the project config file at the project root.
pub const RESOURCES_CONFIG_FILE: &str = "ask-resources.json";

/// Name of the manifest file inside the skill package.
pub const MANIFEST_FILE: &str = "skill.json";

/// Loads and validates a skill project's structure.
pub struct ProjectLoader {
    fs: Box<dyn Filesystem>,
}

impl ProjectLoader {
    pub fn new(fs: Box<dyn Filesystem>) -> Self {
        Self { fs }
    }

    /// Load the project model for `profile` from `project_folder`.
    ///
    /// Gate order:
    /// 1. `<project_folder>/ask-resources.json` exists
    /// 2. it parses
    /// 3. `skillMetadata.src` for the profile is non-blank
    /// 4. the resolved skill-package root exists (absolute src used as-is,
    ///    relative src resolved against the project folder)
    /// 5. `<skill_package_root>/skill.json` exists
    /// 6. it parses
    #[instrument(skip_all, fields(folder = %project_folder.display(), profile))]
    pub fn load(&self, project_folder: &Path, profile: &str) -> SkilletResult<ProjectContext> {
        // 1. + 2. resources config
        let resources_path = project_folder.join(RESOURCES_CONFIG_FILE);
        if !self.fs.exists(&resources_path) {
            return Err(ApplicationError::FileNotFound {
                path: resources_path,
            }
            .into());
        }
        let resources = self.parse_resources(&resources_path)?;

        // 3. skillMetadata.src must be set and non-blank
        let src = resources
            .skill_meta_src(profile)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ApplicationError::SkillMetaSrcNotSet)?;

        // 4. resolve the skill-package root
        let skill_package_root = resolve_skill_package(project_folder, src);
        if !self.fs.exists(&skill_package_root) {
            return Err(ApplicationError::SkillPackageNotFound {
                path: skill_package_root,
            }
            .into());
        }
        debug!(package = %skill_package_root.display(), "Skill package resolved");

        // 5. + 6. manifest
        let manifest_path = skill_package_root.join(MANIFEST_FILE);
        if !self.fs.exists(&manifest_path) {
            return Err(ApplicationError::ManifestNotFound {
                path: skill_package_root,
            }
            .into());
        }
        let manifest = self.parse_manifest(&manifest_path)?;

        debug!("Project model loaded");
        Ok(ProjectContext {
            resources,
            resources_path,
            manifest,
            manifest_path,
        })
    }

    fn parse_resources(&self, path: &Path) -> SkilletResult<ResourcesConfig> {
        let raw = self.fs.read_to_string(path)?;
        ResourcesConfig::from_json(&raw).map_err(|e| {
            ApplicationError::ParseFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn parse_manifest(&self, path: &Path) -> SkilletResult<Manifest> {
        let raw = self.fs.read_to_string(path)?;
        Manifest::from_json(&raw).map_err(|e| {
            ApplicationError::ParseFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// Absolute `src` is used as-is; relative `src` resolves against the project
/// folder.
fn resolve_skill_package(project_folder: &Path, src: &str) -> PathBuf {
    let src_path = Path::new(src);
    if src_path.is_absolute() {
        src_path.to_path_buf()
    } else {
        project_folder.join(src_path)
    }
}
