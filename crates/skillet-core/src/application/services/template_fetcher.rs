//! Template fetching: thin glue over the git port.
//!
//! Clones a template repository into the project folder and reports the
//! resulting path. All branching lives in the collaborator; this service
//! only shapes arguments and propagates the outcome.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{application::ports::GitClient, error::SkilletResult};

/// Fetches a project template from a git repository.
pub struct TemplateFetcher {
    git: Box<dyn GitClient>,
}

impl TemplateFetcher {
    pub fn new(git: Box<dyn GitClient>) -> Self {
        Self { git }
    }

    /// Clone `template_url` into `./<project_folder>` and return that path.
    ///
    /// Shallow clone; the clone's history is discarded later by the settings
    /// updater anyway. Quiet unless `debug`.
    #[instrument(skip_all, fields(url = template_url, folder = project_folder))]
    pub fn fetch(
        &self,
        template_url: &str,
        project_folder: &str,
        debug: bool,
    ) -> SkilletResult<PathBuf> {
        let dest = Path::new(".").join(project_folder);
        self.git.clone_repo(template_url, &dest, true, !debug)?;
        info!(path = %dest.display(), "Template cloned");
        Ok(dest)
    }
}
