//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `skillet-adapters` crate provides implementations. Under `cfg(test)`
//! (or the `test-mocks` feature) each port also gets a mockall-generated
//! mock so services can be exercised without touching disk, git, or a real
//! deployer.

use std::path::{Path, PathBuf};

use crate::domain::DeployDelegateType;
use crate::error::SkilletResult;

#[cfg(any(test, feature = "test-mocks"))]
use mockall::automock;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `skillet_adapters::filesystem::LocalFilesystem` (production)
/// - `skillet_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(any(test, feature = "test-mocks"), automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> SkilletResult<()>;

    /// Remove a directory and all contents. Absence is not an error.
    fn remove_dir_all(&self, path: &Path) -> SkilletResult<()>;

    /// Read a file's full content.
    fn read_to_string(&self, path: &Path) -> SkilletResult<String>;

    /// Write content to a file, replacing existing content.
    fn write_file(&self, path: &Path, content: &str) -> SkilletResult<()>;
}

/// Port for the git collaborator that produces template clones.
///
/// Implemented by `skillet_adapters::git::GitCliClient`, which shells out to
/// the system `git`. This core only consumes the clone result (folder path
/// or error) and does not specify the transport.
#[cfg_attr(any(test, feature = "test-mocks"), automock)]
pub trait GitClient: Send + Sync {
    /// Clone `url` into `dest`. `depth_one` asks for a shallow clone;
    /// `quiet` suppresses the transport's own progress output.
    fn clone_repo(&self, url: &str, dest: &Path, depth_one: bool, quiet: bool) -> SkilletResult<()>;
}

/// Everything the bootstrap collaborator needs to provision a delegate's
/// workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapRequest {
    pub delegate_type: DeployDelegateType,
    pub workspace: PathBuf,
    pub profile: String,
    pub debug: bool,
}

/// Port for the infrastructure-bootstrap collaborator, keyed by the
/// normalized deploy-delegate type. Treated as an opaque capability: its
/// errors are propagated verbatim and never retried at this layer.
#[cfg_attr(any(test, feature = "test-mocks"), automock)]
pub trait InfrastructureBootstrapper: Send + Sync {
    fn bootstrap(&self, request: &BootstrapRequest) -> SkilletResult<()>;
}
