//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `skillet-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `Filesystem`: File operations
//!   - `GitClient`: Template repository cloning
//!   - `InfrastructureBootstrapper`: Deploy-delegate workspace bootstrap
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by
//!   application (defined in the CLI layer, implemented by services)

pub mod output;

pub use output::{BootstrapRequest, Filesystem, GitClient, InfrastructureBootstrapper};

#[cfg(any(test, feature = "test-mocks"))]
pub use output::{MockFilesystem, MockGitClient, MockInfrastructureBootstrapper};
