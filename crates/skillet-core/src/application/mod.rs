//! Application layer for Skillet.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectLoader, SettingsUpdater,
//!   DeployDelegateInitializer, TemplateFetcher)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Context**: the caller-owned handle holding the loaded project models
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod context;
pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DeployDelegateInitializer, ProjectLoader, SettingsUpdater, TemplateFetcher,
};

// Re-export the project handle
pub use context::ProjectContext;

// Re-export port traits (for adapter implementation)
pub use ports::{BootstrapRequest, Filesystem, GitClient, InfrastructureBootstrapper};

pub use error::ApplicationError;
