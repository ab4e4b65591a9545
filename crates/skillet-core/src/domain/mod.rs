//! Core domain layer for Skillet.
//!
//! This module contains pure business logic with ZERO external dependencies
//! beyond serde. All I/O (filesystem, git, infrastructure bootstrap) is
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Models parse from / serialize to strings; files are the
//!   application layer's business
//! - **Immutable-by-default**: mutation happens through narrow, named setters

pub mod deploy_delegate;
pub mod error;
pub mod manifest;
pub mod resources_config;

// Re-exports for convenience
pub use deploy_delegate::{DeployDelegateType, SKIP_DEPLOY_DELEGATE};
pub use error::DomainError;
pub use manifest::Manifest;
pub use resources_config::{ProfileSettings, ResourcesConfig};
