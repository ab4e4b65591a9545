//! Skillet Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Skillet
//! skill-project scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          skillet-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ProjectLoader, SettingsUpdater,       │
//! │   DeployDelegateInitializer, Fetcher)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, GitClient, Bootstrapper)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    skillet-adapters (Infrastructure)    │
//! │ (LocalFilesystem, GitCliClient, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ResourcesConfig, Manifest,             │
//! │  DeployDelegateType)                    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use skillet_core::application::{ProjectLoader, SettingsUpdater};
//!
//! // Adapters are injected; `fs` implements the Filesystem port.
//! # fn demo(fs: Box<dyn skillet_core::application::ports::Filesystem>) {
//! let loader = ProjectLoader::new(fs);
//! let ctx = loader.load("my-skill".as_ref(), "default").unwrap();
//! assert!(ctx.manifest.skill_name().is_some());
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DeployDelegateInitializer, ProjectContext, ProjectLoader, SettingsUpdater,
        TemplateFetcher,
        ports::{Filesystem, GitClient, InfrastructureBootstrapper},
    };
    pub use crate::domain::{
        DeployDelegateType, Manifest, ResourcesConfig, SKIP_DEPLOY_DELEGATE,
    };
    pub use crate::error::{SkilletError, SkilletResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
