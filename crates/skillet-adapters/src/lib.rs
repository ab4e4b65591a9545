//! Infrastructure adapters for Skillet.
//!
//! This crate implements the ports defined in
//! `skillet-core::application::ports`. It contains all external dependencies
//! and I/O operations.

pub mod bootstrap;
pub mod filesystem;
pub mod git;

// Re-export commonly used adapters
pub use bootstrap::{RecordingBootstrapper, WorkspaceBootstrapper};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use git::GitCliClient;
