//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.
//!
//! Every message is a complete, human-readable sentence naming the offending
//! path or field; it is the user's only diagnostic and is displayed as-is.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A required file is missing.
    #[error("File {} not exists.", path.display())]
    FileNotFound { path: PathBuf },

    /// The per-profile skill-metadata `src` field is blank or absent.
    #[error("Invalid skill project structure. Please set the \"src\" field in skillMetadata resource.")]
    SkillMetaSrcNotSet,

    /// The resolved skill-package directory is not on disk.
    #[error("Invalid skill package src. Attempt to get the skill package but doesn't exist: {}.", path.display())]
    SkillPackageNotFound { path: PathBuf },

    /// The skill package carries no `skill.json`.
    #[error("Invalid skill project structure. Please make sure skill.json exists in {}.", path.display())]
    ManifestNotFound { path: PathBuf },

    /// A config or manifest file failed to parse.
    #[error("Failed to parse {}: {reason}", path.display())]
    ParseFailed { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// The git collaborator failed to produce a template clone.
    #[error("Failed to clone {url}: {reason}")]
    GitCloneFailed { url: String, reason: String },

    /// The infrastructure-bootstrap collaborator failed. Propagated
    /// verbatim, never wrapped or retried at this layer.
    #[error("{reason}")]
    BootstrapFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FileNotFound { path } => vec![
                format!("Expected a file at: {}", path.display()),
                "Check that the template produced a complete project".into(),
            ],
            Self::SkillMetaSrcNotSet => vec![
                "Open ask-resources.json and set profiles.<profile>.skillMetadata.src".into(),
                "The path may be absolute or relative to the project folder".into(),
            ],
            Self::SkillPackageNotFound { path } => vec![
                format!("No skill package at: {}", path.display()),
                "Fix the skillMetadata.src path or create the directory".into(),
            ],
            Self::ManifestNotFound { path } => vec![
                format!("Add a skill.json under: {}", path.display()),
            ],
            Self::ParseFailed { path, .. } => vec![
                format!("{} is not valid JSON", path.display()),
                "Fix the syntax error and retry".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::GitCloneFailed { url, .. } => vec![
                format!("Could not clone: {}", url),
                "Check the URL and your network connection".into(),
            ],
            Self::BootstrapFailed { .. } => vec![
                "The deploy delegate failed to bootstrap its workspace".into(),
                "See the error above for the delegate's own diagnostics".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileNotFound { .. } => ErrorCategory::NotFound,
            Self::SkillMetaSrcNotSet
            | Self::SkillPackageNotFound { .. }
            | Self::ManifestNotFound { .. }
            | Self::ParseFailed { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. }
            | Self::GitCloneFailed { .. }
            | Self::BootstrapFailed { .. } => ErrorCategory::Internal,
        }
    }
}
