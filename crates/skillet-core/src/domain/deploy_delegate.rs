//! Deploy-delegate identification.
//!
//! # Design
//!
//! A deploy delegate is selected by the user from a decorated UI list
//! (scoped package names, icons, brackets). The selection label is reduced
//! to a clean identifier that serves both as a directory segment under
//! `infrastructure/` and as the value persisted into `ask-resources.json`.
//! [`DeployDelegateType`] is a validated newtype so that the normalization
//! contract is explicit and testable in isolation from any bootstrap side
//! effect.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// The distinguished selection meaning "the user opted out of automatic
/// deployment setup". Boundary contract with the interactive-selection
/// collaborator; must match exactly.
pub const SKIP_DEPLOY_DELEGATE: &str = "deploy skill infrastructure manually";

/// A normalized deploy-delegate identifier.
///
/// Normalization rule: take the segment after the last `/` (labels may be
/// scoped like `@ask-cli/cfn-deployer`), trim whitespace, then drop every
/// character that is not ASCII alphanumeric, `-` or `_`.
///
/// The rule is a fixed character-class filter, not a full slug algorithm:
/// two distinct labels can collide post-normalization. Callers own label
/// uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeployDelegateType(String);

impl DeployDelegateType {
    /// Normalize a user-facing selection label into a delegate type.
    ///
    /// Fails if nothing identifier-like survives normalization.
    pub fn new(label: &str) -> Result<Self, DomainError> {
        let tail = label.rsplit('/').next().unwrap_or(label);
        let normalized: String = tail
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect();

        if normalized.is_empty() {
            return Err(DomainError::InvalidDelegateLabel {
                label: label.to_string(),
            });
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeployDelegateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DeployDelegateType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
