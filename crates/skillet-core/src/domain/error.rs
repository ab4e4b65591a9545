//! Domain errors: validation failures in pure business logic.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may surface them more than once)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A deploy-delegate selection label reduced to nothing after
    /// normalization.
    #[error("Invalid deploy delegate selection '{label}': no identifier left after normalization")]
    InvalidDelegateLabel { label: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDelegateLabel { label } => vec![
                format!("The selection '{}' contains no usable identifier", label),
                "Deploy delegate names must contain letters, digits, '-' or '_'".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDelegateLabel { .. } => ErrorCategory::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_label_is_a_validation_error() {
        let err = DomainError::InvalidDelegateLabel {
            label: " !!! ".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }
}
