//! Unified error handling for Preface Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Preface Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PrefaceError {
    /// Errors from the domain layer (invalid names, broken catalogs).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, existing workspace).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// The reference configuration is missing or malformed.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl PrefaceError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Set PREFACE__REFERENCE__MAIN or pass --reference <URL>".into(),
                "Run 'preface config list' to inspect the active configuration".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Preface".into(),
                "Please report this issue along with the command you ran".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Configuration,
    Io,
    Internal,
}

/// Convenient result type alias.
pub type PrefaceResult<T> = Result<T, PrefaceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn existing_workspace_is_a_conflict() {
        let err: PrefaceError = ApplicationError::WorkspaceAlreadyExists {
            path: PathBuf::from("demo"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Conflict);
    }

    #[test]
    fn invalid_name_is_validation() {
        let err: PrefaceError = DomainError::InvalidProjectName {
            name: "a/b".into(),
            reason: "contains a path separator".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("a/b"));
    }

    #[test]
    fn configuration_suggests_override() {
        let err = PrefaceError::Configuration {
            message: "reference location is empty".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.suggestions().iter().any(|s| s.contains("--reference")));
    }
}
