//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The target workspace root is already present on disk.
    #[error("Workspace already exists at {}", path.display())]
    WorkspaceAlreadyExists { path: PathBuf },

    /// A directory or file operation failed after the root was claimed.
    #[error("Failed to {operation} {}: {reason}", path.display())]
    IoFailure {
        path: PathBuf,
        operation: &'static str,
        reason: String,
    },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {}: {reason}", path.display())]
    RollbackFailed { path: PathBuf, reason: String },

    /// Shared adapter state could not be locked (poisoned).
    #[error("Adapter state is unavailable")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::WorkspaceAlreadyExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Preface never overwrites an existing project".into(),
                "Choose a different project name".into(),
            ],
            Self::IoFailure { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![
                format!("A partial workspace may remain at {}", path.display()),
                "Remove it manually before retrying with the same name".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::WorkspaceAlreadyExists { .. } => ErrorCategory::Conflict,
            Self::IoFailure { .. } | Self::RollbackFailed { .. } => ErrorCategory::Io,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
