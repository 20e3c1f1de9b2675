// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry through service layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid reference location '{location}': {reason}")]
    InvalidReferenceLocation { location: String, reason: String },

    // ========================================================================
    // Catalog Errors (a broken built-in catalog is a bug, not user error)
    // ========================================================================
    #[error("Invalid template path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Duplicate path in catalog: {path}")]
    DuplicatePath { path: String },

    #[error("Template catalog is empty")]
    EmptyCatalog,

    #[error("'{importer}' imports '{specifier}', which no template produces")]
    UnresolvedImport { importer: String, specifier: String },

    #[error("'{importer}' imports '{symbol}' from '{source_path}', which does not export it")]
    MissingExport {
        importer: String,
        source_path: String,
        symbol: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { .. } => vec![
                "The name becomes a directory, so it must be a single path component".into(),
                "Use letters, digits, hyphens and underscores".into(),
                "Examples: myapp, my-app, my_app".into(),
            ],
            Self::InvalidReferenceLocation { .. } => vec![
                "The reference location is embedded in generated import statements".into(),
                "Use a plain URL such as https://deno.land/x/preface/mod.ts".into(),
            ],
            _ => vec![
                "The built-in template catalog is inconsistent".into(),
                "This is a bug in Preface, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            Self::InvalidReferenceLocation { .. } => ErrorCategory::Configuration,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}
