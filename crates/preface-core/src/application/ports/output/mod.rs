//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `preface-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::ReferenceConfig;
use crate::error::PrefaceResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `preface_adapters::filesystem::LocalFilesystem` (production)
/// - `preface_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create exactly one directory, failing if it is already present.
    ///
    /// Must be atomic with respect to concurrent callers: when two callers
    /// race on the same path, exactly one succeeds and the other receives
    /// `ApplicationError::WorkspaceAlreadyExists`.
    fn create_dir(&self, path: &Path) -> PrefaceResult<()>;

    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> PrefaceResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> PrefaceResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> PrefaceResult<()>;
}

/// Port delivering the reference configuration.
///
/// Loaded once per `create`; a missing or malformed location is reported as
/// `PrefaceError::Configuration` before any rendering happens.
#[cfg_attr(test, mockall::automock)]
pub trait ReferenceSource: Send + Sync {
    fn load(&self) -> PrefaceResult<ReferenceConfig>;
}

impl ReferenceSource for ReferenceConfig {
    fn load(&self) -> PrefaceResult<ReferenceConfig> {
        Ok(self.clone())
    }
}
