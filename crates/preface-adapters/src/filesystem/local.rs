//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use preface_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{PrefaceError, PrefaceResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir(&self, path: &Path) -> PrefaceResult<()> {
        // `create_dir` is a single mkdir(2): the kernel arbitrates races.
        std::fs::create_dir(path).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => ApplicationError::WorkspaceAlreadyExists {
                path: path.to_path_buf(),
            }
            .into(),
            _ => map_io_error(path, e, "create directory"),
        })
    }

    fn create_dir_all(&self, path: &Path) -> PrefaceResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> PrefaceResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling symlink still counts as occupied
        std::fs::symlink_metadata(path).is_ok()
    }

    fn remove_dir_all(&self, path: &Path) -> PrefaceResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| ApplicationError::RollbackFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> PrefaceError {
    ApplicationError::IoFailure {
        path: path.to_path_buf(),
        operation,
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_is_exclusive() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("demo");
        let fs = LocalFilesystem::new();

        fs.create_dir(&path).unwrap();
        let err = fs.create_dir(&path).unwrap_err();
        assert!(matches!(
            err,
            PrefaceError::Application(ApplicationError::WorkspaceAlreadyExists { .. })
        ));
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a").join("b");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&path).unwrap();
        fs.create_dir_all(&path).unwrap();
        assert!(fs.exists(&path));
    }

    #[test]
    fn write_into_missing_parent_is_io_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join("file.txt");

        let err = LocalFilesystem::new().write_file(&path, "x").unwrap_err();
        match err {
            PrefaceError::Application(ApplicationError::IoFailure {
                path: failed,
                operation,
                ..
            }) => {
                assert_eq!(failed, path);
                assert_eq!(operation, "write file");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn remove_dir_all_clears_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("demo");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&root.join("src")).unwrap();
        fs.write_file(&root.join("src").join("index.ts"), "x").unwrap();
        fs.remove_dir_all(&root).unwrap();
        assert!(!fs.exists(&root));
    }
}
