//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use preface_core::{
    application::{ApplicationError, ports::Filesystem},
    error::PrefaceResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and inspect
/// the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    failing_writes: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every future write to `path` fail with an I/O failure.
    pub fn fail_writes_to(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_writes.insert(path.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read().ok()?.files.get(path).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> PrefaceResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }

    fn write(&self) -> PrefaceResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }
}

impl MemoryFilesystemInner {
    fn occupied(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> PrefaceResult<()> {
        let mut inner = self.write()?;

        if inner.occupied(path) {
            return Err(ApplicationError::WorkspaceAlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> PrefaceResult<()> {
        let mut inner = self.write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::IoFailure {
                    path: current,
                    operation: "create directory",
                    reason: "a file is in the way".into(),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> PrefaceResult<()> {
        let mut inner = self.write()?;

        if inner.failing_writes.contains(path) {
            return Err(ApplicationError::IoFailure {
                path: path.to_path_buf(),
                operation: "write file",
                reason: "injected failure".into(),
            }
            .into());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::IoFailure {
                    path: path.to_path_buf(),
                    operation: "write file",
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.occupied(path))
            .unwrap_or(false)
    }

    fn remove_dir_all(&self, path: &Path) -> PrefaceResult<()> {
        let mut inner = self.write()?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use preface_core::error::PrefaceError;

    #[test]
    fn create_dir_is_exclusive() {
        let fs = MemoryFilesystem::new();
        fs.create_dir(Path::new("demo")).unwrap();
        assert!(matches!(
            fs.create_dir(Path::new("demo")),
            Err(PrefaceError::Application(
                ApplicationError::WorkspaceAlreadyExists { .. }
            ))
        ));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("demo/src/index.ts"), "x").is_err());

        fs.create_dir_all(Path::new("demo/src")).unwrap();
        fs.write_file(Path::new("demo/src/index.ts"), "x").unwrap();
        assert_eq!(
            fs.read_file(Path::new("demo/src/index.ts")).as_deref(),
            Some("x")
        );
    }

    #[test]
    fn injected_failure() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("demo")).unwrap();
        fs.fail_writes_to("demo/README.md");
        assert!(matches!(
            fs.write_file(Path::new("demo/README.md"), "x"),
            Err(PrefaceError::Application(ApplicationError::IoFailure { .. }))
        ));
    }

    #[test]
    fn remove_dir_all_only_removes_subtree() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("a/b")).unwrap();
        fs.create_dir_all(Path::new("ab")).unwrap();
        fs.write_file(Path::new("a/b/f"), "x").unwrap();

        fs.remove_dir_all(Path::new("a")).unwrap();
        assert!(!fs.exists(Path::new("a")));
        assert!(!fs.exists(Path::new("a/b/f")));
        assert!(fs.exists(Path::new("ab")));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.create_dir(Path::new("demo")).unwrap();
        assert!(other.exists(Path::new("demo")));
        assert_eq!(other.list_directories(), [PathBuf::from("demo")]);
    }
}
