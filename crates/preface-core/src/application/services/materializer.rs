//! Materializer - writes a rendered `ProjectStructure` to a filesystem.
//!
//! 1. Refuse if the root exists
//! 2. Claim the root with an exclusive directory creation
//! 3. Create reserved directories and write files in catalog order
//! 4. On failure after the claim, remove the claimed root (best effort)

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DomainValidator as validator, FsEntry, ProjectStructure},
    error::PrefaceResult,
};

/// Turns a rendered workspace into directories and files.
pub struct Materializer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> Materializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Materialize `structure` at its root and return that root.
    ///
    /// Never touches an existing root. A failure after the root has been
    /// claimed triggers a rollback of the claimed root; the original error is
    /// returned even if the rollback itself fails.
    #[instrument(skip_all, fields(root = %structure.root().display()))]
    pub fn materialize(&self, structure: &ProjectStructure) -> PrefaceResult<PathBuf> {
        validator::validate_project_structure(structure)?;
        let root = structure.root();

        if self.filesystem.exists(root) {
            return Err(ApplicationError::WorkspaceAlreadyExists {
                path: root.to_path_buf(),
            }
            .into());
        }

        // Losing a same-name race surfaces here as WorkspaceAlreadyExists;
        // nothing has been written yet so there is nothing to roll back.
        self.filesystem.create_dir(root)?;

        match self.write_all(structure) {
            Ok(()) => {
                info!(files = structure.file_count(), "workspace written");
                Ok(root.to_path_buf())
            }
            Err(e) => {
                warn!(error = %e, "write failed, attempting rollback");
                self.rollback(root);
                Err(e)
            }
        }
    }

    fn write_all(&self, structure: &ProjectStructure) -> PrefaceResult<()> {
        let root = structure.root();

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = root.join(dir.path.to_path_buf());
                    self.filesystem.create_dir_all(&path)?;
                    debug!(path = %dir.path, "created directory");
                }
                FsEntry::File(file) => {
                    let path = root.join(file.path.to_path_buf());
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, &file.contents)?;
                    debug!(path = %file.path, bytes = file.size(), "wrote file");
                }
            }
        }

        Ok(())
    }

    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "rollback failed, partial workspace left on disk"
            );
        } else {
            info!(path = %root.display(), "rollback successful");
        }
    }
}
