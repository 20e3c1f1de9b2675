use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Final workspace layout ready for materialization.
///
/// This is the output of catalog rendering. It contains no business logic,
/// only data: the root to create and the ordered entries beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: RelativePath, contents: String) {
        self.entries
            .push(FsEntry::File(RenderedFile { path, contents }));
    }

    pub fn add_directory(&mut self, path: RelativePath) {
        self.entries
            .push(FsEntry::Directory(DirectoryToCreate { path }));
    }

    pub fn with_file(mut self, path: impl Into<RelativePath>, contents: impl Into<String>) -> Self {
        self.add_file(path.into(), contents.into());
        self
    }

    pub fn with_directory(mut self, path: impl Into<RelativePath>) -> Self {
        self.add_directory(path.into());
        self
    }

    /// Same entries under a different root.
    pub fn rooted_at(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }

        let mut seen = BTreeSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.path()) {
                return Err(DomainError::DuplicatePath {
                    path: entry.path().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &RenderedFile> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    /// Look up a rendered file by its relative path.
    pub fn file(&self, path: &str) -> Option<&RenderedFile> {
        self.files().find(|f| f.path.as_str() == path)
    }

    /// Every directory the workspace will contain below the root: explicitly
    /// reserved ones plus the ancestors of every file, sorted.
    pub fn directories(&self) -> BTreeSet<RelativePath> {
        let mut dirs = BTreeSet::new();
        for entry in &self.entries {
            match entry {
                FsEntry::Directory(d) => {
                    dirs.extend(d.path.ancestors());
                    dirs.insert(d.path.clone());
                }
                FsEntry::File(f) => dirs.extend(f.path.ancestors()),
            }
        }
        dirs
    }

    pub fn file_count(&self) -> usize {
        self.files().count()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsEntry {
    File(RenderedFile),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

/// The rendered text of one template unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedFile {
    pub path: RelativePath,
    pub contents: String,
}

impl RenderedFile {
    pub fn size(&self) -> usize {
        self.contents.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryToCreate {
    pub path: RelativePath,
}
