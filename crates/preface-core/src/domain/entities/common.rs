use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::error::DomainError;

/// A forward-slash path guaranteed to be **relative** and normalized.
///
/// Template units and project structures must never contain absolute paths,
/// empty segments, or `.`/`..` components: every unit writes strictly inside
/// the workspace root.
///
/// The separator is always `/` regardless of host; [`RelativePath::to_path_buf`]
/// converts to the native representation at the filesystem boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RelativePath(String);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if the path is not a valid relative path. Intended for
    /// compile-time constant paths in built-in catalogs.
    pub fn new(path: impl Into<String>) -> Self {
        match Self::try_new(path) {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        }
    }

    /// Try to create a relative path.
    ///
    /// This is the non-panicking variant.
    pub fn try_new(path: impl Into<String>) -> Result<Self, DomainError> {
        let path = path.into();
        let invalid = |reason: &str| DomainError::InvalidPath {
            path: path.clone(),
            reason: reason.into(),
        };

        if path.is_empty() {
            return Err(invalid("path is empty"));
        }
        if path.starts_with('/') || path.contains(':') {
            return Err(invalid("path must be relative"));
        }
        if path.contains('\\') {
            return Err(invalid("path must use '/' separators"));
        }
        for segment in path.split('/') {
            match segment {
                "" => return Err(invalid("path contains an empty segment")),
                "." | ".." => return Err(invalid("path must not contain '.' or '..'")),
                _ => {}
            }
        }

        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Last segment (the file or directory name).
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Parent directory, or `None` for a top-level entry.
    pub fn parent(&self) -> Option<RelativePath> {
        self.0
            .rsplit_once('/')
            .map(|(parent, _)| RelativePath(parent.to_string()))
    }

    /// Every proper ancestor directory, outermost first.
    ///
    /// `src/components/Main/mod.ts` yields `src`, `src/components`,
    /// `src/components/Main`.
    pub fn ancestors(&self) -> Vec<RelativePath> {
        let segments: Vec<&str> = self.segments().collect();
        (1..segments.len())
            .map(|n| RelativePath(segments[..n].join("/")))
            .collect()
    }

    /// Resolve a module specifier (`./x.ts`, `../../deps.ts`) against the
    /// directory containing this path.
    ///
    /// Returns `None` for bare or absolute specifiers and for specifiers that
    /// climb above the workspace root.
    pub fn resolve(&self, specifier: &str) -> Option<RelativePath> {
        if !(specifier.starts_with("./") || specifier.starts_with("../")) {
            return None;
        }

        let mut stack: Vec<&str> = match self.0.rsplit_once('/') {
            Some((dir, _)) => dir.split('/').collect(),
            None => Vec::new(),
        };

        for segment in specifier.split('/') {
            match segment {
                "." | "" => {}
                ".." => {
                    stack.pop()?;
                }
                other => stack.push(other),
            }
        }

        if stack.is_empty() {
            return None;
        }
        Self::try_new(stack.join("/")).ok()
    }

    /// Native path representation.
    pub fn to_path_buf(&self) -> PathBuf {
        self.segments().collect()
    }
}

impl AsRef<str> for RelativePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        RelativePath::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
