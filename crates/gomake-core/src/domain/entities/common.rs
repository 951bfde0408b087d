use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// A project-relative output path.
///
/// Invariant: never absolute, never empty, never climbs out of the project
/// root with `..`. Enforced at construction. Stored with `/` separators so
/// that architecture catalogues read the same on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(String);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if the path breaks the invariant (use `try_new` for fallible).
    /// Meant for the static catalogues, where a bad path is a programming
    /// error.
    pub fn new(path: impl AsRef<str>) -> Self {
        match Self::try_new(path.as_ref()) {
            Ok(p) => p,
            Err(e) => panic!("invalid RelativePath: {e}"),
        }
    }

    /// Fallible constructor.
    pub fn try_new(path: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = path.as_ref();
        let as_path = Path::new(raw);

        if raw.starts_with('/') || as_path.is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed { path: raw.into() });
        }

        if raw.is_empty() || as_path.components().any(|c| c == Component::ParentDir) {
            return Err(DomainError::PathEscapesRoot { path: raw.into() });
        }

        Ok(Self(raw.replace('\\', "/").trim_end_matches('/').to_string()))
    }

    /// Join a segment, keeping the invariant.
    pub fn join(&self, segment: impl AsRef<str>) -> Result<Self, DomainError> {
        let segment = Self::try_new(segment)?;
        Ok(Self(format!("{}/{}", self.0, segment.0)))
    }

    /// The containing directory, or `None` for a top-level entry.
    pub fn parent(&self) -> Option<Self> {
        self.0
            .rsplit_once('/')
            .map(|(parent, _)| Self(parent.to_string()))
    }

    /// This path and every ancestor, shortest first.
    ///
    /// `a/b/c` yields `a`, `a/b`, `a/b/c`.
    pub fn ancestors_inclusive(&self) -> Vec<Self> {
        let mut out = Vec::new();
        let mut current = String::new();
        for segment in self.0.split('/') {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(segment);
            out.push(Self(current.clone()));
        }
        out
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Resolve against a root directory.
    pub fn under(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
