use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{architecture::ArchitectureDescriptor, common::RelativePath},
    error::DomainError,
};

/// Concrete output ready for materialization.
///
/// Ordered directories plus an ordered path → content list for files whose
/// bodies are computed outside the template engine (go.mod, Makefile,
/// LICENSE...). It contains no business logic, only data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStructure {
    root: PathBuf,
    directories: Vec<RelativePath>,
    files: Vec<FileToWrite>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            directories: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Directories of `descriptor` rooted at `root`, no files.
    pub fn from_descriptor(root: impl Into<PathBuf>, descriptor: &ArchitectureDescriptor) -> Self {
        Self {
            root: root.into(),
            directories: descriptor.directories().to_vec(),
            files: Vec::new(),
        }
    }

    pub fn add_directory(&mut self, path: RelativePath) {
        self.directories.push(path);
    }

    /// Queue a file. Two files may not share a path.
    pub fn add_file(
        &mut self,
        path: RelativePath,
        content: impl Into<String>,
    ) -> Result<(), DomainError> {
        if self.files.iter().any(|f| f.path == path) {
            return Err(DomainError::DuplicatePath {
                path: path.to_string(),
            });
        }
        self.files.push(FileToWrite {
            path,
            content: content.into(),
        });
        Ok(())
    }

    pub fn with_directory(mut self, path: RelativePath) -> Self {
        self.add_directory(path);
        self
    }

    pub fn with_file(
        mut self,
        path: RelativePath,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        self.add_file(path, content)?;
        Ok(self)
    }

    /// Check that no directory is listed twice.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for dir in &self.directories {
            if !seen.insert(dir.as_str()) {
                return Err(DomainError::DuplicatePath {
                    path: dir.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn directories(&self) -> &[RelativePath] {
        &self.directories
    }

    pub fn files(&self) -> &[FileToWrite] {
        &self.files
    }

    /// Content queued for `path`, if any.
    pub fn content_of(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.path.as_str() == path)
            .map(|f| f.content.as_str())
    }

    pub fn entry_count(&self) -> usize {
        self.directories.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    pub path: RelativePath,
    pub content: String,
}

impl FileToWrite {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
