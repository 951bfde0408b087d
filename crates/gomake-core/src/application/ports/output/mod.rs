//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `gomake-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::RenderContext;
use crate::error::GomakeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `gomake_adapters::filesystem::LocalFilesystem` (production)
/// - `gomake_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are absolute or relative to the process working directory; the
/// services resolve project-relative paths before calling in.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing is fine.
    fn create_dir_all(&self, path: &Path) -> GomakeResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> GomakeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> GomakeResult<()>;
}

/// Port for named template rendering.
///
/// Implemented by `gomake_adapters::template_store::TeraTemplateStore`.
/// A store is loaded once and reused for every file in a run.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Render the template registered under `id`.
    ///
    /// Unknown ids fail with `TemplateNotFound`; execution failures carry
    /// the id in `TemplateRender`.
    fn render(&self, id: &str, context: &RenderContext) -> GomakeResult<String>;

    /// Every registered id, sorted.
    fn template_ids(&self) -> Vec<String>;

    fn contains(&self, id: &str) -> bool {
        self.template_ids().iter().any(|t| t == id)
    }
}

/// Port for initializing a version-control repository.
///
/// Implemented by `gomake_adapters::vcs::GitCli`.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    /// Initialize a repository rooted at `path`.
    fn init(&self, path: &Path) -> GomakeResult<()>;
}
