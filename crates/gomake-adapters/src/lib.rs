//! Infrastructure adapters for gomake.
//!
//! This crate implements the ports defined in `gomake-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod template_store;
pub mod vcs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_store::{TEMPLATE_SUFFIX, TEMPLATES_DIR_ENV, TeraTemplateStore};
pub use vcs::GitCli;
