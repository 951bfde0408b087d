//! Application layer for gomake.
//!
//! This layer contains:
//! - **Services**: the generation pipeline (ProjectGenerator and its phases)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the domain layer but contains no
//! layout or content rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerationPhase, GenerationReport, ProjectGenerator};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateStore, VersionControl};

pub use error::ApplicationError;
