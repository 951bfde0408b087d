//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `gomake-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Named template rendering
//!   - `VersionControl`: Repository initialization
//!
//! - **Driving (Input) Ports**: the CLI calls `ProjectGenerator` directly

pub mod output;

pub use output::{Filesystem, TemplateStore, VersionControl};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateStore, MockVersionControl};
