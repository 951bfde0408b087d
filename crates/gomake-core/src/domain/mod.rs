//! Core domain layer for gomake.
//!
//! Pure data and pure functions: the architecture catalogue, the generation
//! configuration, the render context and the bodies of the auxiliary files.
//! All I/O (filesystem, template engine, git) is reached through ports
//! defined in the application layer.
//!
//! - **No I/O**: nothing here touches the filesystem or spawns processes
//! - **Immutable values**: configs and contexts are built once, then read

pub mod config;
pub mod emitters;
pub mod entities;
pub mod error;
pub mod render_context;
pub mod value_objects;

mod validation;

pub use config::{GenerationConfig, GenerationConfigBuilder};
pub use entities::{
    ArchitectureDescriptor, FileBinding, FileToWrite, ProjectStructure, RelativePath,
    architecture::{MAIN_FILE_NAME, MAIN_PACKAGE_ROOT},
};
pub use error::{DomainError, ErrorCategory};
pub use render_context::{ArchData, BasicData, CleanData, HexagonalData, MvcData, RenderContext};
pub use validation::DomainValidator;
pub use value_objects::{Architecture, License};
