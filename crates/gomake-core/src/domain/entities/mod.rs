pub mod architecture;
pub mod common;
pub mod project_structure;

pub use architecture::{ArchitectureDescriptor, FileBinding};
pub use common::RelativePath;
pub use project_structure::{FileToWrite, ProjectStructure};
