//! Application services - orchestrate use cases.
//!
//! `ProjectGenerator` drives a run; the other services each own one phase
//! and borrow the generator's adapters.

pub mod architecture_files;
pub mod auxiliary;
pub mod generator;
pub mod structure;

pub use architecture_files::ArchitectureFileGenerator;
pub use auxiliary::{AuxiliaryFileWriter, OptionalOutcome};
pub use generator::{GenerationPhase, GenerationReport, ProjectGenerator};
pub use structure::StructureMaterializer;
