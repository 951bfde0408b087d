//! Project Generator - main application orchestrator.
//!
//! Runs one generation as a linear state machine:
//!
//! ```text
//! Created → DirectoryReady → ArchitectureFilesWritten
//!         → CommonFilesWritten → OptionalFilesWritten → Done
//! ```
//!
//! Any failing transition ends the run with `GomakeError::Generation`
//! naming the phase. Nothing is retried and nothing is rolled back: output
//! of completed phases stays on disk.

use std::fmt;
use std::path::PathBuf;
use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, TemplateStore, VersionControl},
        services::{ArchitectureFileGenerator, AuxiliaryFileWriter, StructureMaterializer},
    },
    domain::{
        Architecture, ArchitectureDescriptor, DomainValidator, GenerationConfig, RenderContext,
    },
    error::{GomakeError, GomakeResult},
};

/// Generation state, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GenerationPhase {
    Created,
    DirectoryReady,
    ArchitectureFilesWritten,
    CommonFilesWritten,
    OptionalFilesWritten,
    Done,
}

impl fmt::Display for GenerationPhase {
    /// Names the work that leads into this state.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "setup",
            Self::DirectoryReady => "directory structure",
            Self::ArchitectureFilesWritten => "architecture files",
            Self::CommonFilesWritten => "common files",
            Self::OptionalFilesWritten => "optional files",
            Self::Done => "finish",
        })
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub project_path: PathBuf,
    pub architecture: Architecture,
    pub directories_created: usize,
    pub files_written: Vec<PathBuf>,
    pub vcs_initialized: bool,
}

/// Main generation service.
///
/// Owns the configuration and the adapters for one run.
pub struct ProjectGenerator {
    config: GenerationConfig,
    descriptor: ArchitectureDescriptor,
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
    vcs: Box<dyn VersionControl>,
}

impl fmt::Debug for ProjectGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectGenerator")
            .field("config", &self.config)
            .field("architecture", &self.descriptor.architecture())
            .finish_non_exhaustive()
    }
}

impl ProjectGenerator {
    /// Resolve the configured architecture and wire the adapters.
    ///
    /// An invalid project name or unknown architecture fails here, before
    /// any filesystem call.
    pub fn new(
        config: GenerationConfig,
        store: Box<dyn TemplateStore>,
        filesystem: Box<dyn Filesystem>,
        vcs: Box<dyn VersionControl>,
    ) -> GomakeResult<Self> {
        DomainValidator::validate_project_name(config.project_name())?;
        let architecture: Architecture = config.architecture().parse()?;
        let descriptor = architecture.descriptor(config.project_name())?;
        DomainValidator::validate_descriptor(&descriptor)?;

        Ok(Self {
            config,
            descriptor,
            store,
            filesystem,
            vcs,
        })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn descriptor(&self) -> &ArchitectureDescriptor {
        &self.descriptor
    }

    /// Run every phase against the filesystem.
    #[instrument(
        skip_all,
        fields(
            project = %self.config.project_name(),
            arch = %self.descriptor.architecture(),
            target = %self.config.target_dir().display()
        )
    )]
    pub fn generate(&self) -> GomakeResult<GenerationReport> {
        self.generate_with_context(&RenderContext::build(&self.config))
    }

    /// Same as [`generate`](Self::generate) with a caller-supplied context.
    pub fn generate_with_context(&self, context: &RenderContext) -> GomakeResult<GenerationReport> {
        let project_path = self.config.project_path();
        let fs = self.filesystem.as_ref();

        info!(path = %project_path.display(), "Creating project directory");
        let directories_created = phase(GenerationPhase::DirectoryReady, || {
            StructureMaterializer::new(fs).create_structure(&project_path, &self.descriptor)
        })?;

        let mut files_written = phase(GenerationPhase::ArchitectureFilesWritten, || {
            ArchitectureFileGenerator::new(self.store.as_ref(), fs).generate_files(
                &project_path,
                &self.descriptor,
                context,
            )
        })?;

        let auxiliary = AuxiliaryFileWriter::new(fs, self.vcs.as_ref());

        files_written.extend(phase(GenerationPhase::CommonFilesWritten, || {
            auxiliary.write_common(&project_path, context)
        })?);

        let optional = phase(GenerationPhase::OptionalFilesWritten, || {
            auxiliary.write_optional(&project_path, context)
        })?;
        files_written.extend(optional.files);

        info!(
            path = %project_path.display(),
            directories = directories_created,
            files = files_written.len(),
            "Project generated successfully"
        );

        Ok(GenerationReport {
            project_path,
            architecture: self.descriptor.architecture(),
            directories_created,
            files_written,
            vcs_initialized: optional.vcs_initialized,
        })
    }
}

/// Run the transition into `target`, tagging any failure with it.
fn phase<T>(target: GenerationPhase, step: impl FnOnce() -> GomakeResult<T>) -> GomakeResult<T> {
    let out = step().map_err(|source| GomakeError::Generation {
        phase: target,
        source: Box::new(source),
    })?;
    info!(phase = ?target, "Phase complete");
    Ok(out)
}
