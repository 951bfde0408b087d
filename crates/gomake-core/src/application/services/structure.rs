//! Structure Materializer - creates the declared directory tree.

use std::path::Path;
use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem, domain::ArchitectureDescriptor, error::GomakeResult,
};

pub struct StructureMaterializer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> StructureMaterializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Create `project_path`, then every declared directory in list order.
    ///
    /// A pre-existing root is not an error. The first failing directory
    /// aborts the call; its path is in the returned error. Returns the
    /// number of declared directories created.
    #[instrument(skip_all, fields(project = %project_path.display(), arch = %descriptor.architecture()))]
    pub fn create_structure(
        &self,
        project_path: &Path,
        descriptor: &ArchitectureDescriptor,
    ) -> GomakeResult<usize> {
        self.filesystem.create_dir_all(project_path)?;

        for dir in descriptor.directories() {
            let path = dir.under(project_path);
            debug!(path = %path.display(), "Creating directory");
            self.filesystem.create_dir_all(&path)?;
        }

        Ok(descriptor.directories().len())
    }
}
