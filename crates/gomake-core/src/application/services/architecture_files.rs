//! Architecture file generation: render every binding and write it.

use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::{
    application::ports::{Filesystem, TemplateStore},
    domain::{ArchitectureDescriptor, RenderContext},
    error::GomakeResult,
};

pub struct ArchitectureFileGenerator<'a> {
    store: &'a dyn TemplateStore,
    filesystem: &'a dyn Filesystem,
}

impl<'a> ArchitectureFileGenerator<'a> {
    pub fn new(store: &'a dyn TemplateStore, filesystem: &'a dyn Filesystem) -> Self {
        Self { store, filesystem }
    }

    /// Render and write each binding of `descriptor`, in order.
    ///
    /// For each binding: render, ensure the parent directory, write
    /// (overwriting). The first failure returns immediately; files written
    /// before it are left in place and nothing is written for the failing
    /// binding.
    #[instrument(skip_all, fields(project = %project_path.display(), arch = %descriptor.architecture()))]
    pub fn generate_files(
        &self,
        project_path: &Path,
        descriptor: &ArchitectureDescriptor,
        context: &RenderContext,
    ) -> GomakeResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(descriptor.files().len());

        for binding in descriptor.files() {
            let content = self.store.render(binding.template_id(), context)?;

            let path = binding.path().under(project_path);
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            debug!(path = %path.display(), template = binding.template_id(), "Writing file");
            self.filesystem.write_file(&path, &content)?;
            written.push(path);
        }

        Ok(written)
    }
}
