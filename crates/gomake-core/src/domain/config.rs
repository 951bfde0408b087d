//! Generation input.
//!
//! A [`GenerationConfig`] is assembled once from validated CLI input (plus
//! settings-file defaults) and is read-only afterwards. It is passed by
//! reference through the whole pipeline; nothing in the core keeps global
//! state.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::error::DomainError;

/// Immutable description of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationConfig {
    project_name: String,
    architecture: String,
    target_dir: PathBuf,
    license: String,
    with_docker: bool,
    with_makefile: bool,
    with_git: bool,
    auto_yes: bool,
}

impl GenerationConfig {
    /// Start building a configuration for `project_name`.
    pub fn builder(project_name: impl Into<String>) -> GenerationConfigBuilder {
        GenerationConfigBuilder::new(project_name)
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Architecture identifier as supplied by the caller.
    ///
    /// Kept as the raw identifier; the generator resolves it into an
    /// [`crate::domain::Architecture`] and rejects unknown names before any
    /// filesystem mutation.
    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// License identifier; `"None"` or empty means no LICENSE file.
    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn with_docker(&self) -> bool {
        self.with_docker
    }

    /// Carried into the render context only. The Makefile is always emitted.
    pub fn with_makefile(&self) -> bool {
        self.with_makefile
    }

    pub fn with_git(&self) -> bool {
        self.with_git
    }

    pub fn auto_yes(&self) -> bool {
        self.auto_yes
    }

    /// `<target_dir>/<project_name>`.
    pub fn project_path(&self) -> PathBuf {
        self.target_dir.join(&self.project_name)
    }
}

/// Builder for [`GenerationConfig`].
///
/// Defaults mirror the built-in settings: `basic` architecture, `MIT`
/// license, current directory, every optional feature off.
#[derive(Debug, Clone)]
pub struct GenerationConfigBuilder {
    project_name: String,
    architecture: String,
    target_dir: PathBuf,
    license: String,
    with_docker: bool,
    with_makefile: bool,
    with_git: bool,
    auto_yes: bool,
}

impl GenerationConfigBuilder {
    fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            architecture: "basic".into(),
            target_dir: PathBuf::from("."),
            license: "MIT".into(),
            with_docker: false,
            with_makefile: false,
            with_git: false,
            auto_yes: false,
        }
    }

    pub fn architecture(mut self, architecture: impl Into<String>) -> Self {
        self.architecture = architecture.into();
        self
    }

    pub fn target_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.target_dir = dir.into();
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    pub fn with_docker(mut self, enabled: bool) -> Self {
        self.with_docker = enabled;
        self
    }

    pub fn with_makefile(mut self, enabled: bool) -> Self {
        self.with_makefile = enabled;
        self
    }

    pub fn with_git(mut self, enabled: bool) -> Self {
        self.with_git = enabled;
        self
    }

    pub fn auto_yes(mut self, enabled: bool) -> Self {
        self.auto_yes = enabled;
        self
    }

    /// Finish the configuration.
    ///
    /// Only structural requirements are checked here; name rules live in
    /// [`crate::domain::DomainValidator::validate_project_name`].
    pub fn build(self) -> Result<GenerationConfig, DomainError> {
        if self.project_name.is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "project_name",
            });
        }

        Ok(GenerationConfig {
            project_name: self.project_name,
            architecture: self.architecture,
            target_dir: self.target_dir,
            license: self.license,
            with_docker: self.with_docker,
            with_makefile: self.with_makefile,
            with_git: self.with_git,
            auto_yes: self.auto_yes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let config = GenerationConfig::builder("shopcart").build().unwrap();

        assert_eq!(config.architecture(), "basic");
        assert_eq!(config.license(), "MIT");
        assert_eq!(config.target_dir(), Path::new("."));
        assert!(!config.with_docker());
        assert!(!config.with_git());
        assert!(!config.auto_yes());
    }

    #[test]
    fn builder_full() {
        let config = GenerationConfig::builder("orders")
            .architecture("hexagonal")
            .target_dir("/tmp/out")
            .license("None")
            .with_docker(true)
            .with_makefile(true)
            .with_git(true)
            .auto_yes(true)
            .build()
            .unwrap();

        assert_eq!(config.architecture(), "hexagonal");
        assert_eq!(config.license(), "None");
        assert!(config.with_docker() && config.with_makefile() && config.with_git());
        assert_eq!(config.project_path(), PathBuf::from("/tmp/out/orders"));
    }

    #[test]
    fn builder_rejects_empty_name() {
        assert_eq!(
            GenerationConfig::builder("").build(),
            Err(DomainError::MissingRequiredField {
                field: "project_name"
            })
        );
    }

    #[test]
    fn builder_keeps_unknown_architecture_verbatim() {
        let config = GenerationConfig::builder("x1")
            .architecture("unknown")
            .build()
            .unwrap();
        assert_eq!(config.architecture(), "unknown");
    }
}
