//! Architecture catalogue.
//!
//! Each [`Architecture`] variant resolves to an [`ArchitectureDescriptor`]:
//! the ordered directory list to create and the ordered output-path →
//! template-id bindings to render. Both are static data apart from the
//! project name, which parameterizes the main entry path
//! (`cmd/<project>/main.go`).
//!
//! Every directory a bound file lands in is declared explicitly, so the
//! tree on disk after generation is exactly the declared list closed under
//! ancestors.

use std::collections::BTreeSet;

use crate::domain::{
    entities::common::RelativePath, error::DomainError, value_objects::Architecture,
};

/// Root of the per-binary entry packages.
pub const MAIN_PACKAGE_ROOT: &str = "cmd";

/// File name of the generated entry point.
pub const MAIN_FILE_NAME: &str = "main.go";

// ── Static tables ─────────────────────────────────────────────────────────────

const HEXAGONAL_DIRS: &[&str] = &[
    "cmd",
    "images",
    "internal/adapters/cache",
    "internal/adapters/handler",
    "internal/adapters/repository",
    "internal/adapters/tests/integration",
    "internal/adapters/tests/unit",
    "internal/config",
    "internal/core/domain",
    "internal/core/ports",
    "internal/core/services",
    "internal/web",
    "pkg/logger",
    "pkg/utils",
    "pkg/database",
    "pkg/initializers",
    "configs",
];

const CLEAN_DIRS: &[&str] = &[
    "cmd",
    "app",
    "domain",
    "repository",
    "usecase",
    "delivery/http",
    "delivery/http/middleware",
    "infrastructure/database",
    "infrastructure/repository",
    "pkg/logger",
    "pkg/utils",
    "pkg/database",
    "configs",
    "docs",
    "scripts",
];

const MVC_DIRS: &[&str] = &[
    "cmd",
    "app",
    "controllers",
    "models",
    "views",
    "middleware",
    "routes",
    "database",
    "migrations",
    "seeders",
    "pkg/logger",
    "pkg/utils",
    "pkg/validators",
    "pkg/database",
    "configs",
    "public/assets",
    "storage/logs",
    "tests",
];

const BASIC_DIRS: &[&str] = &[
    "cmd",
    "internal/app",
    "internal/handlers",
    "internal/services",
    "internal/repository",
    "pkg/logger",
    "pkg/utils",
    "pkg/database",
    "configs",
    "docs",
    "scripts",
    "tests",
];

/// Bindings shared by every architecture, written after the main entry.
const SHARED_BINDINGS: &[(&str, &str)] = &[
    (".env", "common/env"),
    ("pkg/logger/logger.go", "common/logger"),
    ("pkg/utils/utils.go", "common/utils"),
    ("pkg/database/database.go", "common/database"),
    ("configs/config.go", "common/config"),
];

const HEXAGONAL_EXTRA_BINDINGS: &[(&str, &str)] =
    &[("internal/adapters/cache/cache.go", "hexagonal/cache.go")];

// ── Descriptor ────────────────────────────────────────────────────────────────

/// One output file and the template that produces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBinding {
    path: RelativePath,
    template_id: String,
}

impl FileBinding {
    pub fn new(path: RelativePath, template_id: impl Into<String>) -> Self {
        Self {
            path,
            template_id: template_id.into(),
        }
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }
}

/// Resolved layout of one architecture for one project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchitectureDescriptor {
    architecture: Architecture,
    directories: Vec<RelativePath>,
    files: Vec<FileBinding>,
}

impl ArchitectureDescriptor {
    /// Assemble a descriptor by hand.
    ///
    /// Fails if two bindings target the same output path.
    pub fn new(
        architecture: Architecture,
        directories: Vec<RelativePath>,
        files: Vec<FileBinding>,
    ) -> Result<Self, DomainError> {
        let mut seen = BTreeSet::new();
        for binding in &files {
            if !seen.insert(binding.path.as_str()) {
                return Err(DomainError::DuplicatePath {
                    path: binding.path.to_string(),
                });
            }
        }

        Ok(Self {
            architecture,
            directories,
            files,
        })
    }

    pub fn architecture(&self) -> Architecture {
        self.architecture
    }

    /// Directories in declared creation order.
    pub fn directories(&self) -> &[RelativePath] {
        &self.directories
    }

    /// Bindings in write order.
    pub fn files(&self) -> &[FileBinding] {
        &self.files
    }

    /// Template bound to `path`, if any.
    pub fn template_for(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|b| b.path.as_str() == path)
            .map(FileBinding::template_id)
    }

    /// Every directory that exists once the declared list is created,
    /// intermediate parents included.
    pub fn directory_closure(&self) -> BTreeSet<RelativePath> {
        self.directories
            .iter()
            .flat_map(RelativePath::ancestors_inclusive)
            .collect()
    }

    /// Replace the template behind one binding.
    ///
    /// Used to point a descriptor at a custom asset set.
    pub fn with_template(mut self, path: &str, template_id: impl Into<String>) -> Self {
        if let Some(binding) = self.files.iter_mut().find(|b| b.path.as_str() == path) {
            binding.template_id = template_id.into();
        }
        self
    }
}

// ── Architecture strategy ─────────────────────────────────────────────────────

impl Architecture {
    /// Stable identifier used for CLI selection and dispatch.
    pub const fn name(&self) -> &'static str {
        self.as_str()
    }

    /// Template id of the main entry file.
    pub fn main_template_id(&self) -> String {
        format!("{}/{}", self.as_str(), MAIN_FILE_NAME)
    }

    /// `cmd/<project>/main.go`.
    pub fn main_entry_path(project_name: &str) -> Result<RelativePath, DomainError> {
        RelativePath::try_new(format!(
            "{MAIN_PACKAGE_ROOT}/{project_name}/{MAIN_FILE_NAME}"
        ))
    }

    /// Declared directory list for this architecture.
    pub fn directories(&self, project_name: &str) -> Result<Vec<RelativePath>, DomainError> {
        let table = match self {
            Self::Hexagonal => HEXAGONAL_DIRS,
            Self::Clean => CLEAN_DIRS,
            Self::Mvc => MVC_DIRS,
            Self::Basic => BASIC_DIRS,
        };

        let entry_dir = RelativePath::try_new(format!("{MAIN_PACKAGE_ROOT}/{project_name}"))?;

        let mut dirs = Vec::with_capacity(table.len() + 1);
        for raw in table {
            dirs.push(RelativePath::new(raw));
            if *raw == MAIN_PACKAGE_ROOT {
                dirs.push(entry_dir.clone());
            }
        }
        Ok(dirs)
    }

    /// Output path → template id bindings, main entry first.
    pub fn file_bindings(&self, project_name: &str) -> Result<Vec<FileBinding>, DomainError> {
        let mut bindings = vec![FileBinding::new(
            Self::main_entry_path(project_name)?,
            self.main_template_id(),
        )];

        let extra: &[(&str, &str)] = match self {
            Self::Hexagonal => HEXAGONAL_EXTRA_BINDINGS,
            Self::Clean | Self::Mvc | Self::Basic => &[],
        };

        bindings.extend(
            SHARED_BINDINGS
                .iter()
                .chain(extra)
                .map(|(path, id)| FileBinding::new(RelativePath::new(path), *id)),
        );

        Ok(bindings)
    }

    /// Full descriptor for `project_name`.
    pub fn descriptor(&self, project_name: &str) -> Result<ArchitectureDescriptor, DomainError> {
        ArchitectureDescriptor::new(
            *self,
            self.directories(project_name)?,
            self.file_bindings(project_name)?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_matches_identifier() {
        for arch in Architecture::ALL {
            assert_eq!(arch.name(), arch.to_string());
        }
    }

    #[test]
    fn main_entry_is_parameterized_by_project() {
        let d = Architecture::Basic.descriptor("shopcart").unwrap();
        let first = &d.files()[0];

        assert_eq!(first.path().as_str(), "cmd/shopcart/main.go");
        assert_eq!(first.template_id(), "basic/main.go");
    }

    #[test]
    fn every_binding_lands_in_a_declared_directory() {
        for arch in Architecture::ALL {
            let d = arch.descriptor("demo").unwrap();
            let declared: BTreeSet<_> = d.directories().iter().cloned().collect();

            for binding in d.files() {
                if let Some(parent) = binding.path().parent() {
                    assert!(
                        declared.contains(&parent),
                        "{arch}: {} not declared",
                        parent
                    );
                }
            }
        }
    }

    #[test]
    fn shared_bindings_present_everywhere() {
        for arch in Architecture::ALL {
            let d = arch.descriptor("demo").unwrap();
            assert_eq!(d.template_for(".env"), Some("common/env"));
            assert_eq!(d.template_for("configs/config.go"), Some("common/config"));
            assert_eq!(
                d.template_for("pkg/database/database.go"),
                Some("common/database")
            );
        }
    }

    #[test]
    fn only_hexagonal_binds_cache() {
        let cache = "internal/adapters/cache/cache.go";
        assert_eq!(
            Architecture::Hexagonal
                .descriptor("demo")
                .unwrap()
                .template_for(cache),
            Some("hexagonal/cache.go")
        );
        assert!(
            Architecture::Clean
                .descriptor("demo")
                .unwrap()
                .template_for(cache)
                .is_none()
        );
    }

    #[test]
    fn basic_directories() {
        let dirs: Vec<_> = Architecture::Basic
            .directories("shopcart")
            .unwrap()
            .into_iter()
            .map(|d| d.to_string())
            .collect();

        assert_eq!(dirs[0], "cmd");
        assert_eq!(dirs[1], "cmd/shopcart");
        for expected in [
            "internal/app",
            "internal/handlers",
            "internal/services",
            "internal/repository",
            "pkg/logger",
            "pkg/utils",
            "pkg/database",
            "configs",
            "docs",
            "scripts",
            "tests",
        ] {
            assert!(dirs.iter().any(|d| d == expected), "missing {expected}");
        }
    }

    #[test]
    fn closure_includes_intermediate_parents() {
        let closure = Architecture::Clean.descriptor("demo").unwrap().directory_closure();
        assert!(closure.contains(&RelativePath::new("delivery")));
        assert!(closure.contains(&RelativePath::new("infrastructure")));
        assert!(closure.contains(&RelativePath::new("cmd/demo")));
    }

    #[test]
    fn descriptor_is_stable() {
        assert_eq!(
            Architecture::Mvc.descriptor("demo").unwrap(),
            Architecture::Mvc.descriptor("demo").unwrap()
        );
    }

    #[test]
    fn hostile_project_name_is_rejected() {
        assert!(Architecture::Basic.descriptor("a/../../etc").is_err());
    }

    #[test]
    fn duplicate_binding_is_rejected() {
        let path = RelativePath::new("main.go");
        let result = ArchitectureDescriptor::new(
            Architecture::Basic,
            vec![],
            vec![
                FileBinding::new(path.clone(), "a"),
                FileBinding::new(path, "b"),
            ],
        );
        assert!(matches!(result, Err(DomainError::DuplicatePath { .. })));
    }

    #[test]
    fn with_template_rebinds() {
        let d = Architecture::Basic
            .descriptor("demo")
            .unwrap()
            .with_template(".env", "missing/env");
        assert_eq!(d.template_for(".env"), Some("missing/env"));
    }
}
