//! Auxiliary file emission: the files every project gets regardless of
//! architecture, plus the optional Docker / LICENSE / git steps.
//!
//! Content comes from the pure functions in `domain::emitters`; this
//! service only sequences them and writes the results.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, VersionControl},
    domain::{
        DomainValidator, License, ProjectStructure, RelativePath, RenderContext,
        emitters::{
            self, DOCKER_COMPOSE, DOCKERFILE, DOCKERIGNORE, GITIGNORE, GO_MOD, LICENSE_FILE,
            MAKEFILE, README,
        },
    },
    error::GomakeResult,
};

/// What the optional phase produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OptionalOutcome {
    pub files: Vec<PathBuf>,
    pub vcs_initialized: bool,
}

pub struct AuxiliaryFileWriter<'a> {
    filesystem: &'a dyn Filesystem,
    vcs: &'a dyn VersionControl,
}

impl<'a> AuxiliaryFileWriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, vcs: &'a dyn VersionControl) -> Self {
        Self { filesystem, vcs }
    }

    /// Module descriptor, README and gitignore. Always run.
    #[instrument(skip_all, fields(project = %project_path.display()))]
    pub fn write_common(
        &self,
        project_path: &Path,
        context: &RenderContext,
    ) -> GomakeResult<Vec<PathBuf>> {
        let structure = ProjectStructure::new(project_path)
            .with_file(RelativePath::new(GO_MOD), emitters::go_mod(context))?
            .with_file(RelativePath::new(README), emitters::readme(context))?
            .with_file(RelativePath::new(GITIGNORE), emitters::gitignore())?;

        self.write_structure(&structure)
    }

    /// Makefile, then Docker files, LICENSE and git, each gated as configured.
    ///
    /// Steps run in that order and the first failure stops the rest. A
    /// license identifier outside the supported set fails here, after the
    /// Makefile is on disk.
    #[instrument(skip_all, fields(project = %project_path.display()))]
    pub fn write_optional(
        &self,
        project_path: &Path,
        context: &RenderContext,
    ) -> GomakeResult<OptionalOutcome> {
        let mut outcome = OptionalOutcome::default();

        // always on; with_makefile is advisory
        outcome.files.extend(self.write_makefile(project_path, context)?);

        if context.with_docker() {
            outcome.files.extend(self.write_docker(project_path, context)?);
        }

        outcome.files.extend(self.write_license(project_path, context)?);

        if context.with_git() {
            info!("Initializing git repository");
            self.vcs.init(project_path)?;
            outcome.vcs_initialized = true;
        }

        Ok(outcome)
    }

    pub fn write_makefile(
        &self,
        project_path: &Path,
        context: &RenderContext,
    ) -> GomakeResult<Vec<PathBuf>> {
        let structure = ProjectStructure::new(project_path)
            .with_file(RelativePath::new(MAKEFILE), emitters::makefile(context))?;
        self.write_structure(&structure)
    }

    /// Dockerfile, compose spec and dockerignore, written one by one. A
    /// failure on any of them fails the step; earlier ones stay on disk.
    pub fn write_docker(
        &self,
        project_path: &Path,
        context: &RenderContext,
    ) -> GomakeResult<Vec<PathBuf>> {
        info!("Generating Docker files");
        let structure = ProjectStructure::new(project_path)
            .with_file(RelativePath::new(DOCKERFILE), emitters::dockerfile(context))?
            .with_file(
                RelativePath::new(DOCKER_COMPOSE),
                emitters::docker_compose(context),
            )?
            .with_file(RelativePath::new(DOCKERIGNORE), emitters::dockerignore())?;
        self.write_structure(&structure)
    }

    /// LICENSE for the configured identifier; nothing for `"None"` or empty.
    pub fn write_license(
        &self,
        project_path: &Path,
        context: &RenderContext,
    ) -> GomakeResult<Vec<PathBuf>> {
        let Some(license) = License::parse_choice(context.license())? else {
            debug!("License skipped");
            return Ok(Vec::new());
        };

        info!(license = %license, "Generating license file");
        let body = emitters::license(license, context.year(), context.project_name());
        let structure =
            ProjectStructure::new(project_path).with_file(RelativePath::new(LICENSE_FILE), body)?;
        self.write_structure(&structure)
    }

    fn write_structure(&self, structure: &ProjectStructure) -> GomakeResult<Vec<PathBuf>> {
        DomainValidator::validate_project_structure(structure)?;
        let mut written = Vec::with_capacity(structure.files().len());
        for file in structure.files() {
            let path = file.path.under(structure.root());
            debug!(path = %path.display(), bytes = file.size(), "Writing file");
            self.filesystem.write_file(&path, &file.content)?;
            written.push(path);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{
        application::{
            ApplicationError,
            ports::{MockFilesystem, MockVersionControl},
        },
        domain::{DomainError, GenerationConfig},
        error::GomakeError,
    };

    fn context(license: &str, docker: bool, git: bool) -> RenderContext {
        let config = GenerationConfig::builder("shopcart")
            .license(license)
            .with_docker(docker)
            .with_git(git)
            .build()
            .unwrap();
        RenderContext::build_with_year(&config, 2030)
    }

    fn recording_fs() -> (MockFilesystem, Arc<Mutex<Vec<(PathBuf, String)>>>) {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&writes);
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().returning(move |p, c| {
            log.lock().unwrap().push((p.to_path_buf(), c.to_string()));
            Ok(())
        });
        (fs, writes)
    }

    fn names(writes: &[(PathBuf, String)]) -> Vec<String> {
        writes
            .iter()
            .map(|(p, _)| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn common_files_in_order() {
        let (fs, writes) = recording_fs();
        let vcs = MockVersionControl::new();

        AuxiliaryFileWriter::new(&fs, &vcs)
            .write_common(Path::new("/out/shopcart"), &context("MIT", false, false))
            .unwrap();

        let writes = writes.lock().unwrap();
        assert_eq!(names(&writes), vec!["go.mod", "README.md", ".gitignore"]);
        assert!(writes[0].1.starts_with("module shopcart"));
    }

    #[test]
    fn optional_defaults_emit_makefile_and_license_only() {
        let (fs, writes) = recording_fs();
        let mut vcs = MockVersionControl::new();
        vcs.expect_init().never();

        let outcome = AuxiliaryFileWriter::new(&fs, &vcs)
            .write_optional(Path::new("/out/shopcart"), &context("MIT", false, false))
            .unwrap();

        let writes = writes.lock().unwrap();
        assert_eq!(names(&writes), vec!["Makefile", "LICENSE"]);
        assert!(writes[1].1.contains("2030 shopcart"));
        assert!(!outcome.vcs_initialized);
    }

    #[test]
    fn docker_and_git_when_enabled() {
        let (fs, writes) = recording_fs();
        let mut vcs = MockVersionControl::new();
        vcs.expect_init()
            .withf(|p| p == Path::new("/out/shopcart"))
            .times(1)
            .returning(|_| Ok(()));

        let outcome = AuxiliaryFileWriter::new(&fs, &vcs)
            .write_optional(Path::new("/out/shopcart"), &context("BSD", true, true))
            .unwrap();

        assert_eq!(
            names(&writes.lock().unwrap()),
            vec![
                "Makefile",
                "Dockerfile",
                "docker-compose.yml",
                ".dockerignore",
                "LICENSE"
            ]
        );
        assert!(outcome.vcs_initialized);
        assert_eq!(outcome.files.len(), 5);
    }

    #[test]
    fn none_license_skips_license_file() {
        for sentinel in ["None", ""] {
            let (fs, writes) = recording_fs();
            let vcs = MockVersionControl::new();

            AuxiliaryFileWriter::new(&fs, &vcs)
                .write_optional(Path::new("/out/shopcart"), &context(sentinel, false, false))
                .unwrap();

            assert_eq!(names(&writes.lock().unwrap()), vec!["Makefile"]);
        }
    }

    #[test]
    fn unknown_license_fails_after_makefile() {
        let (fs, writes) = recording_fs();
        let mut vcs = MockVersionControl::new();
        vcs.expect_init().never();

        let err = AuxiliaryFileWriter::new(&fs, &vcs)
            .write_optional(Path::new("/out/shopcart"), &context("Unknown", false, true))
            .unwrap_err();

        assert_eq!(
            err,
            GomakeError::Domain(DomainError::UnsupportedLicense("Unknown".into()))
        );
        assert_eq!(names(&writes.lock().unwrap()), vec!["Makefile"]);
    }

    #[test]
    fn docker_write_failure_fails_the_step() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().returning(|p, _| {
            if p.ends_with("docker-compose.yml") {
                Err(ApplicationError::FilesystemError {
                    path: p.to_path_buf(),
                    reason: "Failed to write file: denied".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });
        let vcs = MockVersionControl::new();

        let result = AuxiliaryFileWriter::new(&fs, &vcs)
            .write_docker(Path::new("/out/shopcart"), &context("MIT", true, false));

        assert!(matches!(
            result,
            Err(GomakeError::Application(ApplicationError::FilesystemError { .. }))
        ));
    }

    #[test]
    fn git_failure_is_reported() {
        let (fs, _writes) = recording_fs();
        let mut vcs = MockVersionControl::new();
        vcs.expect_init().returning(|p| {
            Err(ApplicationError::VcsFailed {
                tool: "git",
                path: p.to_path_buf(),
                reason: "not installed".into(),
            }
            .into())
        });

        let err = AuxiliaryFileWriter::new(&fs, &vcs)
            .write_optional(Path::new("/out/shopcart"), &context("MIT", false, true))
            .unwrap_err();
        assert!(err.to_string().contains("git init failed"));
    }
}
