//! The generation pipeline through the public API, with in-test adapters.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use gomake_core::prelude::*;
use gomake_core::{
    application::ApplicationError,
    domain::{DomainError, emitters},
};

#[derive(Clone, Default)]
struct RecordingFs {
    dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl Filesystem for RecordingFs {
    fn create_dir_all(&self, path: &Path) -> GomakeResult<()> {
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> GomakeResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.dirs.lock().unwrap().contains(path)
    }

    fn remove_dir_all(&self, _path: &Path) -> GomakeResult<()> {
        Ok(())
    }
}

/// Renders every id as a one-line marker naming the id and project.
struct EchoStore;

impl TemplateStore for EchoStore {
    fn render(&self, id: &str, context: &RenderContext) -> GomakeResult<String> {
        Ok(format!("// {id} for {}\n", context.project_name()))
    }

    fn template_ids(&self) -> Vec<String> {
        Vec::new()
    }
}

#[derive(Clone, Default)]
struct CountingVcs(Arc<Mutex<usize>>);

impl VersionControl for CountingVcs {
    fn init(&self, _path: &Path) -> GomakeResult<()> {
        *self.0.lock().unwrap() += 1;
        Ok(())
    }
}

fn run(config: GenerationConfig) -> (GomakeResult<GenerationReport>, RecordingFs, CountingVcs) {
    let fs = RecordingFs::default();
    let vcs = CountingVcs::default();
    let result = ProjectGenerator::new(
        config,
        Box::new(EchoStore),
        Box::new(fs.clone()),
        Box::new(vcs.clone()),
    )
    .and_then(|g| g.generate());
    (result, fs, vcs)
}

#[test]
fn every_binding_and_common_file_is_written() {
    for arch in Architecture::ALL {
        let config = GenerationConfig::builder("orders")
            .architecture(arch.as_str())
            .target_dir("/work")
            .build()
            .unwrap();
        let (result, fs, _) = run(config);
        let report = result.unwrap();

        let root = PathBuf::from("/work/orders");
        let files = fs.files.lock().unwrap();
        for binding in arch.file_bindings("orders").unwrap() {
            let path = binding.path().under(&root);
            let body = files.get(&path).unwrap();
            assert_eq!(body, &format!("// {} for orders\n", binding.template_id()));
        }
        for name in [emitters::GO_MOD, emitters::README, emitters::GITIGNORE, emitters::MAKEFILE] {
            assert!(files.contains_key(&root.join(name)), "{arch}: {name}");
        }
        assert_eq!(report.files_written.len(), files.len());
    }
}

#[test]
fn git_runs_only_when_asked() {
    let base = || GenerationConfig::builder("orders").target_dir("/work");

    let (_, _, vcs) = run(base().build().unwrap());
    assert_eq!(*vcs.0.lock().unwrap(), 0);

    let (result, _, vcs) = run(base().with_git(true).build().unwrap());
    assert!(result.unwrap().vcs_initialized);
    assert_eq!(*vcs.0.lock().unwrap(), 1);
}

#[test]
fn invalid_name_is_rejected_before_any_io() {
    let config = GenerationConfig::builder("import").build().unwrap();
    let (result, fs, _) = run(config);

    assert!(matches!(
        result.unwrap_err(),
        GomakeError::Domain(DomainError::InvalidProjectName { .. })
    ));
    assert!(fs.dirs.lock().unwrap().is_empty());
}

#[test]
fn unknown_license_reports_optional_phase() {
    let config = GenerationConfig::builder("orders")
        .target_dir("/work")
        .license("Unlicense")
        .build()
        .unwrap();
    let (result, fs, _) = run(config);

    let err = result.unwrap_err();
    assert_eq!(err.phase(), Some(GenerationPhase::OptionalFilesWritten));
    assert_eq!(err.category(), ErrorCategory::Configuration);

    let files = fs.files.lock().unwrap();
    assert!(files.contains_key(Path::new("/work/orders/Makefile")));
    assert!(!files.contains_key(Path::new("/work/orders/LICENSE")));
}

#[test]
fn store_failure_surfaces_unchanged() {
    struct EmptyStore;
    impl TemplateStore for EmptyStore {
        fn render(&self, id: &str, _: &RenderContext) -> GomakeResult<String> {
            Err(ApplicationError::TemplateNotFound { id: id.into() }.into())
        }
        fn template_ids(&self) -> Vec<String> {
            Vec::new()
        }
    }

    let generator = ProjectGenerator::new(
        GenerationConfig::builder("orders").build().unwrap(),
        Box::new(EmptyStore),
        Box::new(RecordingFs::default()),
        Box::new(CountingVcs::default()),
    )
    .unwrap();

    let err = generator.generate().unwrap_err();
    assert_eq!(
        err.root_cause(),
        &GomakeError::Application(ApplicationError::TemplateNotFound {
            id: "basic/main.go".into()
        })
    );
    assert_eq!(err.category(), ErrorCategory::NotFound);
}
