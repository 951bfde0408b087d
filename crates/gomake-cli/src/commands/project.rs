//! Implementation of the `gomake project` command.
//!
//! Responsibility: merge flags with the settings file, run the checks that
//! need the real filesystem, hand a [`GenerationConfig`] to the core
//! generator and report. No layout or content rules live here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use gomake_adapters::{GitCli, LocalFilesystem, TeraTemplateStore};
use gomake_core::{
    application::{GenerationReport, ProjectGenerator, ports::Filesystem},
    domain::{DomainValidator, GenerationConfig},
};

use crate::{
    cli::{ProjectArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::{OutputManager, yes_no},
    prompt,
};

const WRITE_PROBE: &str = ".gomake_test";

/// Fully resolved options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    pub name: String,
    pub architecture: String,
    pub target_dir: PathBuf,
    pub license: String,
    pub with_docker: bool,
    pub with_makefile: bool,
    pub with_git: bool,
    pub auto_yes: bool,
}

impl ProjectOptions {
    /// Flags win over `[defaults]`; boolean flags can only switch a
    /// feature on.
    pub fn resolve(args: &ProjectArgs, config: &AppConfig) -> Self {
        let defaults = &config.defaults;
        Self {
            name: args.name.clone(),
            architecture: args
                .architecture
                .map(|a| gomake_core::domain::Architecture::from(a).as_str().to_string())
                .unwrap_or_else(|| defaults.architecture.clone()),
            target_dir: args.dir.clone(),
            license: args
                .license
                .clone()
                .unwrap_or_else(|| defaults.license.clone()),
            with_docker: args.with_docker || defaults.with_docker,
            with_makefile: args.with_makefile || defaults.with_makefile,
            with_git: args.with_git || defaults.with_git,
            auto_yes: args.yes,
        }
    }

    pub fn project_path(&self) -> PathBuf {
        self.target_dir.join(&self.name)
    }

    fn to_generation_config(&self) -> CliResult<GenerationConfig> {
        GenerationConfig::builder(&self.name)
            .architecture(&self.architecture)
            .target_dir(&self.target_dir)
            .license(&self.license)
            .with_docker(self.with_docker)
            .with_makefile(self.with_makefile)
            .with_git(self.with_git)
            .auto_yes(self.auto_yes)
            .build()
            .map_err(|e| CliError::Core(e.into()))
    }
}

/// Execute the `gomake project` command.
///
/// 1. Resolve options (flags over settings over built-ins)
/// 2. Run the wizard if `--interactive`
/// 3. Validate name and target directory
/// 4. Load templates and build the generator (rejects bad settings)
/// 5. Handle an existing project directory
/// 6. Generate
/// 7. Print the outcome and next steps
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: ProjectArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let mut options = ProjectOptions::resolve(&args, &config);
    info!(project = %options.name, "Starting project generation");

    if args.interactive {
        options = run_wizard(options, &output)?;
    }

    DomainValidator::validate_project_name(&options.name).map_err(|e| CliError::Core(e.into()))?;
    validate_target_dir(&options.target_dir)?;

    debug!(?options, "Options resolved");

    // Settings and templates must be sound before an existing project is
    // touched; building the generator does no I/O.
    let filesystem = LocalFilesystem::new();
    let generator = ProjectGenerator::new(
        options.to_generation_config()?,
        Box::new(TeraTemplateStore::load_default()?),
        Box::new(filesystem),
        Box::new(GitCli::new()),
    )?;

    handle_existing_project(&options, &filesystem, &output)?;
    let report = generator.generate()?;

    report_success(&options, &report, &global, &output)?;
    Ok(())
}

#[cfg(feature = "interactive")]
fn run_wizard(options: ProjectOptions, output: &OutputManager) -> CliResult<ProjectOptions> {
    crate::interactive::run(options, output)
}

#[cfg(not(feature = "interactive"))]
fn run_wizard(_options: ProjectOptions, _output: &OutputManager) -> CliResult<ProjectOptions> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

/// The directory must exist and accept a new file.
pub fn validate_target_dir(dir: &Path) -> CliResult<()> {
    if !dir.is_dir() {
        return Err(CliError::TargetDirectory {
            path: dir.to_path_buf(),
            reason: "does not exist".into(),
        });
    }

    let probe = dir.join(WRITE_PROBE);
    std::fs::write(&probe, b"").map_err(|e| {
        debug!(error = %e, "Write probe failed");
        CliError::TargetDirectory {
            path: dir.to_path_buf(),
            reason: "is not writable".into(),
        }
    })?;
    std::fs::remove_file(&probe).with_cli_context(|| {
        format!("failed to remove write probe {}", probe.display())
    })?;

    Ok(())
}

/// With `--yes` an existing directory is generated over in place. Otherwise
/// the user must agree to its removal.
fn handle_existing_project(
    options: &ProjectOptions,
    filesystem: &dyn Filesystem,
    output: &OutputManager,
) -> CliResult<()> {
    let path = options.project_path();
    if !filesystem.exists(&path) {
        return Ok(());
    }

    output.warning(&format!(
        "Project directory already exists: {}",
        path.display()
    ))?;

    if options.auto_yes {
        warn!(path = %path.display(), "Writing over existing project directory");
        return Ok(());
    }

    if !prompt::confirm("Do you want to overwrite it?", false)? {
        return Err(CliError::Cancelled);
    }

    output.warning("Removing existing directory...")?;
    filesystem.remove_dir_all(&path)?;
    Ok(())
}

fn report_success(
    options: &ProjectOptions,
    report: &GenerationReport,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<()> {
    info!(
        project = %options.name,
        directories = report.directories_created,
        files = report.files_written.len(),
        "Project generation finished"
    );

    output.print("")?;
    output.success(&format!(
        "Project '{}' generated successfully!",
        options.name
    ))?;
    output.info(&format!("Location: {}", report.project_path.display()))?;

    if global.verbose > 0 {
        output.field("Architecture", report.architecture.as_str())?;
        output.field("Directories", &report.directories_created.to_string())?;
        output.field("Files", &report.files_written.len().to_string())?;
        output.field("Git", yes_no(report.vcs_initialized))?;
    }

    output.print("")?;
    output.header("Next steps:")?;
    for step in next_steps(&options.name) {
        output.print(&format!("   {step}"))?;
    }

    Ok(())
}

fn next_steps(name: &str) -> [String; 4] {
    [
        format!("cd {name}"),
        "go mod tidy".into(),
        "make help".into(),
        "make run".into(),
    ]
}
