//! `gomake config`: create and inspect the settings file.

use std::path::{Path, PathBuf};

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::{OutputManager, yes_no},
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Init { force } => {
            let path = PathBuf::from(LOCAL_CONFIG_FILE);
            init(&path, force)?;
            output.success(&format!("Configuration file created: {}", path.display()))?;
            output.info("You can now customize your templates and defaults")?;
        }
        ConfigCommands::Show => show(&config, &output)?,
        ConfigCommands::Path => match &config.source {
            Some(path) => output.print(&path.display().to_string())?,
            None => output.info("No configuration file found; using built-in defaults")?,
        },
    }

    Ok(())
}

/// Write the sample settings to `path`.
pub fn init(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    let body = AppConfig::sample()
        .to_toml()
        .with_cli_context(|| "cannot build default settings")?;
    std::fs::write(path, body)
        .with_cli_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), "Configuration file written");
    Ok(())
}

fn show(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    output.header("Current Configuration:")?;
    output.print("")?;

    output.header("Defaults:")?;
    let d = &config.defaults;
    output.field("Architecture", &d.architecture)?;
    output.field("License", &d.license)?;
    output.field("Docker", yes_no(d.with_docker))?;
    output.field("Makefile", yes_no(d.with_makefile))?;
    output.field("Git", yes_no(d.with_git))?;
    output.print("")?;

    if config.templates.is_empty() {
        output.info("No custom templates configured")?;
    } else {
        output.header("Custom Templates:")?;
        for template in &config.templates {
            output.print(&format!("  • {}: {}", template.name, template.description))?;
        }
    }
    output.print("")?;

    output.header("Config file locations (in order of precedence):")?;
    for path in AppConfig::search_paths() {
        let line = format!("  {}", path.display());
        if config.source.as_deref() == Some(path.as_path()) {
            output.success(&format!("{} (in use)", line.trim_start()))?;
        } else if path.is_file() {
            output.print(&format!("{line} (found)"))?;
        } else {
            output.print(&line)?;
        }
    }

    Ok(())
}
