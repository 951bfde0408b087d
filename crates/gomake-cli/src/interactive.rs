//! Step-by-step project wizard (`gomake project --interactive`).

use dialoguer::{Confirm, Input, Select};

use gomake_core::domain::{Architecture, License};

use crate::{
    commands::project::ProjectOptions,
    error::{CliError, CliResult},
    output::{OutputManager, yes_no},
};

/// Walk the user through every option, starting from `options`.
pub fn run(mut options: ProjectOptions, output: &OutputManager) -> CliResult<ProjectOptions> {
    output.print("")?;
    output.header("Interactive Project Setup")?;
    output.field("Project name", &options.name)?;

    if !confirm("Continue with this name?", true)? {
        options.name = Input::new()
            .with_prompt("Enter new project name")
            .interact_text()
            .map_err(prompt_error)?;
    }

    let architectures = Architecture::ALL
        .iter()
        .map(|a| format!("{:<10} {}", a.as_str(), a.description()))
        .collect::<Vec<_>>();
    let current = Architecture::ALL
        .iter()
        .position(|a| a.as_str() == options.architecture)
        .unwrap_or(Architecture::ALL.len() - 1);
    let picked = Select::new()
        .with_prompt("Select architecture")
        .items(&architectures)
        .default(current)
        .interact()
        .map_err(prompt_error)?;
    options.architecture = Architecture::ALL[picked].as_str().to_string();

    options.with_docker = confirm("Add Docker support?", options.with_docker)?;
    options.with_makefile = confirm("Add Makefile?", options.with_makefile)?;
    options.with_git = confirm("Initialize Git repository?", options.with_git)?;

    let licenses = license_choices();
    let current = licenses
        .iter()
        .position(|l| l.eq_ignore_ascii_case(&options.license))
        .unwrap_or(0);
    let picked = Select::new()
        .with_prompt("Select license")
        .items(&licenses)
        .default(current)
        .interact()
        .map_err(prompt_error)?;
    options.license = licenses[picked].to_string();

    output.print("")?;
    output.header("Project Summary:")?;
    output.field("Name", &options.name)?;
    output.field("Architecture", &options.architecture)?;
    output.field("Docker", yes_no(options.with_docker))?;
    output.field("Makefile", yes_no(options.with_makefile))?;
    output.field("Git", yes_no(options.with_git))?;
    output.field("License", &options.license)?;
    output.print("")?;

    Ok(options)
}

/// Every license plus the skip choice, in menu order.
fn license_choices() -> Vec<&'static str> {
    License::ALL
        .iter()
        .map(License::as_str)
        .chain(std::iter::once(License::NONE_SENTINEL))
        .collect()
}

fn confirm(question: &str, default: bool) -> CliResult<bool> {
    Confirm::new()
        .with_prompt(question)
        .default(default)
        .interact()
        .map_err(prompt_error)
}

fn prompt_error(err: dialoguer::Error) -> CliError {
    CliError::IoError {
        message: "interactive prompt failed".into(),
        source: std::io::Error::other(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn license_menu_ends_with_none() {
        let choices = license_choices();
        assert_eq!(choices, vec!["MIT", "Apache", "BSD", "GPL", "None"]);
    }
}
