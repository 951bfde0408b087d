//! `gomake list`: the built-in architectures and any custom templates.

use gomake_core::domain::Architecture;

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Stand-in project name for the `cmd/<name>` entry directory.
const PLACEHOLDER: &str = "app";

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match args.format {
        ListFormat::Names => {
            for arch in Architecture::ALL {
                output.print(arch.as_str())?;
            }
        }
        ListFormat::Tree => {
            output.header("Available Architectures:")?;
            for arch in Architecture::ALL {
                output.print("")?;
                output.print(&format!("  {} - {}", arch.as_str(), arch.description()))?;
                for line in tree_lines(arch)? {
                    output.print(&format!("    {line}"))?;
                }
            }

            if !config.templates.is_empty() {
                output.print("")?;
                output.header("Custom Templates:")?;
                for template in &config.templates {
                    output.print(&format!("  {} - {}", template.name, template.description))?;
                }
            }
        }
    }

    Ok(())
}

/// Directory closure of `arch`, indented by depth.
fn tree_lines(arch: Architecture) -> CliResult<Vec<String>> {
    let descriptor = arch
        .descriptor(PLACEHOLDER)
        .map_err(|e| CliError::Core(e.into()))?;

    Ok(descriptor
        .directory_closure()
        .iter()
        .map(|dir| {
            let depth = dir.as_str().matches('/').count();
            let leaf = dir.as_str().rsplit('/').next().unwrap_or(dir.as_str());
            format!("{}{}/", "  ".repeat(depth), leaf)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tree_nests_entry_dir_under_cmd() {
        let lines = tree_lines(Architecture::Basic).unwrap();
        let cmd = lines.iter().position(|l| l == "cmd/").unwrap();
        assert_eq!(lines[cmd + 1], "  app/");
    }

    #[test]
    fn hexagonal_tree_has_adapters() {
        let lines = tree_lines(Architecture::Hexagonal).unwrap();
        assert!(lines.iter().any(|l| l.trim() == "adapters/"));
    }
}
