//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use gomake_core::domain::Architecture as CoreArchitecture;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "gomake",
    bin_name = "gomake",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "A CLI tool for generating Go project structures",
    long_about = "gomake generates ready-to-build Go projects laid out in one of \
                  four architectures: hexagonal, clean, mvc or basic.",
    after_help = "EXAMPLES:\n\
        \x20 gomake project shopcart --arch hexagonal --with-docker\n\
        \x20 gomake project inventory -a clean -d ~/src -l Apache --with-git\n\
        \x20 gomake list\n\
        \x20 gomake completions bash > /usr/share/bash-completion/completions/gomake",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new Go project.
    #[command(
        visible_alias = "new",
        about = "Generate a new Go project",
        after_help = "EXAMPLES:\n\
            \x20 gomake project my-api\n\
            \x20 gomake project my-api --arch hexagonal --with-docker --with-git\n\
            \x20 gomake project my-api -d ./services -l None -y\n\
            \x20 gomake project my-api --interactive"
    )]
    Project(ProjectArgs),

    /// List available architectures.
    #[command(
        visible_alias = "ls",
        about = "List available architectures and custom templates",
        after_help = "EXAMPLES:\n\
            \x20 gomake list\n\
            \x20 gomake list --format names"
    )]
    List(ListArgs),

    /// Manage the gomake settings file.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 gomake config init\n\
            \x20 gomake config show\n\
            \x20 gomake config path"
    )]
    Config(ConfigCommands),

    /// Print version information.
    #[command(about = "Print version information")]
    Version,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 gomake completions bash > ~/.local/share/bash-completion/completions/gomake\n\
            \x20 gomake completions zsh  > ~/.zfunc/_gomake\n\
            \x20 gomake completions fish > ~/.config/fish/completions/gomake.fish"
    )]
    Completions(CompletionsArgs),
}

// ── project ───────────────────────────────────────────────────────────────────

/// Arguments for `gomake project`.
///
/// Every option left unset falls back to the `[defaults]` table of the
/// settings file, then to the built-in defaults.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Project name; also the Go module path.
    #[arg(value_name = "PROJECT_NAME", help = "Project name (Go module path)")]
    pub name: String,

    /// Architecture layout.
    #[arg(
        short = 'a',
        long = "arch",
        value_name = "ARCH",
        value_enum,
        help = "Architecture type [default: basic]"
    )]
    pub architecture: Option<ArchitectureArg>,

    /// Skip prompts; an existing project directory is written over in place.
    #[arg(short = 'y', long = "yes", help = "Automatic confirmation without prompts")]
    pub yes: bool,

    /// Directory the project folder is created in.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        default_value = ".",
        help = "Target directory for project creation"
    )]
    pub dir: PathBuf,

    #[arg(long = "with-docker", help = "Add Dockerfile and docker-compose.yml")]
    pub with_docker: bool,

    #[arg(
        long = "with-makefile",
        help = "Add Makefile with common targets (always included by default)"
    )]
    pub with_makefile: bool,

    #[arg(long = "with-git", help = "Initialize git repository")]
    pub with_git: bool,

    #[arg(
        short = 'i',
        long = "interactive",
        help = "Interactive mode with step-by-step wizard"
    )]
    pub interactive: bool,

    /// License identifier, or `None` to skip the LICENSE file.
    #[arg(
        short = 'l',
        long = "license",
        value_name = "LICENSE",
        help = "License type (MIT, Apache, BSD, GPL, None) [default: MIT]"
    )]
    pub license: Option<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `gomake list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "tree",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Each architecture with its directory tree.
    Tree,
    /// One architecture name per line.
    Names,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `gomake completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `gomake config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a default `.gomake.toml` in the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
    /// Print the effective settings and where they were searched for.
    Show,
    /// Print the path of the settings file in use.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Architectures selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ArchitectureArg {
    /// Ports & adapters.
    Hexagonal,
    Clean,
    Mvc,
    /// Standard Go layout.
    Basic,
}

impl From<ArchitectureArg> for CoreArchitecture {
    fn from(arg: ArchitectureArg) -> Self {
        match arg {
            ArchitectureArg::Hexagonal => CoreArchitecture::Hexagonal,
            ArchitectureArg::Clean => CoreArchitecture::Clean,
            ArchitectureArg::Mvc => CoreArchitecture::Mvc,
            ArchitectureArg::Basic => CoreArchitecture::Basic,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
