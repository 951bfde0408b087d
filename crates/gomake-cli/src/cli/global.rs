//! Flags accepted before or after any gomake subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log generation progress to stderr; repeat for more detail.
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Show generation progress (-v phases, -vv files, -vvv everything)",
        long_help = "Log to stderr while generating:
    -v     each phase as it completes and the run summary
    -vv    every directory created and file written
    -vvv   template and filesystem internals
Without it only warnings and errors are logged. RUST_LOG overrides this."
    )]
    pub verbose: u8,

    /// Print errors only. Next steps and the success line are skipped.
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// Plain status and error lines. Also set by `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Print status and errors without color"
    )]
    pub no_color: bool,

    /// Read gomake settings from this TOML file instead of searching
    /// `./.gomake.toml`, `~/.gomake.toml` and the user config directory.
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        help = "Use this settings file instead of the search path"
    )]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        global: GlobalArgs,
    }

    #[test]
    fn verbose_counts_repeats() {
        let h = Harness::try_parse_from(["gomake", "-vv", "--config", "x.toml"]).unwrap();
        assert_eq!(h.global.verbose, 2);
        assert_eq!(h.global.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Harness::try_parse_from(["gomake", "-q", "-v"]).is_err());
    }
}
