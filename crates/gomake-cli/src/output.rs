//! User-facing status lines.
//!
//! Everything the user is meant to read goes through [`OutputManager`] on
//! stdout; diagnostics go through `tracing` on stderr.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;

const CHECK: &str = "\u{2713}";
const CROSS: &str = "\u{2717}";
const WARN: &str = "\u{26a0}";
const INFO: &str = "\u{2139}";

/// Writes marked, optionally colored lines to stdout.
pub struct OutputManager {
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// Color is used only when stdout is a terminal and neither
    /// `--no-color` nor `NO_COLOR` is set.
    pub fn new(args: &GlobalArgs) -> Self {
        Self {
            quiet: args.quiet,
            color: !args.no_color && io::stdout().is_terminal(),
            term: Term::stdout(),
        }
    }

    /// Plain line; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ <msg>`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked(CHECK, msg, |s| s.green().bold().to_string())
    }

    /// `✗ <msg>`. Shown even in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = self.paint(CROSS, msg, |s| s.red().bold().to_string());
        self.term.write_line(&line)
    }

    /// `⚠ <msg>`
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked(WARN, msg, |s| s.yellow().bold().to_string())
    }

    /// `ℹ <msg>`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked(INFO, msg, |s| s.blue().bold().to_string())
    }

    /// Bold cyan section title.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_owned()
        };
        self.term.write_line(&line)
    }

    /// Indented `label: value` pair with the value highlighted.
    pub fn field(&self, label: &str, value: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let value = if self.color {
            value.green().to_string()
        } else {
            value.to_owned()
        };
        self.term.write_line(&format!("   {label}: {value}"))
    }

    pub fn supports_color(&self) -> bool {
        self.color
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    fn marked(&self, marker: &str, msg: &str, style: fn(&str) -> String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = self.paint(marker, msg, style);
        self.term.write_line(&line)
    }

    fn paint(&self, marker: &str, msg: &str, style: fn(&str) -> String) -> String {
        if self.color {
            format!("{} {}", style(marker), msg)
        } else {
            format!("{marker} {msg}")
        }
    }
}

/// `Yes` / `No` for boolean summary fields.
pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(quiet: bool, no_color: bool) -> OutputManager {
        OutputManager::new(&GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
        })
    }

    #[test]
    fn quiet_mode_is_reported() {
        assert!(manager(true, true).is_quiet());
        assert!(!manager(false, true).is_quiet());
    }

    #[test]
    fn no_color_disables_color() {
        assert!(!manager(false, true).supports_color());
    }

    #[test]
    fn plain_lines_carry_marker() {
        let out = manager(false, true);
        assert_eq!(out.paint(CHECK, "done", |s| s.to_string()), "\u{2713} done");
    }

    #[test]
    fn writes_succeed_without_terminal() {
        let out = manager(true, true);
        assert!(out.print("hidden").is_ok());
        assert!(out.error("always shown").is_ok());
    }

    #[test]
    fn yes_no_labels() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }
}
