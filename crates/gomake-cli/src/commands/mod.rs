//! One module per subcommand.

pub mod completions;
pub mod config;
pub mod list;
pub mod project;
pub mod version;
