//! `gomake version`.

use crate::{error::CliResult, output::OutputManager};

/// Version line plus the platform the binary was built for.
pub fn version_info() -> String {
    format!(
        "gomake version {}\ncore: {}\nOS/Arch: {}/{}",
        env!("CARGO_PKG_VERSION"),
        gomake_core::VERSION,
        std::env::consts::OS,
        std::env::consts::ARCH,
    )
}

pub fn execute(output: OutputManager) -> CliResult<()> {
    output.print(&version_info())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_version_and_platform() {
        let info = version_info();
        assert!(info.starts_with(&format!("gomake version {}", env!("CARGO_PKG_VERSION"))));
        assert!(info.contains(std::env::consts::OS));
    }
}
