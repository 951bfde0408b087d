//! `git init` through the system `git` binary.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use gomake_core::{
    application::{ApplicationError, ports::VersionControl},
    error::GomakeResult,
};
use tracing::{debug, instrument};

const TOOL: &str = "git";

/// Runs the external `git` executable.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            program: OsString::from(TOOL),
        }
    }

    /// Use a specific executable instead of `git` from `PATH`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitCli {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn init(&self, path: &Path) -> GomakeResult<()> {
        let failed = |reason: String| ApplicationError::VcsFailed {
            tool: TOOL,
            path: path.to_path_buf(),
            reason,
        };

        let output = Command::new(&self.program)
            .arg("init")
            .current_dir(path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| failed(format!("could not run {}: {}", TOOL, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            };
            return Err(failed(reason).into());
        }

        debug!("repository initialized");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomake_core::error::GomakeError;

    #[test]
    fn missing_program_is_vcs_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let git = GitCli::with_program("gomake-no-such-git-binary");

        let err = git.init(tmp.path()).unwrap_err();
        match err {
            GomakeError::Application(ApplicationError::VcsFailed { tool, path, reason }) => {
                assert_eq!(tool, "git");
                assert_eq!(path, tmp.path());
                assert!(reason.starts_with("could not run git"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_directory_is_vcs_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let err = GitCli::new().init(&tmp.path().join("absent")).unwrap_err();
        assert!(matches!(
            err,
            GomakeError::Application(ApplicationError::VcsFailed { .. })
        ));
    }
}
