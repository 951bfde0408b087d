//! Application layer errors.
//!
//! These errors represent failures at the ports (template engine,
//! filesystem, external processes), not configuration mistakes. Those are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving the ports.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Rendering asked for an id the store never loaded.
    #[error("template not found: {id}")]
    TemplateNotFound { id: String },

    /// The template exists but failed against the context.
    #[error("failed to render template {id}: {reason}")]
    TemplateRender { id: String, reason: String },

    /// A bundled or override asset did not parse. Loading is all-or-nothing.
    #[error("failed to parse template {name}: {reason}")]
    TemplateParse { name: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Version-control initialization failed. Files already written stay.
    #[error("{tool} init failed in {path}: {reason}")]
    VcsFailed {
        tool: &'static str,
        path: PathBuf,
        reason: String,
    },

    /// In-memory adapter lock poisoned.
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { id } => vec![
                format!("No template is registered under '{}'", id),
                "If GOMAKE_TEMPLATES_DIR is set, check it contains every built-in template".into(),
            ],
            Self::TemplateRender { id, .. } => vec![
                format!("Template '{}' references a field the context does not provide", id),
                "Run with -vv to see the render context".into(),
            ],
            Self::TemplateParse { name, .. } => vec![
                format!("Fix the syntax of '{}'", name),
                "Unset GOMAKE_TEMPLATES_DIR to fall back to the built-in templates".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::VcsFailed { tool, .. } => vec![
                format!("Make sure '{}' is installed and on your PATH", tool),
                "The project files were generated; initialize the repository manually".into(),
            ],
            Self::StoreLockError => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::TemplateParse { .. } => ErrorCategory::Configuration,
            Self::TemplateRender { .. }
            | Self::FilesystemError { .. }
            | Self::VcsFailed { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_not_found_names_the_id() {
        let err = ApplicationError::TemplateNotFound {
            id: "basic/main.go".into(),
        };
        assert_eq!(err.to_string(), "template not found: basic/main.go");
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn vcs_failure_message() {
        let err = ApplicationError::VcsFailed {
            tool: "git",
            path: PathBuf::from("/tmp/demo"),
            reason: "not found".into(),
        };
        assert_eq!(err.to_string(), "git init failed in /tmp/demo: not found");
        assert!(err.suggestions()[0].contains("'git'"));
    }
}
