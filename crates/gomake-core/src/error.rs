//! Unified error handling for gomake core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use std::fmt;
use thiserror::Error;

use crate::application::ApplicationError;
use crate::application::services::GenerationPhase;
use crate::domain::DomainError;

/// Root error type for gomake core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GomakeError {
    /// Errors from the domain layer (validation and configuration).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (ports).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// A generation phase failed; earlier phases' output stays on disk.
    #[error("{phase} failed: {source}")]
    Generation {
        phase: GenerationPhase,
        source: Box<GomakeError>,
    },

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl GomakeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Generation { phase, source } => {
                let mut out = source.suggestions();
                if *phase > GenerationPhase::Created {
                    out.push("Files from completed phases were left on disk".into());
                }
                out
            }
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in gomake".into(),
                "Please report this issue at: https://github.com/gomake/gomake/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Generation { source, .. } => source.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Phase that failed, if this error came out of the generator.
    pub fn phase(&self) -> Option<GenerationPhase> {
        match self {
            Self::Generation { phase, .. } => Some(*phase),
            _ => None,
        }
    }

    /// Innermost error, with generation wrappers peeled off.
    pub fn root_cause(&self) -> &GomakeError {
        match self {
            Self::Generation { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Validation => "validation",
            Self::NotFound => "not found",
            Self::Configuration => "configuration",
            Self::Internal => "internal",
        })
    }
}

/// Convenient result type alias.
pub type GomakeResult<T> = Result<T, GomakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_error_reports_phase_and_cause() {
        let err = GomakeError::Generation {
            phase: GenerationPhase::ArchitectureFilesWritten,
            source: Box::new(
                ApplicationError::TemplateNotFound {
                    id: "basic/main.go".into(),
                }
                .into(),
            ),
        };

        assert_eq!(
            err.to_string(),
            "architecture files failed: template not found: basic/main.go"
        );
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.phase(), Some(GenerationPhase::ArchitectureFilesWritten));
        assert!(matches!(
            err.root_cause(),
            GomakeError::Application(ApplicationError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn domain_categories_map_through() {
        let err: GomakeError = DomainError::UnsupportedLicense("Unknown".into()).into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.to_string(), "unsupported license: Unknown");
    }
}
