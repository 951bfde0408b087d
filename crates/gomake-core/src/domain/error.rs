// ============================================================================
// domain/error.rs - CONFIGURATION AND VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Everything here is detected before (or at the very start of) generation,
/// so no filesystem mutation has happened when one of these is raised.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Duplicate output path: {path}")]
    DuplicatePath { path: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("unsupported architecture: {0}")]
    UnsupportedArchitecture(String),

    #[error("unsupported license: {0}")]
    UnsupportedLicense(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { reason, .. } => vec![
                format!("Details: {}", reason),
                "Use letters, digits, dots, underscores and hyphens".into(),
                "Start with a letter and end with a letter or digit".into(),
            ],
            Self::UnsupportedArchitecture(_) => vec![
                "Supported architectures:".into(),
                "  • hexagonal - ports & adapters".into(),
                "  • clean     - clean architecture".into(),
                "  • mvc       - model / view / controller".into(),
                "  • basic     - standard Go layout".into(),
            ],
            Self::UnsupportedLicense(_) => vec![
                "Supported licenses: MIT, Apache, BSD, GPL".into(),
                "Use 'None' to skip the LICENSE file".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::MissingRequiredField { .. } => {
                ErrorCategory::Validation
            }
            Self::UnsupportedArchitecture(_) | Self::UnsupportedLicense(_) => {
                ErrorCategory::Configuration
            }
            Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::DuplicatePath { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}
