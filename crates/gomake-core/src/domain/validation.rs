use crate::domain::{
    entities::{ArchitectureDescriptor, ProjectStructure},
    error::DomainError,
};

const MIN_NAME_LEN: usize = 2;
const MAX_NAME_LEN: usize = 100;

/// Reserved Go keywords; a module cannot be named after one.
const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Check that `name` is usable as both a directory and a Go module path.
    ///
    /// Rules are applied in order and the first violation is reported.
    pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("project name cannot be empty"));
        }
        if name.len() < MIN_NAME_LEN {
            return Err(invalid("must be at least 2 characters long"));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(invalid("must be at most 100 characters long"));
        }

        let lowered = name.to_ascii_lowercase();
        if GO_KEYWORDS.contains(&lowered.as_str()) {
            return Err(invalid("cannot be a Go keyword"));
        }

        if !is_module_path(name) {
            return Err(invalid(
                "must start with a letter, end with a letter or digit, and contain only \
                 letters, numbers, dots, underscores, slashes and hyphens",
            ));
        }

        if name.split('/').any(|segment| segment.is_empty() || segment == "..") {
            return Err(invalid("path segments must be non-empty and cannot be '..'"));
        }

        Ok(())
    }

    pub fn validate_descriptor(descriptor: &ArchitectureDescriptor) -> Result<(), DomainError> {
        ProjectStructure::from_descriptor(".", descriptor).validate()
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}

/// ASCII letter first, ASCII alphanumeric last, `[A-Za-z0-9._/-]` between.
fn is_module_path(name: &str) -> bool {
    let bytes = name.as_bytes();
    let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
        return false;
    };

    first.is_ascii_alphabetic()
        && last.is_ascii_alphanumeric()
        && bytes
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'/' | b'-'))
}
