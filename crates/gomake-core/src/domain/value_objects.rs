//! Domain value objects: Architecture and License.
//!
//! # Design
//!
//! These are pure `Copy` value types compared by value.
//! Both sets are closed: every supported identifier is an enum variant and
//! anything else is rejected by `FromStr` with a configuration error.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant and its `ALL` entry here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. For architectures: add a catalogue entry in `architecture.rs` and the
//!    matching `.tmpl` assets; for licenses: add a body in `emitters.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Architecture ──────────────────────────────────────────────────────────────

/// Architectural layouts gomake can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    /// Ports & adapters: core domain surrounded by adapters.
    Hexagonal,
    /// Uncle Bob's clean architecture (domain / usecase / delivery).
    Clean,
    /// Model-View-Controller web layout.
    Mvc,
    /// Standard Go project layout.
    Basic,
}

impl Architecture {
    /// Every supported architecture, in CLI display order.
    pub const ALL: [Architecture; 4] = [Self::Hexagonal, Self::Clean, Self::Mvc, Self::Basic];

    /// The stable identifier used for CLI selection and template namespaces.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hexagonal => "hexagonal",
            Self::Clean => "clean",
            Self::Mvc => "mvc",
            Self::Basic => "basic",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Hexagonal => "Ports & adapters with an isolated core",
            Self::Clean => "Clean architecture with use cases and delivery layers",
            Self::Mvc => "Model-View-Controller web application",
            Self::Basic => "Standard Go project layout",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hexagonal" => Ok(Self::Hexagonal),
            "clean" => Ok(Self::Clean),
            "mvc" => Ok(Self::Mvc),
            "basic" => Ok(Self::Basic),
            other => Err(DomainError::UnsupportedArchitecture(other.to_string())),
        }
    }
}

// ── License ───────────────────────────────────────────────────────────────────

/// License bodies gomake knows how to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum License {
    #[serde(rename = "MIT")]
    Mit,
    Apache,
    #[serde(rename = "BSD")]
    Bsd,
    #[serde(rename = "GPL")]
    Gpl,
}

impl License {
    pub const ALL: [License; 4] = [Self::Mit, Self::Apache, Self::Bsd, Self::Gpl];

    /// Identifier meaning "emit no LICENSE file".
    pub const NONE_SENTINEL: &'static str = "None";

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mit => "MIT",
            Self::Apache => "Apache",
            Self::Bsd => "BSD",
            Self::Gpl => "GPL",
        }
    }

    /// Parse a configured license identifier.
    ///
    /// `Ok(None)` for the sentinel `"None"` or an empty identifier; an
    /// unknown identifier is an `UnsupportedLicense` error.
    pub fn parse_choice(identifier: &str) -> Result<Option<Self>, DomainError> {
        if identifier.is_empty() || identifier == Self::NONE_SENTINEL {
            return Ok(None);
        }
        identifier.parse().map(Some)
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for License {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MIT" => Ok(Self::Mit),
            "Apache" => Ok(Self::Apache),
            "BSD" => Ok(Self::Bsd),
            "GPL" => Ok(Self::Gpl),
            other => Err(DomainError::UnsupportedLicense(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn architecture_display_matches_identifier() {
        assert_eq!(Architecture::Hexagonal.to_string(), "hexagonal");
        assert_eq!(Architecture::Mvc.to_string(), "mvc");
    }

    #[test]
    fn architecture_round_trips_every_variant() {
        for arch in Architecture::ALL {
            assert_eq!(arch.as_str().parse::<Architecture>().unwrap(), arch);
        }
    }

    #[test]
    fn architecture_unknown_is_unsupported() {
        assert_eq!(
            "unknown".parse::<Architecture>(),
            Err(DomainError::UnsupportedArchitecture("unknown".into()))
        );
        // identifiers are exact
        assert!("Hexagonal".parse::<Architecture>().is_err());
        assert!("".parse::<Architecture>().is_err());
    }

    #[test]
    fn license_from_str_is_exact() {
        assert_eq!("MIT".parse::<License>().unwrap(), License::Mit);
        assert_eq!("Apache".parse::<License>().unwrap(), License::Apache);
        assert!("mit".parse::<License>().is_err());
    }

    #[test]
    fn license_sentinel_and_empty_mean_no_license() {
        assert_eq!(License::parse_choice("None").unwrap(), None);
        assert_eq!(License::parse_choice("").unwrap(), None);
        assert_eq!(License::parse_choice("GPL").unwrap(), Some(License::Gpl));
    }

    #[test]
    fn license_unknown_is_unsupported() {
        assert_eq!(
            License::parse_choice("Unknown"),
            Err(DomainError::UnsupportedLicense("Unknown".into()))
        );
    }
}
