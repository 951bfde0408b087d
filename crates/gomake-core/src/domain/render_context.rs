//! Context for template rendering.
//!
//! A **Value Object** holding every field a template may reference. Built
//! once per generation run from a [`GenerationConfig`] and never mutated;
//! all emitters read it, so output is a pure function of the configuration
//! (plus the calendar year).
//!
//! ## Fields visible to templates
//!
//! | Field | Example | Source |
//! |-------|---------|--------|
//! | `project_name` | "shop-cart" | User input |
//! | `project_title` | "Shop-Cart" | Computed (title case) |
//! | `module_name` | "shop-cart" | Computed |
//! | `main_package_path` | "cmd/shop-cart" | Computed |
//! | `architecture` | "hexagonal" | User input |
//! | `license` | "MIT" | User input |
//! | `year` | 2026 | System time |
//! | `with_docker` / `with_makefile` / `with_git` | true | User input |
//! | `arch_data` | `{ kind = "hexagonal", core_ports = [...] }` | Catalogue |

use chrono::Datelike;
use serde::Serialize;

use crate::domain::{config::GenerationConfig, value_objects::Architecture};

/// Fixed segment joined with the project name to form the main package path.
const MAIN_PACKAGE_ROOT: &str = "cmd";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    project_name: String,
    project_title: String,
    module_name: String,
    main_package_path: String,
    architecture: String,
    license: String,
    year: i32,
    with_docker: bool,
    with_makefile: bool,
    with_git: bool,
    /// `None` when the configured architecture is not a known one; templates
    /// must tolerate its absence.
    arch_data: Option<ArchData>,
}

impl RenderContext {
    /// Build the context for `config`, stamped with the current local year.
    pub fn build(config: &GenerationConfig) -> Self {
        Self::build_with_year(config, chrono::Local::now().year())
    }

    /// Build the context with an explicit copyright year.
    pub fn build_with_year(config: &GenerationConfig, year: i32) -> Self {
        let name = config.project_name();
        let arch_data = config
            .architecture()
            .parse::<Architecture>()
            .ok()
            .map(ArchData::for_architecture);

        Self {
            project_name: name.to_string(),
            project_title: to_title_case(name),
            module_name: name.to_string(),
            main_package_path: format!("{MAIN_PACKAGE_ROOT}/{name}"),
            architecture: config.architecture().to_string(),
            license: config.license().to_string(),
            year,
            with_docker: config.with_docker(),
            with_makefile: config.with_makefile(),
            with_git: config.with_git(),
            arch_data,
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn project_title(&self) -> &str {
        &self.project_title
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn main_package_path(&self) -> &str {
        &self.main_package_path
    }

    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn with_docker(&self) -> bool {
        self.with_docker
    }

    pub fn with_makefile(&self) -> bool {
        self.with_makefile
    }

    pub fn with_git(&self) -> bool {
        self.with_git
    }

    pub fn arch_data(&self) -> Option<&ArchData> {
        self.arch_data.as_ref()
    }
}

// ── Architecture-specific data ────────────────────────────────────────────────

/// Descriptive component names for one architecture.
///
/// Purely documentation for templates (e.g. listing canonical ports); it has
/// no effect on which directories or files are produced. Serialized with a
/// `kind` tag so templates can branch on `arch_data.kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ArchData {
    Hexagonal(HexagonalData),
    Clean(CleanData),
    Mvc(MvcData),
    Basic(BasicData),
}

impl ArchData {
    pub fn for_architecture(architecture: Architecture) -> Self {
        match architecture {
            Architecture::Hexagonal => Self::Hexagonal(HexagonalData {
                core_ports: strings(&["Repository", "Cache", "Logger"]),
                adapters: strings(&["HTTP", "Database", "Cache"]),
                services: strings(&["AppService"]),
            }),
            Architecture::Clean => Self::Clean(CleanData {
                entities: strings(&["Entity"]),
                use_cases: strings(&["EntityUseCase"]),
                handlers: strings(&["EntityHandler"]),
            }),
            Architecture::Mvc => Self::Mvc(MvcData {
                controllers: strings(&["BaseController", "HealthController"]),
                models: strings(&["BaseModel"]),
                views: strings(&["Response"]),
            }),
            Architecture::Basic => Self::Basic(BasicData {
                handlers: strings(&["HealthHandler"]),
                services: strings(&["Service"]),
            }),
        }
    }

    pub fn architecture(&self) -> Architecture {
        match self {
            Self::Hexagonal(_) => Architecture::Hexagonal,
            Self::Clean(_) => Architecture::Clean,
            Self::Mvc(_) => Architecture::Mvc,
            Self::Basic(_) => Architecture::Basic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexagonalData {
    pub core_ports: Vec<String>,
    pub adapters: Vec<String>,
    pub services: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanData {
    pub entities: Vec<String>,
    pub use_cases: Vec<String>,
    pub handlers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MvcData {
    pub controllers: Vec<String>,
    pub models: Vec<String>,
    pub views: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicData {
    pub handlers: Vec<String>,
    pub services: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

// ── Case conversion ───────────────────────────────────────────────────────────

/// Upper-case the first letter of every word.
///
/// A word starts after any character that is not alphanumeric or `_`, so
/// `shop-cart` becomes `Shop-Cart` while `shop_cart` becomes `Shop_cart`.
fn to_title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }

    out
}
