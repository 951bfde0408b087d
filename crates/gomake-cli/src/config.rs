//! Settings file handling.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns it; the core crate only ever sees the
//! [`GenerationConfig`](gomake_core::domain::GenerationConfig) built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by the `project` command, not here)
//! 2. `GOMAKE_`-prefixed environment variables, `__` between key segments
//!    (`GOMAKE_DEFAULTS__ARCHITECTURE=clean`)
//! 3. The first settings file found (see [`AppConfig::search_paths`])
//! 4. Built-in defaults

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// File name looked up in the working and home directories.
pub const LOCAL_CONFIG_FILE: &str = ".gomake.toml";

const ENV_PREFIX: &str = "GOMAKE";

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Values used when a `project` flag is not given.
    pub defaults: Defaults,

    /// User-declared project templates. Parsed and listed, never generated.
    #[serde(default)]
    pub templates: Vec<CustomTemplate>,

    /// File the settings were read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    pub architecture: String,
    pub license: String,
    pub with_docker: bool,
    pub with_makefile: bool,
    pub with_git: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            architecture: "basic".into(),
            license: "MIT".into(),
            with_docker: false,
            with_makefile: false,
            with_git: false,
        }
    }
}

/// A `[[templates]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomTemplate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub directories: Vec<String>,
    #[serde(default)]
    pub files: BTreeMap<String, String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            templates: Vec::new(),
            source: None,
        }
    }
}

impl AppConfig {
    /// Load settings.
    ///
    /// `explicit` is the path given with `--config`; it must exist. Without
    /// it the first existing file from [`Self::search_paths`] is used, and
    /// no file at all means built-in defaults.
    pub fn load(explicit: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match explicit {
            Some(path) => {
                if !path.is_file() {
                    bail!("configuration file not found: {}", path.display());
                }
                Some(path.clone())
            }
            None => Self::search_paths().into_iter().find(|p| p.is_file()),
        };

        Self::load_from(file.as_deref())
    }

    fn load_from(file: Option<&Path>) -> anyhow::Result<Self> {
        let defaults = Defaults::default();
        let mut builder = Config::builder()
            .set_default("defaults.architecture", defaults.architecture)?
            .set_default("defaults.license", defaults.license)?
            .set_default("defaults.with_docker", defaults.with_docker)?
            .set_default("defaults.with_makefile", defaults.with_makefile)?
            .set_default("defaults.with_git", defaults.with_git)?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| match file {
                Some(path) => format!("failed to read {}", path.display()),
                None => "failed to read settings".to_string(),
            })?;

        let mut loaded: AppConfig = settings
            .try_deserialize()
            .context("settings do not match the expected shape")?;
        loaded.source = file.map(Path::to_path_buf);
        Ok(loaded)
    }

    /// Candidate settings files, in order of precedence.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(base) = directories::BaseDirs::new() {
            paths.push(base.home_dir().join(LOCAL_CONFIG_FILE));
        }
        if let Some(dirs) = directories::ProjectDirs::from("", "", "gomake") {
            paths.push(dirs.config_dir().join("config.toml"));
        }
        paths
    }

    /// Settings written by `config init`: the defaults plus one example
    /// template.
    pub fn sample() -> Self {
        let template = CustomTemplate {
            name: "microservice".into(),
            description: "Microservice with gRPC and HTTP".into(),
            directories: [
                "cmd/server",
                "internal/grpc",
                "internal/http",
                "internal/service",
                "internal/repository",
                "proto",
                "migrations",
            ]
            .map(String::from)
            .to_vec(),
            files: BTreeMap::from([(
                "cmd/server/main.go".to_string(),
                "package main\n\nfunc main() {\n}\n".to_string(),
            )]),
            dependencies: vec![
                "google.golang.org/grpc".into(),
                "github.com/grpc-ecosystem/grpc-gateway/v2".into(),
            ],
            variables: BTreeMap::from([
                ("grpc_port".to_string(), "9090".to_string()),
                ("port".to_string(), "8080".to_string()),
                ("service_name".to_string(), "{{ project_name }}".to_string()),
            ]),
        };

        Self {
            templates: vec![template],
            ..Self::default()
        }
    }

    /// Serialize to the on-disk TOML form.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("failed to serialize settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join(LOCAL_CONFIG_FILE);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn no_file_yields_builtin_defaults() {
        let cfg = AppConfig::load_from(None).unwrap();
        assert_eq!(cfg.defaults, Defaults::default());
        assert!(cfg.templates.is_empty());
        assert_eq!(cfg.source, None);
    }

    #[test]
    fn file_overrides_some_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(
            tmp.path(),
            "[defaults]\narchitecture = \"clean\"\nwith_docker = true\n",
        );

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.architecture, "clean");
        assert!(cfg.defaults.with_docker);
        assert_eq!(cfg.defaults.license, "MIT");
        assert_eq!(cfg.source, Some(path));
    }

    #[test]
    fn templates_are_parsed() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(
            tmp.path(),
            r#"
[[templates]]
name = "worker"
description = "Queue consumer"
directories = ["cmd/worker", "internal/jobs"]

[templates.files]
"cmd/worker/main.go" = "package main"
"#,
        );

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.templates.len(), 1);
        let t = &cfg.templates[0];
        assert_eq!(t.name, "worker");
        assert_eq!(t.directories, vec!["cmd/worker", "internal/jobs"]);
        assert_eq!(t.files.get("cmd/worker/main.go").map(String::as_str), Some("package main"));
        assert!(t.dependencies.is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(tmp.path(), "[defaults\narchitecture = ");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here.toml");
        let err = AppConfig::load(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn sample_round_trips_through_toml() {
        let tmp = tempfile::tempdir().unwrap();
        let body = AppConfig::sample().to_toml().unwrap();
        let path = write(tmp.path(), &body);

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.templates, AppConfig::sample().templates);
        assert_eq!(cfg.defaults, Defaults::default());
    }

    #[test]
    fn search_paths_start_with_working_directory() {
        let paths = AppConfig::search_paths();
        assert_eq!(paths[0], PathBuf::from(LOCAL_CONFIG_FILE));
    }
}
