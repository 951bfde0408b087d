//! Binary-level tests for the `gomake` command.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `gomake` isolated from the caller's settings and template overrides.
fn gomake(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gomake").unwrap();
    cmd.current_dir(cwd)
        .env("HOME", cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".xdg"))
        .env_remove("GOMAKE_TEMPLATES_DIR")
        .env_remove("GOMAKE_DEFAULTS__ARCHITECTURE")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn help_lists_commands() {
    let tmp = TempDir::new().unwrap();
    gomake(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("project"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn project_help_lists_flags() {
    let tmp = TempDir::new().unwrap();
    gomake(tmp.path())
        .args(["project", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--arch"))
        .stdout(predicate::str::contains("--with-docker"))
        .stdout(predicate::str::contains("--license"));
}

#[test]
fn version_command_prints_version() {
    let tmp = TempDir::new().unwrap();
    gomake(tmp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "gomake version {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn basic_project_with_defaults() {
    let tmp = TempDir::new().unwrap();

    gomake(tmp.path())
        .args(["project", "svc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'svc' generated successfully!"))
        .stdout(predicate::str::contains("cd svc"))
        .stdout(predicate::str::contains("go mod tidy"));

    let root = tmp.path().join("svc");
    for file in [
        "cmd/svc/main.go",
        "go.mod",
        "README.md",
        ".gitignore",
        "Makefile",
        "LICENSE",
        ".env",
        "pkg/logger/logger.go",
    ] {
        assert!(root.join(file).is_file(), "missing {file}");
    }
    assert!(root.join("internal/handlers").is_dir());
    assert!(!root.join("Dockerfile").exists());
    assert!(!tmp.path().join(".gomake_test").exists());
}

#[test]
fn hexagonal_project_in_target_dir_with_docker() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("services")).unwrap();

    gomake(tmp.path())
        .args([
            "project",
            "shopcart",
            "-a",
            "hexagonal",
            "-d",
            "services",
            "--with-docker",
            "-l",
            "Apache",
        ])
        .assert()
        .success();

    let root = tmp.path().join("services/shopcart");
    assert!(root.join("internal/adapters/cache/cache.go").is_file());
    assert!(root.join("internal/core/ports").is_dir());
    let compose = fs::read_to_string(root.join("docker-compose.yml")).unwrap();
    assert!(compose.contains("shopcart_db"));
    let license = fs::read_to_string(root.join("LICENSE")).unwrap();
    assert!(license.contains("Apache License"));
}

#[test]
fn new_alias_and_none_license() {
    let tmp = TempDir::new().unwrap();

    gomake(tmp.path())
        .args(["new", "svc", "--license", "None"])
        .assert()
        .success();

    assert!(tmp.path().join("svc/Makefile").is_file());
    assert!(!tmp.path().join("svc/LICENSE").exists());
}

#[test]
fn settings_file_supplies_defaults() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".gomake.toml"),
        "[defaults]\narchitecture = \"clean\"\nwith_docker = true\n",
    )
    .unwrap();

    gomake(tmp.path()).args(["project", "svc"]).assert().success();

    let root = tmp.path().join("svc");
    assert!(root.join("usecase").is_dir());
    assert!(root.join("Dockerfile").is_file());
}

#[test]
fn flag_beats_settings_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".gomake.toml"),
        "[defaults]\narchitecture = \"clean\"\n",
    )
    .unwrap();

    gomake(tmp.path())
        .args(["project", "svc", "-a", "mvc"])
        .assert()
        .success();

    assert!(tmp.path().join("svc/controllers").is_dir());
    assert!(!tmp.path().join("svc/usecase").exists());
}

#[test]
fn environment_overrides_settings() {
    let tmp = TempDir::new().unwrap();

    gomake(tmp.path())
        .env("GOMAKE_DEFAULTS__ARCHITECTURE", "mvc")
        .args(["project", "svc"])
        .assert()
        .success();

    assert!(tmp.path().join("svc/controllers").is_dir());
}

#[test]
fn existing_project_with_yes_is_written_over() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("svc");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("notes.txt"), "keep").unwrap();

    gomake(tmp.path())
        .args(["project", "svc", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert!(root.join("notes.txt").is_file());
    assert!(root.join("go.mod").is_file());
}

#[test]
fn existing_project_replaced_after_confirmation() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("svc");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("notes.txt"), "old").unwrap();

    gomake(tmp.path())
        .args(["project", "svc"])
        .write_stdin("y\n")
        .assert()
        .success();

    assert!(!root.join("notes.txt").exists());
    assert!(root.join("go.mod").is_file());
}

#[test]
fn list_shows_every_architecture() {
    let tmp = TempDir::new().unwrap();
    gomake(tmp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("hexagonal"))
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("mvc"))
        .stdout(predicate::str::contains("basic"));
}

#[test]
fn list_names_format() {
    let tmp = TempDir::new().unwrap();
    gomake(tmp.path())
        .args(["list", "--format", "names"])
        .assert()
        .success()
        .stdout("hexagonal\nclean\nmvc\nbasic\n");
}

#[test]
fn config_init_then_show() {
    let tmp = TempDir::new().unwrap();

    gomake(tmp.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));
    assert!(tmp.path().join(".gomake.toml").is_file());

    gomake(tmp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Architecture: basic"))
        .stdout(predicate::str::contains("microservice"));

    gomake(tmp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".gomake.toml"));
}

#[test]
fn custom_templates_are_listed_not_generated() {
    let tmp = TempDir::new().unwrap();
    gomake(tmp.path()).args(["config", "init"]).assert().success();

    gomake(tmp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Custom Templates:"))
        .stdout(predicate::str::contains("microservice"));
}

#[test]
fn completions_for_bash() {
    let tmp = TempDir::new().unwrap();
    gomake(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gomake"));
}
