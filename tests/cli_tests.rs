//! Integration tests for the `filecat` binary
//!
//! These tests run the compiled executable against temporary trees and check
//! its stdout, stderr and exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn filecat_cmd() -> Command {
    Command::cargo_bin("filecat").unwrap()
}

fn create_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// `a.txt` and `b/c.go`
fn create_basic_tree(dir: &TempDir) {
    create_file(&dir.path().join("a.txt"), "hi");
    create_file(&dir.path().join("b/c.go"), "package b");
}

/// A per-user config dir whose `filecat/config.toml` excludes `.txt` files
fn create_user_config() -> TempDir {
    let config_home = TempDir::new().unwrap();
    create_file(
        &config_home.path().join("filecat/config.toml"),
        "[filters]\nexclude_exts = [\"txt\"]\n",
    );
    config_home
}

const BASIC_TREE_OUTPUT: &str =
    "## FILE: \"a.txt\"\n```txt\nhi\n```\n\n## FILE: \"b/c.go\"\n```go\npackage b\n```\n\n";

#[test]
fn test_run_current_dir_prints_all_files() {
    let test_dir = TempDir::new().unwrap();
    create_basic_tree(&test_dir);

    let assert = filecat_cmd()
        .current_dir(test_dir.path())
        .env_remove("RUST_LOG")
        .arg("run")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert_eq!(
        String::from_utf8_lossy(&assert.get_output().stdout),
        BASIC_TREE_OUTPUT
    );
}

#[test]
fn test_run_include_current_dir_prints_top_level_only() {
    let test_dir = TempDir::new().unwrap();
    create_basic_tree(&test_dir);

    let assert = filecat_cmd()
        .current_dir(test_dir.path())
        .args(["run", "-D", "."])
        .assert()
        .success();

    assert_eq!(
        String::from_utf8_lossy(&assert.get_output().stdout),
        "## FILE: \"a.txt\"\n```txt\nhi\n```\n\n"
    );
}

#[cfg(target_os = "linux")]
#[test]
fn test_run_without_config_flags_ignores_user_config() {
    let test_dir = TempDir::new().unwrap();
    create_basic_tree(&test_dir);
    let config_home = create_user_config();

    let assert = filecat_cmd()
        .current_dir(test_dir.path())
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .arg("run")
        .assert()
        .success();

    assert_eq!(
        String::from_utf8_lossy(&assert.get_output().stdout),
        BASIC_TREE_OUTPUT
    );
}

#[cfg(target_os = "linux")]
#[test]
fn test_run_user_config_flag_reads_user_config() {
    let test_dir = TempDir::new().unwrap();
    create_basic_tree(&test_dir);
    let config_home = create_user_config();

    let assert = filecat_cmd()
        .current_dir(test_dir.path())
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .args(["run", "--user-config"])
        .assert()
        .success();

    assert_eq!(
        String::from_utf8_lossy(&assert.get_output().stdout),
        "## FILE: \"b/c.go\"\n```go\npackage b\n```\n\n"
    );
}

#[test]
fn test_run_explicit_config_file() {
    let test_dir = TempDir::new().unwrap();
    create_basic_tree(&test_dir);
    let config_home = create_user_config();

    filecat_cmd()
        .arg("run")
        .arg(test_dir.path())
        .arg("--config")
        .arg(config_home.path().join("filecat/config.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("c.go"))
        .stdout(predicate::str::contains("a.txt").not());
}

#[test]
fn test_run_missing_config_file_fails() {
    let test_dir = TempDir::new().unwrap();
    create_basic_tree(&test_dir);

    filecat_cmd()
        .arg("run")
        .arg(test_dir.path())
        .arg("--config")
        .arg(test_dir.path().join("absent.toml"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: Failed to read config file"));
}

#[test]
fn test_run_missing_root_exits_with_error() {
    let test_dir = TempDir::new().unwrap();

    filecat_cmd()
        .current_dir(test_dir.path())
        .args(["run", "does-not-exist"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("does-not-exist"));
}

#[cfg(unix)]
#[test]
fn test_run_keeps_blocks_written_before_read_failure() {
    let test_dir = TempDir::new().unwrap();
    create_file(&test_dir.path().join("a.txt"), "ok");
    std::os::unix::fs::symlink(test_dir.path().join("gone"), test_dir.path().join("b.txt"))
        .unwrap();
    create_file(&test_dir.path().join("c.txt"), "never reached");

    filecat_cmd()
        .current_dir(test_dir.path())
        .arg("run")
        .assert()
        .failure()
        .code(1)
        .stdout("## FILE: \"a.txt\"\n```txt\nok\n```\n\n")
        .stderr(predicate::str::starts_with("Error: failed to read b.txt"));
}

#[test]
fn test_run_requires_subcommand() {
    filecat_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
