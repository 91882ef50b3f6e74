//! Integration tests for error handling and exit codes.
//!
//! These tests verify that filecore returns the documented exit codes:
//! - Exit code 0: Success
//! - Exit code 1: Semantic failure (predicate false, no match)
//! - Exit code 2: Path not found
//! - Exit code 3: Permission denied
//! - Exit code 4: Invalid arguments
//! - Exit code 5: Other system error
//! - Exit code 7: Configuration error

mod common;

use common::TestEnv;
use predicates::prelude::*;

/// Errors are printed once, prefixed, on stderr.
#[test]
fn test_error_prefix_on_stderr() {
    let env = TestEnv::new();

    env.command()
        .args(["ftype", &env.path("none")])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::starts_with("Error: "));
}

/// A file standing in for a directory is "not found" for realpath.
#[test]
fn test_file_as_directory_component() {
    let env = TestEnv::new();
    let file = env.create_file("plain", "x");

    env.command()
        .args(["realpath", &format!("{file}/child")])
        .assert()
        .failure();

    // Predicates answer false instead of failing
    env.command()
        .args(["test", "exist", &format!("{file}/child")])
        .assert()
        .code(1);
}

#[test]
fn test_permission_denied_exit_code() {
    use std::fs::{set_permissions, Permissions};
    use std::os::unix::fs::PermissionsExt;

    let env = TestEnv::new();
    let locked = env.create_dir("locked");
    env.create_file("locked/inner", "x");
    set_permissions(&locked, Permissions::from_mode(0o000)).unwrap();

    let output = env
        .command()
        .args(["stat", &format!("{locked}/inner")])
        .output()
        .unwrap();
    set_permissions(&locked, Permissions::from_mode(0o755)).unwrap();

    // Root bypasses directory permissions
    if output.status.success() {
        return;
    }
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("permission denied"));
}

#[test]
fn test_invalid_config_file_exit_code() {
    let env = TestEnv::new();
    let config = env.create_file("bad.yaml", "realpath:\n  strategy: [walk\n");

    env.command()
        .args(["--config", &config, "basename", "/a/b"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_config_file_exit_code() {
    let env = TestEnv::new();

    env.command()
        .args(["--config", &env.path("absent.yaml"), "basename", "/a/b"])
        .assert()
        .code(7);
}

#[test]
fn test_unknown_config_key_exit_code() {
    let env = TestEnv::new();
    env.write_user_config("data_dir: /tmp\n");

    env.command()
        .args(["basename", "/a/b"])
        .assert()
        .code(7);
}

#[test]
fn test_bad_environment_value_exit_code() {
    let env = TestEnv::new();

    env.command()
        .env("FILECORE_REALPATH_STRATEGY", "sideways")
        .args(["realpath", "/"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("FILECORE_REALPATH_STRATEGY"));

    env.command()
        .env("FILECORE_MAX_SYMLINK_DEPTH", "0")
        .args(["realpath", "/"])
        .assert()
        .code(7);
}

#[test]
fn test_symlink_depth_limit_from_config() {
    let env = TestEnv::new();
    let target = env.create_file("target", "");
    env.create_symlink("target", "l1");
    env.create_symlink("l1", "l2");
    env.create_symlink("l2", "l3");

    assert_eq!(env.stdout(&["realpath", &env.path("l3")]), format!("{target}\n"));

    env.command()
        .env("FILECORE_MAX_SYMLINK_DEPTH", "2")
        .args(["realpath", &env.path("l3")])
        .assert()
        .code(5);
}

/// Arguments that are not UTF-8 reach the library and are rejected there.
#[test]
fn test_non_utf8_path_argument() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let env = TestEnv::new();
    let name = OsStr::from_bytes(b"caf\xe9");

    for command in ["realpath", "realdirpath", "expand"] {
        env.command()
            .arg(command)
            .arg(name)
            .assert()
            .code(4)
            .stdout("")
            .stderr(predicate::str::contains("not valid UTF-8"));
    }
}
