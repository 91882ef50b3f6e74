//! Integration tests for the commands that consult the filesystem:
//! `realpath`, `realdirpath`, `stat`, `ftype`, `test`, and `identical`.

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// Symlink Resolution
// ============================================================================

#[test]
fn test_realpath_follows_links() {
    let env = TestEnv::new();
    let target = env.create_dir("target");
    env.create_file("target/file", "x");
    env.create_symlink("target", "link");

    let out = env.stdout(&["realpath", &env.path("link/file")]);
    assert_eq!(out, format!("{target}/file\n"));
}

#[test]
fn test_realpath_relative_to_base() {
    let env = TestEnv::new();
    let dir = env.create_dir("dir");
    env.create_symlink("dir", "alias");

    let root = env.root.to_string_lossy().into_owned();
    let out = env.stdout(&["realpath", "alias/../alias", "--base", &root]);
    assert_eq!(out, format!("{dir}\n"));
}

#[test]
fn test_realpath_missing_component() {
    let env = TestEnv::new();

    env.command()
        .args(["realpath", &env.path("missing")])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no such file"));
}

#[test]
fn test_realdirpath_allows_missing_leaf() {
    let env = TestEnv::new();
    let dir = env.create_dir("dir");
    env.create_symlink("dir", "alias");

    let out = env.stdout(&["realdirpath", &env.path("alias/new")]);
    assert_eq!(out, format!("{dir}/new\n"));

    env.command()
        .args(["realdirpath", &env.path("gone/new")])
        .assert()
        .code(2);
}

#[test]
fn test_realpath_cycle_is_reported() {
    let env = TestEnv::new();
    env.create_symlink("b", "a");
    env.create_symlink("a", "b");

    env.command()
        .args(["realpath", &env.path("a")])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("too many levels of symbolic links"));
}

#[test]
fn test_realpath_native_strategy_from_config() {
    let env = TestEnv::new();
    let target = env.create_dir("target");
    env.create_symlink("target", "link");
    env.write_user_config("realpath:\n  strategy: native\n");

    let out = env.stdout(&["realpath", &env.path("link")]);
    assert_eq!(out, format!("{target}\n"));
}

// ============================================================================
// Metadata Records
// ============================================================================

#[test]
fn test_stat_json_record() {
    let env = TestEnv::new();
    let file = env.create_file("f", "hello");

    let json = env.json(&["stat", &file]);
    assert_eq!(json["ftype"], "file");
    assert_eq!(json["size"], 5);
    assert_eq!(json["nlink"], 1);
    assert!(json["mtime"].as_str().unwrap().contains('T'));
}

#[test]
fn test_stat_human_record() {
    let env = TestEnv::new();
    let dir = env.create_dir("d");

    env.command()
        .args(["stat", &dir])
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: directory"))
        .stdout(predicate::str::contains("Modify: "));
}

#[test]
fn test_stat_and_lstat_differ_on_links() {
    let env = TestEnv::new();
    env.create_dir("d");
    let link = env.create_symlink("d", "l");

    assert_eq!(env.json(&["stat", &link])["ftype"], "directory");
    assert_eq!(env.json(&["stat", "--lstat", &link])["ftype"], "link");
}

#[test]
fn test_stat_missing_path() {
    let env = TestEnv::new();

    env.command()
        .args(["stat", &env.path("none")])
        .assert()
        .code(2);
}

#[test]
fn test_ftype() {
    let env = TestEnv::new();
    let file = env.create_file("f", "");
    let dir = env.create_dir("d");
    let link = env.create_symlink("f", "l");

    assert_eq!(env.stdout(&["ftype", &file]), "file\n");
    assert_eq!(env.stdout(&["ftype", &dir]), "directory\n");
    assert_eq!(env.stdout(&["ftype", &link]), "link\n");
    assert_eq!(env.stdout(&["ftype", "/dev/null"]), "characterSpecial\n");
}

// ============================================================================
// Predicates
// ============================================================================

#[test]
fn test_type_predicates() {
    let env = TestEnv::new();
    let file = env.create_file("f", "abc");
    let dir = env.create_dir("d");

    env.command()
        .args(["test", "directory", &dir])
        .assert()
        .success()
        .stdout("true\n");

    env.command()
        .args(["test", "file", &dir])
        .assert()
        .code(1)
        .stdout("false\n")
        .stderr(predicate::str::contains("file is false"));

    env.command()
        .args(["test", "exist", &file])
        .assert()
        .success();

    env.command()
        .args(["test", "exist", &env.path("none")])
        .assert()
        .code(1);
}

#[test]
fn test_value_predicates_print_values() {
    let env = TestEnv::new();
    let file = env.create_file("f", "abc");
    let empty = env.create_file("e", "");

    assert_eq!(env.stdout(&["test", "size", &file]), "3\n");
    env.command()
        .args(["test", "size", &empty])
        .assert()
        .code(1);

    env.command()
        .args(["test", "zero", &empty])
        .assert()
        .success();
}

#[test]
fn test_world_readable_prints_bits() {
    use std::fs::{set_permissions, Permissions};
    use std::os::unix::fs::PermissionsExt;

    let env = TestEnv::new();
    let file = env.create_file("f", "");
    set_permissions(&file, Permissions::from_mode(0o644)).unwrap();

    assert_eq!(env.stdout(&["test", "world-readable", &file]), "644\n");
    env.command()
        .args(["test", "world-writable", &file])
        .assert()
        .code(1);

    let json = env.json(&["test", "world-readable", &file]);
    assert_eq!(json["result"], true);
    assert_eq!(json["value"], "644");
}

#[test]
fn test_unknown_predicate_is_a_usage_error() {
    let env = TestEnv::new();

    env.command()
        .args(["test", "shiny", "/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_identical() {
    let env = TestEnv::new();
    let a = env.create_file("a", "x");
    let b = env.create_file("b", "x");
    let link = env.create_symlink("a", "l");

    env.command()
        .args(["identical", &a, &link])
        .assert()
        .success();

    env.command()
        .args(["identical", &a, &b])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("different files"));

    env.command()
        .args(["identical", &a, &env.path("none")])
        .assert()
        .code(1);
}
