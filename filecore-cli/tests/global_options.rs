//! Integration tests for global CLI options.
//!
//! These tests verify global flags and environment variables that affect
//! all commands, including:
//! - --format and FILECORE_OUTPUT_FORMAT
//! - --config and FILECORE_CONFIG
//! - --quiet and --verbose
//! - Precedence rules (CLI flags > env vars > config files > defaults)

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_format_flag() {
    let env = TestEnv::new();

    env.command()
        .args(["--format", "json", "extname", "a.rb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"extname\": \".rb\""));
}

#[test]
fn test_format_flag_after_subcommand() {
    let env = TestEnv::new();

    env.command()
        .args(["extname", "a.rb", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"extname\""));
}

#[test]
fn test_invalid_format_is_rejected() {
    let env = TestEnv::new();

    env.command()
        .args(["--format", "yaml", "extname", "a.rb"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yaml"));
}

#[test]
fn test_format_precedence() {
    let env = TestEnv::new();
    env.write_user_config("output_format: json\n");

    // User config alone
    env.command()
        .args(["basename", "/a/b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"basename\""));

    // Environment beats the file
    env.command()
        .env("FILECORE_OUTPUT_FORMAT", "human")
        .args(["basename", "/a/b"])
        .assert()
        .success()
        .stdout("b\n");

    // The flag beats everything
    env.command()
        .env("FILECORE_OUTPUT_FORMAT", "json")
        .args(["--format", "human", "basename", "/a/b"])
        .assert()
        .success()
        .stdout("b\n");
}

#[test]
fn test_config_flag_and_env() {
    let env = TestEnv::new();
    let config = env.create_file("extra.yaml", "glob:\n  flags: [CASEFOLD]\n");

    env.command()
        .args(["--config", &config, "fnmatch", "*.RB", "x.rb"])
        .assert()
        .success();

    env.command()
        .env("FILECORE_CONFIG", &config)
        .args(["fnmatch", "*.RB", "x.rb"])
        .assert()
        .success();

    env.command()
        .args(["fnmatch", "*.RB", "x.rb"])
        .assert()
        .code(1);
}

#[test]
fn test_explicit_config_beats_user_config() {
    let env = TestEnv::new();
    env.write_user_config("output_format: json\n");
    let config = env.create_file("extra.yaml", "output_format: human\n");

    env.command()
        .args(["--config", &config, "extname", "a.rb"])
        .assert()
        .success()
        .stdout(".rb\n");
}

#[test]
fn test_verbose_logs_to_stderr() {
    let env = TestEnv::new();
    env.create_dir("d");
    env.create_symlink("d", "l");

    env.command()
        .args(["--verbose", "realpath", &env.path("l")])
        .assert()
        .success()
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn test_quiet_suppresses_predicate_output() {
    let env = TestEnv::new();

    env.command()
        .args(["--quiet", "test", "directory", "/"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_completions() {
    let env = TestEnv::new();

    env.command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("filecore"))
        .stderr(predicate::str::contains("completion script"));

    env.command()
        .args(["--quiet", "completions", "zsh"])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_version_and_help() {
    let env = TestEnv::new();

    env.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("filecore"));

    env.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("realdirpath"));
}
