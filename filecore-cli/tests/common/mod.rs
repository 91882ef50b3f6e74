//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers isolated from the caller's configuration
//! - Fixture creation (files, directories, symlinks, config files)

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::symlink;
use std::path::PathBuf;
use tempfile::TempDir;

/// Environment variables that would leak the caller's settings into a test.
const ISOLATED_VARS: &[&str] = &[
    "FILECORE_CONFIG",
    "FILECORE_GLOB_FLAGS",
    "FILECORE_REALPATH_STRATEGY",
    "FILECORE_MAX_SYMLINK_DEPTH",
    "FILECORE_OUTPUT_FORMAT",
    "FILECORE_LOG_MODE",
];

/// Test environment with an isolated home directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory for test files (canonicalized, so realpath
///   output can be compared literally)
/// - A separate home directory, so `~/.filecore/config.yaml` is under test
///   control
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path to the temporary directory
    pub root: PathBuf,
    /// Home directory handed to the binary
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        let home = root.join("home");
        fs::create_dir(&home).expect("Failed to create home dir");

        Self {
            temp_dir,
            root,
            home,
        }
    }

    /// Get a command builder for the `filecore` binary.
    ///
    /// `HOME` points at this environment's home directory and every
    /// `FILECORE_*` variable is cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("filecore").expect("Failed to find filecore binary");
        cmd.env("HOME", &self.home);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Absolute path of `name` inside the environment, as a string.
    pub fn path(&self, name: &str) -> String {
        self.root.join(name).to_string_lossy().into_owned()
    }

    /// Create a file with the given contents.
    pub fn create_file(&self, name: &str, contents: &str) -> String {
        let path = self.path(name);
        fs::write(&path, contents).expect("Failed to create test file");
        path
    }

    /// Create a subdirectory.
    pub fn create_dir(&self, name: &str) -> String {
        let path = self.path(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a symlink `name` pointing at `target` (stored verbatim).
    pub fn create_symlink(&self, target: &str, name: &str) -> String {
        let path = self.path(name);
        symlink(target, &path).expect("Failed to create symlink");
        path
    }

    /// Write the user configuration file under the test home directory.
    pub fn write_user_config(&self, contents: &str) {
        let dir = self.home.join(".filecore");
        fs::create_dir_all(&dir).expect("Failed to create config dir");
        fs::write(dir.join("config.yaml"), contents).expect("Failed to write config");
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run filecore");

        assert!(
            output.status.success(),
            "filecore {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Run a command with `--format json` and parse its stdout.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        serde_json::from_str(&self.stdout(&full)).expect("Output is not valid JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
