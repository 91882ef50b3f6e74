//! Common test utilities for integration tests.
//!
//! This module provides a scratch directory fixture for exercising the
//! filecore library against a real filesystem.

use std::fs;
use std::os::unix::fs::symlink;
use std::path::Path;

use tempfile::TempDir;

/// A temporary directory whose root is already canonical.
///
/// Temporary directories can live behind a symlink (`/tmp` on some
/// systems), so the root is canonicalized once up front and every path
/// handed out is built from it.
pub struct Sandbox {
    _dir: TempDir,
    root: String,
}

#[allow(dead_code)]
impl Sandbox {
    /// Creates an empty sandbox.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = fs::canonicalize(dir.path())
            .expect("failed to canonicalize temp dir")
            .to_str()
            .expect("temp dir is not UTF-8")
            .to_string();
        Self { _dir: dir, root }
    }

    /// The canonical root.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Absolute path of `name` inside the sandbox.
    pub fn path(&self, name: &str) -> String {
        format!("{}/{}", self.root, name)
    }

    /// Creates a file with `contents`, and any missing parents.
    pub fn file(&self, name: &str, contents: &str) -> String {
        let path = self.path(name);
        if let Some(parent) = Path::new(&path).parent() {
            fs::create_dir_all(parent).expect("failed to create parent");
        }
        fs::write(&path, contents).expect("failed to write file");
        path
    }

    /// Creates a directory and any missing parents.
    pub fn dir(&self, name: &str) -> String {
        let path = self.path(name);
        fs::create_dir_all(&path).expect("failed to create dir");
        path
    }

    /// Creates a symlink at `name` whose target is `target`, verbatim.
    pub fn symlink(&self, target: &str, name: &str) -> String {
        let path = self.path(name);
        symlink(target, &path).expect("failed to create symlink");
        path
    }
}
