//! Lexical path expansion.
//!
//! This module turns relative or tilde-prefixed paths into absolute ones:
//! - Expanding tilde (`~`) to the home directory
//! - Anchoring relative paths on a base directory or the working directory
//! - Resolving `.` and `..` components without consulting the filesystem

use crate::error::{Error, Result};
use crate::path::algebra::{is_absolute, SEPARATOR};
use crate::path::join::join;
use crate::path::types::check_nul;
use crate::sys::{PosixSyscalls, Syscalls};

/// Converts `path` to an absolute path, expanding `~`.
///
/// Relative paths are anchored on `base` (itself expanded first) or, when
/// no base is given, on the working directory. `.` and `..` are resolved
/// lexically; `..` at the root stays at the root. Symlinks are not followed.
///
/// # Errors
///
/// Returns `InvalidArgument` for `~user` paths, a missing home directory, or
/// NUL bytes. Failure to read the working directory is reported as the
/// corresponding filesystem error.
///
/// # Examples
///
/// ```
/// use filecore::path::expand_path;
///
/// assert_eq!(expand_path("/a/./b/../c", None).unwrap(), "/a/c");
/// assert_eq!(expand_path("../bin", Some("/usr/local")).unwrap(), "/usr/bin");
/// assert_eq!(expand_path("/..", None).unwrap(), "/");
/// assert!(expand_path("~", None).unwrap().starts_with('/'));
/// ```
pub fn expand_path(path: &str, base: Option<&str>) -> Result<String> {
    expand_with(&PosixSyscalls, path, base, true)
}

/// Like [`expand_path`], but a leading `~` is an ordinary character.
///
/// # Errors
///
/// Same as [`expand_path`], minus the tilde cases.
///
/// # Examples
///
/// ```
/// use filecore::path::absolute_path;
///
/// assert_eq!(absolute_path("~", Some("/home")).unwrap(), "/home/~");
/// assert_eq!(absolute_path("x//y/", Some("/")).unwrap(), "/x/y");
/// ```
pub fn absolute_path(path: &str, base: Option<&str>) -> Result<String> {
    expand_with(&PosixSyscalls, path, base, false)
}

/// Expansion with the working and home directories supplied by `sys`.
pub(crate) fn expand_with<S: Syscalls + ?Sized>(
    sys: &S,
    path: &str,
    base: Option<&str>,
    tilde: bool,
) -> Result<String> {
    check_nul(path)?;

    let absolute = if tilde && path.starts_with('~') {
        expand_tilde(sys, path)?
    } else if is_absolute(path) {
        path.to_string()
    } else {
        let dir = match base {
            Some(base) => expand_with(sys, base, None, tilde)?,
            None => sys.current_dir().map_err(|e| Error::from_io(e, "."))?,
        };
        if path.is_empty() {
            dir
        } else {
            join(&[dir.as_str(), path])
        }
    };

    Ok(resolve_components(&absolute))
}

/// Expand `~` and `~/...`; `~user` is not supported.
fn expand_tilde<S: Syscalls + ?Sized>(sys: &S, path: &str) -> Result<String> {
    let rest = &path[1..];
    if !rest.is_empty() && !rest.starts_with(SEPARATOR) {
        return Err(Error::invalid(format!(
            "~user syntax is not supported: {path}"
        )));
    }

    let home = sys
        .home_dir()
        .ok_or_else(|| Error::invalid(format!("couldn't find home directory expanding '{path}'")))?;
    if !is_absolute(&home) {
        return Err(Error::invalid(format!("non-absolute home directory: {home}")));
    }

    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(join(&[home.as_str(), rest]))
    }
}

/// Resolve `.` and `..` in an absolute path and collapse separator runs.
///
/// # Examples
///
/// ```
/// use filecore::path::normalize::resolve_components;
///
/// assert_eq!(resolve_components("/a/./b/../c"), "/a/c");
/// assert_eq!(resolve_components("/a/b/../../.."), "/");
/// assert_eq!(resolve_components("//x///y/"), "/x/y");
/// ```
#[must_use]
pub fn resolve_components(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for component in path.split(SEPARATOR) {
        match component {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            name => parts.push(name),
        }
    }

    let mut resolved = String::with_capacity(path.len());
    for part in &parts {
        resolved.push(SEPARATOR);
        resolved.push_str(part);
    }
    if resolved.is_empty() {
        resolved.push(SEPARATOR);
    }
    resolved
}
