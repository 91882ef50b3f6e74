//! The conversion boundary between caller values and path strings.
//!
//! Everything in this crate operates on `&str`. Callers holding other
//! representations go through [`coerce_to_path`] exactly once, which is
//! where non-UTF-8 data and interior NUL bytes are rejected.

use std::ffi::OsStr;
use std::path::Path;

use crate::error::{Error, Result};

/// Implemented by caller types that know how to present themselves as a
/// path (the equivalent of a `to_path` conversion).
///
/// Returning `None` means the value has no path representation.
///
/// # Examples
///
/// ```
/// use filecore::path::{coerce_to_path, AsPathArg, PathArg};
///
/// struct Project(&'static str);
///
/// impl AsPathArg for Project {
///     fn as_path_arg(&self) -> Option<String> {
///         Some(format!("/srv/{}", self.0))
///     }
/// }
///
/// let project = Project("site");
/// assert_eq!(coerce_to_path(PathArg::Adapter(&project)).unwrap(), "/srv/site");
/// ```
pub trait AsPathArg {
    /// The path this value stands for, if it has one.
    fn as_path_arg(&self) -> Option<String>;
}

/// A value that may be converted to a path string.
#[derive(Clone, Copy)]
pub enum PathArg<'a> {
    /// A plain string.
    Str(&'a str),
    /// An OS string, which must be valid UTF-8.
    Os(&'a OsStr),
    /// A caller-defined adapter.
    Adapter(&'a dyn AsPathArg),
}

impl std::fmt::Debug for PathArg<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Os(s) => f.debug_tuple("Os").field(s).finish(),
            Self::Adapter(_) => f.write_str("Adapter(..)"),
        }
    }
}

impl<'a> From<&'a str> for PathArg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a String> for PathArg<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a OsStr> for PathArg<'a> {
    fn from(value: &'a OsStr) -> Self {
        Self::Os(value)
    }
}

impl<'a> From<&'a Path> for PathArg<'a> {
    fn from(value: &'a Path) -> Self {
        Self::Os(value.as_os_str())
    }
}

/// Converts `arg` into an owned path string.
///
/// # Errors
///
/// Returns `InvalidArgument` if the value is not valid UTF-8, contains a
/// NUL byte, or is an adapter with no path representation.
///
/// # Examples
///
/// ```
/// use filecore::path::coerce_to_path;
/// use std::path::Path;
///
/// assert_eq!(coerce_to_path("a/b").unwrap(), "a/b");
/// assert_eq!(coerce_to_path(Path::new("/tmp")).unwrap(), "/tmp");
/// assert!(coerce_to_path("nul\0byte").is_err());
/// ```
pub fn coerce_to_path<'a>(arg: impl Into<PathArg<'a>>) -> Result<String> {
    let path = match arg.into() {
        PathArg::Str(s) => s.to_string(),
        PathArg::Os(os) => os
            .to_str()
            .ok_or_else(|| Error::invalid(format!("path is not valid UTF-8: {}", os.to_string_lossy())))?
            .to_string(),
        PathArg::Adapter(adapter) => adapter
            .as_path_arg()
            .ok_or_else(|| Error::invalid("value has no path representation"))?,
    };

    check_nul(&path)?;
    Ok(path)
}

/// Rejects strings that cannot be handed to the OS.
pub(crate) fn check_nul(path: &str) -> Result<()> {
    if path.contains('\0') {
        return Err(Error::invalid(format!(
            "string contains null byte: {}",
            path.escape_debug()
        )));
    }
    Ok(())
}
