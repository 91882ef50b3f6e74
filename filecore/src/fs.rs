//! One handle bundling the syscall façade with configured defaults.

use crate::config::Config;
use crate::error::Result;
use crate::glob::{fnmatch, GlobFlags};
use crate::ops::FileOps;
use crate::path::normalize::expand_with;
use crate::path::{coerce_to_path, PathArg};
use crate::realpath::{RealpathResolver, RealpathStrategy, DEFAULT_MAX_SYMLINK_DEPTH};
use crate::stat::FileQuery;
use crate::sys::{PosixSyscalls, Syscalls};

/// Entry point for filesystem-aware operations.
///
/// Holds a [`Syscalls`] implementation and the defaults taken from a
/// [`Config`]: glob flags used when a caller passes none, and realpath
/// settings. Pure path algebra does not need a `FileSystem`; see
/// [`crate::path`].
///
/// # Examples
///
/// ```
/// use filecore::FileSystem;
///
/// let fs = FileSystem::new();
/// assert!(fs.query().is_directory("/").unwrap());
/// assert_eq!(fs.realpath("/", None).unwrap(), "/");
/// assert!(fs.fnmatch("*.rs", "lib.rs", None));
/// ```
#[derive(Debug, Clone)]
pub struct FileSystem<S: Syscalls = PosixSyscalls> {
    sys: S,
    glob_flags: GlobFlags,
    strategy: RealpathStrategy,
    max_symlink_depth: usize,
}

impl FileSystem<PosixSyscalls> {
    /// A handle on the host filesystem with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_syscalls(PosixSyscalls)
    }

    /// A handle on the host filesystem configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configured glob flags are unknown.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new().configure(config)
    }
}

impl Default for FileSystem<PosixSyscalls> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Syscalls> FileSystem<S> {
    /// A handle over an arbitrary syscall implementation.
    #[must_use]
    pub fn with_syscalls(sys: S) -> Self {
        Self {
            sys,
            glob_flags: GlobFlags::empty(),
            strategy: RealpathStrategy::default(),
            max_symlink_depth: DEFAULT_MAX_SYMLINK_DEPTH,
        }
    }

    /// Apply the defaults in `config`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configured glob flags are unknown.
    pub fn configure(mut self, config: &Config) -> Result<Self> {
        self.glob_flags = config.glob_flags()?;
        self.strategy = config.realpath_strategy();
        self.max_symlink_depth = config.max_symlink_depth();
        Ok(self)
    }

    /// The underlying syscall implementation.
    pub fn syscalls(&self) -> &S {
        &self.sys
    }

    /// Default glob flags.
    #[must_use]
    pub fn glob_flags(&self) -> GlobFlags {
        self.glob_flags
    }

    /// Metadata queries.
    pub fn query(&self) -> FileQuery<'_, S> {
        FileQuery::new(&self.sys)
    }

    /// Metadata-mutating operations.
    pub fn ops(&self) -> FileOps<'_, S> {
        FileOps::new(&self.sys)
    }

    /// A realpath resolver with the configured strategy and symlink limit.
    pub fn resolver(&self) -> RealpathResolver<'_, S> {
        RealpathResolver::new(&self.sys)
            .with_strategy(self.strategy)
            .with_max_symlink_depth(self.max_symlink_depth)
    }

    /// [`fnmatch`] with `flags`, or the configured defaults when `None`.
    pub fn fnmatch(&self, pattern: &str, path: &str, flags: Option<GlobFlags>) -> bool {
        fnmatch(pattern, path, flags.unwrap_or(self.glob_flags))
    }

    /// See [`RealpathResolver::realpath`].
    ///
    /// `path` may be anything [`coerce_to_path`] accepts, such as a `&str`,
    /// a `&Path`, or an `&OsStr`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for non-UTF-8 or NUL-bearing input, and
    /// otherwise `NotFound`, `TooManySymlinks`, or the classified OS error.
    pub fn realpath<'a>(
        &self,
        path: impl Into<PathArg<'a>>,
        base: Option<&str>,
    ) -> Result<String> {
        let path = coerce_to_path(path)?;
        self.resolver().realpath(&path, base)
    }

    /// See [`RealpathResolver::realdirpath`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for input [`coerce_to_path`] rejects, and
    /// otherwise `NotFound`, `TooManySymlinks`, or the classified OS error.
    pub fn realdirpath<'a>(
        &self,
        path: impl Into<PathArg<'a>>,
        base: Option<&str>,
    ) -> Result<String> {
        let path = coerce_to_path(path)?;
        self.resolver().realdirpath(&path, base)
    }

    /// [`expand_path`](crate::path::expand_path) with the working and home
    /// directories taken from this handle's syscalls.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for unsupported tilde forms, NUL bytes, or
    /// non-UTF-8 input.
    pub fn expand_path<'a>(
        &self,
        path: impl Into<PathArg<'a>>,
        base: Option<&str>,
    ) -> Result<String> {
        expand_with(&self.sys, &coerce_to_path(path)?, base, true)
    }

    /// [`absolute_path`](crate::path::absolute_path) with the working
    /// directory taken from this handle's syscalls.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for NUL bytes or non-UTF-8 input.
    pub fn absolute_path<'a>(
        &self,
        path: impl Into<PathArg<'a>>,
        base: Option<&str>,
    ) -> Result<String> {
        expand_with(&self.sys, &coerce_to_path(path)?, base, false)
    }
}
