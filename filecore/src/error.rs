//! Error types for the filecore library.
//!
//! Every failure is mapped onto a discriminated variant so that callers can
//! branch on it. Pure components (path algebra, glob matching) only ever
//! produce input errors; the metadata façade, the realpath resolver, and
//! the file operations additionally surface what the filesystem said.

use std::io;

use thiserror::Error;

/// Result type alias for operations that may fail with a filecore error.
///
/// # Examples
///
/// ```
/// use filecore::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the filecore library.
#[derive(Debug, Error)]
pub enum Error {
    /// The path, or one of its components, does not exist.
    #[error("no such file or directory: {path}")]
    NotFound {
        /// The path that was not found.
        path: String,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The path that could not be accessed.
        path: String,
    },

    /// A symlink cycle or excessive indirection was detected.
    #[error("too many levels of symbolic links: {path}")]
    TooManySymlinks {
        /// The path at which resolution gave up.
        path: String,
    },

    /// The caller supplied malformed input.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the input was rejected.
        reason: String,
    },

    /// A sequence passed to `join` contains itself.
    #[error("recursive array")]
    RecursiveStructure,

    /// The platform lacks the requested capability.
    #[error("{operation} function is unimplemented on this machine")]
    UnsupportedOperation {
        /// The operation that is not available.
        operation: String,
    },

    /// Any other OS error, carrying the raw errno.
    #[error("system error (errno {errno}) for {path}: {message}")]
    System {
        /// The path the failing call was issued for.
        path: String,
        /// The raw POSIX error code.
        errno: i32,
        /// The OS-provided description.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error that carries no OS error code.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Classify an I/O error returned by the syscall façade for `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use filecore::Error;
    /// use std::io;
    ///
    /// let err = Error::from_io(io::Error::from_raw_os_error(libc::ENOENT), "/missing");
    /// assert!(err.is_not_found());
    ///
    /// let err = Error::from_io(io::Error::from_raw_os_error(libc::ELOOP), "/loop");
    /// assert!(matches!(err, Error::TooManySymlinks { .. }));
    /// ```
    #[must_use]
    pub fn from_io(err: io::Error, path: &str) -> Self {
        let Some(errno) = err.raw_os_error() else {
            return match err.kind() {
                io::ErrorKind::NotFound => Self::NotFound { path: path.into() },
                io::ErrorKind::PermissionDenied => Self::PermissionDenied { path: path.into() },
                _ => Self::Io(err),
            };
        };

        match errno {
            libc::ENOENT => Self::NotFound { path: path.into() },
            libc::EACCES | libc::EPERM => Self::PermissionDenied { path: path.into() },
            libc::ELOOP => Self::TooManySymlinks { path: path.into() },
            libc::ENOSYS | libc::ENOTSUP => Self::UnsupportedOperation {
                operation: format!("syscall on {path}"),
            },
            _ => Self::System {
                path: path.into(),
                errno,
                message: err.to_string(),
            },
        }
    }

    /// Shorthand for an `InvalidArgument` error.
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// The POSIX error code this error corresponds to, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use filecore::Error;
    ///
    /// let err = Error::NotFound { path: "/nope".into() };
    /// assert_eq!(err.errno(), Some(libc::ENOENT));
    /// assert_eq!(Error::RecursiveStructure.errno(), None);
    /// ```
    #[must_use]
    pub fn errno(&self) -> Option<i32> {
        match self {
            Self::NotFound { .. } => Some(libc::ENOENT),
            Self::PermissionDenied { .. } => Some(libc::EACCES),
            Self::TooManySymlinks { .. } => Some(libc::ELOOP),
            Self::UnsupportedOperation { .. } => Some(libc::ENOSYS),
            Self::System { errno, .. } => Some(*errno),
            Self::Io(e) => e.raw_os_error(),
            _ => None,
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use filecore::Error;
    ///
    /// let err = Error::NotFound { path: "/nonexistent".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use filecore::Error;
    ///
    /// let err = Error::PermissionDenied { path: "/restricted".into() };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Check if error reports malformed caller input rather than a
    /// filesystem condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use filecore::Error;
    ///
    /// assert!(Error::RecursiveStructure.is_input_error());
    /// assert!(!Error::NotFound { path: "/x".into() }.is_input_error());
    /// ```
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::RecursiveStructure | Self::Validation { .. }
        )
    }
}
