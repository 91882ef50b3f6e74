#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # filecore
//!
//! Path algebra, shell-style glob matching, metadata queries, and
//! symlink-safe canonical paths for POSIX filesystems.
//!
//! ## Core Types
//!
//! - [`path`]: `basename`, `dirname`, `extname`, `join`, `split`, and lexical
//!   expansion. Pure string functions; no I/O.
//! - [`GlobFlags`] and [`glob::fnmatch`]: pattern matching with brace
//!   expansion
//! - [`FileQuery`] and [`FileStat`]: metadata records and predicates
//! - [`RealpathResolver`]: canonical paths with cycle detection
//! - [`FileOps`]: chmod, chown, utime, unlink and friends
//! - [`FileSystem`]: all of the above over one [`sys::Syscalls`]
//!   implementation, with defaults from [`Config`]
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use filecore::path::{basename, dirname, join};
//! use filecore::{glob::fnmatch, GlobFlags};
//!
//! let path = join(&["/usr", "lib/", "libc.so"]);
//! assert_eq!(path, "/usr/lib/libc.so");
//! assert_eq!(basename(&path, Some(".*")), "libc");
//! assert_eq!(dirname(&path), "/usr/lib");
//!
//! assert!(fnmatch("**/*.so", "usr/lib/libc.so", GlobFlags::PATHNAME));
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod glob;
pub mod logging;
pub mod ops;
pub mod path;
pub mod realpath;
pub mod stat;
pub mod sys;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use fs::FileSystem;
pub use glob::GlobFlags;
pub use logging::{init_logger, LogLevel, Logger};
pub use ops::FileOps;
pub use realpath::{RealpathResolver, RealpathStrategy};
pub use stat::{FileKind, FileQuery, FileStat};
