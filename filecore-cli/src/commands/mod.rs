//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `basename`, `dirname`, `extname`, `join`, `split`: path algebra
//! - `expand`: lexical expansion (`--absolute` for the no-tilde variant)
//! - `fnmatch`: match a path against a pattern
//! - `braces`: list brace expansions
//! - `realpath`, `realdirpath`: symlink resolution
//! - `stat`: print a metadata record
//! - `ftype`: print the entry type
//! - `test`: evaluate a predicate by name
//! - `identical`: compare two paths by device and inode
//! - `completions`: generate shell completion scripts

pub mod basename;
pub mod braces;
pub mod completions;
pub mod dirname;
pub mod expand;
pub mod extname;
pub mod fnmatch;
pub mod ftype;
pub mod identical;
pub mod join;
pub mod realpath;
pub mod split;
pub mod stat;

pub use basename::BasenameCommand;
pub use braces::BracesCommand;
pub use completions::CompletionsCommand;
pub use dirname::DirnameCommand;
pub use expand::ExpandCommand;
pub use extname::ExtnameCommand;
pub use fnmatch::FnmatchCommand;
pub use ftype::FtypeCommand;
pub use identical::IdenticalCommand;
pub use join::JoinCommand;
pub use realpath::{RealdirpathCommand, RealpathCommand};
pub use split::SplitCommand;
pub use stat::StatCommand;
pub use test::TestCommand;
