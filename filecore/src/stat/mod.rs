//! File metadata: mode bits, the [`FileStat`] record, and [`FileQuery`].
//!
//! The mode predicates in [`mode`] are pure functions of the raw mode.
//! [`FileQuery`] fetches records through the syscall façade and applies
//! them, treating "no such file" as a plain `false`.

pub mod mode;
mod query;
mod record;

pub use mode::FileKind;
pub use query::FileQuery;
pub use record::FileStat;
