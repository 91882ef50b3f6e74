//! Path algebra on slash-separated strings.
//!
//! This module holds everything that can be answered from the path text
//! alone, plus lexical expansion against a base directory.
//!
//! # Key Concepts
//!
//! ## Components
//!
//! Only `/` separates components. Runs of separators act as one, trailing
//! separators are ignored by [`basename`] and [`dirname`], and no byte other
//! than `/` has special meaning. `.` only matters to [`extname`].
//!
//! ## Expansion
//!
//! [`expand_path`] and [`absolute_path`] anchor a relative path on a base
//! directory and resolve `.` and `..` lexically. They never follow symlinks;
//! see [`crate::realpath`] for that.
//!
//! ## Coercion
//!
//! Caller values enter through [`coerce_to_path`], which rejects non-UTF-8
//! data and interior NUL bytes once, at the boundary.
//!
//! # Examples
//!
//! ```
//! use filecore::path::{basename, dirname, extname, join, split};
//!
//! let path = join(&["/home/gumby", "work", "ruby.rb"]);
//! assert_eq!(path, "/home/gumby/work/ruby.rb");
//! assert_eq!(basename(&path, Some(".rb")), "ruby");
//! assert_eq!(dirname(&path), "/home/gumby/work");
//! assert_eq!(extname(&path), ".rb");
//! assert_eq!(split("/etc/hosts"), ("/etc".to_string(), "hosts".to_string()));
//! ```

pub mod algebra;
pub mod join;
pub mod normalize;
pub(crate) mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use algebra::{basename, dirname, dirname_n, extname, is_absolute, split, SEPARATOR};
pub use join::{join, join_args, JoinArg, JoinList};
pub use normalize::{absolute_path, expand_path};
pub use types::{coerce_to_path, AsPathArg, PathArg};
