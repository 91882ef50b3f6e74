//! Shell-style pattern matching.
//!
//! [`fnmatch`] is the entry point. It combines the brace expander in
//! [`braces`](mod@braces) with the single-pattern matcher in [`matcher`]
//! under one [`GlobFlags`] set.
//!
//! # Examples
//!
//! ```
//! use filecore::glob::fnmatch;
//! use filecore::GlobFlags;
//!
//! assert!(!fnmatch("c{at,ub}s", "cats", GlobFlags::empty()));
//! assert!(fnmatch("c{at,ub}s", "cats", GlobFlags::EXTGLOB));
//! assert!(fnmatch("*.rb", "main.rb", GlobFlags::PATHNAME));
//! ```

pub mod braces;
pub mod flags;
pub mod matcher;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use braces::{braces, expand};
pub use flags::GlobFlags;
pub use matcher::matches;

/// Matches `path` against `pattern`.
///
/// With `EXTGLOB` set, the pattern matches if any of its brace expansions
/// does; the unexpanded pattern is always tried as well. Never fails.
#[must_use]
pub fn fnmatch(pattern: &str, path: &str, flags: GlobFlags) -> bool {
    if flags.contains(GlobFlags::EXTGLOB) {
        let expanded = expand(pattern, flags);
        if expanded.iter().any(|alt| matches(alt, path, flags)) {
            log::trace!("{path} matched an expansion of {pattern}");
            return true;
        }
    }
    matches(pattern, path, flags)
}
