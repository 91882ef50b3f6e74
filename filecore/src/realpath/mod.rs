//! Canonical paths with symlinks resolved.
//!
//! [`RealpathResolver`] walks a path one component at a time, following
//! each symlink it meets and tracking the links already followed so that
//! cycles fail instead of looping. The native `realpath(3)` strategy is
//! available where the platform provides one.

mod resolver;
mod strategy;

pub use resolver::{RealpathResolver, DEFAULT_MAX_SYMLINK_DEPTH};
pub use strategy::RealpathStrategy;
