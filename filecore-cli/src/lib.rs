//! Library surface of the filecore CLI.
//!
//! Exposes the command definitions so benches and tests can build
//! [`Cli`] values without spawning the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
