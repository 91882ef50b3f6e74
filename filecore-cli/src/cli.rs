//! Command-line interface definition.

use crate::commands::{
    BasenameCommand, BracesCommand, CompletionsCommand, DirnameCommand, ExpandCommand,
    ExtnameCommand, FnmatchCommand, FtypeCommand, IdenticalCommand, JoinCommand,
    RealdirpathCommand, RealpathCommand, SplitCommand, StatCommand, TestCommand,
};
use clap::{Parser, Subcommand};
use filecore::config::OutputFormat;
use std::path::PathBuf;

/// Path, glob, and file metadata operations
#[derive(Parser)]
#[command(name = "filecore")]
#[command(version, about = "Path, glob, and file metadata operations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load an additional configuration file
    #[arg(long, value_name = "PATH", global = true, env = "FILECORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, value_name = "FORMAT", global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Available commands
#[derive(Subcommand)]
pub enum Command {
    /// Print the last component of a path
    Basename(BasenameCommand),

    /// Print everything before the last component of a path
    Dirname(DirnameCommand),

    /// Print the extension of a path
    Extname(ExtnameCommand),

    /// Join components with single separators
    Join(JoinCommand),

    /// Print the dirname and basename of a path
    Split(SplitCommand),

    /// Expand a path to an absolute one without touching the filesystem
    Expand(ExpandCommand),

    /// Match a path against a glob pattern
    Fnmatch(FnmatchCommand),

    /// Print the brace expansions of a pattern
    Braces(BracesCommand),

    /// Resolve every symlink in a path; all components must exist
    Realpath(RealpathCommand),

    /// Resolve every symlink in a path; the last component may be missing
    Realdirpath(RealdirpathCommand),

    /// Print the metadata record of a path
    Stat(StatCommand),

    /// Print the type of a path
    Ftype(FtypeCommand),

    /// Evaluate a file predicate
    Test(TestCommand),

    /// Check whether two paths name the same file
    Identical(IdenticalCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
