//! Main entry point for the filecore CLI.
//!
//! This is the command-line interface for the filecore library. It exposes
//! the library's operations as subcommands:
//! - `basename`, `dirname`, `extname`, `join`, `split`: path algebra
//! - `expand`: lexical expansion against a base directory
//! - `fnmatch`, `braces`: pattern matching
//! - `realpath`, `realdirpath`: symlink resolution
//! - `stat`, `ftype`, `test`, `identical`: metadata queries

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    if let Err(e) = filecore::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        format: cli.format,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Basename(cmd) => cmd.execute(&global),
        cli::Command::Dirname(cmd) => cmd.execute(&global),
        cli::Command::Extname(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Split(cmd) => cmd.execute(&global),
        cli::Command::Expand(cmd) => cmd.execute(&global),
        cli::Command::Fnmatch(cmd) => cmd.execute(&global),
        cli::Command::Braces(cmd) => cmd.execute(&global),
        cli::Command::Realpath(cmd) => cmd.execute(&global),
        cli::Command::Realdirpath(cmd) => cmd.execute(&global),
        cli::Command::Stat(cmd) => cmd.execute(&global),
        cli::Command::Ftype(cmd) => cmd.execute(&global),
        cli::Command::Test(cmd) => cmd.execute(&global),
        cli::Command::Identical(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
