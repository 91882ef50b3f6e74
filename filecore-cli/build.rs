//! Build script for filecore-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("filecore")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Path, glob, and file metadata operations")
        .long_about(
            "Command-line front-end for the filecore library: path algebra, \
             glob matching, symlink resolution, and metadata queries",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load an additional configuration file")
                .value_name("PATH")
                .global(true)
                .env("FILECORE_CONFIG"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (human or json)")
                .value_name("FORMAT")
                .global(true),
        )
        .subcommands(vec![
            Command::new("basename")
                .about("Print the last component of a path")
                .long_about("Print the last component of a path, optionally stripping a suffix"),
            Command::new("dirname")
                .about("Print everything before the last component of a path")
                .long_about("Print the directory part of a path, ascending --level times"),
            Command::new("extname")
                .about("Print the extension of a path")
                .long_about("Print the extension of the last component, including the dot"),
            Command::new("join")
                .about("Join components with single separators")
                .long_about("Join components so exactly one separator sits at each boundary"),
            Command::new("split")
                .about("Print the dirname and basename of a path")
                .long_about("Print the dirname and the basename of a path on two lines"),
            Command::new("expand")
                .about("Expand a path to an absolute one")
                .long_about("Anchor a path on a base directory and resolve . and .. lexically"),
            Command::new("fnmatch")
                .about("Match a path against a glob pattern")
                .long_about("Match a path against a pattern; exit status 1 means no match"),
            Command::new("braces")
                .about("Print the brace expansions of a pattern")
                .long_about("List every brace expansion of a pattern in depth-first order"),
            Command::new("realpath")
                .about("Resolve every symlink in a path")
                .long_about("Resolve a path to its canonical form; all components must exist"),
            Command::new("realdirpath")
                .about("Resolve every symlink in a path, allowing a missing leaf")
                .long_about("Resolve a path to its canonical form; the last component may be missing"),
            Command::new("stat")
                .about("Print the metadata record of a path")
                .long_about("Print the stat record of a path; --lstat describes a symlink itself"),
            Command::new("ftype")
                .about("Print the type of a path")
                .long_about("Print file, directory, link, fifo, socket, characterSpecial, blockSpecial or unknown"),
            Command::new("test")
                .about("Evaluate a file predicate")
                .long_about("Evaluate a named predicate such as directory or readable; exit status 1 means false"),
            Command::new("identical")
                .about("Check whether two paths name the same file")
                .long_about("Compare two paths by device and inode after following symlinks"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    // Generate man pages at build time
    let out_dir = PathBuf::from(
        std::env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    // Generate main filecore.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("filecore.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
