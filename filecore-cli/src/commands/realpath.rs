//! Commands to resolve symlinks in a path.

use crate::error::CliError;
use crate::utils::{print_value, GlobalOptions, Session};
use clap::Args;
use std::path::PathBuf;

/// Resolve every symlink in a path; all components must exist.
#[derive(Args)]
pub struct RealpathCommand {
    /// Path to resolve
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: PathBuf,

    /// Directory that a relative path is resolved from
    #[arg(long, value_name = "DIR")]
    pub base: Option<String>,
}

impl RealpathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::open(global)?;
        let resolved = session.fs.realpath(self.path.as_path(), self.base.as_deref())?;
        print_value(session.format, "path", &resolved)
    }
}

/// Resolve every symlink in a path; the last component may be missing.
#[derive(Args)]
pub struct RealdirpathCommand {
    /// Path to resolve
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: PathBuf,

    /// Directory that a relative path is resolved from
    #[arg(long, value_name = "DIR")]
    pub base: Option<String>,
}

impl RealdirpathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::open(global)?;
        let resolved = session.fs.realdirpath(self.path.as_path(), self.base.as_deref())?;
        print_value(session.format, "path", &resolved)
    }
}
