//! Command to print the type of a path.

use crate::error::CliError;
use crate::utils::{print_value, GlobalOptions, Session};
use clap::Args;

/// Print the type of a path without following a final symlink.
#[derive(Args)]
pub struct FtypeCommand {
    /// Path to classify
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl FtypeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::open(global)?;
        let kind = session.fs.query().ftype(&self.path)?;
        print_value(session.format, "ftype", kind.ftype())
    }
}
