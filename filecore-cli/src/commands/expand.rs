//! Command to expand a path lexically.

use crate::error::CliError;
use crate::utils::{print_value, GlobalOptions, Session};
use clap::Args;
use std::path::PathBuf;

/// Expand a path to an absolute one.
///
/// `.` and `..` are resolved as text; symlinks are never followed.
#[derive(Args)]
pub struct ExpandCommand {
    /// Path to expand
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: PathBuf,

    /// Directory that relative paths are anchored on (default: CWD)
    #[arg(long, value_name = "DIR")]
    pub base: Option<String>,

    /// Treat a leading `~` as a literal directory name
    #[arg(long)]
    pub absolute: bool,
}

impl ExpandCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::open(global)?;
        let base = self.base.as_deref();

        let expanded = if self.absolute {
            session.fs.absolute_path(self.path.as_path(), base)?
        } else {
            session.fs.expand_path(self.path.as_path(), base)?
        };

        print_value(session.format, "path", &expanded)
    }
}
