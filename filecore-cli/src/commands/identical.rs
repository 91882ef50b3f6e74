//! Command to compare two paths by device and inode.

use crate::error::CliError;
use crate::utils::{report_predicate, GlobalOptions, Session};
use clap::Args;

/// Check whether two paths name the same file.
///
/// Symlinks are followed. A missing path is never identical to anything.
#[derive(Args)]
pub struct IdenticalCommand {
    /// First path
    #[arg(value_name = "PATH")]
    pub first: String,

    /// Second path
    #[arg(value_name = "OTHER")]
    pub second: String,
}

impl IdenticalCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::open(global)?;
        let same = session.fs.query().is_identical(&self.first, &self.second)?;
        report_predicate(session.format, global.quiet, same, || {
            format!("'{}' and '{}' are different files", self.first, self.second)
        })
    }
}
