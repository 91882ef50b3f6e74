//! Command to print the last component of a path.

use crate::error::CliError;
use crate::utils::{load_configuration, output_format, print_value, GlobalOptions};
use clap::Args;
use filecore::path::basename;

/// Print the last component of a path, optionally without a suffix.
#[derive(Args)]
pub struct BasenameCommand {
    /// Path to take the basename of
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Suffix to strip; `.*` strips any extension
    #[arg(value_name = "SUFFIX")]
    pub suffix: Option<String>,
}

impl BasenameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let base = basename(&self.path, self.suffix.as_deref());
        print_value(output_format(global, &config), "basename", &base)
    }
}
