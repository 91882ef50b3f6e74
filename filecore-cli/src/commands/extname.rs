//! Command to print the extension of a path.

use crate::error::CliError;
use crate::utils::{load_configuration, output_format, print_value, GlobalOptions};
use clap::Args;
use filecore::path::extname;

/// Print the extension of a path, including the leading dot.
#[derive(Args)]
pub struct ExtnameCommand {
    /// Path to take the extension of
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl ExtnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        print_value(
            output_format(global, &config),
            "extname",
            &extname(&self.path),
        )
    }
}
