//! Command to print the directory part of a path.

use crate::error::CliError;
use crate::utils::{load_configuration, output_format, print_value, GlobalOptions};
use clap::Args;
use filecore::path::dirname_n;

/// Print everything before the last component of a path.
#[derive(Args)]
pub struct DirnameCommand {
    /// Path to take the dirname of
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Number of levels to ascend
    #[arg(long, short = 'n', default_value_t = 1, allow_negative_numbers = true)]
    pub level: i64,
}

impl DirnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let dir = dirname_n(&self.path, self.level)?;
        print_value(output_format(global, &config), "dirname", &dir)
    }
}
