//! Command to join path components.

use crate::error::CliError;
use crate::utils::{load_configuration, output_format, print_value, GlobalOptions};
use clap::Args;
use filecore::path::join;

/// Join components so that exactly one separator sits at each boundary.
#[derive(Args)]
pub struct JoinCommand {
    /// Components to join
    #[arg(value_name = "PART", allow_hyphen_values = true)]
    pub parts: Vec<String>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let parts: Vec<&str> = self.parts.iter().map(String::as_str).collect();
        print_value(output_format(global, &config), "path", &join(&parts))
    }
}
