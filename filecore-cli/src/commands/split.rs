//! Command to split a path into dirname and basename.

use crate::error::CliError;
use crate::utils::{load_configuration, output_format, print_json, GlobalOptions};
use clap::Args;
use filecore::config::OutputFormat;
use filecore::path::split;

/// Print the dirname and basename of a path.
#[derive(Args)]
pub struct SplitCommand {
    /// Path to split
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl SplitCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let (dir, base) = split(&self.path);

        match output_format(global, &config) {
            OutputFormat::Human => {
                println!("{dir}");
                println!("{base}");
            }
            OutputFormat::Json => {
                print_json(&serde_json::json!({ "dirname": dir, "basename": base }))?;
            }
        }
        Ok(())
    }
}
