//! Command to print the brace expansions of a pattern.

use crate::commands::fnmatch::parse_flags;
use crate::error::CliError;
use crate::utils::{print_list, GlobalOptions, Session};
use clap::Args;
use filecore::glob::expand;

/// Print every brace expansion of a pattern, intermediate ones included.
#[derive(Args)]
pub struct BracesCommand {
    /// Pattern to expand
    #[arg(value_name = "PATTERN", allow_hyphen_values = true)]
    pub pattern: String,

    /// Flag names; only NOESCAPE changes the expansion
    #[arg(long = "flag", short = 'f', value_name = "NAME")]
    pub flags: Vec<String>,
}

impl BracesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::open(global)?;
        let flags = parse_flags(&self.flags)?.unwrap_or_else(|| session.fs.glob_flags());

        let expansions = expand(&self.pattern, flags);
        print_list(session.format, "expansions", &expansions)
    }
}
