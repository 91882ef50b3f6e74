//! Command to match a path against a glob pattern.

use crate::error::CliError;
use crate::utils::{report_predicate, GlobalOptions, Session};
use clap::Args;
use filecore::GlobFlags;

/// Match a path against a glob pattern.
///
/// Exits with status 1 when the path does not match.
#[derive(Args)]
pub struct FnmatchCommand {
    /// Pattern to match with
    #[arg(value_name = "PATTERN", allow_hyphen_values = true)]
    pub pattern: String,

    /// Path to test
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Flag names (e.g. PATHNAME, FNM_EXTGLOB); replaces the configured flags
    #[arg(long = "flag", short = 'f', value_name = "NAME")]
    pub flags: Vec<String>,
}

impl FnmatchCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::open(global)?;
        let flags = parse_flags(&self.flags)?;

        let matched = session.fs.fnmatch(&self.pattern, &self.path, flags);
        report_predicate(session.format, global.quiet, matched, || {
            format!("'{}' does not match '{}'", self.path, self.pattern)
        })
    }
}

/// Parse repeated `--flag` values; `None` means "use the configured set".
pub(crate) fn parse_flags(names: &[String]) -> Result<Option<GlobFlags>, CliError> {
    if names.is_empty() {
        return Ok(None);
    }
    let joined = names.join(",");
    GlobFlags::parse_list(&joined)
        .map(Some)
        .map_err(|e| CliError::InvalidArguments(e.to_string()))
}
