//! Configuration schema definitions.
//!
//! This module defines the configuration structure for filecore: default
//! glob flags, the realpath strategy, logging, and output formatting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::glob::GlobFlags;
use crate::logging::LogLevel;
use crate::realpath::{RealpathStrategy, DEFAULT_MAX_SYMLINK_DEPTH};

/// Complete configuration structure.
///
/// Every field is optional so that partial configurations from several
/// sources can be layered on top of each other.
///
/// # Examples
///
/// ```
/// use filecore::config::{Config, GlobConfig};
/// use filecore::GlobFlags;
///
/// let config = Config {
///     glob: Some(GlobConfig {
///         flags: Some(vec!["PATHNAME".to_string(), "FNM_DOTMATCH".to_string()]),
///     }),
///     ..Default::default()
/// };
/// assert_eq!(
///     config.glob_flags().unwrap(),
///     GlobFlags::PATHNAME | GlobFlags::DOTMATCH
/// );
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Glob matching defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glob: Option<GlobConfig>,

    /// Realpath resolution settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realpath: Option<RealpathConfig>,

    /// Log verbosity: `quiet`, `normal` or `verbose`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_mode: Option<String>,

    /// Output format for command results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
}

/// Glob matching defaults.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GlobConfig {
    /// Flag names applied when a caller gives none, e.g. `[PATHNAME, EXTGLOB]`.
    ///
    /// The `FNM_` prefix is optional.
    pub flags: Option<Vec<String>>,
}

/// Realpath resolution settings.
///
/// # Examples
///
/// ```
/// use filecore::config::RealpathConfig;
/// use filecore::RealpathStrategy;
///
/// let config: RealpathConfig = serde_yaml::from_str("strategy: native").unwrap();
/// assert_eq!(config.strategy, Some(RealpathStrategy::Native));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RealpathConfig {
    /// Which resolution algorithm to use.
    pub strategy: Option<RealpathStrategy>,

    /// How many symlinks one resolution may follow.
    pub max_symlink_depth: Option<usize>,
}

/// Output format for command results.
///
/// # Examples
///
/// ```
/// use filecore::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!("human".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one value per line.
    #[default]
    Human,
    /// JSON output format.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("unknown output format '{s}' (expected 'human' or 'json')"),
            }),
        }
    }
}

impl Config {
    /// The configured default glob flags, or the empty set.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming `glob.flags` if a flag name is
    /// unknown.
    pub fn glob_flags(&self) -> Result<GlobFlags> {
        let Some(names) = self.glob.as_ref().and_then(|g| g.flags.as_ref()) else {
            return Ok(GlobFlags::empty());
        };

        names.iter().try_fold(GlobFlags::empty(), |acc, name| {
            GlobFlags::parse_name(name)
                .map(|flag| acc | flag)
                .map_err(|e| Error::Validation {
                    field: "glob.flags".into(),
                    message: e.to_string(),
                })
        })
    }

    /// The configured realpath strategy, or the default walk.
    #[must_use]
    pub fn realpath_strategy(&self) -> RealpathStrategy {
        self.realpath
            .as_ref()
            .and_then(|r| r.strategy)
            .unwrap_or_default()
    }

    /// The configured symlink limit, or the default of 40.
    #[must_use]
    pub fn max_symlink_depth(&self) -> usize {
        self.realpath
            .as_ref()
            .and_then(|r| r.max_symlink_depth)
            .unwrap_or(DEFAULT_MAX_SYMLINK_DEPTH)
    }

    /// The configured log level, if any.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming `log_mode` if the value is not a
    /// known level.
    pub fn log_level(&self) -> Result<Option<LogLevel>> {
        self.log_mode
            .as_deref()
            .map(|mode| {
                LogLevel::parse(mode).map_err(|message| Error::Validation {
                    field: "log_mode".into(),
                    message,
                })
            })
            .transpose()
    }

    /// The configured output format, or human-readable.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}
