//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `FILECORE_*` environment variables
//! that override configuration file values.

use std::env;

use crate::config::schema::{Config, GlobConfig, OutputFormat, RealpathConfig};
use crate::error::{Error, Result};
use crate::glob::GlobFlags;
use crate::logging::{LogLevel, LOG_MODE_ENV};
use crate::realpath::RealpathStrategy;

/// Default glob flags, as a list of names.
pub const GLOB_FLAGS_ENV: &str = "FILECORE_GLOB_FLAGS";

/// Realpath strategy: `walk` or `native`.
pub const REALPATH_STRATEGY_ENV: &str = "FILECORE_REALPATH_STRATEGY";

/// Symlink limit for one realpath resolution.
pub const MAX_SYMLINK_DEPTH_ENV: &str = "FILECORE_MAX_SYMLINK_DEPTH";

/// Output format: `human` or `json`.
pub const OUTPUT_FORMAT_ENV: &str = "FILECORE_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use filecore::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads all `FILECORE_*` variables and applies them with higher
    /// precedence than file-based configs.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the variable if its value is
    /// invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_from(config, |name| env::var(name).ok())
    }

    /// Apply overrides read through `lookup` instead of the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Same as [`apply_overrides`](Self::apply_overrides).
    ///
    /// # Examples
    ///
    /// ```
    /// use filecore::config::{Config, EnvironmentConfig};
    /// use filecore::RealpathStrategy;
    ///
    /// let mut config = Config::default();
    /// EnvironmentConfig::apply_from(&mut config, |name| {
    ///     (name == "FILECORE_REALPATH_STRATEGY").then(|| "native".to_string())
    /// })
    /// .unwrap();
    /// assert_eq!(config.realpath_strategy(), RealpathStrategy::Native);
    /// ```
    pub fn apply_from(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        // FILECORE_GLOB_FLAGS
        if let Some(val) = lookup(GLOB_FLAGS_ENV) {
            let flags = GlobFlags::parse_list(&val).map_err(|e| Error::Validation {
                field: GLOB_FLAGS_ENV.into(),
                message: e.to_string(),
            })?;
            let names = flags.names().into_iter().map(String::from).collect();
            config.glob.get_or_insert_with(GlobConfig::default).flags = Some(names);
        }

        // FILECORE_REALPATH_STRATEGY
        if let Some(val) = lookup(REALPATH_STRATEGY_ENV) {
            let strategy: RealpathStrategy = val.parse().map_err(|e: Error| Error::Validation {
                field: REALPATH_STRATEGY_ENV.into(),
                message: e.to_string(),
            })?;
            config
                .realpath
                .get_or_insert_with(RealpathConfig::default)
                .strategy = Some(strategy);
        }

        // FILECORE_MAX_SYMLINK_DEPTH
        if let Some(val) = lookup(MAX_SYMLINK_DEPTH_ENV) {
            let depth = val.trim().parse().map_err(|_| Error::Validation {
                field: MAX_SYMLINK_DEPTH_ENV.into(),
                message: "Must be a non-negative integer".into(),
            })?;
            config
                .realpath
                .get_or_insert_with(RealpathConfig::default)
                .max_symlink_depth = Some(depth);
        }

        // FILECORE_LOG_MODE
        if let Some(val) = lookup(LOG_MODE_ENV) {
            LogLevel::parse(&val).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?;
            config.log_mode = Some(val.to_lowercase());
        }

        // FILECORE_OUTPUT_FORMAT
        if let Some(val) = lookup(OUTPUT_FORMAT_ENV) {
            let format: OutputFormat = val.parse().map_err(|_| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message: format!("unknown output format '{val}'"),
            })?;
            config.output_format = Some(format);
        }

        Ok(())
    }
}
