//! Configuration validation.
//!
//! This module checks that every configured value is usable before the
//! configuration is handed to the rest of the library.

use crate::config::schema::{Config, RealpathConfig};
use crate::error::{Error, Result};

/// Upper bound accepted for `realpath.max_symlink_depth`.
pub const MAX_SYMLINK_DEPTH_LIMIT: usize = 4096;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use filecore::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        // Flag names must all be known
        config.glob_flags()?;

        if let Some(ref realpath) = config.realpath {
            Self::validate_realpath(realpath)?;
        }

        config.log_level()?;

        Ok(())
    }

    fn validate_realpath(realpath: &RealpathConfig) -> Result<()> {
        if let Some(depth) = realpath.max_symlink_depth {
            if depth == 0 || depth > MAX_SYMLINK_DEPTH_LIMIT {
                return Err(Error::Validation {
                    field: "realpath.max_symlink_depth".into(),
                    message: format!("must be between 1 and {MAX_SYMLINK_DEPTH_LIMIT}, got {depth}"),
                });
            }
        }
        Ok(())
    }
}
