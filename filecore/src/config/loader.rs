//! Configuration file discovery and loading.
//!
//! This module finds the user configuration file and loads it, along with
//! any file named explicitly by the caller, in precedence order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Directory under the home directory holding the user configuration.
pub const USER_CONFIG_DIR: &str = ".filecore";

/// File name of the user configuration.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use filecore::config::ConfigSource;
/// use std::path::PathBuf;
///
/// // User config has lowest precedence
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.filecore/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use filecore::config::ConfigLoader;
///
/// let sources = ConfigLoader::load_all(None, None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load every configuration file that applies.
    ///
    /// 1. The user config at `~/.filecore/config.yaml`, or
    ///    `{config_dir}/config.yaml` when `config_dir` is given
    ///    (precedence 1; skipped if absent)
    /// 2. The explicit file, if any (precedence 2; must exist)
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing, or if any file
    /// exists but cannot be read or parsed.
    pub fn load_all(config_dir: Option<&Path>, explicit: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(config_dir)? {
            sources.push(user_config);
        }

        if let Some(path) = explicit {
            let config = Self::load_file(path)?;
            sources.push(ConfigSource {
                path: path.to_path_buf(),
                precedence: 2,
                config,
            });
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    /// Load the user configuration file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load_user_config(config_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match config_dir {
            Some(dir) => dir.join(USER_CONFIG_FILE),
            None => match Self::user_config_path() {
                Some(path) => path,
                None => {
                    log::debug!("no home directory; skipping user configuration");
                    return Ok(None);
                }
            },
        };

        if !config_path.exists() {
            log::trace!("no user configuration at {}", config_path.display());
            return Ok(None);
        }

        log::debug!("loading user configuration from {}", config_path.display());
        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let display = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| Error::from_io(e, &display))?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: display,
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// The default user configuration path, if the home directory is known.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::OutputFormat;
    use crate::RealpathStrategy;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "glob: [unclosed").unwrap();

        let err = ConfigLoader::load_file(&config_path).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_load_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "realpath:\n  strategy: native\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.realpath_strategy(), RealpathStrategy::Native);
    }

    #[test]
    fn test_load_all_orders_by_precedence() {
        let user_dir = TempDir::new().unwrap();
        fs::write(
            user_dir.path().join(USER_CONFIG_FILE),
            "output_format: json\n",
        )
        .unwrap();

        let explicit_dir = TempDir::new().unwrap();
        let explicit = explicit_dir.path().join("custom.yaml");
        fs::write(&explicit, "output_format: human\n").unwrap();

        let sources = ConfigLoader::load_all(Some(user_dir.path()), Some(&explicit)).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].precedence, 1);
        assert_eq!(sources[0].config.output_format, Some(OutputFormat::Json));
        assert_eq!(sources[1].path, explicit);
    }

    #[test]
    fn test_load_all_missing_user_config_is_skipped() {
        let user_dir = TempDir::new().unwrap();
        let sources = ConfigLoader::load_all(Some(user_dir.path()), None).unwrap();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_load_all_missing_explicit_file_fails() {
        let user_dir = TempDir::new().unwrap();
        let missing = user_dir.path().join("missing.yaml");
        assert!(ConfigLoader::load_all(Some(user_dir.path()), Some(&missing)).is_err());
    }

    #[test]
    fn test_user_config_path_shape() {
        if let Some(path) = ConfigLoader::user_config_path() {
            assert!(path.ends_with(".filecore/config.yaml"));
        }
    }
}
