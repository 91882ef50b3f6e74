//! Configuration merging and precedence handling.
//!
//! This module layers configuration sources on top of each other, letting
//! higher-precedence values replace lower ones field by field.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, GlobConfig, RealpathConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use filecore::config::{Config, ConfigMerger};
///
/// let low = Config { log_mode: Some("quiet".to_string()), ..Default::default() };
/// let high = Config { log_mode: Some("verbose".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.log_mode, Some("verbose".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into the final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Nested configs: field-by-field merge
    /// - Glob flag lists: replaced as a whole, never unioned
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.log_mode.is_some() {
            target.log_mode.clone_from(&source.log_mode);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_glob) = source.glob {
            target.glob = Some(match &target.glob {
                Some(target_glob) => Self::merge_glob(target_glob, source_glob),
                None => source_glob.clone(),
            });
        }

        if let Some(ref source_realpath) = source.realpath {
            target.realpath = Some(match &target.realpath {
                Some(target_realpath) => Self::merge_realpath(target_realpath, source_realpath),
                None => source_realpath.clone(),
            });
        }
    }

    fn merge_glob(target: &GlobConfig, source: &GlobConfig) -> GlobConfig {
        GlobConfig {
            flags: source.flags.clone().or_else(|| target.flags.clone()),
        }
    }

    fn merge_realpath(target: &RealpathConfig, source: &RealpathConfig) -> RealpathConfig {
        RealpathConfig {
            strategy: source.strategy.or(target.strategy),
            max_symlink_depth: source.max_symlink_depth.or(target.max_symlink_depth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::OutputFormat;
    use crate::RealpathStrategy;
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/config/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }

    #[test]
    fn test_simple_fields_override() {
        let low = Config {
            log_mode: Some("quiet".to_string()),
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let high = Config {
            log_mode: Some("verbose".to_string()),
            ..Default::default()
        };

        let merged = ConfigMerger::merge(vec![source(1, low), source(2, high)]);
        assert_eq!(merged.log_mode.as_deref(), Some("verbose"));
        assert_eq!(merged.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_realpath_merges_field_by_field() {
        let low = Config {
            realpath: Some(RealpathConfig {
                strategy: Some(RealpathStrategy::Native),
                max_symlink_depth: Some(10),
            }),
            ..Default::default()
        };
        let high = Config {
            realpath: Some(RealpathConfig {
                strategy: None,
                max_symlink_depth: Some(5),
            }),
            ..Default::default()
        };

        let merged = ConfigMerger::merge(vec![source(1, low), source(2, high)]);
        assert_eq!(merged.realpath_strategy(), RealpathStrategy::Native);
        assert_eq!(merged.max_symlink_depth(), 5);
    }

    #[test]
    fn test_glob_flags_replaced_not_unioned() {
        let low = Config {
            glob: Some(GlobConfig {
                flags: Some(vec!["PATHNAME".to_string()]),
            }),
            ..Default::default()
        };
        let high = Config {
            glob: Some(GlobConfig {
                flags: Some(vec!["CASEFOLD".to_string()]),
            }),
            ..Default::default()
        };

        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);
        assert_eq!(
            merged.glob.unwrap().flags.unwrap(),
            vec!["CASEFOLD".to_string()]
        );

        let mut kept = low.clone();
        ConfigMerger::merge_into(
            &mut kept,
            &Config {
                glob: Some(GlobConfig::default()),
                ..Default::default()
            },
        );
        assert_eq!(kept, low);
    }
}
