//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, GlobConfig, OutputFormat, RealpathConfig};
use crate::RealpathStrategy;
use proptest::prelude::*;

fn flag_names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["NOESCAPE", "PATHNAME", "DOTMATCH", "CASEFOLD", "EXTGLOB"]),
        0..=5,
    )
    .prop_map(|names| names.into_iter().map(String::from).collect())
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(prop::option::of(flag_names_strategy())),
        prop::option::of((
            prop::option::of(prop_oneof![
                Just(RealpathStrategy::Walk),
                Just(RealpathStrategy::Native)
            ]),
            prop::option::of(1usize..=100),
        )),
        prop::option::of(prop::sample::select(vec!["quiet", "normal", "verbose"])),
        prop::option::of(prop_oneof![Just(OutputFormat::Human), Just(OutputFormat::Json)]),
    )
        .prop_map(|(glob, realpath, log_mode, output_format)| Config {
            glob: glob.map(|flags| GlobConfig { flags }),
            realpath: realpath.map(|(strategy, max_symlink_depth)| RealpathConfig {
                strategy,
                max_symlink_depth,
            }),
            log_mode: log_mode.map(String::from),
            output_format,
        })
}

proptest! {
    // Every value set in the higher source survives the merge
    #[test]
    fn higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        if high.log_mode.is_some() {
            prop_assert_eq!(&merged.log_mode, &high.log_mode);
        } else {
            prop_assert_eq!(&merged.log_mode, &low.log_mode);
        }
        if high.output_format.is_some() {
            prop_assert_eq!(merged.output_format, high.output_format);
        }
        if let Some(strategy) = high.realpath.as_ref().and_then(|r| r.strategy) {
            prop_assert_eq!(merged.realpath_strategy(), strategy);
        }
        if let Some(flags) = high.glob.as_ref().and_then(|g| g.flags.clone()) {
            prop_assert_eq!(merged.glob.and_then(|g| g.flags), Some(flags));
        }
    }

    // Merging with the empty config changes nothing
    #[test]
    fn empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(&merged, &config);

        let mut from_empty = Config::default();
        ConfigMerger::merge_into(&mut from_empty, &config);
        prop_assert_eq!(from_empty, config);
    }

    // Merging the same source twice is the same as once
    #[test]
    fn merge_idempotent(low in config_strategy(), high in config_strategy()) {
        let mut once = low.clone();
        ConfigMerger::merge_into(&mut once, &high);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &high);
        prop_assert_eq!(once, twice);
    }

    // Generated flag lists always validate
    #[test]
    fn generated_flags_parse(config in config_strategy()) {
        prop_assert!(config.glob_flags().is_ok());
    }
}
