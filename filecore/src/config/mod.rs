//! Configuration system for filecore.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (the user config and an explicit file)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of every value before use
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`FILECORE_*`)
//! 3. Explicit config file (via `ConfigBuilder::with_file`)
//! 4. User config (`~/.filecore/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use filecore::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("realpath strategy: {}", config.realpath_strategy());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use filecore::config::{Config, ConfigBuilder, GlobConfig};
//! use filecore::GlobFlags;
//!
//! let custom = Config {
//!     glob: Some(GlobConfig {
//!         flags: Some(vec!["PATHNAME".to_string()]),
//!     }),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.glob_flags().unwrap(), GlobFlags::PATHNAME);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, GlobConfig, OutputFormat, RealpathConfig};
pub use validator::ConfigValidator;
