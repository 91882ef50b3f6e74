//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, opening the filesystem handle, and
//! output formatting.

use crate::error::CliError;
use chrono::{DateTime, Local};
use filecore::config::OutputFormat;
use filecore::{Config, ConfigBuilder, FileSystem};
use serde::Serialize;
use std::path::PathBuf;
use std::time::SystemTime;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // `verbose` is consumed by the logger before dispatch
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file, layered above the user config.
    pub config: Option<PathBuf>,

    /// Output format override; falls back to the configured format.
    pub format: Option<OutputFormat>,
}

/// Load configuration from all sources.
///
/// The user config under the home directory and the `FILECORE_*`
/// environment variables are always consulted. `--config` adds an explicit
/// file that must exist.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_file(path);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build a filesystem handle from the loaded configuration.
pub fn open_filesystem(config: &Config) -> Result<FileSystem, CliError> {
    FileSystem::from_config(config).map_err(|e| CliError::Config(e.to_string()))
}

/// Pick the output format: the command line wins over the configuration.
pub fn output_format(global: &GlobalOptions, config: &Config) -> OutputFormat {
    global.format.unwrap_or_else(|| config.output_format())
}

/// Everything a command needs: the configured handle and how to print.
pub struct Session {
    /// The configured filesystem handle.
    pub fs: FileSystem,
    /// Output format for this invocation.
    pub format: OutputFormat,
}

impl Session {
    /// Load configuration and open the filesystem handle.
    pub fn open(global: &GlobalOptions) -> Result<Self, CliError> {
        let config = load_configuration(global)?;
        let fs = open_filesystem(&config)?;
        let format = output_format(global, &config);
        log::debug!("session opened with {format} output");
        Ok(Self { fs, format })
    }
}

/// Print a single string result.
///
/// Human output is the bare value; JSON output wraps it as
/// `{"<key>": "<value>"}`.
pub fn print_value(format: OutputFormat, key: &str, value: &str) -> Result<(), CliError> {
    match format {
        OutputFormat::Human => println!("{value}"),
        OutputFormat::Json => {
            let mut map = serde_json::Map::new();
            map.insert(key.to_string(), serde_json::Value::from(value));
            print_json(&map)?;
        }
    }
    Ok(())
}

/// Print a list of strings, one per line in human mode.
pub fn print_list(format: OutputFormat, key: &str, values: &[String]) -> Result<(), CliError> {
    match format {
        OutputFormat::Human => {
            for value in values {
                println!("{value}");
            }
        }
        OutputFormat::Json => {
            let mut map = serde_json::Map::new();
            map.insert(key.to_string(), serde_json::Value::from(values.to_vec()));
            print_json(&map)?;
        }
    }
    Ok(())
}

/// Print a boolean answer and turn `false` into a semantic failure.
///
/// Human output is `true` or `false` unless `quiet` is set, in which case
/// only the exit code carries the answer.
pub fn report_predicate(
    format: OutputFormat,
    quiet: bool,
    answer: bool,
    failure: impl FnOnce() -> String,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Human if !quiet => println!("{answer}"),
        OutputFormat::Human => {}
        OutputFormat::Json => print_json(&serde_json::json!({ "result": answer }))?,
    }

    if answer {
        Ok(())
    } else {
        Err(CliError::SemanticFailure(failure()))
    }
}

/// Pretty-print any serializable value as JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a timestamp as RFC 3339 in local time.
pub fn format_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time).to_rfc3339()
}
