//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: configuration
//! loading, document root selection, and output formatting.

use crate::error::CliError;
use convention::config::OutputFormat;
use convention::oracle::FileSystemOracle;
use convention::output::OutputFormatter;
use convention::{Config, ConfigBuilder, Error as LibError, ExtensionSet};
use std::env;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Document root override.
    pub root: Option<PathBuf>,

    /// User configuration directory override.
    pub config_dir: Option<PathBuf>,

    /// Output format override.
    pub format: Option<OutputFormat>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    let overrides = Config {
        root: global.root.clone(),
        output_format: global.format,
        ..Config::default()
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// The extension list to use: `--ext` values when given, else the config.
///
/// Each value may hold several comma-separated `ext[=result_type]` items.
pub fn extension_set(config: &Config, ext_args: &[String]) -> Result<ExtensionSet, CliError> {
    if ext_args.is_empty() {
        return config
            .extension_set()
            .map_err(|e| CliError::Config(e.to_string()));
    }
    ext_args
        .join(",")
        .parse()
        .map_err(|e: LibError| CliError::InvalidArguments(e.to_string()))
}

/// Open the document root named by the configuration, or the CWD.
pub fn open_oracle(config: &Config) -> Result<FileSystemOracle, CliError> {
    let root = match config.root {
        Some(ref root) => root.clone(),
        None => env::current_dir()?,
    };
    log::debug!("document root: {}", root.display());

    FileSystemOracle::open(&root).map_err(|e| match e {
        LibError::PathNotFound { .. } | LibError::InvalidPath { .. } => {
            CliError::InvalidArguments(format!("--root: {e}"))
        }
        other => CliError::from(other),
    })
}

/// The formatter selected by flags, environment and configuration.
pub fn formatter(config: &Config) -> Box<dyn OutputFormatter> {
    config.output_format.unwrap_or_default().create_formatter()
}
