//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `CONVENTION_*` environment variables
//! that override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::extension::ExtensionSet;
use std::env;
use std::path::PathBuf;

/// Overrides [`Config::result_path`].
pub const RESULT_PATH_ENV: &str = "CONVENTION_RESULT_PATH";
/// Overrides [`Config::root`].
pub const ROOT_ENV: &str = "CONVENTION_ROOT";
/// Overrides [`Config::extensions`], in the `ext[=result_type],...` form.
pub const EXTENSIONS_ENV: &str = "CONVENTION_EXTENSIONS";
/// Overrides [`Config::output_format`] (`human` or `json`).
pub const OUTPUT_FORMAT_ENV: &str = "CONVENTION_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use convention::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (malformed extension list, unknown output format).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(result_path) = env::var(RESULT_PATH_ENV) {
            config.result_path = Some(result_path);
        }

        if let Ok(root) = env::var(ROOT_ENV) {
            config.root = Some(PathBuf::from(root));
        }

        if let Ok(extensions) = env::var(EXTENSIONS_ENV) {
            let set: ExtensionSet = extensions.parse().map_err(|e| Error::Validation {
                field: EXTENSIONS_ENV.into(),
                message: format!("{e}"),
            })?;
            config.extensions = Some(set.into());
        }

        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(Self::parse_output_format(&format)?);
        }

        Ok(())
    }

    fn parse_output_format(value: &str) -> Result<OutputFormat> {
        <OutputFormat as clap::ValueEnum>::from_str(value.trim(), true).map_err(|_| {
            Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message: format!("Must be 'human' or 'json', got '{value}'"),
            }
        })
    }
}
