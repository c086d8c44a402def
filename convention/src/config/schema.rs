//! Configuration schema definitions.
//!
//! This module defines the configuration structure for convention lookups:
//! where pages live, which document root backs them, and which extensions
//! are tried in which order.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::extension::{ExtensionMapping, ExtensionSet};
use crate::lookup::DEFAULT_RESULT_PATH;

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can
/// be layered; unset fields fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use convention::config::Config;
///
/// let config = Config {
///     result_path: Some("/pages/".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.result_path_or_default(), "/pages/");
/// assert_eq!(Config::default().result_path_or_default(), "/WEB-INF/content/");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory prefix under which convention pages live.
    pub result_path: Option<String>,

    /// Document root used by the filesystem oracle.
    pub root: Option<PathBuf>,

    /// Extension priority list; replaces the built-in table when set.
    pub extensions: Option<Vec<ExtensionMapping>>,

    /// Output format for CLI reports.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The result path, or [`DEFAULT_RESULT_PATH`] when unset.
    #[must_use]
    pub fn result_path_or_default(&self) -> &str {
        self.result_path.as_deref().unwrap_or(DEFAULT_RESULT_PATH)
    }

    /// The configured extension set, or the built-in table when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured list repeats an extension.
    pub fn extension_set(&self) -> Result<ExtensionSet> {
        match &self.extensions {
            Some(mappings) => ExtensionSet::try_from(mappings.clone()),
            None => Ok(ExtensionSet::defaults()),
        }
    }
}

/// Output format for reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// JSON document.
    Json,
}
