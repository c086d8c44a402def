//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use convention::config::{Config, ConfigMerger};
///
/// let low = Config { result_path: Some("/low/".to_string()), ..Default::default() };
/// let high = Config { result_path: Some("/high/".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.result_path, Some("/high/".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
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
    /// Every field is replaced wholesale when set in `source`. Extension
    /// lists in particular are never concatenated: a list is a priority
    /// order, and splicing two orders together has no sensible meaning.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.result_path.is_some() {
            target.result_path.clone_from(&source.result_path);
        }

        if source.root.is_some() {
            target.root.clone_from(&source.root);
        }

        if source.extensions.is_some() {
            target.extensions.clone_from(&source.extensions);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
