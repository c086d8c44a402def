//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::extension::{validate_result_type, ExtensionMapping};
use std::collections::HashSet;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use convention::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { result_path: Some("pages/".into()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref result_path) = config.result_path {
            Self::validate_result_path(result_path)?;
        }

        if let Some(ref root) = config.root {
            if root.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "root".into(),
                    message: "Document root cannot be empty".into(),
                });
            }
        }

        if let Some(ref extensions) = config.extensions {
            Self::validate_extensions(extensions)?;
        }

        Ok(())
    }

    fn validate_result_path(result_path: &str) -> Result<()> {
        if !result_path.starts_with('/') {
            return Err(Error::Validation {
                field: "result_path".into(),
                message: format!("Must start with '/', got '{result_path}'"),
            });
        }

        if result_path.chars().any(char::is_control) {
            return Err(Error::Validation {
                field: "result_path".into(),
                message: "Cannot contain control characters".into(),
            });
        }

        Ok(())
    }

    fn validate_extensions(extensions: &[ExtensionMapping]) -> Result<()> {
        if extensions.is_empty() {
            return Err(Error::Validation {
                field: "extensions".into(),
                message: "At least one extension is required".into(),
            });
        }

        let mut seen = HashSet::new();
        for mapping in extensions {
            if !seen.insert(mapping.extension.as_str()) {
                return Err(Error::Validation {
                    field: "extensions".into(),
                    message: format!("Extension '{}' is listed more than once", mapping.extension),
                });
            }

            validate_result_type(mapping.extension.as_str(), &mapping.result_type)?;
        }

        Ok(())
    }
}
