//! File extensions and ordered extension sets.
//!
//! An [`ExtensionSet`] is the priority list the resolver walks when it looks
//! for a page: the first extension whose probe succeeds wins. Each extension
//! carries the name of the result type that renders it (`dispatcher`,
//! `freemarker`, ...). The resolver itself only ever reads the order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Result type used when an extension is given without one.
pub const DEFAULT_RESULT_TYPE: &str = "dispatcher";

/// The built-in extension table, in priority order.
const DEFAULT_EXTENSIONS: &[(&str, &str)] = &[
    ("jsp", "dispatcher"),
    ("jspf", "dispatcher"),
    ("jspx", "dispatcher"),
    ("vm", "velocity"),
    ("ftl", "freemarker"),
    ("html", "dispatcher"),
    ("htm", "dispatcher"),
];

/// A validated file extension, stored without the leading dot.
///
/// # Examples
///
/// ```
/// use convention::Extension;
///
/// let ext = Extension::new("jsp").unwrap();
/// assert_eq!(ext.as_str(), "jsp");
///
/// assert!(Extension::new("").is_err());
/// assert!(Extension::new(".jsp").is_err());
/// assert!(Extension::new("a/b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Extension(String);

impl Extension {
    /// Validates and wraps an extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is empty, starts with `.`, or
    /// contains `/` or whitespace.
    pub fn new(value: &str) -> std::result::Result<Self, InvalidExtensionError> {
        let reason = if value.is_empty() {
            Some("extension cannot be empty")
        } else if value.starts_with('.') {
            Some("extension must not start with '.'")
        } else if value.contains('/') {
            Some("extension must not contain '/'")
        } else if value.chars().any(char::is_whitespace) {
            Some("extension must not contain whitespace")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(InvalidExtensionError {
                value: value.to_string(),
                reason: reason.to_string(),
            }),
            None => Ok(Self(value.to_string())),
        }
    }

    /// Returns the extension text without a leading dot.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Extension {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Extension {
    type Error = InvalidExtensionError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Extension> for String {
    fn from(ext: Extension) -> Self {
        ext.0
    }
}

/// Error type for rejected extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidExtensionError {
    /// The rejected extension text.
    pub value: String,
    /// The reason the extension is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidExtensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid extension '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidExtensionError {}

/// One entry of an extension set: the extension and the result type that
/// renders files carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtensionMapping {
    /// The file extension.
    pub extension: Extension,
    /// Name of the result type for this extension.
    #[serde(default = "default_result_type")]
    pub result_type: String,
}

fn default_result_type() -> String {
    DEFAULT_RESULT_TYPE.to_string()
}

/// Checks a result type name: non-empty, ASCII letters, digits, `-`, `_`
/// and `.` only.
///
/// Every way of building an [`ExtensionSet`] applies this, as does
/// [`ConfigValidator`](crate::config::ConfigValidator).
///
/// # Errors
///
/// Returns [`Error::Validation`] naming `extension` if the result type is
/// empty or contains other characters.
///
/// # Examples
///
/// ```
/// use convention::extension::validate_result_type;
///
/// assert!(validate_result_type("ftl", "freemarker").is_ok());
/// assert!(validate_result_type("ftl", "free marker").is_err());
/// assert!(validate_result_type("ftl", "").is_err());
/// ```
pub fn validate_result_type(extension: &str, result_type: &str) -> Result<()> {
    if result_type.is_empty() {
        return Err(Error::Validation {
            field: "extensions".into(),
            message: format!("Extension '{extension}' has an empty result type"),
        });
    }
    if !result_type
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        return Err(Error::Validation {
            field: "extensions".into(),
            message: format!("Invalid result type '{result_type}' for extension '{extension}'"),
        });
    }
    Ok(())
}

/// An ordered, duplicate-free list of extensions.
///
/// Iteration order is probe order. Order is explicit here rather than
/// borrowed from a map so that priority can be read straight off the value.
///
/// # Examples
///
/// ```
/// use convention::ExtensionSet;
///
/// let set: ExtensionSet = "ftl=freemarker,jsp".parse().unwrap();
/// let order: Vec<&str> = set.extensions().map(|e| e.as_str()).collect();
/// assert_eq!(order, ["ftl", "jsp"]);
/// assert_eq!(set.result_type_of("jsp"), Some("dispatcher"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ExtensionMapping>", into = "Vec<ExtensionMapping>")]
pub struct ExtensionSet {
    entries: Vec<ExtensionMapping>,
}

impl ExtensionSet {
    /// Creates an empty extension set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the built-in table: JSP variants, Velocity, FreeMarker, HTML.
    #[must_use]
    pub fn defaults() -> Self {
        let entries = DEFAULT_EXTENSIONS
            .iter()
            .map(|(ext, result_type)| ExtensionMapping {
                extension: Extension((*ext).to_string()),
                result_type: (*result_type).to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Builds a set from bare extensions, all mapped to the default result type.
    ///
    /// # Errors
    ///
    /// Returns an error if an extension is invalid or repeated.
    pub fn from_extensions<I, S>(extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for ext in extensions {
            set.push(ext.as_ref(), DEFAULT_RESULT_TYPE)?;
        }
        Ok(set)
    }

    /// Appends an extension at the lowest priority.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension or result type is invalid, or the
    /// extension is already present.
    pub fn push(&mut self, extension: &str, result_type: &str) -> Result<()> {
        let extension = Extension::new(extension)?;
        self.push_mapping(ExtensionMapping {
            extension,
            result_type: result_type.to_string(),
        })
    }

    /// Builder form of [`ExtensionSet::push`].
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is invalid or already present.
    pub fn with(mut self, extension: &str, result_type: &str) -> Result<Self> {
        self.push(extension, result_type)?;
        Ok(self)
    }

    fn push_mapping(&mut self, mapping: ExtensionMapping) -> Result<()> {
        validate_result_type(mapping.extension.as_str(), &mapping.result_type)?;
        if self.contains(mapping.extension.as_str()) {
            return Err(Error::DuplicateExtension {
                extension: mapping.extension.into(),
            });
        }
        self.entries.push(mapping);
        Ok(())
    }

    /// Returns `true` if `extension` is in the set.
    #[must_use]
    pub fn contains(&self, extension: &str) -> bool {
        self.entries
            .iter()
            .any(|m| m.extension.as_str() == extension)
    }

    /// Returns the result type registered for `extension`.
    #[must_use]
    pub fn result_type_of(&self, extension: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|m| m.extension.as_str() == extension)
            .map(|m| m.result_type.as_str())
    }

    /// Iterates over the mappings in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExtensionMapping> {
        self.entries.iter()
    }

    /// Iterates over the extensions alone, in priority order.
    pub fn extensions(&self) -> impl Iterator<Item = &Extension> + '_ {
        self.entries.iter().map(|m| &m.extension)
    }

    /// Number of extensions in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set has no extensions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ExtensionSet {
    type Item = &'a ExtensionMapping;
    type IntoIter = std::slice::Iter<'a, ExtensionMapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<ExtensionMapping>> for ExtensionSet {
    type Error = Error;

    fn try_from(mappings: Vec<ExtensionMapping>) -> Result<Self> {
        let mut set = Self::new();
        for mapping in mappings {
            set.push_mapping(mapping)?;
        }
        Ok(set)
    }
}

impl From<ExtensionSet> for Vec<ExtensionMapping> {
    fn from(set: ExtensionSet) -> Self {
        set.entries
    }
}

/// Parses the compact `ext[=result_type],...` form used by
/// `CONVENTION_EXTENSIONS` and the `--ext` flag.
impl FromStr for ExtensionSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut set = Self::new();
        for item in s.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            match item.split_once('=') {
                Some((ext, result_type)) => set.push(ext.trim(), result_type.trim())?,
                None => set.push(item, DEFAULT_RESULT_TYPE)?,
            }
        }
        Ok(set)
    }
}
