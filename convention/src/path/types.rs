//! Core types for resource paths and resolved resources.

use std::fmt;

use serde::Serialize;

use crate::extension::Extension;
use crate::path::canonicalize::canonicalize;

/// A resource path whose separator runs have been collapsed.
///
/// The only way to build one is through canonicalization, so every value
/// satisfies `canonicalize(p) == p`.
///
/// # Examples
///
/// ```
/// use convention::path::CanonicalPath;
///
/// let path = CanonicalPath::new("///canonicalized//path");
/// assert_eq!(path.as_str(), "/canonicalized/path");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalPath(String);

impl CanonicalPath {
    /// Canonicalize `path` and wrap the result.
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self(canonicalize(path).into_owned())
    }

    /// Get the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the probe path `self + "." + extension`.
    ///
    /// # Examples
    ///
    /// ```
    /// use convention::path::CanonicalPath;
    /// use convention::Extension;
    ///
    /// let base = CanonicalPath::new("/some//path");
    /// let ext = Extension::new("jsp").unwrap();
    /// assert_eq!(base.probe(&ext), "/some/path.jsp");
    /// ```
    #[must_use]
    pub fn probe(&self, extension: &Extension) -> String {
        let mut probe = String::with_capacity(self.0.len() + 1 + extension.as_str().len());
        probe.push_str(&self.0);
        probe.push('.');
        probe.push_str(extension.as_str());
        probe
    }

    /// Consume this value and return the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CanonicalPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// A resource found by a successful probe.
///
/// Holds the exact probe path that succeeded, the extension that produced
/// it, and whatever handle the oracle handed back (a filesystem path, a URL,
/// an in-memory body, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource<H> {
    path: String,
    extension: Extension,
    handle: H,
}

impl<H> Resource<H> {
    pub(crate) fn new(path: String, extension: Extension, handle: H) -> Self {
        Self {
            path,
            extension,
            handle,
        }
    }

    /// The canonical probe path that was found.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The extension whose probe succeeded.
    #[must_use]
    pub fn extension(&self) -> &Extension {
        &self.extension
    }

    /// The oracle's handle for the resource.
    #[must_use]
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Consume the resource, returning its handle.
    #[must_use]
    pub fn into_handle(self) -> H {
        self.handle
    }
}
