//! In-memory resource table.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::oracle::ResourceOracle;

/// An oracle backed by an exact-match table of probe paths.
///
/// Keys are compared byte for byte; no canonicalization happens here, so
/// register resources under their canonical paths.
///
/// # Examples
///
/// ```
/// use convention::oracle::{MemoryOracle, ResourceOracle};
///
/// let mut oracle = MemoryOracle::new();
/// oracle.insert("/WEB-INF/content/hello.ftl", 7);
/// assert_eq!(oracle.exists("/WEB-INF/content/hello.ftl").unwrap(), Some(7));
/// assert_eq!(oracle.exists("/WEB-INF//content/hello.ftl").unwrap(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryOracle<H> {
    entries: BTreeMap<String, H>,
}

impl<H> Default for MemoryOracle<H> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<H> MemoryOracle<H> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handle` under `path`, returning any handle it replaced.
    pub fn insert(&mut self, path: impl Into<String>, handle: H) -> Option<H> {
        self.entries.insert(path.into(), handle)
    }

    /// Builder form of [`MemoryOracle::insert`].
    #[must_use]
    pub fn with(mut self, path: impl Into<String>, handle: H) -> Self {
        self.insert(path, handle);
        self
    }

    /// Remove the entry at `path`.
    pub fn remove(&mut self, path: &str) -> Option<H> {
        self.entries.remove(path)
    }

    /// Returns `true` if `path` is registered.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of registered resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over registered paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}

impl<H: Clone> ResourceOracle for MemoryOracle<H> {
    type Handle = H;

    fn exists(&self, probe: &str) -> Result<Option<H>> {
        Ok(self.entries.get(probe).cloned())
    }
}

impl<K: Into<String>, H> FromIterator<(K, H)> for MemoryOracle<H> {
    fn from_iter<I: IntoIterator<Item = (K, H)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, h)| (k.into(), h)).collect(),
        }
    }
}
