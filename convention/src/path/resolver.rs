//! Extension-priority resource resolution.
//!
//! This module provides the `PathResolver` type, which turns a requested
//! base path and an [`ExtensionSet`] into the first existing resource.

use std::borrow::Cow;

use crate::error::Result;
use crate::extension::ExtensionSet;
use crate::oracle::ResourceOracle;
use crate::path::canonicalize;
use crate::path::types::{CanonicalPath, Resource};

/// Resolves base paths to resources by probing candidate extensions.
///
/// Resolution canonicalizes the base path, then asks the oracle about
/// `base.ext` for each extension in priority order. The first probe that
/// finds something ends the scan. If none does, the answer is `Ok(None)`.
///
/// The resolver holds no mutable state: it is safe to share between threads
/// whenever the oracle is.
///
/// # Examples
///
/// ```
/// use convention::oracle::MemoryOracle;
/// use convention::path::PathResolver;
/// use convention::ExtensionSet;
///
/// let oracle = MemoryOracle::new().with("/canonicalized/path.ftl", "template");
/// let resolver = PathResolver::new(oracle);
/// let extensions = ExtensionSet::from_extensions(["jsp", "ftl"]).unwrap();
///
/// let resource = resolver
///     .find_resource(&extensions, "///canonicalized//path")
///     .unwrap()
///     .unwrap();
/// assert_eq!(resource.path(), "/canonicalized/path.ftl");
/// assert_eq!(*resource.handle(), "template");
///
/// assert!(resolver.find_resource(&extensions, "/missing").unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathResolver<O> {
    oracle: O,
}

impl<O: ResourceOracle> PathResolver<O> {
    /// Create a resolver that probes through `oracle`.
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// The oracle this resolver probes.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Consume the resolver and return its oracle.
    pub fn into_oracle(self) -> O {
        self.oracle
    }

    /// Collapse runs of `/` in `path`.
    ///
    /// Same as [`canonicalize::canonicalize`]; kept on the resolver so the
    /// two halves of resolution sit side by side.
    ///
    /// # Examples
    ///
    /// ```
    /// use convention::oracle::MemoryOracle;
    /// use convention::path::PathResolver;
    ///
    /// assert_eq!(PathResolver::<MemoryOracle<()>>::canonicalize("//a//b"), "/a/b");
    /// ```
    #[must_use]
    pub fn canonicalize(path: &str) -> Cow<'_, str> {
        canonicalize::canonicalize(path)
    }

    /// Find the first existing resource for `base_path` among `extensions`.
    ///
    /// Probes `canonical(base_path) + "." + ext` for each extension, in
    /// order, one oracle query per extension, stopping at the first hit.
    /// An empty extension set performs no probes.
    ///
    /// # Errors
    ///
    /// Returns the oracle's error unchanged if any probe fails; later
    /// extensions are not tried.
    pub fn find_resource(
        &self,
        extensions: &ExtensionSet,
        base_path: &str,
    ) -> Result<Option<Resource<O::Handle>>> {
        let base = CanonicalPath::new(base_path);

        for extension in extensions.extensions() {
            let probe = base.probe(extension);
            log::trace!("probing {probe}");

            if let Some(handle) = self.oracle.exists(&probe)? {
                log::debug!("resolved {base_path} to {probe}");
                return Ok(Some(Resource::new(probe, extension.clone(), handle)));
            }
        }

        log::debug!(
            "no resource for {base} after trying {} extension(s)",
            extensions.len()
        );
        Ok(None)
    }
}
