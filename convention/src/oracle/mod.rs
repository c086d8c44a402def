//! Resource existence oracles.
//!
//! An oracle answers one question: does a resource exist at exactly this
//! path? The resolver asks it once per candidate extension, in priority
//! order, and stops at the first yes.
//!
//! Three implementations ship with the crate:
//!
//! - [`FileSystemOracle`]: files under a document root directory
//! - [`MemoryOracle`]: an in-memory table, handy for embedding and tests
//! - [`FallbackOracle`]: asks a primary oracle, then a secondary one
//!
//! # Examples
//!
//! ```
//! use convention::oracle::{MemoryOracle, ResourceOracle};
//!
//! let oracle = MemoryOracle::new().with("/index.jsp", "index body");
//! assert_eq!(oracle.exists("/index.jsp").unwrap(), Some("index body"));
//! assert_eq!(oracle.exists("/index.ftl").unwrap(), None);
//! ```

mod fallback;
mod filesystem;
mod memory;

use std::sync::Arc;

use crate::error::Result;

pub use fallback::FallbackOracle;
pub use filesystem::FileSystemOracle;
pub use memory::MemoryOracle;

/// Answers whether a resource exists at an exact probe path.
///
/// `Ok(None)` means the resource is absent, which is a normal outcome.
/// `Err` means the oracle itself failed (malformed probe, I/O failure) and
/// is passed straight back to whoever asked the resolver.
///
/// Implementations that are `Sync` can back a resolver shared across
/// threads; the resolver adds no state of its own.
pub trait ResourceOracle {
    /// Opaque handle returned for an existing resource.
    type Handle;

    /// Look up the resource at exactly `probe`.
    ///
    /// # Errors
    ///
    /// Returns an error if the oracle cannot answer for `probe`.
    fn exists(&self, probe: &str) -> Result<Option<Self::Handle>>;
}

impl<T: ResourceOracle + ?Sized> ResourceOracle for &T {
    type Handle = T::Handle;

    fn exists(&self, probe: &str) -> Result<Option<Self::Handle>> {
        (**self).exists(probe)
    }
}

impl<T: ResourceOracle + ?Sized> ResourceOracle for Box<T> {
    type Handle = T::Handle;

    fn exists(&self, probe: &str) -> Result<Option<Self::Handle>> {
        (**self).exists(probe)
    }
}

impl<T: ResourceOracle + ?Sized> ResourceOracle for Arc<T> {
    type Handle = T::Handle;

    fn exists(&self, probe: &str) -> Result<Option<Self::Handle>> {
        (**self).exists(probe)
    }
}
