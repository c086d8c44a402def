//! Primary/secondary oracle chaining.

use crate::error::Result;
use crate::oracle::ResourceOracle;

/// Consults a primary oracle first and a secondary one on a miss.
///
/// This is the usual web-root-then-classpath arrangement: pages deployed in
/// the document root shadow the ones bundled with the application. Both
/// oracles must hand out the same handle type.
///
/// A primary failure is returned as-is; the secondary is not consulted.
///
/// # Examples
///
/// ```
/// use convention::oracle::{FallbackOracle, MemoryOracle, ResourceOracle};
///
/// let deployed = MemoryOracle::new().with("/a.jsp", "deployed");
/// let bundled = MemoryOracle::new()
///     .with("/a.jsp", "bundled")
///     .with("/b.jsp", "bundled");
/// let oracle = FallbackOracle::new(deployed, bundled);
///
/// assert_eq!(oracle.exists("/a.jsp").unwrap(), Some("deployed"));
/// assert_eq!(oracle.exists("/b.jsp").unwrap(), Some("bundled"));
/// assert_eq!(oracle.exists("/c.jsp").unwrap(), None);
/// ```
#[derive(Debug, Clone)]
pub struct FallbackOracle<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> FallbackOracle<P, S>
where
    P: ResourceOracle,
    S: ResourceOracle<Handle = P::Handle>,
{
    /// Chain `primary` in front of `secondary`.
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    /// The oracle asked first.
    pub fn primary(&self) -> &P {
        &self.primary
    }

    /// The oracle asked on a primary miss.
    pub fn secondary(&self) -> &S {
        &self.secondary
    }
}

impl<P, S> ResourceOracle for FallbackOracle<P, S>
where
    P: ResourceOracle,
    S: ResourceOracle<Handle = P::Handle>,
{
    type Handle = P::Handle;

    fn exists(&self, probe: &str) -> Result<Option<Self::Handle>> {
        if let Some(handle) = self.primary.exists(probe)? {
            return Ok(Some(handle));
        }
        log::trace!("primary oracle missed {probe}, trying secondary");
        self.secondary.exists(probe)
    }
}
