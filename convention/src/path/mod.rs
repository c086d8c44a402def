//! Resource path canonicalization and resolution.
//!
//! # Canonicalization
//!
//! Request paths often arrive with doubled separators (`//a///b`), usually
//! from string-concatenated prefixes. Canonicalization collapses every run of
//! `/` into one and changes nothing else: `.` and `..` segments stay as they
//! are, and so does a trailing `/`.
//!
//! ```
//! use convention::path::canonicalize::{canonicalize, canonicalize_opt};
//!
//! assert_eq!(canonicalize("//a///b////c"), "/a/b/c");
//! assert_eq!(canonicalize_opt(None), None);
//! ```
//!
//! # Resolution
//!
//! [`PathResolver::find_resource`] appends each extension of an
//! [`ExtensionSet`](crate::ExtensionSet) to the canonical base path and asks a
//! [`ResourceOracle`](crate::oracle::ResourceOracle) whether that file exists.
//! The first hit wins; running out of extensions is a normal `Ok(None)`.

pub mod canonicalize;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use resolver::PathResolver;
pub use types::{CanonicalPath, Resource};
