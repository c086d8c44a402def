#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # convention
//!
//! A library for convention-based resource resolution.
//!
//! Given a requested path (possibly with doubled separators) and an ordered
//! list of candidate file extensions, the resolver finds the first existing
//! resource, trying extensions in priority order and stopping at the first
//! hit. On top of that, [`ConventionLookup`] maps actions and result codes
//! onto pages under a result directory.
//!
//! ## Core Types
//!
//! - [`PathResolver`]: canonicalization and extension-priority resolution
//! - [`ExtensionSet`] and [`Extension`]: ordered candidate extensions
//! - [`ResourceOracle`](oracle::ResourceOracle): the existence check
//! - [`ConventionLookup`]: action/result page lookup
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use convention::oracle::MemoryOracle;
//! use convention::{ExtensionSet, PathResolver};
//!
//! let oracle = MemoryOracle::new().with("/canonicalized/path.default_extension", ());
//! let resolver = PathResolver::new(oracle);
//! let extensions =
//!     ExtensionSet::from_extensions(["default_extension", "non_default_extension"]).unwrap();
//!
//! let resource = resolver
//!     .find_resource(&extensions, "///canonicalized//path")
//!     .unwrap()
//!     .expect("resource exists");
//! assert_eq!(resource.path(), "/canonicalized/path.default_extension");
//! ```

pub mod config;
pub mod error;
pub mod extension;
pub mod logging;
pub mod lookup;
pub mod oracle;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use extension::{Extension, ExtensionMapping, ExtensionSet};
pub use logging::{init_logger, LogLevel, Logger};
pub use lookup::{ConventionLookup, ConventionMatch, MatchKind};
pub use path::{CanonicalPath, PathResolver, Resource};
