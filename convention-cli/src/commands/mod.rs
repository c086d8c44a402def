//! CLI command implementations.
//!
//! - `canonicalize`: Collapse repeated separators in request paths
//! - `find`: Resolve a base path against the extension priority list
//! - `lookup`: Find the page for an action or result code
//! - `extensions`: Show the effective extension priority list
//! - `validate`: Validate configuration file
//! - `completions`: Generate shell completion scripts

pub mod canonicalize;
pub mod completions;
pub mod extensions;
pub mod find;
pub mod lookup;
pub mod validate;

pub use canonicalize::CanonicalizeCommand;
pub use completions::CompletionsCommand;
pub use extensions::ExtensionsCommand;
pub use find::FindCommand;
pub use lookup::LookupCommand;
pub use validate::ValidateCommand;
