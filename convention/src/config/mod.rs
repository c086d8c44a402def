//! Configuration system for convention.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`CONVENTION_*`)
//! 3. Private project config (`convention.local.yaml`)
//! 4. Project config (`convention.yaml`)
//! 5. User config (`~/.convention/config.yaml`)
//! 6. Built-in defaults
//!
//! # Example file
//!
//! ```yaml
//! result_path: /WEB-INF/content/
//! root: ~/sites/shop
//! extensions:
//!   - extension: ftl
//!     result_type: freemarker
//!   - extension: jsp
//! output_format: human
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_config_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
