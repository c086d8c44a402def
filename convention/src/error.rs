//! Error types for the convention library.
//!
//! This module provides the error hierarchy for resolution, oracle and
//! configuration operations, using `thiserror` for ergonomic error handling.
//!
//! Note that a resource which simply does not exist is *not* an error:
//! resolution reports it as `Ok(None)`. Errors are reserved for invalid input
//! and for failures of the collaborators the resolver talks to.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a convention error.
///
/// # Examples
///
/// ```
/// use convention::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("jsp")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the convention library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An extension failed validation.
    #[error("invalid extension '{value}': {reason}")]
    InvalidExtension {
        /// The rejected extension text.
        value: String,
        /// The reason the extension is invalid.
        reason: String,
    },

    /// An extension was added twice to the same extension set.
    #[error("duplicate extension '{extension}' in extension set")]
    DuplicateExtension {
        /// The repeated extension.
        extension: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error in {}: {source}", path.display())]
    Configuration {
        /// The file being parsed.
        path: PathBuf,
        /// The YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A serialization error occurred while rendering output.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// A resource oracle failed while answering a probe.
    #[error("resource lookup failed for '{probe}': {source}")]
    Oracle {
        /// The probe path being checked.
        probe: String,
        /// The underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<crate::extension::InvalidExtensionError> for Error {
    fn from(err: crate::extension::InvalidExtensionError) -> Self {
        Self::InvalidExtension {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use convention::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Wrap an arbitrary collaborator failure as an oracle error for `probe`.
    pub fn oracle<E>(probe: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Oracle {
            probe: probe.into(),
            source: source.into(),
        }
    }
}
