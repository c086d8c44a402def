//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the convention library.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A throwaway document root populated with empty page files.
///
/// The directory is removed when the fixture is dropped.
pub struct SiteFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl SiteFixture {
    /// Creates an empty document root.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Adds a file at the resource path `page` (e.g. `/WEB-INF/content/a.jsp`).
    pub fn with_page(self, page: &str) -> Self {
        let target = self.file(page);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).expect("Failed to create page directory");
        }
        fs::write(&target, page).expect("Failed to write page");
        self
    }

    /// Adds a directory at the resource path `dir`.
    pub fn with_dir(self, dir: &str) -> Self {
        fs::create_dir_all(self.file(dir)).expect("Failed to create directory");
        self
    }

    /// The document root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Filesystem location of the resource path `page`.
    pub fn file(&self, page: &str) -> PathBuf {
        self.dir.path().join(page.trim_start_matches('/'))
    }
}
