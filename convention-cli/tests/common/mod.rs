//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated document root and config dir
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated document root.
///
/// Commands built from it never see the caller's `CONVENTION_*` variables
/// or user configuration.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Document root passed via `--root`
    pub root: PathBuf,
    /// User configuration directory passed via `--config-dir`
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with an empty document root.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir.path().join("site");
        let config_dir = temp_dir.path().join("user-config");
        fs::create_dir_all(&root).expect("Failed to create document root");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            root,
            config_dir,
        }
    }

    /// Command with only the binary and a clean environment.
    ///
    /// The working directory is the document root so project config
    /// discovery stays inside the temp dir.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("convention").expect("Failed to find convention binary");
        for var in [
            "CONVENTION_ROOT",
            "CONVENTION_CONFIG_DIR",
            "CONVENTION_RESULT_PATH",
            "CONVENTION_EXTENSIONS",
            "CONVENTION_OUTPUT_FORMAT",
            "CONVENTION_LOG_MODE",
        ] {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.root);
        cmd
    }

    /// Command with `--root` and `--config-dir` pointing into the test env.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--root")
            .arg(&self.root)
            .arg("--config-dir")
            .arg(&self.config_dir);
        cmd
    }

    /// Add a page below the document root, e.g. `/WEB-INF/content/a.jsp`.
    pub fn page(&self, path: &str) -> PathBuf {
        let target = self.root.join(path.trim_start_matches('/'));
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).expect("Failed to create page directory");
        }
        fs::write(&target, path).expect("Failed to write page");
        target
    }

    /// Write a file directly under the temp directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Write the project `convention.yaml` in the document root.
    pub fn write_project_config(&self, contents: &str) {
        fs::write(self.root.join("convention.yaml"), contents).expect("Failed to write config");
    }

    /// Temp directory path.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}
