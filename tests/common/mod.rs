//! Common test utilities for update-material integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Fixed generation time used by integration tests
pub const NOW: i64 = 1_700_000_000_000;

/// A temporary channel directory holding material files
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the real binary with a pinned clock, run from `workspace`
#[allow(deprecated)]
pub fn update_cmd(workspace: &TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("update-material").expect("binary should be built");
    cmd.current_dir(&workspace.path);
    cmd.env_remove("UPDATE_MATERIAL_VERBOSE");
    cmd.env("UPDATE_MATERIAL_NOW", NOW.to_string());
    cmd.env("NO_COLOR", "1");
    cmd
}
