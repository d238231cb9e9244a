//! Shared testing utilities for cliplog integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the directory used as the working directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Default history directory relative to the work directory.
    pub fn history_dir(&self) -> PathBuf {
        self.work_dir.join("clip_history")
    }

    /// Build a command for invoking the compiled `cliplog` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("cliplog").expect("Failed to locate cliplog binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG").timeout(Duration::from_secs(20));
        cmd
    }

    /// Write a settings file into the work directory and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("cliplog.toml");
        fs::write(&path, content).expect("Failed to write config file");
        path
    }
}
