//! Common test utilities for CLI integration tests.
//!
//! Every command runs inside its own temporary working directory with
//! `HOME` pointed at a sibling directory, so neither a real user
//! configuration nor `RSRULES_*` variables from the caller leak in.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that would otherwise override command-line defaults.
const RSRULES_VARS: [&str; 6] = [
    "RSRULES_INPUT",
    "RSRULES_OUTPUT",
    "RSRULES_ECHO",
    "RSRULES_STRICT",
    "RSRULES_ATOMIC",
    "RSRULES_LOG_MODE",
];

/// Test environment with an isolated working and home directory.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory for commands
    pub work_dir: PathBuf,
    /// Value of `HOME` for commands
    pub home_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let work_dir = temp_dir.path().join("work");
        let home_dir = temp_dir.path().join("home");
        fs::create_dir_all(&work_dir).expect("Failed to create work dir");
        fs::create_dir_all(&home_dir).expect("Failed to create home dir");

        Self {
            temp_dir,
            work_dir,
            home_dir,
        }
    }

    /// The rsrules binary, run from the work directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("rsrules").expect("Failed to find rsrules binary");
        cmd.current_dir(&self.work_dir).env("HOME", &self.home_dir);
        for var in RSRULES_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Absolute path of `rel` under the work directory.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.work_dir.join(rel)
    }

    /// Create a directory (and parents) under the work directory.
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file (and its parent directories) under the work directory.
    pub fn create_file(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, b"x").expect("Failed to create test file");
        path
    }

    /// Write `contents` to `rel` under the work directory.
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path(rel);
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Rule token for a directory under the work directory, with a trailing `/`.
    pub fn dir_token(&self, rel: &str) -> String {
        format!("{}/", self.path(rel).display())
    }

    /// Lines of a file under the work directory.
    pub fn read_lines(&self, rel: &str) -> Vec<String> {
        fs::read_to_string(self.path(rel))
            .expect("Failed to read file")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
