//! Common test utilities for integration tests.
//!
//! Provides a builder for real directory trees under a temporary directory,
//! and helpers to turn them into rule text.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A directory tree on disk, removed when dropped.
pub struct TreeFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Creates an empty fixture.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Creates a directory (and parents) relative to the fixture root.
    pub fn dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.dir.path().join(relative)).unwrap();
        self
    }

    /// Creates a file (and parent directories) relative to the fixture root.
    pub fn file(self, relative: &str) -> Self {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"contents").unwrap();
        self
    }

    /// The fixture root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `relative` under the root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Rule-file form of a directory under the root, with a trailing slash.
    pub fn dir_token(&self, relative: &str) -> String {
        let path = self.path(relative);
        let text = path.to_str().unwrap().trim_end_matches('/');
        format!("{text}/")
    }

    /// Rule-file form of a file under the root.
    pub fn file_token(&self, relative: &str) -> String {
        self.path(relative).to_str().unwrap().to_string()
    }

    /// Writes `contents` to a file under the root and returns its path.
    pub fn write_rules(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).unwrap();
        path
    }
}

/// Splits a filter file into its lines, without the trailing newline.
#[allow(dead_code)]
pub fn filter_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
