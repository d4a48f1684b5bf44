//! Test utilities for building throwaway directory trees.
//!
//! This module is only compiled for tests, benchmarks and the `test-utils` feature.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

/// A temporary directory for testing.
///
/// The directory and everything in it is removed when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (empty) directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Set a file or directory's modification time to `secs_ago` seconds before now.
    pub fn set_age(&self, path: &str, secs_ago: u64) {
        let full_path = self.dir.path().join(path);
        let mtime = SystemTime::now() - Duration::from_secs(secs_ago);
        File::open(&full_path)
            .and_then(|f| f.set_modified(mtime))
            .expect("Failed to set mtime");
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
