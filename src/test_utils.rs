//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory for testing.
///
/// The directory is automatically cleaned up when dropped.
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

    /// Add a file with the given content.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a file filled with `size` bytes.
    pub fn add_sized_file(&self, path: &str, size: usize) -> PathBuf {
        self.add_file(path, &"x".repeat(size))
    }

    /// Add a directory, including any missing parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Build a wide and deep tree: `width` directories per level, `depth`
    /// levels, with `files` files in each directory.
    pub fn populate(&self, width: usize, depth: usize, files: usize) {
        fn fill(root: &Path, width: usize, depth: usize, files: usize) {
            for f in 0..files {
                fs::write(root.join(format!("file_{}.txt", f)), "x".repeat(f))
                    .expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for w in 0..width {
                let sub = root.join(format!("dir_{}", w));
                fs::create_dir(&sub).expect("Failed to create dir");
                fill(&sub, width, depth - 1, files);
            }
        }
        fill(self.path(), width, depth, files);
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
