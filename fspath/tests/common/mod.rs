//! Common test utilities for integration tests.
//!
//! This module provides helper functions and a fixture builder for
//! assembling directory trees under a temporary root.

use std::fs;
use std::path::{Path, PathBuf};

/// Creates a temporary directory for testing.
///
/// The directory is cleaned up when the returned `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// Builder for directory trees with sensible defaults.
///
/// Paths are given relative to the fixture root with `/` separators.
///
/// # Examples
///
/// ```no_run
/// # use common::TreeFixture;
/// let tree = TreeFixture::new()
///     .with_dir("src")
///     .with_file("src/main.rs", "fn main() {}")
///     .build();
/// assert!(tree.path("src/main.rs").exists());
/// ```
#[allow(dead_code)]
pub struct TreeFixture {
    dirs: Vec<String>,
    files: Vec<(String, String)>,
    symlinks: Vec<(String, String)>,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Starts an empty fixture.
    pub fn new() -> Self {
        TreeFixture {
            dirs: Vec::new(),
            files: Vec::new(),
            symlinks: Vec::new(),
        }
    }

    /// Adds a directory (parents included).
    pub fn with_dir(mut self, path: &str) -> Self {
        self.dirs.push(path.to_string());
        self
    }

    /// Adds a file with the given content (parents included).
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.push((path.to_string(), content.to_string()));
        self
    }

    /// Adds a symlink at `link` pointing to `target` (relative to the
    /// link's directory, or absolute).
    pub fn with_symlink(mut self, link: &str, target: &str) -> Self {
        self.symlinks.push((link.to_string(), target.to_string()));
        self
    }

    /// Materializes the tree in a fresh temporary directory.
    pub fn build(self) -> Tree {
        let root = tempfile::tempdir().expect("failed to create fixture root");
        for dir in &self.dirs {
            fs::create_dir_all(root.path().join(dir)).expect("failed to create fixture dir");
        }
        for (path, content) in &self.files {
            let full = root.path().join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).expect("failed to create fixture parent");
            }
            fs::write(&full, content).expect("failed to write fixture file");
        }
        #[cfg(unix)]
        for (link, target) in &self.symlinks {
            std::os::unix::fs::symlink(target, root.path().join(link))
                .expect("failed to create fixture symlink");
        }
        #[cfg(not(unix))]
        assert!(
            self.symlinks.is_empty(),
            "symlink fixtures are unix-only in tests"
        );
        Tree { root }
    }
}

/// A materialized fixture tree; removed on drop.
#[allow(dead_code)]
pub struct Tree {
    root: tempfile::TempDir,
}

#[allow(dead_code)]
impl Tree {
    /// The fixture root.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// A path under the fixture root.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.path().join(rel)
    }
}
