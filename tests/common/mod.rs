//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use fs_compat::{Compat, LegacyCompat, ModernCompat};
use tempfile::TempDir;

/// Every way a caller can reach the operation set, with a label for failures.
pub fn strategies() -> Vec<(&'static str, &'static dyn Compat)> {
    let legacy: &'static dyn Compat = &LegacyCompat;
    let modern: &'static dyn Compat = &ModernCompat;
    vec![
        ("legacy", legacy),
        ("modern", modern),
        ("facade", fs_compat::compat()),
    ]
}

/// A temporary directory removed when dropped.
pub struct TransientDir {
    dir: TempDir,
}

impl TransientDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Add an empty file named `name`.
    pub fn with_file(self, name: &str) -> Self {
        fs::write(self.dir.path().join(name), b"").expect("create temp file");
        self
    }

    /// Add an empty subdirectory named `name`.
    pub fn with_subdir(self, name: &str) -> Self {
        fs::create_dir(self.dir.path().join(name)).expect("create subdir");
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A path under this directory that does not exist.
    pub fn missing(&self) -> PathBuf {
        self.dir.path().join("does-not-exist")
    }
}

/// Path of a directory that was created and then deleted.
pub fn deleted_dir() -> (TempDir, PathBuf) {
    let parent = tempfile::tempdir().expect("create temp dir");
    let dir = parent.path().join("deleted");
    fs::create_dir(&dir).expect("create dir");
    fs::remove_dir(&dir).expect("remove dir");
    (parent, dir)
}
