//! Error types for the directory compatibility layer.

use std::io;
use std::path::{Path, PathBuf};

/// Unified error taxonomy for every capability level.
///
/// Native failures are normalized into these variants regardless of which
/// strategy produced them, so callers match on one set of kinds.
/// Uses `#[non_exhaustive]` for forward compatibility.
///
/// # Examples
///
/// ```rust
/// use fs_compat::CompatError;
/// use std::path::PathBuf;
///
/// let err = CompatError::NotFound { path: PathBuf::from("/missing") };
/// assert_eq!(err.to_string(), "not found: /missing");
/// assert!(err.is_expected());
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CompatError {
    /// Path does not exist.
    #[error("not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Path exists but is not a directory.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The path that is not a directory.
        path: PathBuf,
    },

    /// An entry was requested from a session that has none available.
    #[error("no further entry in {path}")]
    NoSuchEntry {
        /// The directory the session was opened on.
        path: PathBuf,
    },

    /// Any other native failure during open, pull or close.
    #[error("{operation} failed for {path}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl CompatError {
    /// Classify a native error raised by `operation` on `path`.
    ///
    /// `NotFound` and `NotADirectory` kinds map to their own variants;
    /// everything else is kept as [`CompatError::Io`] with the source attached.
    pub fn from_io(operation: &'static str, path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::NotADirectory => Self::NotADirectory {
                path: path.to_path_buf(),
            },
            _ => Self::io(operation, path, error),
        }
    }

    /// Wrap a native error as [`CompatError::Io`] without classifying it.
    pub fn io(operation: &'static str, path: &Path, error: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.to_path_buf(),
            source: error,
        }
    }

    /// Returns `true` for conditions callers are expected to recover from.
    ///
    /// A missing directory or a file in place of a directory usually means
    /// "nothing there yet" to the caller. I/O failures are exceptional.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NotADirectory { .. })
    }

    /// The path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::NotADirectory { path }
            | Self::NoSuchEntry { path }
            | Self::Io { path, .. } => path,
        }
    }
}
