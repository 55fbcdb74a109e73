//! Strategy for hosts whose listing primitive reports distinct error kinds.
//!
//! The listing is opened first and its failure classified by
//! [`io::ErrorKind`]. No stat call is made on the success path.

use std::fs;
use std::io;
use std::path::Path;

use super::{Probe, StdListing, canonicalize, first_entry, probe};
use crate::{CapabilityLevel, Compat, CompatError, DirectorySession};

/// [`Compat`] for [`CapabilityLevel::Modern`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModernCompat;

impl ModernCompat {
    fn open_listing(dir: &Path) -> Result<fs::ReadDir, CompatError> {
        fs::read_dir(dir).map_err(|err| Self::classify(dir, err))
    }

    /// Map an open failure into the shared taxonomy.
    ///
    /// `ENOTDIR` is also raised for a path running through a file
    /// (`file/child`), which does not exist; a stat tells the two apart.
    /// Some platforms report a file opened as a directory with a generic
    /// error code; those are stat'ed as well.
    fn classify(dir: &Path, err: io::Error) -> CompatError {
        match CompatError::from_io("read_dir", dir, err) {
            CompatError::NotADirectory { path } => match probe(dir) {
                Ok(Probe::NotADirectory) => CompatError::NotADirectory { path },
                _ => CompatError::NotFound { path },
            },
            CompatError::Io { source, .. } => match probe(dir) {
                Ok(Probe::Missing) => CompatError::NotFound {
                    path: dir.to_path_buf(),
                },
                Ok(Probe::NotADirectory) => CompatError::NotADirectory {
                    path: dir.to_path_buf(),
                },
                Ok(Probe::Directory) | Err(_) => CompatError::io("read_dir", dir, source),
            },
            classified => classified,
        }
    }
}

impl Compat for ModernCompat {
    fn capability_level(&self) -> CapabilityLevel {
        CapabilityLevel::Modern
    }

    fn has_entries(&self, dir: &Path) -> Result<bool, CompatError> {
        match Self::open_listing(dir) {
            Ok(read_dir) => first_entry(dir, read_dir),
            Err(CompatError::NotFound { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn open_enumeration(&self, dir: &Path) -> Result<DirectorySession, CompatError> {
        let read_dir = Self::open_listing(dir)?;
        // On failure `read_dir` is dropped here, releasing the handle.
        let canonical = canonicalize(dir)?;
        Ok(DirectorySession::new(
            canonical,
            Box::new(StdListing::new(read_dir)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_modern_level() {
        assert_eq!(ModernCompat.capability_level(), CapabilityLevel::Modern);
    }

    #[test]
    fn classify_keeps_specific_kinds() {
        let err = ModernCompat::classify(
            Path::new("/nowhere"),
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(matches!(err, CompatError::NotFound { .. }));
    }

    #[test]
    fn classify_generic_error_on_file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file");
        fs::write(&file, b"x").unwrap();

        let err = ModernCompat::classify(&file, io::Error::new(io::ErrorKind::Other, "invalid"));
        assert!(matches!(err, CompatError::NotADirectory { .. }));
    }

    #[test]
    fn classify_generic_error_on_missing_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = ModernCompat::classify(
            &dir.path().join("gone"),
            io::Error::new(io::ErrorKind::Other, "invalid"),
        );
        assert!(matches!(err, CompatError::NotFound { .. }));
    }

    #[test]
    fn classify_not_a_directory_under_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file");
        fs::write(&file, b"x").unwrap();

        let child = file.join("child");
        let err = ModernCompat::classify(
            &child,
            io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        );
        match err {
            CompatError::NotFound { path } => assert_eq!(path, child),
            other => panic!("expected NotFound, got {other}"),
        }
    }

    #[test]
    fn classify_not_a_directory_on_file_stays_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file");
        fs::write(&file, b"x").unwrap();

        let err = ModernCompat::classify(
            &file,
            io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        );
        assert!(matches!(err, CompatError::NotADirectory { .. }));
    }

    #[test]
    fn classify_generic_error_on_directory_stays_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = ModernCompat::classify(
            dir.path(),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(
            err,
            CompatError::Io {
                operation: "read_dir",
                ..
            }
        ));
    }
}
