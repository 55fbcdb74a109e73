//! Strategy for hosts whose listing primitive reports every open failure the
//! same way.
//!
//! Preconditions are decided by a stat call before the listing is opened. If
//! opening still fails, the path is probed again so a directory that vanished
//! or was replaced in between is reported as missing or not-a-directory
//! rather than as a generic failure.

use std::fs;
use std::path::Path;

use super::{Probe, StdListing, canonicalize, first_entry, probe};
use crate::{CapabilityLevel, Compat, CompatError, DirectorySession};

/// [`Compat`] for [`CapabilityLevel::Legacy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegacyCompat;

impl LegacyCompat {
    /// Open the listing, classifying a failure by re-probing the path.
    fn open_listing(dir: &Path) -> Result<fs::ReadDir, CompatError> {
        fs::read_dir(dir).map_err(|err| match probe(dir) {
            Ok(Probe::Missing) => CompatError::NotFound {
                path: dir.to_path_buf(),
            },
            Ok(Probe::NotADirectory) => CompatError::NotADirectory {
                path: dir.to_path_buf(),
            },
            Ok(Probe::Directory) | Err(_) => CompatError::io("read_dir", dir, err),
        })
    }
}

impl Compat for LegacyCompat {
    fn capability_level(&self) -> CapabilityLevel {
        CapabilityLevel::Legacy
    }

    fn has_entries(&self, dir: &Path) -> Result<bool, CompatError> {
        match probe(dir)? {
            Probe::Missing => return Ok(false),
            Probe::NotADirectory => {
                return Err(CompatError::NotADirectory {
                    path: dir.to_path_buf(),
                });
            }
            Probe::Directory => {}
        }
        match Self::open_listing(dir) {
            Ok(read_dir) => first_entry(dir, read_dir),
            Err(CompatError::NotFound { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn open_enumeration(&self, dir: &Path) -> Result<DirectorySession, CompatError> {
        match probe(dir)? {
            Probe::Missing => {
                return Err(CompatError::NotFound {
                    path: dir.to_path_buf(),
                });
            }
            Probe::NotADirectory => {
                return Err(CompatError::NotADirectory {
                    path: dir.to_path_buf(),
                });
            }
            Probe::Directory => {}
        }
        let canonical = canonicalize(dir)?;
        let read_dir = Self::open_listing(&canonical)?;
        Ok(DirectorySession::new(
            canonical,
            Box::new(StdListing::new(read_dir)),
        ))
    }
}
