//! # Strategies
//!
//! One [`Compat`] implementation per [`CapabilityLevel`].
//!
//! | Level | Type | How preconditions are decided |
//! |-------|------|-------------------------------|
//! | [`Legacy`](CapabilityLevel::Legacy) | [`LegacyCompat`] | stat the path, then open the listing |
//! | [`Modern`](CapabilityLevel::Modern) | [`ModernCompat`] | open the listing, then classify its error |

mod legacy;
mod modern;

pub use legacy::LegacyCompat;
pub use modern::ModernCompat;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{CapabilityLevel, Compat, CompatError, FileType, NativeListing, RawEntry};

/// Build the strategy for `level`.
pub fn strategy_for(level: CapabilityLevel) -> Box<dyn Compat> {
    match level {
        CapabilityLevel::Legacy => Box::new(LegacyCompat),
        CapabilityLevel::Modern => Box::new(ModernCompat),
    }
}

/// [`NativeListing`] over [`std::fs::ReadDir`].
struct StdListing {
    inner: Option<fs::ReadDir>,
}

impl StdListing {
    fn new(read_dir: fs::ReadDir) -> Self {
        Self {
            inner: Some(read_dir),
        }
    }
}

impl NativeListing for StdListing {
    fn read_next(&mut self) -> Option<io::Result<RawEntry>> {
        let entry = match self.inner.as_mut()?.next()? {
            Ok(entry) => entry,
            Err(err) => return Some(Err(err)),
        };
        // The type can become unreadable if the entry vanished after listing.
        let file_type = entry.file_type().map_or(FileType::Other, Into::into);
        Some(Ok(RawEntry {
            name: entry.file_name(),
            file_type,
        }))
    }

    fn release(&mut self) -> io::Result<()> {
        // `ReadDir` closes its handle on drop and cannot report a close error.
        drop(self.inner.take());
        Ok(())
    }
}

/// Result of probing a path with a stat call.
///
/// A path that runs through a non-directory (`file/child`) does not exist
/// and probes as [`Probe::Missing`].
enum Probe {
    Missing,
    NotADirectory,
    Directory,
}

fn probe(dir: &Path) -> Result<Probe, CompatError> {
    match fs::metadata(dir) {
        Ok(metadata) if metadata.is_dir() => Ok(Probe::Directory),
        Ok(_) => Ok(Probe::NotADirectory),
        Err(err)
            if matches!(
                err.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
        {
            Ok(Probe::Missing)
        }
        Err(err) => Err(CompatError::io("stat", dir, err)),
    }
}

/// Pull the first entry from a freshly opened listing.
fn first_entry(dir: &Path, mut read_dir: fs::ReadDir) -> Result<bool, CompatError> {
    match read_dir.next() {
        None => Ok(false),
        Some(Ok(_)) => Ok(true),
        Some(Err(err)) => Err(CompatError::io("read_dir_entry", dir, err)),
    }
}

fn canonicalize(dir: &Path) -> Result<PathBuf, CompatError> {
    fs::canonicalize(dir).map_err(|err| CompatError::from_io("canonicalize", dir, err))
}
