//! The native directory-listing primitive wrapped by a session.

use std::ffi::OsString;
use std::io;

use crate::FileType;

/// One raw child as reported by the native listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Native file name, not yet decoded.
    pub name: OsString,
    /// Type as reported by the listing.
    pub file_type: FileType,
}

/// An open native listing handle.
///
/// A [`DirectorySession`](crate::DirectorySession) owns exactly one of these
/// and calls [`release`](NativeListing::release) exactly once. `.` and `..`
/// must never be reported.
pub trait NativeListing: Send {
    /// Pull the next child, or `None` once the listing is exhausted.
    ///
    /// # Errors
    ///
    /// Any native failure while reading the next child.
    fn read_next(&mut self) -> Option<io::Result<RawEntry>>;

    /// Release the native handle.
    ///
    /// # Errors
    ///
    /// Any native failure while closing the handle. The handle is considered
    /// released either way.
    fn release(&mut self) -> io::Result<()>;
}
