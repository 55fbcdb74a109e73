//! # Enumeration Session
//!
//! A lazy, pull-based, closeable listing of one directory.
//!
//! ```text
//! Open ──(entries)──▶ Exhausted
//!   │
//!   └──(read error)──▶ Failed
//!
//! any state ──close()──▶ Closed
//! ```
//!
//! The session owns one [`NativeListing`] and buffers at most one entry
//! ahead of consumption. [`close`](DirectorySession::close) releases the
//! native handle exactly once; dropping the session runs the same logic.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::{CompatError, DirEntry, NativeListing, RawEntry};

/// Where a [`DirectorySession`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Entries may still be available.
    Open,
    /// Every entry has been pulled from the native listing.
    Exhausted,
    /// A read failed; no further entries will be produced.
    Failed,
    /// The native handle has been released.
    Closed,
}

/// One open native directory listing.
///
/// Returned by [`Compat::open_enumeration`](crate::Compat::open_enumeration).
/// Entry order is whatever the native listing yields. Every returned path is
/// the canonical directory joined with the entry name.
///
/// # Example
///
/// ```rust,no_run
/// use fs_compat::CompatError;
/// use std::path::Path;
///
/// fn names(dir: &Path) -> Result<Vec<String>, CompatError> {
///     let mut session = fs_compat::open_enumeration(dir)?;
///     let mut names = Vec::new();
///     while session.has_next()? {
///         names.push(session.next_entry()?.name);
///     }
///     session.close()?;
///     Ok(names)
/// }
/// ```
pub struct DirectorySession {
    directory: PathBuf,
    listing: Option<Box<dyn NativeListing>>,
    lookahead: Option<DirEntry>,
    state: SessionState,
}

impl DirectorySession {
    /// Wrap an already opened native listing.
    ///
    /// `directory` must be the canonical absolute path the listing was opened on.
    pub fn new(directory: PathBuf, listing: Box<dyn NativeListing>) -> Self {
        tracing::trace!(directory = %directory.display(), "opened directory listing");
        Self {
            directory,
            listing: Some(listing),
            lookahead: None,
            state: SessionState::Open,
        }
    }

    /// Canonical path of the enumerated directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Is another entry available?
    ///
    /// Repeatable: calling it again without [`next_entry`](Self::next_entry)
    /// returns the same answer and does not skip entries. Once it has returned
    /// `false` it keeps returning `false`.
    ///
    /// # Errors
    ///
    /// [`CompatError::Io`] if the native listing fails while fetching the next
    /// entry. The session moves to [`SessionState::Failed`] and stays open
    /// until closed.
    pub fn has_next(&mut self) -> Result<bool, CompatError> {
        if self.lookahead.is_some() {
            return Ok(true);
        }
        if self.state != SessionState::Open {
            return Ok(false);
        }
        let Some(listing) = self.listing.as_mut() else {
            return Ok(false);
        };

        let pulled = listing.read_next();
        match pulled {
            Some(Ok(raw)) => {
                self.lookahead = Some(self.to_entry(raw));
                Ok(true)
            }
            Some(Err(err)) => {
                self.state = SessionState::Failed;
                Err(CompatError::io("read_dir_entry", &self.directory, err))
            }
            None => {
                self.state = SessionState::Exhausted;
                Ok(false)
            }
        }
    }

    /// Consume and return the next entry.
    ///
    /// # Errors
    ///
    /// - [`CompatError::NoSuchEntry`] if no entry is available
    /// - [`CompatError::Io`] if the native listing fails
    pub fn next_entry(&mut self) -> Result<DirEntry, CompatError> {
        self.has_next()?;
        self.lookahead.take().ok_or_else(|| CompatError::NoSuchEntry {
            path: self.directory.clone(),
        })
    }

    /// Release the native handle.
    ///
    /// Valid in every state; closing an already closed session is a no-op.
    /// Any buffered entry is discarded.
    ///
    /// # Errors
    ///
    /// [`CompatError::Io`] if the native close fails. The handle is not
    /// retried and the session is closed regardless.
    pub fn close(&mut self) -> Result<(), CompatError> {
        self.lookahead = None;
        self.state = SessionState::Closed;
        let Some(mut listing) = self.listing.take() else {
            return Ok(());
        };
        tracing::trace!(directory = %self.directory.display(), "releasing directory listing");
        listing
            .release()
            .map_err(|err| CompatError::io("close_dir", &self.directory, err))
    }

    /// Run `f` against this session and close it afterwards.
    ///
    /// The session is closed on every exit path. An error from `f` takes
    /// precedence over an error from closing.
    pub fn scoped<T, F>(mut self, f: F) -> Result<T, CompatError>
    where
        F: FnOnce(&mut Self) -> Result<T, CompatError>,
    {
        let result = f(&mut self);
        let closed = self.close();
        let value = result?;
        closed?;
        Ok(value)
    }

    /// Collect all remaining entries and close the session.
    ///
    /// Short-circuits on the first read error.
    pub fn collect_all(self) -> Result<Vec<DirEntry>, CompatError> {
        self.scoped(|session| session.by_ref().collect())
    }

    fn to_entry(&self, raw: RawEntry) -> DirEntry {
        DirEntry {
            name: raw.name.to_string_lossy().into_owned(),
            path: self.directory.join(&raw.name),
            file_type: raw.file_type,
        }
    }
}

impl Iterator for DirectorySession {
    type Item = Result<DirEntry, CompatError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.has_next() {
            Ok(true) => self.lookahead.take().map(Ok),
            Ok(false) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

impl Drop for DirectorySession {
    fn drop(&mut self) {
        if self.listing.is_none() {
            return;
        }
        if let Err(err) = self.close() {
            tracing::warn!(%err, "dropped directory session failed to release its listing");
        }
    }
}

impl fmt::Debug for DirectorySession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectorySession")
            .field("directory", &self.directory)
            .field("state", &self.state)
            .field("buffered", &self.lookahead.is_some())
            .finish()
    }
}
