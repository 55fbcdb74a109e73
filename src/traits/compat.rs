//! The unified directory operation set.

use std::path::Path;

use crate::{CapabilityLevel, CompatError, DirectorySession};

/// Directory existence and enumeration, independent of the native API generation.
///
/// Each capability level provides one implementation. Callers never see which
/// one is bound: both report the same results and the same [`CompatError`]
/// kinds for the same filesystem state.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self`; no state
/// is shared between calls.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn Compat`.
pub trait Compat: Send + Sync {
    /// The capability level this implementation targets.
    fn capability_level(&self) -> CapabilityLevel;

    /// Does `dir` contain at least one entry?
    ///
    /// Hidden and special entries count; `.` and `..` never do. A path that
    /// does not exist yields `Ok(false)`, not an error.
    ///
    /// # Errors
    ///
    /// - [`CompatError::NotADirectory`] if the path exists but is not a directory
    /// - [`CompatError::Io`] for any other native failure
    fn has_entries(&self, dir: &Path) -> Result<bool, CompatError>;

    /// Open a lazy listing of the immediate entries of `dir`.
    ///
    /// Preconditions are checked before the session is returned, so no entry
    /// is ever produced for a missing path or a non-directory.
    ///
    /// # Errors
    ///
    /// - [`CompatError::NotFound`] if the path does not exist
    /// - [`CompatError::NotADirectory`] if the path is not a directory
    /// - [`CompatError::Io`] if the listing cannot be opened
    fn open_enumeration(&self, dir: &Path) -> Result<DirectorySession, CompatError>;
}
