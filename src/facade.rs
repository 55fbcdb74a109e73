//! # Compat Facade
//!
//! Process-wide entry point. The strategy is bound on first use from
//! [`CapabilityLevel::detect`] and never re-evaluated.

use std::path::Path;
use std::sync::OnceLock;

use crate::strategy::strategy_for;
use crate::{CapabilityLevel, Compat, CompatError, DirectorySession};

static COMPAT: OnceLock<Box<dyn Compat>> = OnceLock::new();

/// The strategy bound for this process.
///
/// Concurrent first calls all observe the same instance.
pub fn compat() -> &'static dyn Compat {
    COMPAT
        .get_or_init(|| {
            let level = CapabilityLevel::detect();
            tracing::debug!(%level, "binding directory compat strategy");
            strategy_for(level)
        })
        .as_ref()
}

/// Capability level of the bound strategy.
pub fn capability_level() -> CapabilityLevel {
    compat().capability_level()
}

/// Does `dir` contain at least one entry?
///
/// Returns `Ok(false)` when `dir` does not exist. See [`Compat::has_entries`].
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
///
/// let backup_dir = Path::new("backups");
/// if !fs_compat::has_entries(backup_dir)? {
///     println!("nothing backed up yet");
/// }
/// # Ok::<(), fs_compat::CompatError>(())
/// ```
pub fn has_entries(dir: &Path) -> Result<bool, CompatError> {
    compat().has_entries(dir)
}

/// Open a lazy listing of `dir`. See [`Compat::open_enumeration`].
pub fn open_enumeration(dir: &Path) -> Result<DirectorySession, CompatError> {
    compat().open_enumeration(dir)
}

/// Open `dir`, run `f` on the listing, and close it on every exit path.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
///
/// let count = fs_compat::with_directory_content(Path::new("media"), |session| {
///     Ok(session.by_ref().filter(Result::is_ok).count())
/// })?;
/// # Ok::<(), fs_compat::CompatError>(())
/// ```
pub fn with_directory_content<T, F>(dir: &Path, f: F) -> Result<T, CompatError>
where
    F: FnOnce(&mut DirectorySession) -> Result<T, CompatError>,
{
    open_enumeration(dir)?.scoped(f)
}
