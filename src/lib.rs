//! # fs-compat
//!
//! One contract for two directory questions, whatever generation of native
//! filesystem API the host provides:
//!
//! - **does this directory contain any entries?** ([`has_entries`])
//! - **what are its immediate entries?** ([`open_enumeration`])
//!
//! Native APIs differ in which calls exist and in how they report a missing
//! path versus a path that is not a directory. This crate picks one strategy
//! per process and normalizes every failure into [`CompatError`].
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fs_compat::CompatError;
//! use std::path::Path;
//!
//! fn list(dir: &Path) -> Result<(), CompatError> {
//!     if !fs_compat::has_entries(dir)? {
//!         return Ok(());
//!     }
//!     fs_compat::with_directory_content(dir, |session| {
//!         while session.has_next()? {
//!             let entry = session.next_entry()?;
//!             println!("{} -> {}", entry.name, entry.path.display());
//!         }
//!         Ok(())
//!     })
//! }
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Compat`] | The operation set every strategy implements |
//! | [`LegacyCompat`] / [`ModernCompat`] | Strategies per [`CapabilityLevel`] |
//! | [`DirectorySession`] | Lazy, closeable listing of one directory |
//! | [`DirEntry`] | Name, canonical path and type of one child |
//! | [`CompatError`] | Unified error taxonomy |
//!
//! ---
//!
//! ## Error Handling
//!
//! | Condition | `has_entries` | `open_enumeration` |
//! |-----------|---------------|--------------------|
//! | path missing | `Ok(false)` | [`CompatError::NotFound`] |
//! | path is not a directory | [`CompatError::NotADirectory`] | [`CompatError::NotADirectory`] |
//! | any other native failure | [`CompatError::Io`] | [`CompatError::Io`] |
//!
//! [`CompatError::is_expected`] separates the recoverable kinds from real
//! I/O failures. Nothing is retried.
//!
//! ---
//!
//! ## Capability Selection
//!
//! The facade binds a strategy on first use. The `FS_COMPAT_CAPABILITY`
//! environment variable (`legacy` or `modern`) overrides the platform
//! default. See [`CapabilityLevel::detect`].
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Enable serialization for [`DirEntry`], [`FileType`] and [`CapabilityLevel`] |

mod error;
mod facade;
mod session;
mod strategy;
mod traits;
mod types;

pub use error::CompatError;

pub use types::{CAPABILITY_ENV, CapabilityLevel, DirEntry, FileType, ParseCapabilityError};

pub use traits::{Compat, NativeListing, RawEntry};

pub use session::{DirectorySession, SessionState};

pub use strategy::{LegacyCompat, ModernCompat, strategy_for};

pub use facade::{capability_level, compat, has_entries, open_enumeration, with_directory_content};
