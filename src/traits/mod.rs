//! # Compat Traits
//!
//! The two seams of the layer.
//!
//! | Trait | Implemented by | Purpose |
//! |-------|----------------|---------|
//! | [`Compat`] | one strategy per [`CapabilityLevel`](crate::CapabilityLevel) | `has_entries` / `open_enumeration` |
//! | [`NativeListing`] | the strategy's native listing handle | pulled by [`DirectorySession`](crate::DirectorySession) |
//!
//! Adding a capability level means adding a [`Compat`] implementation (and,
//! if it lists directories differently, a [`NativeListing`]). The facade and
//! the session stay untouched.

mod compat;
mod native_listing;

pub use compat::Compat;
pub use native_listing::{NativeListing, RawEntry};
