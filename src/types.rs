//! Core types for the directory compatibility layer.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable that overrides capability detection.
pub const CAPABILITY_ENV: &str = "FS_COMPAT_CAPABILITY";

/// Type of a directory entry as reported by the native listing.
///
/// Symbolic links are reported as links, not as their targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileType {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link.
    Symlink,
    /// Anything else (sockets, fifos, devices) or a type the platform did not report.
    Other,
}

impl From<std::fs::FileType> for FileType {
    fn from(ft: std::fs::FileType) -> Self {
        if ft.is_symlink() {
            Self::Symlink
        } else if ft.is_dir() {
            Self::Directory
        } else if ft.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// A single child of an enumerated directory.
///
/// `path` is always the canonical directory path joined with the raw native
/// name, so `path.parent()` is the directory that produced the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirEntry {
    /// Name of the entry (filename only, lossily decoded).
    pub name: String,
    /// Canonical absolute path to the entry.
    pub path: PathBuf,
    /// Type of the entry.
    pub file_type: FileType,
}

impl DirEntry {
    /// Returns `true` if the entry is a directory (symlinks are not followed).
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }
}

/// Generation of native filesystem API available to the process.
///
/// Fixed for the process lifetime; the facade reads it once to pick a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CapabilityLevel {
    /// Only path probing and plain listing; error kinds from opening a
    /// listing are not trusted.
    Legacy,
    /// Listing open reports distinct not-found and not-a-directory errors.
    Modern,
}

impl CapabilityLevel {
    /// Detect the level for this process.
    ///
    /// [`CAPABILITY_ENV`] wins when it holds a valid level. Otherwise the
    /// platform default applies.
    pub fn detect() -> Self {
        match std::env::var(CAPABILITY_ENV) {
            Ok(value) => match value.parse() {
                Ok(level) => return level,
                Err(err) => {
                    tracing::warn!(%err, env = CAPABILITY_ENV, "ignoring capability override");
                }
            },
            Err(std::env::VarError::NotPresent) => {}
            Err(err) => {
                tracing::warn!(%err, env = CAPABILITY_ENV, "ignoring capability override");
            }
        }
        Self::platform_default()
    }

    /// The level native to the compilation target.
    pub const fn platform_default() -> Self {
        #[cfg(any(unix, windows))]
        return Self::Modern;

        #[cfg(not(any(unix, windows)))]
        return Self::Legacy;
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Modern => "modern",
        }
    }
}

impl fmt::Display for CapabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`CapabilityLevel`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown capability level: {0:?}")]
pub struct ParseCapabilityError(String);

impl FromStr for CapabilityLevel {
    type Err = ParseCapabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "modern" => Ok(Self::Modern),
            _ => Err(ParseCapabilityError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_capability_level() {
        assert_eq!("legacy".parse(), Ok(CapabilityLevel::Legacy));
        assert_eq!("Modern".parse(), Ok(CapabilityLevel::Modern));
        assert_eq!(" MODERN ".parse(), Ok(CapabilityLevel::Modern));
    }

    #[test]
    fn parse_capability_level_rejects_unknown() {
        let err = "v26".parse::<CapabilityLevel>().unwrap_err();
        assert_eq!(err.to_string(), "unknown capability level: \"v26\"");
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for level in [CapabilityLevel::Legacy, CapabilityLevel::Modern] {
            assert_eq!(level.to_string().parse(), Ok(level));
        }
    }

    #[cfg(any(unix, windows))]
    #[test]
    fn platform_default_is_modern() {
        assert_eq!(CapabilityLevel::platform_default(), CapabilityLevel::Modern);
    }

    #[test]
    fn file_type_from_std() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f");
        std::fs::write(&file, b"x").unwrap();

        let dir_type = std::fs::symlink_metadata(dir.path()).unwrap().file_type();
        let file_type = std::fs::symlink_metadata(&file).unwrap().file_type();
        assert_eq!(FileType::from(dir_type), FileType::Directory);
        assert_eq!(FileType::from(file_type), FileType::File);
    }

    #[test]
    fn dir_entry_is_dir() {
        let entry = DirEntry {
            name: "sub".into(),
            path: PathBuf::from("/d/sub"),
            file_type: FileType::Directory,
        };
        assert!(entry.is_dir());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn capability_level_serializes_lowercase() {
        let json = serde_json::to_string(&CapabilityLevel::Legacy).unwrap();
        assert_eq!(json, "\"legacy\"");
        let back: CapabilityLevel = serde_json::from_str("\"modern\"").unwrap();
        assert_eq!(back, CapabilityLevel::Modern);
    }

    #[test]
    fn types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FileType>();
        assert_send_sync::<DirEntry>();
        assert_send_sync::<CapabilityLevel>();
    }
}
