//! Archive format detection.

use std::path::Path;

use crate::ArchiveError;
use crate::Result;

/// Supported archive formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveType {
    /// ZIP archive.
    Zip,
    /// Tar archive (uncompressed).
    Tar,
    /// RAR archive (handled by the external tool).
    Rar,
    /// 7z archive (handled by the external tool).
    SevenZ,
}

impl ArchiveType {
    /// Returns the canonical lowercase name of this format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Tar => "tar",
            Self::Rar => "rar",
            Self::SevenZ => "7z",
        }
    }

    /// Stable index used by the routing table.
    pub(crate) const fn table_index(self) -> usize {
        match self {
            Self::Zip => 0,
            Self::Tar => 1,
            Self::Rar => 2,
            Self::SevenZ => 3,
        }
    }
}

/// Detects the archive type from a file path's extension.
///
/// Detection is case-insensitive and purely lexical: the file does not
/// need to exist and no magic bytes are consulted.
///
/// # Errors
///
/// Returns [`ArchiveError::UnsupportedFormat`] for any extension outside
/// `.zip`, `.tar`, `.rar`, `.7z`, including paths with no extension.
pub fn detect_format(path: &Path) -> Result<ArchiveType> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| ArchiveError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

    match extension.to_ascii_lowercase().as_str() {
        "zip" => Ok(ArchiveType::Zip),
        "tar" => Ok(ArchiveType::Tar),
        "rar" => Ok(ArchiveType::Rar),
        "7z" => Ok(ArchiveType::SevenZ),
        _ => Err(ArchiveError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
