//! Error conversion utilities for CLI.
//!
//! Converts stowage-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::Result;
use anyhow::anyhow;
use std::path::Path;
use stowage_core::ArchiveError;

/// Converts `ArchiveError` to a user-friendly anyhow error with context.
pub fn convert_archive_error(err: ArchiveError, archive: &Path) -> anyhow::Error {
    match err {
        ArchiveError::UnsafeEntry { name } => {
            anyhow!(
                "Security violation: archive '{}' contains entry '{}' that would escape the destination\n\
                 HINT: This archive may be malicious. Do not extract it from untrusted sources.",
                archive.display(),
                name.display()
            )
        }
        ArchiveError::UnsupportedFormat { path } => {
            anyhow!(
                "Archive format not supported: {}\n\
                 HINT: Supported formats: zip, tar, rar, 7z (detected from the file extension)",
                path.display()
            )
        }
        ArchiveError::CorruptArchive(reason) => {
            anyhow!(
                "Invalid archive '{}': {reason}\n\
                 HINT: The archive may be corrupted or malformed.",
                archive.display()
            )
        }
        ArchiveError::ExternalTool { output } => {
            anyhow!(
                "External archiver failed while processing '{}': {output}\n\
                 HINT: RAR, 7z, and password-protected archives require `7z` on PATH.",
                archive.display()
            )
        }
        ArchiveError::Io { .. } => {
            anyhow!("{err} (while processing '{}')", archive.display())
        }
    }
}

/// Adds context to a core result about archive operations.
pub fn add_archive_context<T>(
    result: Result<T, ArchiveError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, archive))
}
