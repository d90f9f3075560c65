//! Error types for archive operations.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while creating or extracting archives.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The path's extension does not map to a known archive format.
    #[error("unsupported archive format: {path}")]
    UnsupportedFormat {
        /// The path whose extension could not be classified.
        path: PathBuf,
    },

    /// A filesystem operation failed. Always carries the offending path.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The path the operation was acting on.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The container index or an entry header could not be parsed.
    #[error("corrupt archive: {0}")]
    CorruptArchive(String),

    /// An entry name would escape the destination root.
    #[error("unsafe entry name in archive: {name}")]
    UnsafeEntry {
        /// The stored entry name that was rejected.
        name: PathBuf,
    },

    /// The delegated external archiver exited non-zero or failed to launch.
    #[error("external archiver failed: {output}")]
    ExternalTool {
        /// The tool's diagnostic output, verbatim.
        output: String,
    },
}

impl ArchiveError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns `true` if this error represents a rejected unsafe entry.
    ///
    /// Unsafe entries indicate an archive that attempted to write outside
    /// the destination root and should be treated as hostile input.
    #[must_use]
    pub const fn is_unsafe_entry(&self) -> bool {
        matches!(self, Self::UnsafeEntry { .. })
    }
}
