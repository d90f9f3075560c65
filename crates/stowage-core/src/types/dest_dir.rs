//! Validated destination directory type.

use crate::ArchiveError;
use crate::Result;
use crate::types::SafePath;
use std::path::Path;
use std::path::PathBuf;

/// A validated destination directory for archive extraction.
///
/// Construction creates the full directory chain when it does not yet
/// exist, then canonicalizes the result, so every join against a
/// [`SafePath`] produces an absolute path inside the destination root.
///
/// # Examples
///
/// ```no_run
/// use stowage_core::DestDir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::create("/tmp/restored")?;
/// println!("extracting into {}", dest.as_path().display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestDir(PathBuf);

impl DestDir {
    /// Creates the destination directory (and any missing parents) and
    /// canonicalizes it.
    ///
    /// # Errors
    ///
    /// Returns an I/O error wrapped with the path if the chain cannot be
    /// created or the path cannot be canonicalized (for example when a
    /// regular file already occupies it).
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        std::fs::create_dir_all(&path).map_err(|e| ArchiveError::io(&path, e))?;
        let canonical = path
            .canonicalize()
            .map_err(|e| ArchiveError::io(&path, e))?;
        Ok(Self(canonical))
    }

    /// Returns the canonical destination path.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Joins a validated entry name onto this destination.
    #[inline]
    #[must_use]
    pub fn join(&self, safe_path: &SafePath) -> PathBuf {
        self.0.join(safe_path.as_path())
    }
}
