//! Validated entry-name type for archive extraction.

use crate::ArchiveError;
use crate::Result;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// A container entry name validated to be safe for extraction.
///
/// `SafePath` represents a stored entry name that has been checked to be:
/// - relative (no root or drive-prefix component),
/// - free of parent-directory (`..`) components,
/// - free of null bytes,
/// - non-empty after normalization.
///
/// Joining a `SafePath` onto a destination directory therefore always
/// resolves inside that directory.
///
/// # Security Properties
///
/// Can only be constructed through [`SafePath::new`]; there is
/// intentionally no `From<PathBuf>` implementation. `.` components are
/// dropped during normalization so the stored path is canonical.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use stowage_core::SafePath;
///
/// let safe = SafePath::new(Path::new("sub/b.txt")).unwrap();
/// assert_eq!(safe.as_path(), Path::new("sub/b.txt"));
///
/// assert!(SafePath::new(Path::new("../../evil.txt")).is_err());
/// assert!(SafePath::new(Path::new("/etc/passwd")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafePath(PathBuf);

impl SafePath {
    /// Validates a stored entry name and constructs a `SafePath`.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::UnsafeEntry`] if the name is absolute,
    /// contains a `..` component or a null byte, or normalizes to an
    /// empty path.
    pub fn new(name: &Path) -> Result<Self> {
        if has_null_bytes(name) {
            return Err(unsafe_entry(name));
        }

        let mut normalized = PathBuf::new();
        for component in name.components() {
            match component {
                Component::Normal(part) => normalized.push(part),
                // `.` carries no meaning inside an archive name
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(unsafe_entry(name));
                }
            }
        }

        if normalized.as_os_str().is_empty() {
            return Err(unsafe_entry(name));
        }

        Ok(Self(normalized))
    }

    /// Returns the validated relative path.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

fn unsafe_entry(name: &Path) -> ArchiveError {
    ArchiveError::UnsafeEntry {
        name: name.to_path_buf(),
    }
}

#[cfg(unix)]
fn has_null_bytes(path: &Path) -> bool {
    use std::os::unix::ffi::OsStrExt;
    path.as_os_str().as_bytes().contains(&0)
}

#[cfg(not(unix))]
fn has_null_bytes(path: &Path) -> bool {
    path.to_string_lossy().contains('\0')
}
