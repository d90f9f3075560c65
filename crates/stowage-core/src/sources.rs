//! Source list expansion for archive creation.
//!
//! A create call receives an ordered list of filesystem paths. Each path
//! resolves independently: a plain file becomes a single entry named by
//! its base name at the archive root, a directory expands into its full
//! recursive listing with entry names relative to that directory.

use crate::ArchiveError;
use crate::CreateReport;
use crate::Result;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Kind of a resolved source entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
}

/// One resolved creation input: a filesystem path paired with the name it
/// will carry inside the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Full filesystem path of the entry.
    pub fs_path: PathBuf,

    /// Relative path the entry gets inside the archive.
    pub archive_path: PathBuf,

    /// Whether the entry is a file or a directory.
    pub kind: SourceKind,
}

/// Expands the caller's source list into concrete archive entries.
///
/// Plain files collapse to their base name at the archive root; when two
/// sources share a base name the later one wins. Directories are walked
/// recursively, the walk's own root is skipped, and every descendant is
/// named by its path relative to that root. Symlinks are not followed and
/// are skipped with a warning on the report.
///
/// # Errors
///
/// Fails with an I/O error wrapped with the offending path if a source
/// does not exist or the walk cannot read an entry. The whole expansion
/// aborts at the first failure.
pub fn collect_entries<P: AsRef<Path>>(
    sources: &[P],
    report: &mut CreateReport,
) -> Result<Vec<SourceEntry>> {
    let mut entries = Vec::new();

    for source in sources {
        let path = source.as_ref();
        let metadata =
            std::fs::symlink_metadata(path).map_err(|e| ArchiveError::io(path, e))?;

        if metadata.is_dir() {
            expand_directory(path, &mut entries, report)?;
        } else if metadata.is_file() {
            entries.push(flat_file_entry(path)?);
        } else {
            report.files_skipped += 1;
            report.add_warning(format!("skipped symlink source: {}", path.display()));
        }
    }

    Ok(entries)
}

/// Walks one directory source, producing entries relative to its root.
fn expand_directory(
    root: &Path,
    entries: &mut Vec<SourceEntry>,
    report: &mut CreateReport,
) -> Result<()> {
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            ArchiveError::io(
                path,
                e.into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
            )
        })?;

        // The root itself carries no entry; descendants are relative to it.
        if entry.depth() == 0 {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|_| ArchiveError::io(entry.path(), std::io::Error::other("path escaped walk root")))?
            .to_path_buf();

        let file_type = entry.file_type();
        if file_type.is_dir() {
            entries.push(SourceEntry {
                fs_path: entry.path().to_path_buf(),
                archive_path: relative,
                kind: SourceKind::Directory,
            });
        } else if file_type.is_file() {
            entries.push(SourceEntry {
                fs_path: entry.path().to_path_buf(),
                archive_path: relative,
                kind: SourceKind::File,
            });
        } else {
            report.files_skipped += 1;
            report.add_warning(format!("skipped symlink: {}", entry.path().display()));
        }
    }

    Ok(())
}

/// Builds the flat-root entry for a plain-file source.
fn flat_file_entry(path: &Path) -> Result<SourceEntry> {
    let base_name = path.file_name().ok_or_else(|| {
        ArchiveError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "source has no file name"),
        )
    })?;

    Ok(SourceEntry {
        fs_path: path.to_path_buf(),
        archive_path: PathBuf::from(base_name),
        kind: SourceKind::File,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_plain_file_uses_base_name() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("report.pdf");
        fs::write(&file, "data").unwrap();

        let mut report = CreateReport::new();
        let entries = collect_entries(&[&file], &mut report).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].archive_path, Path::new("report.pdf"));
        assert_eq!(entries[0].kind, SourceKind::File);
    }

    #[test]
    fn test_directory_expands_relative_to_root() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/b.txt"), "b").unwrap();

        let mut report = CreateReport::new();
        let entries = collect_entries(&[temp.path()], &mut report).unwrap();

        let paths: Vec<_> = entries.iter().map(|e| e.archive_path.as_path()).collect();
        assert!(paths.contains(&Path::new("a.txt")));
        assert!(paths.contains(&Path::new("sub")));
        assert!(paths.contains(&Path::new("sub/b.txt")));
        // The walk root itself is not an entry
        assert!(!paths.contains(&Path::new("")));
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_mixed_sources_preserve_order() {
        let temp = TempDir::new().unwrap();
        let single = temp.path().join("single.txt");
        fs::write(&single, "s").unwrap();
        let dir = temp.path().join("tree");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("inner.txt"), "i").unwrap();

        let mut report = CreateReport::new();
        let entries = collect_entries(&[single.clone(), dir], &mut report).unwrap();

        assert_eq!(entries[0].archive_path, Path::new("single.txt"));
        assert_eq!(entries[1].archive_path, Path::new("inner.txt"));
    }

    #[test]
    fn test_missing_source_fails_with_path() {
        let mut report = CreateReport::new();
        let err = collect_entries(&[Path::new("/nonexistent/input.txt")], &mut report)
            .unwrap_err();

        match err {
            ArchiveError::Io { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/input.txt"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_skipped_with_warning() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("target.txt"), "t").unwrap();
        std::os::unix::fs::symlink(temp.path().join("target.txt"), temp.path().join("link.txt"))
            .unwrap();

        let mut report = CreateReport::new();
        let entries = collect_entries(&[temp.path()], &mut report).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(report.files_skipped, 1);
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("link.txt"));
    }
}
