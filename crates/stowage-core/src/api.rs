//! High-level dispatch for archive creation and extraction.
//!
//! The entry points detect the archive format from the path, consult the
//! routing matrix, and hand the operation to a native codec or the
//! external archiver. An empty password is treated as no password, which
//! matches how the CLI surfaces the flag.

use std::path::Path;
use std::path::PathBuf;

use crate::CreateReport;
use crate::ExtractReport;
use crate::Result;
use crate::external::ExternalArchiver;
use crate::external::SevenZipCommand;
use crate::external::ToolMode;
use crate::formats;
use crate::formats::detect::ArchiveType;
use crate::formats::detect::detect_format;
use crate::route::Backend;
use crate::route::backend_for;

/// Creates an archive at `dest` from the given sources.
///
/// The format is detected from `dest`'s extension. ZIP and TAR without a
/// password run in-process; everything else is delegated to the `7z`
/// binary on `PATH`.
///
/// # Errors
///
/// Returns [`crate::ArchiveError::UnsupportedFormat`] for unknown
/// extensions (before any side effect), or whatever the selected handler
/// fails with. A failed operation leaves any partially written
/// destination in place; there is no rollback.
///
/// # Examples
///
/// ```no_run
/// use stowage_core::create_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = create_archive(&["docs/", "README.md"], "backup.zip", None)?;
/// println!("added {} files", report.files_added);
/// # Ok(())
/// # }
/// ```
pub fn create_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    sources: &[P],
    dest: Q,
    password: Option<&str>,
) -> Result<CreateReport> {
    create_archive_with(sources, dest, password, &SevenZipCommand::default())
}

/// [`create_archive`] with an explicit external archiver implementation.
pub fn create_archive_with<P: AsRef<Path>, Q: AsRef<Path>>(
    sources: &[P],
    dest: Q,
    password: Option<&str>,
    tool: &dyn ExternalArchiver,
) -> Result<CreateReport> {
    let dest = dest.as_ref();
    let format = detect_format(dest)?;
    let password = effective_password(password);

    match (backend_for(format, password.is_some()), format) {
        (Backend::Native, ArchiveType::Zip) => formats::zip::create(dest, sources),
        (Backend::Native, ArchiveType::Tar) => formats::tar::create(dest, sources),
        _ => {
            let paths = owned_paths(sources);
            tool.invoke(ToolMode::Create, format, &paths, dest, password)?;
            Ok(CreateReport::new())
        }
    }
}

/// Extracts the archive at `src` into the `dest` directory.
///
/// The format is detected from `src`'s extension. The destination
/// directory chain is created before any entry is written. ZIP and TAR
/// without a password run in-process; RAR and 7z always go through the
/// external archiver, as do password-protected ZIP/TAR.
///
/// # Errors
///
/// Mirrors [`create_archive`]; additionally fails with
/// [`crate::ArchiveError::UnsafeEntry`] when a native extraction meets an
/// entry name that would escape the destination.
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    src: P,
    dest: Q,
    password: Option<&str>,
) -> Result<ExtractReport> {
    extract_archive_with(src, dest, password, &SevenZipCommand::default())
}

/// [`extract_archive`] with an explicit external archiver implementation.
pub fn extract_archive_with<P: AsRef<Path>, Q: AsRef<Path>>(
    src: P,
    dest: Q,
    password: Option<&str>,
    tool: &dyn ExternalArchiver,
) -> Result<ExtractReport> {
    let src = src.as_ref();
    let dest = dest.as_ref();
    let format = detect_format(src)?;
    let password = effective_password(password);

    match (backend_for(format, password.is_some()), format) {
        (Backend::Native, ArchiveType::Zip) => formats::zip::extract(src, dest),
        (Backend::Native, ArchiveType::Tar) => formats::tar::extract(src, dest),
        _ => {
            tool.invoke(
                ToolMode::Extract,
                format,
                &[src.to_path_buf()],
                dest,
                password,
            )?;
            Ok(ExtractReport::new())
        }
    }
}

/// Normalizes the caller's password: empty means none.
fn effective_password(password: Option<&str>) -> Option<&str> {
    password.filter(|p| !p.is_empty())
}

fn owned_paths<P: AsRef<Path>>(paths: &[P]) -> Vec<PathBuf> {
    paths.iter().map(|p| p.as_ref().to_path_buf()).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ArchiveError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_create_unknown_extension_no_side_effects() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("a.txt");
        fs::write(&source, "x").unwrap();
        let dest = temp.path().join("out.docx");

        let err = create_archive(&[&source], &dest, None).unwrap_err();

        assert!(matches!(err, ArchiveError::UnsupportedFormat { .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn test_extract_unknown_extension() {
        let temp = TempDir::new().unwrap();
        let err = extract_archive(temp.path().join("input.gz"), temp.path(), None).unwrap_err();
        assert!(matches!(err, ArchiveError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_empty_password_routes_native() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("a.txt");
        fs::write(&source, "native").unwrap();
        let dest = temp.path().join("out.zip");

        // An empty password must not push a ZIP create to the external tool
        let report = create_archive(&[&source], &dest, Some("")).unwrap();

        assert_eq!(report.files_added, 1);
        assert!(dest.exists());
    }

    #[test]
    fn test_zip_create_extract_via_dispatcher() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("report.pdf");
        fs::write(&source, b"%PDF-1.4 fake body").unwrap();
        let dest = temp.path().join("out.zip");

        create_archive(&[&source], &dest, None).unwrap();

        let restored = temp.path().join("restored");
        extract_archive(&dest, &restored, None).unwrap();

        assert_eq!(
            fs::read(restored.join("report.pdf")).unwrap(),
            b"%PDF-1.4 fake body"
        );
    }
}
