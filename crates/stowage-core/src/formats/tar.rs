//! Native TAR container codec.
//!
//! Mirrors the ZIP codec over ustar/GNU headers: entries carry name,
//! size, mode, and modification time instead of a compression method.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tar::Builder;
use tar::EntryType;
use tar::Header;

use crate::ArchiveError;
use crate::CreateReport;
use crate::ExtractReport;
use crate::Result;
use crate::sources::SourceEntry;
use crate::sources::SourceKind;
use crate::sources::collect_entries;
use crate::types::DestDir;
use crate::types::SafePath;

use super::common;

/// Creates a TAR archive at `dest` from the given sources.
///
/// Uses the same source expansion as the ZIP codec: plain files at the
/// archive root under their base name, directories walked recursively.
/// Each file entry records size, permission bits, and modification time.
///
/// # Errors
///
/// Any stat/open/stream failure aborts the whole create with the
/// offending path wrapped.
pub fn create<P: AsRef<Path>, Q: AsRef<Path>>(dest: P, sources: &[Q]) -> Result<CreateReport> {
    let dest = dest.as_ref();
    let file = File::create(dest).map_err(|e| ArchiveError::io(dest, e))?;

    let mut report = CreateReport::new();
    let entries = collect_entries(sources, &mut report)?;

    let mut builder = Builder::new(file);

    for entry in &entries {
        match entry.kind {
            SourceKind::File => append_file(&mut builder, entry, &mut report)?,
            SourceKind::Directory => {
                builder
                    .append_dir(&entry.archive_path, &entry.fs_path)
                    .map_err(|e| ArchiveError::io(&entry.fs_path, e))?;
                report.directories_added += 1;
            }
        }
    }

    builder.finish().map_err(|e| ArchiveError::io(dest, e))?;
    let mut file = builder
        .into_inner()
        .map_err(|e| ArchiveError::io(dest, e))?;
    file.flush().map_err(|e| ArchiveError::io(dest, e))?;

    Ok(report)
}

/// Extracts a TAR archive into `dest`, creating the directory chain first.
///
/// Standalone directory entries are recreated via recursive directory
/// creation before regular files beneath them. Every stored name must
/// validate as a [`SafePath`]; `..` segments and absolute names fail with
/// [`ArchiveError::UnsafeEntry`]. Entry types other than regular files
/// and directories are skipped with a warning.
///
/// # Errors
///
/// Returns [`ArchiveError::CorruptArchive`] for unreadable headers,
/// [`ArchiveError::UnsafeEntry`] for escaping names, and wrapped I/O
/// errors for filesystem failures.
pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dest: Q) -> Result<ExtractReport> {
    let src = src.as_ref();
    let dest = DestDir::create(dest.as_ref())?;

    let file = File::open(src).map_err(|e| ArchiveError::io(src, e))?;
    let mut archive = tar::Archive::new(file);

    let entries = archive.entries().map_err(|e| {
        ArchiveError::CorruptArchive(format!("cannot read TAR stream {}: {e}", src.display()))
    })?;

    let mut report = ExtractReport::new();

    for entry in entries {
        let mut entry = entry.map_err(|e| {
            ArchiveError::CorruptArchive(format!(
                "cannot read TAR header in {}: {e}",
                src.display()
            ))
        })?;

        let raw_name = entry
            .path()
            .map_err(|e| {
                ArchiveError::CorruptArchive(format!(
                    "cannot decode entry name in {}: {e}",
                    src.display()
                ))
            })?
            .into_owned();

        let safe = SafePath::new(&raw_name)?;
        let target = dest.join(&safe);

        match entry.header().entry_type() {
            EntryType::Directory => common::create_directory(&target, &mut report)?,
            EntryType::Regular => {
                let mode = entry.header().mode().ok();
                common::write_entry_file(&mut entry, &target, mode, &mut report)?;
            }
            other => {
                report.entries_skipped += 1;
                report.add_warning(format!(
                    "skipped unsupported entry type {other:?}: {}",
                    raw_name.display()
                ));
            }
        }
    }

    Ok(report)
}

/// Appends a single file entry with size, mode, and mtime metadata.
fn append_file<W: Write>(
    builder: &mut Builder<W>,
    entry: &SourceEntry,
    report: &mut CreateReport,
) -> Result<()> {
    let mut file = File::open(&entry.fs_path).map_err(|e| ArchiveError::io(&entry.fs_path, e))?;
    let metadata = file
        .metadata()
        .map_err(|e| ArchiveError::io(&entry.fs_path, e))?;
    let size = metadata.len();

    let mut header = Header::new_gnu();
    header.set_size(size);
    set_metadata(&mut header, &metadata);
    header.set_cksum();

    builder
        .append_data(&mut header, &entry.archive_path, &mut file)
        .map_err(|e| ArchiveError::io(&entry.fs_path, e))?;

    report.files_added += 1;
    report.bytes_written += size;

    Ok(())
}

/// Copies permission bits and modification time into a TAR header.
#[cfg(unix)]
fn set_metadata(header: &mut Header, metadata: &std::fs::Metadata) {
    use std::os::unix::fs::MetadataExt;
    header.set_mode(metadata.mode());
    // mtime can precede the epoch; clamp to 0
    #[allow(clippy::cast_sign_loss)]
    let mtime = metadata.mtime().max(0) as u64;
    header.set_mtime(mtime);
}

#[cfg(not(unix))]
fn set_metadata(header: &mut Header, metadata: &std::fs::Metadata) {
    let mode = if metadata.permissions().readonly() {
        0o444
    } else {
        0o644
    };
    header.set_mode(mode);

    if let Ok(modified) = metadata.modified()
        && let Ok(duration) = modified.duration_since(std::time::UNIX_EPOCH)
    {
        header.set_mtime(duration.as_secs());
    }
}
