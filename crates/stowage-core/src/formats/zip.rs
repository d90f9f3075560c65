//! Native ZIP container codec.
//!
//! Creation walks the resolved source entries and writes deflate-compressed
//! records with forward-slash relative names. Extraction filters macOS
//! metadata junk, validates every stored name, and streams payloads to the
//! destination.

use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;

use zip::CompressionMethod;
use zip::ZipArchive;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

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

/// Prefixes of macOS resource-fork metadata entries skipped on extraction.
const JUNK_PREFIXES: [&str; 2] = ["__MACOSX", "._"];

/// Creates a ZIP archive at `dest` from the given sources.
///
/// Plain-file sources land at the archive root under their base name;
/// directory sources are walked recursively with names relative to the
/// directory. Every file entry is deflate-compressed and streamed from
/// disk in 64 KiB chunks.
///
/// # Errors
///
/// Any stat/open/stream failure aborts the whole create with the
/// offending path wrapped; there is no partial-success mode.
pub fn create<P: AsRef<Path>, Q: AsRef<Path>>(dest: P, sources: &[Q]) -> Result<CreateReport> {
    let dest = dest.as_ref();
    let file = File::create(dest).map_err(|e| ArchiveError::io(dest, e))?;

    let mut report = CreateReport::new();
    let entries = collect_entries(sources, &mut report)?;

    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in &entries {
        match entry.kind {
            SourceKind::File => add_file(&mut zip, entry, options, &mut report)?,
            SourceKind::Directory => {
                let name = format!("{}/", zip_entry_name(&entry.archive_path)?);
                zip.add_directory(name, options)
                    .map_err(|e| zip_error(dest, e))?;
                report.directories_added += 1;
            }
        }
    }

    zip.finish().map_err(|e| zip_error(dest, e))?;

    Ok(report)
}

/// Extracts a ZIP archive into `dest`, creating the directory chain first.
///
/// Entries named with a macOS junk prefix are skipped entirely. Every
/// other stored name must validate as a [`SafePath`]; a `..` segment or
/// an absolute name fails the extraction with
/// [`ArchiveError::UnsafeEntry`].
///
/// # Errors
///
/// Returns [`ArchiveError::CorruptArchive`] if the central directory
/// cannot be parsed, [`ArchiveError::UnsafeEntry`] for escaping names,
/// and wrapped I/O errors for filesystem failures.
pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dest: Q) -> Result<ExtractReport> {
    let src = src.as_ref();
    let dest = DestDir::create(dest.as_ref())?;

    let file = File::open(src).map_err(|e| ArchiveError::io(src, e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| {
        ArchiveError::CorruptArchive(format!("cannot read ZIP index of {}: {e}", src.display()))
    })?;

    let mut report = ExtractReport::new();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|e| {
            ArchiveError::CorruptArchive(format!(
                "cannot read entry {index} of {}: {e}",
                src.display()
            ))
        })?;

        let raw_name = entry.name().to_owned();
        if is_junk_entry(&raw_name) {
            report.entries_skipped += 1;
            continue;
        }

        let safe = SafePath::new(Path::new(&raw_name))?;
        let target = dest.join(&safe);

        if entry.is_dir() {
            common::create_directory(&target, &mut report)?;
        } else {
            let mode = entry.unix_mode();
            common::write_entry_file(&mut entry, &target, mode, &mut report)?;
        }
    }

    Ok(report)
}

/// Adds a single file entry, streaming its payload from disk.
fn add_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    entry: &SourceEntry,
    options: SimpleFileOptions,
    report: &mut CreateReport,
) -> Result<()> {
    let mut file = File::open(&entry.fs_path).map_err(|e| ArchiveError::io(&entry.fs_path, e))?;
    let metadata = file
        .metadata()
        .map_err(|e| ArchiveError::io(&entry.fs_path, e))?;

    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(metadata.permissions().mode())
    };
    #[cfg(not(unix))]
    let _ = &metadata;

    let name = zip_entry_name(&entry.archive_path)?;
    zip.start_file(name, options)
        .map_err(|e| zip_error(&entry.fs_path, e))?;

    let mut buffer = vec![0u8; 64 * 1024];
    let mut bytes_written = 0u64;
    loop {
        let bytes_read = file
            .read(&mut buffer)
            .map_err(|e| ArchiveError::io(&entry.fs_path, e))?;
        if bytes_read == 0 {
            break;
        }
        zip.write_all(&buffer[..bytes_read])
            .map_err(|e| ArchiveError::io(&entry.fs_path, e))?;
        bytes_written += bytes_read as u64;
    }

    report.files_added += 1;
    report.bytes_written += bytes_written;

    Ok(())
}

/// Converts an archive path to a forward-slash ZIP entry name.
fn zip_entry_name(path: &Path) -> Result<String> {
    let name = path.to_str().ok_or_else(|| {
        ArchiveError::io(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "entry name is not valid UTF-8",
            ),
        )
    })?;

    #[cfg(windows)]
    let name = name.replace('\\', "/");
    #[cfg(not(windows))]
    let name = name.to_string();

    Ok(name)
}

/// Returns whether a stored name is macOS metadata junk.
fn is_junk_entry(name: &str) -> bool {
    JUNK_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

/// Maps a zip-crate error onto the archive error taxonomy.
fn zip_error(path: &Path, err: zip::result::ZipError) -> ArchiveError {
    match err {
        zip::result::ZipError::Io(io) => ArchiveError::io(path, io),
        other => ArchiveError::CorruptArchive(format!("{}: {other}", path.display())),
    }
}
