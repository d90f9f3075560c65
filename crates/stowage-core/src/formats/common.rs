//! Shared extraction helpers used by the ZIP and TAR codecs.

use std::fs::File;
use std::fs::create_dir_all;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;

use crate::ArchiveError;
use crate::ExtractReport;
use crate::Result;

/// Buffer size for streaming entry payloads.
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Streams one entry payload to its destination file.
///
/// Creates missing parent directories first, writes through a 64 KiB
/// buffered writer, and applies the Unix mode when one was stored. The
/// payload is never held fully in memory.
///
/// # Errors
///
/// Returns an I/O error wrapped with the destination path if directory
/// creation, file creation, or the copy fails.
pub fn write_entry_file<R: Read>(
    reader: &mut R,
    target: &Path,
    mode: Option<u32>,
    report: &mut ExtractReport,
) -> Result<()> {
    if let Some(parent) = target.parent() {
        create_dir_all(parent).map_err(|e| ArchiveError::io(parent, e))?;
    }

    let file = File::create(target).map_err(|e| ArchiveError::io(target, e))?;
    let mut writer = BufWriter::with_capacity(COPY_BUFFER_SIZE, file);
    let bytes_written =
        std::io::copy(reader, &mut writer).map_err(|e| ArchiveError::io(target, e))?;
    writer.flush().map_err(|e| ArchiveError::io(target, e))?;

    #[cfg(unix)]
    if let Some(mode) = mode {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(mode);
        if let Err(e) = std::fs::set_permissions(target, permissions) {
            // Payload is already intact; a mode failure is not fatal.
            report.add_warning(format!(
                "could not set permissions on {}: {e}",
                target.display()
            ));
        }
    }
    #[cfg(not(unix))]
    let _ = mode;

    report.files_extracted += 1;
    report.bytes_written += bytes_written;

    Ok(())
}

/// Recreates a directory entry under the destination.
///
/// Idempotent: extraction order may surface the same directory several
/// times and `create_dir_all` tolerates that.
pub fn create_directory(target: &Path, report: &mut ExtractReport) -> Result<()> {
    create_dir_all(target).map_err(|e| ArchiveError::io(target, e))?;
    report.directories_created += 1;
    Ok(())
}
