//! External archiver delegation.
//!
//! RAR, 7z, and password-protected ZIP/TAR operations are handed to a
//! third-party archiver process. The dispatcher only depends on the
//! [`ExternalArchiver`] trait, so the process-backed implementation can
//! be substituted (in tests, or later by an in-process engine) without
//! touching the routing.

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

use crate::ArchiveError;
use crate::Result;
use crate::formats::detect::ArchiveType;

/// Direction of a delegated operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMode {
    /// Build an archive from source paths.
    Create,
    /// Unpack an archive into a destination directory.
    Extract,
}

/// Capability boundary for the third-party archiver.
///
/// For `Create`, `paths` are the sources and `dest` is the archive file.
/// For `Extract`, `paths` holds the single archive file and `dest` is the
/// output directory.
pub trait ExternalArchiver {
    /// Runs one delegated operation to completion.
    ///
    /// # Errors
    ///
    /// Implementations surface any failure (non-zero exit, launch
    /// failure) as [`ArchiveError::ExternalTool`] carrying the tool's
    /// diagnostic output.
    fn invoke(
        &self,
        mode: ToolMode,
        format: ArchiveType,
        paths: &[PathBuf],
        dest: &Path,
        password: Option<&str>,
    ) -> Result<()>;
}

/// `7z` command-line invocation of the [`ExternalArchiver`] contract.
///
/// Creation runs `7z a <dest> <sources...> [-p<password>]`; extraction
/// runs `7z x <archive> -o<dest> -y [-p<password>]`, creating the output
/// directory first. `-y` suppresses interactive prompts.
#[derive(Debug, Clone)]
pub struct SevenZipCommand {
    program: PathBuf,
}

impl SevenZipCommand {
    /// Uses a specific archiver binary instead of `7z` from `PATH`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SevenZipCommand {
    fn default() -> Self {
        Self::new("7z")
    }
}

impl ExternalArchiver for SevenZipCommand {
    fn invoke(
        &self,
        mode: ToolMode,
        _format: ArchiveType,
        paths: &[PathBuf],
        dest: &Path,
        password: Option<&str>,
    ) -> Result<()> {
        let mut cmd = Command::new(&self.program);

        match mode {
            ToolMode::Create => {
                cmd.arg("a").arg(dest);
                cmd.args(paths);
            }
            ToolMode::Extract => {
                let archive = paths.first().ok_or_else(|| ArchiveError::ExternalTool {
                    output: "extraction requires an archive path".to_string(),
                })?;
                std::fs::create_dir_all(dest).map_err(|e| ArchiveError::io(dest, e))?;
                cmd.arg("x").arg(archive);
                cmd.arg(format!("-o{}", dest.display()));
                cmd.arg("-y");
            }
        }

        if let Some(password) = password {
            cmd.arg(format!("-p{password}"));
        }

        let output = cmd.output().map_err(|e| ArchiveError::ExternalTool {
            output: format!("failed to launch {}: {e}", self.program.display()),
        })?;

        if output.status.success() {
            return Ok(());
        }

        let mut diagnostic = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if diagnostic.is_empty() {
            diagnostic = String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
        Err(ArchiveError::ExternalTool {
            output: format!(
                "{} exited with {}: {diagnostic}",
                self.program.display(),
                output.status
            ),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_launch_failure_surfaces_as_external_tool() {
        let temp = TempDir::new().unwrap();
        let tool = SevenZipCommand::new("/nonexistent/archiver-binary");

        let err = tool
            .invoke(
                ToolMode::Create,
                ArchiveType::Rar,
                &[temp.path().join("x.txt")],
                &temp.path().join("out.rar"),
                None,
            )
            .unwrap_err();

        match err {
            ArchiveError::ExternalTool { output } => {
                assert!(output.contains("failed to launch"));
            }
            other => panic!("expected ExternalTool error, got {other:?}"),
        }
    }

    #[test]
    fn test_nonzero_exit_includes_diagnostic_output() {
        let temp = TempDir::new().unwrap();
        // `false` exits 1 with no output; the error still names the tool
        let tool = SevenZipCommand::new("false");

        let err = tool
            .invoke(
                ToolMode::Create,
                ArchiveType::SevenZ,
                &[temp.path().join("x.txt")],
                &temp.path().join("out.7z"),
                Some("secret"),
            )
            .unwrap_err();

        assert!(err.to_string().contains("exited with"));
    }

    #[test]
    fn test_extract_creates_destination_first() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("brand/new/dir");
        // `true` exits 0 without touching the filesystem
        let tool = SevenZipCommand::new("true");

        tool.invoke(
            ToolMode::Extract,
            ArchiveType::Rar,
            &[temp.path().join("in.rar")],
            &dest,
            None,
        )
        .unwrap();

        assert!(dest.is_dir());
    }

    #[test]
    fn test_extract_without_archive_path_rejected() {
        let temp = TempDir::new().unwrap();
        let tool = SevenZipCommand::default();

        let err = tool
            .invoke(ToolMode::Extract, ArchiveType::Rar, &[], temp.path(), None)
            .unwrap_err();
        assert!(matches!(err, ArchiveError::ExternalTool { .. }));
    }
}
