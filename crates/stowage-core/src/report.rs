//! Operation reports for archive creation and extraction.

/// Report of an archive creation operation.
#[derive(Debug, Clone, Default)]
pub struct CreateReport {
    /// Number of files added to the archive.
    pub files_added: usize,

    /// Number of directories added to the archive.
    pub directories_added: usize,

    /// Number of source entries skipped (symlinks, special files).
    pub files_skipped: usize,

    /// Total payload bytes written into the archive (uncompressed).
    pub bytes_written: u64,

    /// Warnings generated during creation.
    pub warnings: Vec<String>,
}

impl CreateReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Report of an archive extraction operation.
#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    /// Number of files written to the destination.
    pub files_extracted: usize,

    /// Number of directories created under the destination.
    pub directories_created: usize,

    /// Number of container entries skipped (metadata junk, unsupported
    /// entry types).
    pub entries_skipped: usize,

    /// Total payload bytes written to the destination.
    pub bytes_written: u64,

    /// Warnings generated during extraction.
    pub warnings: Vec<String>,
}

impl ExtractReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
