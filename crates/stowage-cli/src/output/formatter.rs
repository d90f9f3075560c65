//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use stowage_core::CreateReport;
use stowage_core::ExtractReport;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the result of a create operation
    fn format_create_result(&self, archive: &Path, report: &CreateReport) -> Result<()>;

    /// Format the result of an extract operation
    fn format_extract_result(&self, archive: &Path, report: &ExtractReport) -> Result<()>;

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    pub archive: String,
    pub data: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, archive: &Path, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            archive: archive.display().to_string(),
            data,
        }
    }
}
