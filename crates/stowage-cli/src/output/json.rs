//! JSON output formatter for machine consumption.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use stowage_core::CreateReport;
use stowage_core::ExtractReport;

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct CreateSummary {
    files_added: usize,
    directories_added: usize,
    files_skipped: usize,
    bytes_written: u64,
    warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ExtractSummary {
    files_extracted: usize,
    directories_created: usize,
    entries_skipped: usize,
    bytes_written: u64,
    warnings: Vec<String>,
}

impl OutputFormatter for JsonFormatter {
    fn format_create_result(&self, archive: &Path, report: &CreateReport) -> Result<()> {
        let summary = CreateSummary {
            files_added: report.files_added,
            directories_added: report.directories_added,
            files_skipped: report.files_skipped,
            bytes_written: report.bytes_written,
            warnings: report.warnings.clone(),
        };
        let output = JsonOutput::success("create", archive, summary);
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn format_extract_result(&self, archive: &Path, report: &ExtractReport) -> Result<()> {
        let summary = ExtractSummary {
            files_extracted: report.files_extracted,
            directories_created: report.directories_created,
            entries_skipped: report.entries_skipped,
            bytes_written: report.bytes_written,
            warnings: report.warnings.clone(),
        };
        let output = JsonOutput::success("extract", archive, summary);
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn format_warning(&self, message: &str) {
        // Warnings ride along in the report data; keep stderr for humans
        eprintln!("warning: {message}");
    }
}
