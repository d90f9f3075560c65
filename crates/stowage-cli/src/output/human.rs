//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use stowage_core::CreateReport;
use stowage_core::ExtractReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn write_line(&self, line: &str) {
        let _ = self.term.write_line(line);
    }

    fn print_warnings(&self, warnings: &[String]) {
        if warnings.is_empty() {
            return;
        }
        if self.verbose {
            for warning in warnings {
                self.format_warning(warning);
            }
        } else {
            self.format_warning(&format!(
                "{} warning(s); re-run with --verbose for details",
                warnings.len()
            ));
        }
    }

    fn print_success(&self) {
        if self.use_colors {
            self.write_line(&format!(
                "{} Operation completed successfully",
                style("✓").green().bold()
            ));
        } else {
            self.write_line("Operation completed successfully");
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_create_result(&self, archive: &Path, report: &CreateReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.write_line(&format!(
            "Created {}: {} file(s), {} director(ies), {}",
            archive.display(),
            report.files_added,
            report.directories_added,
            Self::format_size(report.bytes_written),
        ));
        self.print_warnings(&report.warnings);
        self.print_success();

        Ok(())
    }

    fn format_extract_result(&self, archive: &Path, report: &ExtractReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.write_line(&format!(
            "Extracted {}: {} file(s), {} skipped, {}",
            archive.display(),
            report.files_extracted,
            report.entries_skipped,
            Self::format_size(report.bytes_written),
        ));
        self.print_warnings(&report.warnings);
        self.print_success();

        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.use_colors {
            self.write_line(&format!("{} {message}", style("warning:").yellow().bold()));
        } else {
            self.write_line(&format!("warning: {message}"));
        }
    }
}
