//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use std::path::Path;
use std::path::PathBuf;
use stowage_core::extract_archive;

pub fn execute(args: &ExtractArgs, formatter: &dyn OutputFormatter, quiet: bool) -> Result<()> {
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        // Default to the archive's own directory, like unzipping in place
        None => args
            .archive
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
    };

    let spinner = (!quiet && CliProgress::should_show())
        .then(|| CliProgress::spinner(&format!("Extracting {}", args.archive.display())));

    let result = extract_archive(&args.archive, &output_dir, args.password.as_deref());

    drop(spinner);
    let report = add_archive_context(result, &args.archive)?;

    formatter.format_extract_result(&args.archive, &report)?;

    Ok(())
}
