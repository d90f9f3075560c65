//! Create command implementation.

use crate::cli::CreateArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use stowage_core::create_archive;

pub fn execute(args: &CreateArgs, formatter: &dyn OutputFormatter, quiet: bool) -> Result<()> {
    let spinner = (!quiet && CliProgress::should_show())
        .then(|| CliProgress::spinner(&format!("Creating {}", args.output.display())));

    let result = create_archive(&args.sources, &args.output, args.password.as_deref());

    drop(spinner);
    let report = add_archive_context(result, &args.output)?;

    formatter.format_create_result(&args.output, &report)?;

    Ok(())
}
