//! Multi-format archive creation and extraction.
//!
//! `stowage-core` creates and extracts ZIP and TAR archives in-process
//! and delegates RAR, 7z, and password-protected operations to an
//! external `7z` binary. Extraction validates every stored entry name,
//! so archives that try to write outside the destination directory fail
//! with [`ArchiveError::UnsafeEntry`] instead of escaping.
//!
//! # Examples
//!
//! ```no_run
//! use stowage_core::{create_archive, extract_archive};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! create_archive(&["project/"], "project.zip", None)?;
//! let report = extract_archive("project.zip", "restored/", None)?;
//! println!("extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod external;
pub mod formats;
pub mod report;
pub mod route;
pub mod sources;
pub mod types;

// Re-export main API types
pub use api::create_archive;
pub use api::create_archive_with;
pub use api::extract_archive;
pub use api::extract_archive_with;
pub use error::ArchiveError;
pub use error::Result;
pub use external::ExternalArchiver;
pub use external::SevenZipCommand;
pub use external::ToolMode;
pub use formats::detect::ArchiveType;
pub use formats::detect::detect_format;
pub use report::CreateReport;
pub use report::ExtractReport;
pub use types::DestDir;
pub use types::SafePath;
