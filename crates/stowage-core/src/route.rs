//! Format/password routing for the dispatcher.
//!
//! Routing is a lookup table keyed by (format, password-present) rather
//! than nested conditionals, so the dispatch policy can be audited in one
//! place and extended when a new format is added.

use crate::formats::detect::ArchiveType;

/// Which engine handles a given (format, password) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Handled in-process by the native ZIP/TAR codecs.
    Native,
    /// Delegated to the external archiver process.
    External,
}

/// Routing matrix: rows follow `ArchiveType::table_index`, columns are
/// `[without password, with password]`.
const ROUTING: [[Backend; 2]; 4] = [
    [Backend::Native, Backend::External],   // Zip
    [Backend::Native, Backend::External],   // Tar
    [Backend::External, Backend::External], // Rar
    [Backend::External, Backend::External], // SevenZ
];

/// Looks up the backend for a format and password combination.
#[must_use]
pub const fn backend_for(format: ArchiveType, has_password: bool) -> Backend {
    ROUTING[format.table_index()][has_password as usize]
}
