//! Error types for the attendance book.
//!
//! Every failure here is recoverable: the CLI reports the message and the
//! process keeps running. Nothing in the core panics or exits.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::StudentId;

/// Errors from attendance book operations.
#[derive(Debug, Error)]
pub enum AttendanceError {
    /// A mark was requested for an id the roster does not know.
    #[error("Student with ID {id} not found.")]
    UnknownStudent { id: StudentId },

    /// The records file could not be written (or re-read mid-operation).
    /// The in-memory store is not rolled back; memory and disk can diverge
    /// until the next successful save.
    #[error("error saving attendance records to {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single records-file line that could not be decoded.
///
/// Surfaced as a per-line warning during load; the offending line is
/// skipped and the rest of the file is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMarkError {
    #[error("expected 3 comma-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("invalid student ID: {0:?}")]
    InvalidId(String),

    #[error("invalid presence flag (expected \"true\" or \"false\"): {0:?}")]
    InvalidPresence(String),

    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),
}
