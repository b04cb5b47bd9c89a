//! Core data model types for rollcall.
//!
//! These are the fundamental types the rest of the system uses to represent
//! students and their presence marks, plus the one-record-per-line codec
//! used by the records file.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ParseMarkError;

/// Identifier for a student. Externally assigned, expected positive.
pub type StudentId = u32;

/// Timestamp format used in the records file.
pub const WIRE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Timestamp format used for on-screen display.
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A student known to the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier. Identity of the student; immutable once added.
    pub id: StudentId,
    /// Display name.
    pub name: String,
}

impl Student {
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A single presence/absence observation for one student at one instant.
///
/// Timestamps are second-precision local date-times with no timezone
/// semantics; they are treated as opaque sortable values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceMark {
    pub student_id: StudentId,
    pub timestamp: NaiveDateTime,
    pub present: bool,
}

/// Human-readable status for a presence flag.
pub fn status_label(present: bool) -> &'static str {
    if present {
        "Present"
    } else {
        "Absent"
    }
}

/// Wire form: `<id>,<true|false>,<yyyy-mm-ddThh:mm:ss>`.
///
/// Fields are comma-separated with no escaping; a comma inside a field is
/// not representable in this format.
impl fmt::Display for AttendanceMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.student_id,
            self.present,
            self.timestamp.format(WIRE_TIMESTAMP_FORMAT)
        )
    }
}

impl FromStr for AttendanceMark {
    type Err = ParseMarkError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 3 {
            return Err(ParseMarkError::FieldCount {
                found: fields.len(),
            });
        }

        let student_id = fields[0]
            .parse::<StudentId>()
            .map_err(|_| ParseMarkError::InvalidId(fields[0].to_string()))?;

        let present = match fields[1] {
            "true" => true,
            "false" => false,
            other => return Err(ParseMarkError::InvalidPresence(other.to_string())),
        };

        let timestamp = NaiveDateTime::parse_from_str(fields[2], WIRE_TIMESTAMP_FORMAT)
            .map_err(|_| ParseMarkError::InvalidTimestamp(fields[2].to_string()))?;

        Ok(Self {
            student_id,
            timestamp,
            present,
        })
    }
}
