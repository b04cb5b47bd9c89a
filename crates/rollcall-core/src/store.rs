//! In-memory attendance store with snapshot persistence.
//!
//! The records file is plain text, UTF-8, one mark per line in the wire
//! form rendered by [`AttendanceMark`]'s `Display`. Saving rewrites the
//! whole file from the current store (snapshot persistence, never append),
//! so the file is always the complete state at last save.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::AttendanceError;
use crate::model::{AttendanceMark, StudentId};

/// Marks for one student, sorted by timestamp. A mark inserted at an
/// existing timestamp overwrites the prior value (last write wins).
pub type MarkSeries = BTreeMap<NaiveDateTime, bool>;

/// Mapping from student id to that student's marks.
///
/// Ordered at both levels, so iteration (and therefore the saved file and
/// the display output) is ascending by id, then by timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceStore {
    records: BTreeMap<StudentId, MarkSeries>,
}

impl AttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure an (initially empty) series exists for `id`.
    pub fn ensure_entry(&mut self, id: StudentId) {
        self.records.entry(id).or_default();
    }

    /// Insert or overwrite the mark at its timestamp.
    pub fn insert(&mut self, mark: AttendanceMark) {
        self.records
            .entry(mark.student_id)
            .or_default()
            .insert(mark.timestamp, mark.present);
    }

    pub fn marks_for(&self, id: StudentId) -> Option<&MarkSeries> {
        self.records.get(&id)
    }

    /// Total marks across all students.
    pub fn total_marks(&self) -> usize {
        self.records.values().map(MarkSeries::len).sum()
    }

    /// Number of students with a store entry (including empty ones).
    pub fn entry_count(&self) -> usize {
        self.records.len()
    }

    /// All marks in (id, timestamp) order.
    pub fn marks(&self) -> impl Iterator<Item = AttendanceMark> + '_ {
        self.records.iter().flat_map(|(&student_id, series)| {
            series.iter().map(move |(&timestamp, &present)| AttendanceMark {
                student_id,
                timestamp,
                present,
            })
        })
    }

    /// Hydrate a store from a records file.
    ///
    /// Load fails softly: a missing file means a first run (empty store),
    /// an unreadable file is logged and yields an empty store, and a
    /// malformed line is logged and skipped while the rest of the file is
    /// kept. Called once, at startup; never crashes the process.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no records file at {}, starting empty", path.display());
                return Self::new();
            }
            Err(e) => {
                tracing::warn!("error loading attendance records from {}: {e}", path.display());
                return Self::new();
            }
        };

        let mut store = Self::new();
        for (index, line) in content.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            match line.parse::<AttendanceMark>() {
                Ok(mark) => store.insert(mark),
                Err(e) => {
                    tracing::warn!(
                        "skipping line {} of {}: {e}",
                        index + 1,
                        path.display()
                    );
                }
            }
        }
        store
    }

    /// Write the complete store to `path`, one mark per line.
    ///
    /// The snapshot is written to a temporary file in the target directory
    /// and renamed over the target, so a crash mid-save cannot leave a
    /// truncated records file. Cost is O(total marks) per call, and callers
    /// invoke this on every mark.
    pub fn save(&self, path: &Path) -> Result<(), AttendanceError> {
        let persist_err = |source: std::io::Error| AttendanceError::Persistence {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(persist_err)?;
        for mark in self.marks() {
            writeln!(tmp, "{mark}").map_err(persist_err)?;
        }
        tmp.flush().map_err(persist_err)?;
        tmp.persist(path).map_err(|e| persist_err(e.error))?;
        Ok(())
    }
}
