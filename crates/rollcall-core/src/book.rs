//! The attendance book: roster plus mark store behind one context object.
//!
//! The book is constructed once at startup and passed to every operation;
//! there are no ambient singletons. It owns the records file path, hydrates
//! the store from it once, and rewrites the full snapshot after every mark.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::AttendanceError;
use crate::model::{status_label, AttendanceMark, Student, StudentId, DISPLAY_TIMESTAMP_FORMAT};
use crate::roster::Roster;
use crate::store::AttendanceStore;

#[derive(Debug)]
pub struct AttendanceBook {
    roster: Roster,
    store: AttendanceStore,
    records_path: PathBuf,
}

impl AttendanceBook {
    /// Create a book backed by `records_path`, hydrating the store from the
    /// file if it exists. Records for ids the roster never learns about are
    /// kept in the store but never displayed; the roster cross-reference
    /// invariant holds going forward from [`AttendanceBook::add_student`],
    /// not retroactively.
    pub fn open(records_path: impl Into<PathBuf>) -> Self {
        let records_path = records_path.into();
        let store = AttendanceStore::load(&records_path);
        Self {
            roster: Roster::new(),
            store,
            records_path,
        }
    }

    /// Add a student to the roster (insert or overwrite, last write wins)
    /// and ensure the store has an entry for the id.
    pub fn add_student(&mut self, id: StudentId, name: impl Into<String>) {
        self.roster.add(Student::new(id, name));
        self.store.ensure_entry(id);
    }

    /// Record a presence mark for `student_id` at `now`, then persist the
    /// full store before returning.
    ///
    /// The caller supplies `now`; production callers pass wall-clock time,
    /// tests pass fixed instants. On an unknown id nothing is mutated or
    /// saved. On a failed save the mark stays in memory and disk catches up
    /// on the next successful save.
    pub fn mark(
        &mut self,
        student_id: StudentId,
        present: bool,
        now: NaiveDateTime,
    ) -> Result<(), AttendanceError> {
        if !self.roster.contains(student_id) {
            return Err(AttendanceError::UnknownStudent { id: student_id });
        }

        self.store.insert(AttendanceMark {
            student_id,
            timestamp: now,
            present,
        });
        self.store.save(&self.records_path)
    }

    /// Rendered record lines for display: each rostered student in id
    /// order, followed by that student's marks in timestamp order.
    pub fn display_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for student in self.roster.iter() {
            lines.push(format!("Student ID: {}, Name: {}", student.id, student.name));
            if let Some(series) = self.store.marks_for(student.id) {
                for (timestamp, &present) in series {
                    lines.push(format!(
                        "\tDate/Time: {}, Status: {}",
                        timestamp.format(DISPLAY_TIMESTAMP_FORMAT),
                        status_label(present)
                    ));
                }
            }
        }
        lines
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn store(&self) -> &AttendanceStore {
        &self.store
    }

    pub fn records_path(&self) -> &Path {
        &self.records_path
    }
}
