//! The roster of known students, with TOML seed-file loading and validation.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Student, StudentId};

/// The set of known students and their display names.
///
/// Backed by an ordered map so iteration is ascending-id order, stable
/// across runs.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: BTreeMap<StudentId, Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the student at its id. Last write wins; there is
    /// no uniqueness error.
    pub fn add(&mut self, student: Student) {
        self.students.insert(student.id, student);
    }

    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.students.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Students in ascending-id order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }
}

/// Intermediate TOML structure for roster seed files.
#[derive(Debug, Deserialize)]
struct TomlRosterFile {
    #[serde(default)]
    students: Vec<Student>,
}

/// Read and parse a roster seed file.
pub fn load_roster(path: &Path) -> Result<Vec<Student>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file: {}", path.display()))?;

    parse_roster_str(&content, path)
}

/// Parse a roster TOML string (useful for testing).
pub fn parse_roster_str(content: &str, source_path: &Path) -> Result<Vec<Student>> {
    let parsed: TomlRosterFile = toml::from_str(content)
        .with_context(|| format!("failed to parse roster TOML: {}", source_path.display()))?;

    Ok(parsed.students)
}

/// A warning from roster validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The student id (if applicable).
    pub student_id: Option<StudentId>,
    /// Warning message.
    pub message: String,
}

/// Validate a parsed roster for common issues. Warnings are never fatal:
/// duplicates still load (last entry wins at insert).
pub fn validate_roster(students: &[Student]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate ids
    let mut seen_ids = std::collections::HashSet::new();
    for student in students {
        if !seen_ids.insert(student.id) {
            warnings.push(ValidationWarning {
                student_id: Some(student.id),
                message: format!("duplicate student ID: {} (last entry wins)", student.id),
            });
        }
    }

    // Ids are externally assigned and expected positive
    for student in students {
        if student.id == 0 {
            warnings.push(ValidationWarning {
                student_id: Some(student.id),
                message: "student ID 0 is reserved; expected a positive ID".into(),
            });
        }
    }

    // Blank names
    for student in students {
        if student.name.trim().is_empty() {
            warnings.push(ValidationWarning {
                student_id: Some(student.id),
                message: "student name is empty".into(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[[students]]
id = 20511
name = "John Doe"

[[students]]
id = 27649
name = "Jane Smith"
"#;

    #[test]
    fn parse_valid_roster() {
        let students = parse_roster_str(VALID_TOML, &PathBuf::from("roster.toml")).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].id, 20511);
        assert_eq!(students[0].name, "John Doe");
    }

    #[test]
    fn parse_empty_roster() {
        let students = parse_roster_str("", &PathBuf::from("roster.toml")).unwrap();
        assert!(students.is_empty());
    }

    #[test]
    fn parse_malformed_toml() {
        let result = parse_roster_str("this is not [valid toml }{", &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        std::fs::write(&path, VALID_TOML).unwrap();

        let students = load_roster(&path).unwrap();
        assert_eq!(students.len(), 2);
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load_roster(&PathBuf::from("no_such_roster.toml")).is_err());
    }

    #[test]
    fn validate_duplicate_ids() {
        let students = vec![Student::new(1, "First"), Student::new(1, "Second")];
        let warnings = validate_roster(&students);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
    }

    #[test]
    fn validate_zero_id_and_blank_name() {
        let students = vec![Student::new(0, "  ")];
        let warnings = validate_roster(&students);
        assert!(warnings.iter().any(|w| w.message.contains("reserved")));
        assert!(warnings.iter().any(|w| w.message.contains("empty")));
    }

    #[test]
    fn validate_clean_roster() {
        let students = vec![Student::new(1, "A"), Student::new(2, "B")];
        assert!(validate_roster(&students).is_empty());
    }

    #[test]
    fn roster_last_write_wins() {
        let mut roster = Roster::new();
        roster.add(Student::new(5, "Old Name"));
        roster.add(Student::new(5, "New Name"));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get(5).unwrap().name, "New Name");
    }

    #[test]
    fn roster_iterates_in_id_order() {
        let mut roster = Roster::new();
        roster.add(Student::new(30, "C"));
        roster.add(Student::new(10, "A"));
        roster.add(Student::new(20, "B"));
        let ids: Vec<StudentId> = roster.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }
}
