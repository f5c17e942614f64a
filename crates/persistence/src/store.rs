// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV storage for the student and mentor rosters.
//!
//! Rows are read into raw records, validated, and converted into entities.
//! A row that fails is logged with its line number and skipped; only a
//! missing required column or an unreadable file aborts the load.

use crate::error::PersistenceError;
use csv::StringRecord;
use mentor_alloc_domain::{
    DomainError, Mentor, MentorRecord, Student, StudentRecord, ValidationRules, validate_mentor,
    validate_student,
};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// File name of the student roster inside the data directory.
pub const STUDENTS_FILE: &str = "students.csv";

/// File name of the mentor roster inside the data directory.
pub const MENTORS_FILE: &str = "mentors.csv";

/// A row that was not loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// The 1-based line number in the file. The header is line 1.
    pub line: usize,
    /// Why the row was rejected.
    pub reasons: Vec<String>,
}

/// The outcome of loading a CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome<T> {
    /// Entities built from valid rows, in file order.
    pub records: Vec<T>,
    /// Rows that failed validation or conversion.
    pub skipped: Vec<SkippedRow>,
}

impl<T> LoadOutcome<T> {
    const fn empty() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// Reads and writes the roster files in a data directory.
#[derive(Debug, Clone)]
pub struct CsvStore {
    data_dir: PathBuf,
}

impl CsvStore {
    /// Creates a store rooted at `data_dir`. Nothing is touched on disk
    /// until the first save.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the path of the student roster.
    #[must_use]
    pub fn students_path(&self) -> PathBuf {
        self.data_dir.join(STUDENTS_FILE)
    }

    /// Returns the path of the mentor roster.
    #[must_use]
    pub fn mentors_path(&self) -> PathBuf {
        self.data_dir.join(MENTORS_FILE)
    }

    /// Loads the student roster.
    ///
    /// # Errors
    ///
    /// See [`load_students`].
    pub fn load_students(
        &self,
        rules: &ValidationRules,
    ) -> Result<LoadOutcome<Student>, PersistenceError> {
        load_students(&self.students_path(), rules)
    }

    /// Loads the mentor roster.
    ///
    /// # Errors
    ///
    /// See [`load_mentors`].
    pub fn load_mentors(
        &self,
        rules: &ValidationRules,
    ) -> Result<LoadOutcome<Mentor>, PersistenceError> {
        load_mentors(&self.mentors_path(), rules)
    }

    /// Saves the student roster.
    ///
    /// # Errors
    ///
    /// See [`save_students`].
    pub fn save_students(&self, students: &[Student]) -> Result<(), PersistenceError> {
        save_students(&self.students_path(), students)
    }

    /// Saves the mentor roster.
    ///
    /// # Errors
    ///
    /// See [`save_mentors`].
    pub fn save_mentors(&self, mentors: &[Mentor]) -> Result<(), PersistenceError> {
        save_mentors(&self.mentors_path(), mentors)
    }
}

/// Normalizes a CSV header for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Maps normalized header names to column positions and checks that every
/// required column is present.
fn map_headers(
    path: &Path,
    headers: &StringRecord,
    required: &[String],
) -> Result<HashMap<String, usize>, PersistenceError> {
    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| (normalize_header(header), idx))
        .collect();

    let missing: Vec<String> = required
        .iter()
        .filter(|name| !header_map.contains_key(name.as_str()))
        .cloned()
        .collect();

    if !missing.is_empty() {
        return Err(PersistenceError::MissingColumns {
            path: path.to_path_buf(),
            missing,
        });
    }

    Ok(header_map)
}

/// Reads every row of `path`, handing each to `parse` along with a field
/// accessor. Rows that `parse` rejects are logged and collected.
fn read_rows<T>(
    path: &Path,
    kind: &str,
    required: &[String],
    mut parse: impl FnMut(&dyn Fn(&str) -> Option<String>) -> Result<T, Vec<String>>,
) -> Result<LoadOutcome<T>, PersistenceError> {
    if !path.exists() {
        warn!(path = %path.display(), "{} file not found", kind);
        return Ok(LoadOutcome::empty());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| PersistenceError::csv(path, e))?;

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| PersistenceError::csv(path, e))?
        .clone();
    let header_map: HashMap<String, usize> = map_headers(path, &headers, required)?;

    let mut outcome: LoadOutcome<T> = LoadOutcome::empty();

    for (index, row) in reader.records().enumerate() {
        // Line 1 is the header.
        let line: usize = index + 2;

        let row: StringRecord = match row {
            Ok(row) => row,
            Err(e) => {
                error!(line, error = %e, "Unreadable {} row", kind);
                outcome.skipped.push(SkippedRow {
                    line,
                    reasons: vec![e.to_string()],
                });
                continue;
            }
        };

        let get_field = |name: &str| -> Option<String> {
            header_map
                .get(name)
                .and_then(|&idx| row.get(idx))
                .map(String::from)
        };

        match parse(&get_field) {
            Ok(entity) => outcome.records.push(entity),
            Err(reasons) => {
                error!(line, reasons = ?reasons, "Invalid {} data", kind);
                outcome.skipped.push(SkippedRow { line, reasons });
            }
        }
    }

    info!(
        path = %path.display(),
        loaded = outcome.records.len(),
        skipped = outcome.skipped.len(),
        "Loaded {} file",
        kind
    );

    Ok(outcome)
}

fn describe(errors: &[DomainError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

/// Loads students from a CSV file.
///
/// A missing file yields an empty roster and a warning.
///
/// # Arguments
///
/// * `path` - The CSV file to read
/// * `rules` - Validation rules; also name the required columns
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - A required column is missing from the header
pub fn load_students(
    path: &Path,
    rules: &ValidationRules,
) -> Result<LoadOutcome<Student>, PersistenceError> {
    read_rows(path, "student", &rules.required_student_fields, |get| {
        let record: StudentRecord = StudentRecord {
            roll_no: get("roll_no"),
            name: get("name"),
            branch: get("branch"),
            year: get("year"),
            email: get("email"),
            phone: get("phone"),
            assigned_mentor_id: get("assigned_mentor_id"),
        };
        validate_student(&record, rules).map_err(|errors| describe(&errors))?;
        Student::try_from(&record).map_err(|e| vec![e.to_string()])
    })
}

/// Loads mentors from a CSV file.
///
/// Availability is true for `true`, `1` or `yes` in any case and defaults
/// to true when the column is absent or empty. A missing capacity defaults
/// to 30. Mentors are loaded without assigned students; see
/// [`restore_mentor_assignments`].
///
/// # Arguments
///
/// * `path` - The CSV file to read
/// * `rules` - Validation rules; also name the required columns
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - A required column is missing from the header
pub fn load_mentors(
    path: &Path,
    rules: &ValidationRules,
) -> Result<LoadOutcome<Mentor>, PersistenceError> {
    read_rows(path, "mentor", &rules.required_mentor_fields, |get| {
        let record: MentorRecord = MentorRecord {
            faculty_id: get("faculty_id"),
            name: get("name"),
            department: get("department"),
            email: get("email"),
            phone: get("phone"),
            availability: get("availability"),
            max_students: get("max_students"),
        };
        validate_mentor(&record, rules).map_err(|errors| describe(&errors))?;
        Mentor::try_from(&record).map_err(|e| vec![e.to_string()])
    })
}

/// Writes one header row and one row per record.
fn write_rows<R: Serialize>(path: &Path, kind: &str, rows: &[R]) -> Result<(), PersistenceError> {
    if rows.is_empty() {
        warn!(path = %path.display(), "No {} rows to save", kind);
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PersistenceError::io(parent, e))?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| PersistenceError::csv(path, e))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| PersistenceError::csv(path, e))?;
    }
    writer.flush().map_err(|e| PersistenceError::io(path, e))?;

    info!(path = %path.display(), rows = rows.len(), "Saved {} file", kind);
    Ok(())
}

/// Saves students to a CSV file, replacing its contents.
///
/// An empty roster is logged and nothing is written.
///
/// # Errors
///
/// Returns an error if the file or its directory cannot be written.
pub fn save_students(path: &Path, students: &[Student]) -> Result<(), PersistenceError> {
    let rows: Vec<StudentRecord> = students.iter().map(StudentRecord::from).collect();
    write_rows(path, "student", &rows)
}

/// Saves mentors to a CSV file, replacing its contents.
///
/// Assigned students are not stored; they are rebuilt from the student
/// roster on load. An empty roster is logged and nothing is written.
///
/// # Errors
///
/// Returns an error if the file or its directory cannot be written.
pub fn save_mentors(path: &Path, mentors: &[Mentor]) -> Result<(), PersistenceError> {
    let rows: Vec<MentorRecord> = mentors.iter().map(MentorRecord::from).collect();
    write_rows(path, "mentor", &rows)
}

/// Rebuilds each mentor's student list from the students' assigned mentor.
///
/// Every mentor's list is cleared first. A student that names an unknown
/// mentor is logged and left as is.
pub fn restore_mentor_assignments(students: &[Student], mentors: &mut [Mentor]) {
    for mentor in mentors.iter_mut() {
        mentor.clear_assignments();
    }

    let positions: HashMap<String, usize> = mentors
        .iter()
        .enumerate()
        .map(|(idx, mentor)| (mentor.faculty_id.clone(), idx))
        .collect();

    for student in students {
        let Some(mentor_id) = student.assigned_mentor_id.as_deref() else {
            continue;
        };
        match positions.get(mentor_id) {
            Some(&idx) => mentors[idx].force_assign_student(student.roll_no),
            None => warn!(
                roll_no = student.roll_no,
                mentor_id, "Student references an unknown mentor"
            ),
        }
    }

    debug!(mentors = mentors.len(), "Restored mentor assignments");
}
