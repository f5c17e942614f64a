// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::{AssignmentConfig, AssignmentRules, ValidationRules};
use crate::error::DomainError;
use crate::record::{MentorRecord, StudentRecord};
use crate::types::{Mentor, Student};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

pub(crate) static EMAIL_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

/// Accepted digit count for phone numbers, after stripping non-digits.
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=15;

/// Returns whether `email` matches the accepted address pattern.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

/// Returns whether `phone` carries between 10 and 15 digits once every
/// non-digit character is removed.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: usize = phone.chars().filter(char::is_ascii_digit).count();
    PHONE_DIGITS.contains(&digits)
}

fn check_contact(email: Option<&str>, phone: Option<&str>, errors: &mut Vec<DomainError>) {
    if let Some(email) = email
        && !is_valid_email(email)
    {
        errors.push(DomainError::InvalidEmail(email.to_string()));
    }
    if let Some(phone) = phone
        && !is_valid_phone(phone)
    {
        errors.push(DomainError::InvalidPhone(phone.to_string()));
    }
}

/// Validates a raw student record.
///
/// Every violation is collected; the function does not stop at the first.
/// When a required field is missing, only the missing fields are reported.
///
/// # Arguments
///
/// * `record` - The raw student record
/// * `rules` - The validation rules in effect
///
/// # Errors
///
/// Returns every violation found:
/// - A required field is missing or empty
/// - The roll number is not an integer or is outside the configured range
/// - The year is not an integer or is not an accepted year
/// - The name is blank
/// - The email or phone is malformed
pub fn validate_student(
    record: &StudentRecord,
    rules: &ValidationRules,
) -> Result<(), Vec<DomainError>> {
    let mut errors: Vec<DomainError> = rules
        .required_student_fields
        .iter()
        .filter(|field| record.field(field).is_none())
        .map(|field| DomainError::MissingField {
            field: field.clone(),
        })
        .collect();

    if !errors.is_empty() {
        return Err(errors);
    }

    if let Some(roll_text) = record.field("roll_no") {
        match roll_text.trim().parse::<i64>() {
            Ok(roll_no) if !rules.accepts_roll_number(roll_no) => {
                errors.push(DomainError::RollNumberOutOfRange {
                    roll_no,
                    min: rules.min_roll_number,
                    max: rules.max_roll_number,
                });
            }
            Ok(_) => {}
            Err(_) => errors.push(DomainError::InvalidRollNumber(roll_text.to_string())),
        }
    }

    if let Some(year_text) = record.field("year") {
        match year_text.trim().parse::<i64>() {
            Ok(year) if !rules.accepts_year(year) => {
                errors.push(DomainError::YearNotAllowed(year));
            }
            Ok(_) => {}
            Err(_) => errors.push(DomainError::InvalidYear(year_text.to_string())),
        }
    }

    // Rule: a name made only of whitespace counts as empty
    if record.name.as_deref().unwrap_or_default().trim().is_empty() {
        errors.push(DomainError::EmptyStudentName);
    }

    check_contact(record.field("email"), record.field("phone"), &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a raw mentor record.
///
/// # Arguments
///
/// * `record` - The raw mentor record
/// * `rules` - The validation rules in effect
///
/// # Errors
///
/// Returns every violation found:
/// - A required field is missing or empty
/// - The faculty ID, name or department is blank
/// - The email or phone is malformed
/// - `max_students` is present but not a positive integer
pub fn validate_mentor(
    record: &MentorRecord,
    rules: &ValidationRules,
) -> Result<(), Vec<DomainError>> {
    let mut errors: Vec<DomainError> = rules
        .required_mentor_fields
        .iter()
        .filter(|field| record.field(field).is_none())
        .map(|field| DomainError::MissingField {
            field: field.clone(),
        })
        .collect();

    if !errors.is_empty() {
        return Err(errors);
    }

    if record.faculty_id.as_deref().unwrap_or_default().trim().is_empty() {
        errors.push(DomainError::EmptyFacultyId);
    }
    if record.name.as_deref().unwrap_or_default().trim().is_empty() {
        errors.push(DomainError::EmptyMentorName);
    }
    if record.department.as_deref().unwrap_or_default().trim().is_empty() {
        errors.push(DomainError::EmptyDepartment);
    }

    check_contact(record.field("email"), record.field("phone"), &mut errors);

    if let Some(max_text) = record.field("max_students") {
        match max_text.trim().parse::<i64>() {
            Ok(max) if max > 0 => {}
            _ => errors.push(DomainError::InvalidMaxStudents(max_text.to_string())),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks whether a roster can be assigned under the configured policy.
///
/// This function is pure, deterministic, and has no side effects.
///
/// # Arguments
///
/// * `students` - The students to assign
/// * `mentors` - Every mentor, available or not
/// * `config` - The policy in effect
///
/// # Returns
///
/// * `Ok(warnings)` if the roster is feasible. Warnings describe conditions
///   that the policy tolerates, such as an expected overload.
/// * `Err(errors)` with every blocking problem found
///
/// # Errors
///
/// Returns an error if:
/// - Either collection is empty
/// - Roll numbers or faculty IDs are duplicated
/// - Students exceed available capacity and overload is disallowed
/// - Batches outnumber available mentors and wrap-around is disabled
pub fn validate_assignment_feasibility(
    students: &[Student],
    mentors: &[Mentor],
    config: &AssignmentConfig,
) -> Result<Vec<String>, Vec<DomainError>> {
    let mut errors: Vec<DomainError> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if students.is_empty() {
        errors.push(DomainError::NoStudents);
    }
    if mentors.is_empty() {
        errors.push(DomainError::NoMentors);
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let duplicate_rolls: Vec<u32> = find_duplicates(students.iter().map(|s| s.roll_no));
    if !duplicate_rolls.is_empty() {
        errors.push(DomainError::DuplicateRollNumbers(duplicate_rolls));
    }

    let duplicate_ids: Vec<String> =
        find_duplicates(mentors.iter().map(|m| m.faculty_id.clone()));
    if !duplicate_ids.is_empty() {
        errors.push(DomainError::DuplicateFacultyIds(duplicate_ids));
    }

    let available: Vec<&Mentor> = mentors.iter().filter(|m| m.availability).collect();
    let capacity: usize = available.iter().map(|m| m.max_students).sum();
    let total_students: usize = students.len();
    let rules: &AssignmentRules = &config.assignment_rules;

    if total_students > capacity {
        if rules.allow_mentor_overload {
            warnings.push(format!(
                "Some mentors will exceed normal capacity. Students: {total_students}, Capacity: {capacity}"
            ));
        } else {
            errors.push(DomainError::InsufficientCapacity {
                students: total_students,
                capacity,
            });
        }
    }

    if config.batch_size == 0 {
        errors.push(DomainError::InvalidBatchSize(config.batch_size));
    } else {
        let batches_needed: usize = total_students.div_ceil(config.batch_size);
        if batches_needed > available.len() && !rules.wrap_around_mentors {
            errors.push(DomainError::InsufficientMentors {
                needed: batches_needed,
                available: available.len(),
            });
        }
    }

    if errors.is_empty() {
        Ok(warnings)
    } else {
        Err(errors)
    }
}

/// Returns each value that occurs more than once, in first-repeat order.
fn find_duplicates<T, I>(values: I) -> Vec<T>
where
    T: Eq + std::hash::Hash + Clone,
    I: Iterator<Item = T>,
{
    let mut seen: HashSet<T> = HashSet::new();
    let mut reported: HashSet<T> = HashSet::new();
    let mut duplicates: Vec<T> = Vec::new();
    for value in values {
        if !seen.insert(value.clone()) && reported.insert(value.clone()) {
            duplicates.push(value);
        }
    }
    duplicates
}

/// The outcome of a full consistency check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    /// Blocking issues, each prefixed with the offending entity's identity
    /// where one exists.
    pub issues: Vec<String>,
    /// Non-blocking observations.
    pub warnings: Vec<String>,
}

impl ConsistencyReport {
    /// Returns whether no blocking issue was found.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validates every student and mentor and checks feasibility.
///
/// Entities are converted back to raw records and run through the same
/// field rules used at load time, so records that were altered after
/// loading are caught too.
///
/// # Arguments
///
/// * `students` - The students to assign
/// * `mentors` - Every mentor, available or not
/// * `config` - The policy and rules in effect
#[must_use]
pub fn validate_data_consistency(
    students: &[Student],
    mentors: &[Mentor],
    config: &AssignmentConfig,
) -> ConsistencyReport {
    let mut report: ConsistencyReport = ConsistencyReport::default();
    let rules: &ValidationRules = &config.validation_rules;

    for student in students {
        let record: StudentRecord = StudentRecord::from(student);
        if let Err(errors) = validate_student(&record, rules) {
            report.issues.extend(
                errors
                    .iter()
                    .map(|e| format!("Student {}: {e}", student.roll_no)),
            );
        }
    }

    for mentor in mentors {
        let record: MentorRecord = MentorRecord::from(mentor);
        if let Err(errors) = validate_mentor(&record, rules) {
            report.issues.extend(
                errors
                    .iter()
                    .map(|e| format!("Mentor {}: {e}", mentor.faculty_id)),
            );
        }
    }

    match validate_assignment_feasibility(students, mentors, config) {
        Ok(warnings) => report.warnings = warnings,
        Err(errors) => report.issues.extend(errors.iter().map(ToString::to_string)),
    }

    report
}
