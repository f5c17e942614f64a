// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
///
/// Field-level variants are collected into lists by the validators rather
/// than returned one at a time. Feasibility variants describe structural
/// problems with a whole roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field is absent or empty.
    MissingField {
        /// The name of the missing field.
        field: String,
    },
    /// The roll number is not an integer.
    InvalidRollNumber(String),
    /// The roll number is outside the configured range.
    RollNumberOutOfRange {
        /// The offending roll number.
        roll_no: i64,
        /// Smallest accepted roll number.
        min: u32,
        /// Largest accepted roll number.
        max: u32,
    },
    /// Roll number zero is never a valid identity.
    ZeroRollNumber,
    /// The academic year is not an integer.
    InvalidYear(String),
    /// The academic year is not one of the accepted years.
    YearNotAllowed(i64),
    /// Student name is empty or blank.
    EmptyStudentName,
    /// Mentor name is empty or blank.
    EmptyMentorName,
    /// Faculty identifier is empty or blank.
    EmptyFacultyId,
    /// Department is empty or blank.
    EmptyDepartment,
    /// Email address does not match the accepted address pattern.
    InvalidEmail(String),
    /// Phone number has too few or too many digits.
    InvalidPhone(String),
    /// Mentor capacity is not a positive integer.
    InvalidMaxStudents(String),
    /// The mentor cannot take another student.
    MentorAtCapacity {
        /// The mentor's faculty identifier.
        faculty_id: String,
        /// The mentor's configured capacity.
        max_students: usize,
    },
    /// An assignment must reference a mentor.
    EmptyMentorId,
    /// An assignment must hold at least one student.
    EmptyAssignment,
    /// Batch numbers are 1-based.
    InvalidBatchNumber(usize),
    /// No students were supplied.
    NoStudents,
    /// No mentors were supplied.
    NoMentors,
    /// The same roll number appears more than once.
    DuplicateRollNumbers(Vec<u32>),
    /// The same faculty identifier appears more than once.
    DuplicateFacultyIds(Vec<String>),
    /// Available mentors cannot hold every student.
    InsufficientCapacity {
        /// Number of students to place.
        students: usize,
        /// Combined capacity of available mentors.
        capacity: usize,
    },
    /// There are more batches than available mentors.
    InsufficientMentors {
        /// Number of batches the roster splits into.
        needed: usize,
        /// Number of available mentors.
        available: usize,
    },
    /// Batch size must be positive.
    InvalidBatchSize(usize),
    /// The configured roll number bounds are inverted.
    InvalidRollNumberRange {
        /// Configured lower bound.
        min: u32,
        /// Configured upper bound.
        max: u32,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "Missing required field: {field}"),
            Self::InvalidRollNumber(value) => {
                write!(f, "Roll number must be a valid integer, got '{value}'")
            }
            Self::RollNumberOutOfRange { roll_no, min, max } => {
                write!(
                    f,
                    "Roll number {roll_no} is out of valid range ({min}-{max})"
                )
            }
            Self::ZeroRollNumber => write!(f, "Roll number must be positive"),
            Self::InvalidYear(value) => write!(f, "Year must be a valid integer, got '{value}'"),
            Self::YearNotAllowed(year) => write!(f, "Year {year} is not valid"),
            Self::EmptyStudentName => write!(f, "Student name cannot be empty"),
            Self::EmptyMentorName => write!(f, "Mentor name cannot be empty"),
            Self::EmptyFacultyId => write!(f, "Faculty ID cannot be empty"),
            Self::EmptyDepartment => write!(f, "Department cannot be empty"),
            Self::InvalidEmail(email) => write!(f, "Invalid email format: '{email}'"),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number format: '{phone}'"),
            Self::InvalidMaxStudents(value) => {
                write!(f, "Max students must be a positive integer, got '{value}'")
            }
            Self::MentorAtCapacity {
                faculty_id,
                max_students,
            } => {
                write!(
                    f,
                    "Mentor {faculty_id} cannot accept more students (capacity {max_students})"
                )
            }
            Self::EmptyMentorId => write!(f, "Mentor ID cannot be empty"),
            Self::EmptyAssignment => write!(f, "Student list cannot be empty"),
            Self::InvalidBatchNumber(number) => {
                write!(f, "Batch number must be positive, got {number}")
            }
            Self::NoStudents => write!(f, "No students to assign"),
            Self::NoMentors => write!(f, "No mentors available"),
            Self::DuplicateRollNumbers(roll_numbers) => {
                let joined: Vec<String> = roll_numbers.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "Duplicate roll numbers found in student list: {}",
                    joined.join(", ")
                )
            }
            Self::DuplicateFacultyIds(faculty_ids) => {
                write!(
                    f,
                    "Duplicate faculty IDs found in mentor list: {}",
                    faculty_ids.join(", ")
                )
            }
            Self::InsufficientCapacity { students, capacity } => {
                write!(
                    f,
                    "Not enough mentor capacity. Students: {students}, Capacity: {capacity}"
                )
            }
            Self::InsufficientMentors { needed, available } => {
                write!(
                    f,
                    "Not enough mentors for batch assignment. Need: {needed}, Available: {available}"
                )
            }
            Self::InvalidBatchSize(size) => {
                write!(f, "Batch size must be positive, got {size}")
            }
            Self::InvalidRollNumberRange { min, max } => {
                write!(
                    f,
                    "Minimum roll number {min} is greater than maximum roll number {max}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
