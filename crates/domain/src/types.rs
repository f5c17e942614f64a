// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Mentor capacity used when a record does not specify one.
pub const DEFAULT_MAX_STUDENTS: usize = 30;

/// Academic years a student can be in. `ValidationRules::valid_years` can
/// narrow this set but never widen it.
pub const ACADEMIC_YEARS: std::ops::RangeInclusive<u8> = 1..=4;

/// Represents a student.
///
/// The roll number is the sole identifier for a student within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// The roll number (positive, unique within a run).
    pub roll_no: u32,
    /// The student's name.
    pub name: String,
    /// The student's branch of study.
    pub branch: String,
    /// The academic year (1 through 4).
    pub year: u8,
    /// Optional contact email.
    pub email: Option<String>,
    /// Optional contact phone.
    pub phone: Option<String>,
    /// The faculty ID of the assigned mentor, if any.
    pub assigned_mentor_id: Option<String>,
}

impl Student {
    /// Creates a new unassigned `Student`.
    ///
    /// # Arguments
    ///
    /// * `roll_no` - The roll number (must be positive)
    /// * `name` - The student's name (must not be blank)
    /// * `branch` - The branch of study
    /// * `year` - The academic year (1 through 4)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The roll number is zero
    /// - The name is blank
    /// - The year is outside 1 through 4
    pub fn new(roll_no: u32, name: &str, branch: &str, year: u8) -> Result<Self, DomainError> {
        if roll_no == 0 {
            return Err(DomainError::ZeroRollNumber);
        }
        if name.trim().is_empty() {
            return Err(DomainError::EmptyStudentName);
        }
        if !ACADEMIC_YEARS.contains(&year) {
            return Err(DomainError::YearNotAllowed(i64::from(year)));
        }

        Ok(Self {
            roll_no,
            name: name.to_string(),
            branch: branch.to_string(),
            year,
            email: None,
            phone: None,
            assigned_mentor_id: None,
        })
    }

    /// Attaches contact details.
    #[must_use]
    pub fn with_contact(mut self, email: Option<String>, phone: Option<String>) -> Self {
        self.email = email;
        self.phone = phone;
        self
    }

    /// Returns whether the student has been placed with a mentor.
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.assigned_mentor_id.is_some()
    }
}

/// Represents a mentor (faculty member).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
    /// The faculty identifier (non-empty, unique).
    pub faculty_id: String,
    /// The mentor's name.
    pub name: String,
    /// The mentor's department.
    pub department: String,
    /// Optional contact email.
    pub email: Option<String>,
    /// Optional contact phone.
    pub phone: Option<String>,
    /// Whether the mentor takes part in assignment runs.
    pub availability: bool,
    /// Normal capacity. Exceeded only under the overload policy.
    pub max_students: usize,
    /// Roll numbers of the students currently assigned, in assignment order.
    pub assigned_students: Vec<u32>,
}

impl Mentor {
    /// Creates a new available `Mentor` with the default capacity.
    ///
    /// # Arguments
    ///
    /// * `faculty_id` - The faculty identifier (must not be blank)
    /// * `name` - The mentor's name (must not be blank)
    /// * `department` - The mentor's department
    ///
    /// # Errors
    ///
    /// Returns an error if the faculty ID or name is blank.
    pub fn new(faculty_id: &str, name: &str, department: &str) -> Result<Self, DomainError> {
        if faculty_id.trim().is_empty() {
            return Err(DomainError::EmptyFacultyId);
        }
        if name.trim().is_empty() {
            return Err(DomainError::EmptyMentorName);
        }

        Ok(Self {
            faculty_id: faculty_id.to_string(),
            name: name.to_string(),
            department: department.to_string(),
            email: None,
            phone: None,
            availability: true,
            max_students: DEFAULT_MAX_STUDENTS,
            assigned_students: Vec::new(),
        })
    }

    /// Sets the mentor's capacity.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMaxStudents` if `max_students` is zero.
    pub fn with_max_students(mut self, max_students: usize) -> Result<Self, DomainError> {
        if max_students == 0 {
            return Err(DomainError::InvalidMaxStudents(max_students.to_string()));
        }
        self.max_students = max_students;
        Ok(self)
    }

    /// Sets the availability flag.
    #[must_use]
    pub const fn with_availability(mut self, availability: bool) -> Self {
        self.availability = availability;
        self
    }

    /// Attaches contact details.
    #[must_use]
    pub fn with_contact(mut self, email: Option<String>, phone: Option<String>) -> Self {
        self.email = email;
        self.phone = phone;
        self
    }

    /// Returns the number of students currently assigned.
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.assigned_students.len()
    }

    /// Returns the number of free slots below `max_students`.
    #[must_use]
    pub fn available_slots(&self) -> usize {
        self.max_students.saturating_sub(self.student_count())
    }

    /// Returns whether the mentor is available and can take `count` more
    /// students without exceeding capacity.
    #[must_use]
    pub fn can_accept_students(&self, count: usize) -> bool {
        self.availability && self.student_count() + count <= self.max_students
    }

    /// Assigns a student within capacity.
    ///
    /// A roll number that is already assigned is left in place.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MentorAtCapacity` if the mentor is unavailable
    /// or full.
    pub fn assign_student(&mut self, roll_no: u32) -> Result<(), DomainError> {
        if !self.can_accept_students(1) {
            return Err(DomainError::MentorAtCapacity {
                faculty_id: self.faculty_id.clone(),
                max_students: self.max_students,
            });
        }
        if !self.assigned_students.contains(&roll_no) {
            self.assigned_students.push(roll_no);
        }
        Ok(())
    }

    /// Assigns a student regardless of capacity.
    ///
    /// Used only when the overload policy is in effect.
    pub fn force_assign_student(&mut self, roll_no: u32) {
        if !self.assigned_students.contains(&roll_no) {
            self.assigned_students.push(roll_no);
        }
    }

    /// Removes a student if assigned.
    pub fn remove_student(&mut self, roll_no: u32) {
        self.assigned_students.retain(|assigned| *assigned != roll_no);
    }

    /// Discards every assigned student.
    pub fn clear_assignments(&mut self) {
        self.assigned_students.clear();
    }

    /// Returns whether the mentor holds more students than its capacity.
    #[must_use]
    pub fn is_overloaded(&self) -> bool {
        self.student_count() > self.max_students
    }
}

/// The outcome of assigning one batch to one mentor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    mentor_id: String,
    student_roll_numbers: Vec<u32>,
    #[serde(with = "time::serde::rfc3339")]
    assignment_date: OffsetDateTime,
    batch_number: usize,
    notes: Option<String>,
}

impl Assignment {
    /// Creates a new `Assignment`.
    ///
    /// # Arguments
    ///
    /// * `mentor_id` - The faculty ID of the mentor receiving the batch
    /// * `student_roll_numbers` - The batch's roll numbers (non-empty)
    /// * `assignment_date` - When the batch was assigned
    /// * `batch_number` - The 1-based batch number
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The mentor ID is blank
    /// - The roll number list is empty
    /// - The batch number is zero
    pub fn new(
        mentor_id: &str,
        student_roll_numbers: Vec<u32>,
        assignment_date: OffsetDateTime,
        batch_number: usize,
    ) -> Result<Self, DomainError> {
        if mentor_id.trim().is_empty() {
            return Err(DomainError::EmptyMentorId);
        }
        if student_roll_numbers.is_empty() {
            return Err(DomainError::EmptyAssignment);
        }
        if batch_number == 0 {
            return Err(DomainError::InvalidBatchNumber(batch_number));
        }

        Ok(Self {
            mentor_id: mentor_id.to_string(),
            student_roll_numbers,
            assignment_date,
            batch_number,
            notes: None,
        })
    }

    /// Attaches a free-text annotation.
    #[must_use]
    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }

    /// Returns the mentor's faculty ID.
    #[must_use]
    pub fn mentor_id(&self) -> &str {
        &self.mentor_id
    }

    /// Returns the roll numbers in this batch.
    #[must_use]
    pub fn student_roll_numbers(&self) -> &[u32] {
        &self.student_roll_numbers
    }

    /// Returns when the batch was assigned.
    #[must_use]
    pub const fn assignment_date(&self) -> OffsetDateTime {
        self.assignment_date
    }

    /// Returns the 1-based batch number.
    #[must_use]
    pub const fn batch_number(&self) -> usize {
        self.batch_number
    }

    /// Returns the annotation, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Replaces the annotation.
    pub fn set_notes(&mut self, notes: String) {
        self.notes = Some(notes);
    }

    /// Returns the number of students in this batch.
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.student_roll_numbers.len()
    }

    /// Adds a student unless already present.
    pub fn add_student(&mut self, roll_no: u32) {
        if !self.student_roll_numbers.contains(&roll_no) {
            self.student_roll_numbers.push(roll_no);
        }
    }

    /// Removes a student if present.
    pub fn remove_student(&mut self, roll_no: u32) {
        self.student_roll_numbers
            .retain(|assigned| *assigned != roll_no);
    }

    /// Appends roll numbers in order.
    pub fn extend(&mut self, roll_numbers: &[u32]) {
        self.student_roll_numbers.extend_from_slice(roll_numbers);
    }

    /// Returns the lowest and highest roll number in the batch.
    #[must_use]
    pub fn roll_range(&self) -> Option<(u32, u32)> {
        let min: u32 = *self.student_roll_numbers.iter().min()?;
        let max: u32 = *self.student_roll_numbers.iter().max()?;
        Some((min, max))
    }
}

/// The aggregate result of one assignment run.
///
/// A fresh summary is produced by every run and is not modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentSummary {
    total_students: usize,
    total_mentors: usize,
    total_assignments: usize,
    students_per_mentor_avg: f64,
    unassigned_students: Vec<u32>,
    assignments: Vec<Assignment>,
    #[serde(with = "time::serde::rfc3339")]
    created_date: OffsetDateTime,
}

impl AssignmentSummary {
    /// Builds a summary, deriving the assignment count and the average
    /// batch size.
    ///
    /// # Arguments
    ///
    /// * `total_students` - Number of students in the run
    /// * `total_mentors` - Number of mentors supplied (available or not)
    /// * `assignments` - The assignments created, in order
    /// * `unassigned_students` - Roll numbers left without a mentor
    /// * `created_date` - When the summary was produced
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(
        total_students: usize,
        total_mentors: usize,
        assignments: Vec<Assignment>,
        unassigned_students: Vec<u32>,
        created_date: OffsetDateTime,
    ) -> Self {
        let total_assigned: usize = assignments.iter().map(Assignment::student_count).sum();
        let students_per_mentor_avg: f64 = if assignments.is_empty() {
            0.0
        } else {
            total_assigned as f64 / assignments.len() as f64
        };

        Self {
            total_students,
            total_mentors,
            total_assignments: assignments.len(),
            students_per_mentor_avg,
            unassigned_students,
            assignments,
            created_date,
        }
    }

    /// Returns the number of students in the run.
    #[must_use]
    pub const fn total_students(&self) -> usize {
        self.total_students
    }

    /// Returns the number of mentors supplied, available or not.
    #[must_use]
    pub const fn total_mentors(&self) -> usize {
        self.total_mentors
    }

    /// Returns the number of assignments created.
    #[must_use]
    pub const fn total_assignments(&self) -> usize {
        self.total_assignments
    }

    /// Returns the mean number of students per assignment.
    #[must_use]
    pub const fn students_per_mentor_avg(&self) -> f64 {
        self.students_per_mentor_avg
    }

    /// Returns the roll numbers left without a mentor.
    #[must_use]
    pub fn unassigned_students(&self) -> &[u32] {
        &self.unassigned_students
    }

    /// Returns the assignments in creation order.
    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Returns when the summary was produced.
    #[must_use]
    pub const fn created_date(&self) -> OffsetDateTime {
        self.created_date
    }

    /// Returns the number of students that received a mentor.
    #[must_use]
    pub fn total_assigned(&self) -> usize {
        self.assignments.iter().map(Assignment::student_count).sum()
    }
}
