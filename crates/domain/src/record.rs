// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-keyed raw records exchanged with storage.
//!
//! Every field is an optional string exactly as read from a row. Records are
//! validated with `validate_student` / `validate_mentor` and then converted
//! into entities with `TryFrom`.

use crate::error::DomainError;
use crate::types::{DEFAULT_MAX_STUDENTS, Mentor, Student};
use serde::{Deserialize, Serialize};

/// A raw student row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Roll number text.
    pub roll_no: Option<String>,
    /// Name text.
    pub name: Option<String>,
    /// Branch text.
    pub branch: Option<String>,
    /// Academic year text.
    pub year: Option<String>,
    /// Email text.
    pub email: Option<String>,
    /// Phone text.
    pub phone: Option<String>,
    /// Assigned mentor faculty ID text.
    pub assigned_mentor_id: Option<String>,
}

impl StudentRecord {
    /// Column names in storage order.
    pub const FIELDS: [&'static str; 7] = [
        "roll_no",
        "name",
        "branch",
        "year",
        "email",
        "phone",
        "assigned_mentor_id",
    ];

    /// Looks up a field by name.
    ///
    /// Returns `None` for unknown names and for empty values.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        let value: Option<&String> = match name {
            "roll_no" => self.roll_no.as_ref(),
            "name" => self.name.as_ref(),
            "branch" => self.branch.as_ref(),
            "year" => self.year.as_ref(),
            "email" => self.email.as_ref(),
            "phone" => self.phone.as_ref(),
            "assigned_mentor_id" => self.assigned_mentor_id.as_ref(),
            _ => None,
        };
        value.map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Returns the identity used to prefix issues for this record.
    #[must_use]
    pub fn identity(&self) -> &str {
        self.field("roll_no").unwrap_or("?")
    }
}

impl From<&Student> for StudentRecord {
    fn from(student: &Student) -> Self {
        Self {
            roll_no: Some(student.roll_no.to_string()),
            name: Some(student.name.clone()),
            branch: Some(student.branch.clone()),
            year: Some(student.year.to_string()),
            email: student.email.clone(),
            phone: student.phone.clone(),
            assigned_mentor_id: student.assigned_mentor_id.clone(),
        }
    }
}

impl TryFrom<&StudentRecord> for Student {
    type Error = DomainError;

    fn try_from(record: &StudentRecord) -> Result<Self, Self::Error> {
        let roll_text: &str = record.field("roll_no").ok_or_else(|| DomainError::MissingField {
            field: String::from("roll_no"),
        })?;
        let roll_no: u32 = roll_text
            .trim()
            .parse::<u32>()
            .map_err(|_| DomainError::InvalidRollNumber(roll_text.to_string()))?;

        let year_text: &str = record.field("year").ok_or_else(|| DomainError::MissingField {
            field: String::from("year"),
        })?;
        let year: u8 = year_text
            .trim()
            .parse::<u8>()
            .map_err(|_| DomainError::InvalidYear(year_text.to_string()))?;

        let name: &str = record.field("name").unwrap_or_default();
        let branch: &str = record.field("branch").unwrap_or_default();

        let mut student: Self = Self::new(roll_no, name.trim(), branch.trim(), year)?
            .with_contact(
                optional_text(record.field("email")),
                optional_text(record.field("phone")),
            );
        student.assigned_mentor_id = optional_text(record.field("assigned_mentor_id"));
        Ok(student)
    }
}

/// A raw mentor row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorRecord {
    /// Faculty ID text.
    pub faculty_id: Option<String>,
    /// Name text.
    pub name: Option<String>,
    /// Department text.
    pub department: Option<String>,
    /// Email text.
    pub email: Option<String>,
    /// Phone text.
    pub phone: Option<String>,
    /// Availability text (`true`, `1`, `yes` mean available).
    pub availability: Option<String>,
    /// Capacity text.
    pub max_students: Option<String>,
}

impl MentorRecord {
    /// Column names in storage order.
    pub const FIELDS: [&'static str; 7] = [
        "faculty_id",
        "name",
        "department",
        "email",
        "phone",
        "availability",
        "max_students",
    ];

    /// Looks up a field by name.
    ///
    /// Returns `None` for unknown names and for empty values.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        let value: Option<&String> = match name {
            "faculty_id" => self.faculty_id.as_ref(),
            "name" => self.name.as_ref(),
            "department" => self.department.as_ref(),
            "email" => self.email.as_ref(),
            "phone" => self.phone.as_ref(),
            "availability" => self.availability.as_ref(),
            "max_students" => self.max_students.as_ref(),
            _ => None,
        };
        value.map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Returns the identity used to prefix issues for this record.
    #[must_use]
    pub fn identity(&self) -> &str {
        self.field("faculty_id").unwrap_or("?")
    }
}

impl From<&Mentor> for MentorRecord {
    fn from(mentor: &Mentor) -> Self {
        Self {
            faculty_id: Some(mentor.faculty_id.clone()),
            name: Some(mentor.name.clone()),
            department: Some(mentor.department.clone()),
            email: mentor.email.clone(),
            phone: mentor.phone.clone(),
            availability: Some(mentor.availability.to_string()),
            max_students: Some(mentor.max_students.to_string()),
        }
    }
}

impl TryFrom<&MentorRecord> for Mentor {
    type Error = DomainError;

    fn try_from(record: &MentorRecord) -> Result<Self, Self::Error> {
        let faculty_id: &str = record.field("faculty_id").unwrap_or_default();
        let name: &str = record.field("name").unwrap_or_default();
        let department: &str = record.field("department").unwrap_or_default();

        let availability: bool = record.field("availability").is_none_or(parse_availability);

        let max_students: usize = match record.field("max_students") {
            Some(text) => text
                .trim()
                .parse::<usize>()
                .map_err(|_| DomainError::InvalidMaxStudents(text.to_string()))?,
            None => DEFAULT_MAX_STUDENTS,
        };

        Ok(Self::new(faculty_id.trim(), name.trim(), department.trim())?
            .with_max_students(max_students)?
            .with_availability(availability)
            .with_contact(
                optional_text(record.field("email")),
                optional_text(record.field("phone")),
            ))
    }
}

/// Interprets an availability flag. Only `true`, `1` and `yes` (any case)
/// mean available.
fn parse_availability(text: &str) -> bool {
    matches!(
        text.trim().to_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
