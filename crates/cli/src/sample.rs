// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sample rosters for trying the tool out.

use mentor_alloc_domain::{DEFAULT_MAX_STUDENTS, DomainError, Mentor, Student};

/// Number of students in the sample roster.
pub const SAMPLE_STUDENTS: u32 = 64;

/// Number of mentors in the sample roster.
pub const SAMPLE_MENTORS: usize = 3;

const BRANCHES: [&str; 5] = ["CSE", "ECE", "MECH", "CIVIL", "EEE"];

const DEPARTMENTS: [&str; 5] = [
    "Computer Science",
    "Electronics",
    "Mechanical",
    "Civil",
    "Electrical",
];

/// Builds the sample students: roll numbers 1 to 64, branches in rotation
/// and sixteen students per year.
///
/// # Errors
///
/// Returns an error if a generated student is rejected by the domain rules.
pub fn sample_students() -> Result<Vec<Student>, DomainError> {
    (1..=SAMPLE_STUDENTS)
        .zip(BRANCHES.iter().cycle())
        .map(|(roll_no, branch)| {
            let year: u8 = u8::try_from((roll_no - 1) / 16 + 1)
                .map_err(|_| DomainError::InvalidYear(roll_no.to_string()))?;
            Ok(Student::new(
                roll_no,
                &format!("Student {roll_no:02}"),
                branch,
                year,
            )?
            .with_contact(
                Some(format!("student{roll_no:02}@university.edu")),
                Some(format!("98765{roll_no:05}")),
            ))
        })
        .collect()
}

/// Builds the sample mentors, each available with the default capacity.
///
/// # Errors
///
/// Returns an error if a generated mentor is rejected by the domain rules.
pub fn sample_mentors() -> Result<Vec<Mentor>, DomainError> {
    (1..=SAMPLE_MENTORS)
        .map(|number| {
            Ok(Mentor::new(
                &format!("FAC{number:03}"),
                &format!("Dr. Mentor {number}"),
                DEPARTMENTS[(number - 1) % DEPARTMENTS.len()],
            )?
            .with_max_students(DEFAULT_MAX_STUDENTS)?
            .with_contact(
                Some(format!("mentor{number}@university.edu")),
                Some(format!("87654{number:05}")),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use mentor_alloc_domain::{is_valid_email, is_valid_phone};

    #[test]
    fn test_sample_students() {
        let students: Vec<Student> = sample_students().unwrap();

        assert_eq!(students.len(), 64);
        assert_eq!(students[0].roll_no, 1);
        assert_eq!(students[0].name, "Student 01");
        assert_eq!(students[0].branch, "CSE");
        assert_eq!(students[4].branch, "EEE");
        assert_eq!(students[5].branch, "CSE");
        assert_eq!(students[15].year, 1);
        assert_eq!(students[16].year, 2);
        assert_eq!(students[63].year, 4);
        assert_eq!(
            students[63].email.as_deref(),
            Some("student64@university.edu")
        );
        assert_eq!(students[63].phone.as_deref(), Some("9876500064"));
        assert!(students.iter().all(|s| s.assigned_mentor_id.is_none()));
    }

    #[test]
    fn test_sample_mentors() {
        let mentors: Vec<Mentor> = sample_mentors().unwrap();

        let ids: Vec<&str> = mentors.iter().map(|m| m.faculty_id.as_str()).collect();
        assert_eq!(ids, vec!["FAC001", "FAC002", "FAC003"]);
        assert_eq!(mentors[1].name, "Dr. Mentor 2");
        assert_eq!(mentors[2].department, "Mechanical");
        assert!(mentors.iter().all(|m| m.availability));
        assert!(mentors.iter().all(|m| m.max_students == 30));
        assert!(mentors.iter().all(|m| m.assigned_students.is_empty()));
    }

    #[test]
    fn test_sample_contacts_are_valid() {
        for student in sample_students().unwrap() {
            assert!(is_valid_email(student.email.as_deref().unwrap()));
            assert!(is_valid_phone(student.phone.as_deref().unwrap()));
        }
        for mentor in sample_mentors().unwrap() {
            assert!(is_valid_email(mentor.email.as_deref().unwrap()));
            assert!(is_valid_phone(mentor.phone.as_deref().unwrap()));
        }
    }
}
