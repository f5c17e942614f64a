// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::MissingField {
        field: String::from("branch"),
    };
    assert_eq!(format!("{err}"), "Missing required field: branch");

    let err: DomainError = DomainError::RollNumberOutOfRange {
        roll_no: 10_000,
        min: 1,
        max: 9999,
    };
    assert_eq!(
        format!("{err}"),
        "Roll number 10000 is out of valid range (1-9999)"
    );

    let err: DomainError = DomainError::YearNotAllowed(5);
    assert_eq!(format!("{err}"), "Year 5 is not valid");

    let err: DomainError = DomainError::EmptyStudentName;
    assert_eq!(format!("{err}"), "Student name cannot be empty");

    let err: DomainError = DomainError::EmptyFacultyId;
    assert_eq!(format!("{err}"), "Faculty ID cannot be empty");

    let err: DomainError = DomainError::NoStudents;
    assert_eq!(format!("{err}"), "No students to assign");

    let err: DomainError = DomainError::NoMentors;
    assert_eq!(format!("{err}"), "No mentors available");
}

#[test]
fn test_feasibility_error_display() {
    let err: DomainError = DomainError::DuplicateRollNumbers(vec![3, 7]);
    assert_eq!(
        format!("{err}"),
        "Duplicate roll numbers found in student list: 3, 7"
    );

    let err: DomainError = DomainError::DuplicateFacultyIds(vec![String::from("FAC001")]);
    assert_eq!(
        format!("{err}"),
        "Duplicate faculty IDs found in mentor list: FAC001"
    );

    let err: DomainError = DomainError::InsufficientCapacity {
        students: 100,
        capacity: 60,
    };
    assert_eq!(
        format!("{err}"),
        "Not enough mentor capacity. Students: 100, Capacity: 60"
    );

    let err: DomainError = DomainError::InsufficientMentors {
        needed: 4,
        available: 3,
    };
    assert_eq!(
        format!("{err}"),
        "Not enough mentors for batch assignment. Need: 4, Available: 3"
    );

    let err: DomainError = DomainError::MentorAtCapacity {
        faculty_id: String::from("FAC002"),
        max_students: 30,
    };
    assert_eq!(
        format!("{err}"),
        "Mentor FAC002 cannot accept more students (capacity 30)"
    );
}
