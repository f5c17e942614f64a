// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Mentor, MentorRecord, Student, StudentRecord};

pub fn create_test_students(count: u32) -> Vec<Student> {
    (1..=count)
        .map(|roll_no| Student::new(roll_no, &format!("Student {roll_no:02}"), "CSE", 1).unwrap())
        .collect()
}

pub fn create_test_mentors(count: usize) -> Vec<Mentor> {
    (1..=count)
        .map(|i| Mentor::new(&format!("FAC{i:03}"), &format!("Dr. Mentor {i}"), "CS").unwrap())
        .collect()
}

pub fn create_valid_student_record() -> StudentRecord {
    StudentRecord {
        roll_no: Some(String::from("101")),
        name: Some(String::from("Asha Rao")),
        branch: Some(String::from("CSE")),
        year: Some(String::from("2")),
        email: Some(String::from("asha@university.edu")),
        phone: Some(String::from("98765-43210")),
        assigned_mentor_id: None,
    }
}

pub fn create_valid_mentor_record() -> MentorRecord {
    MentorRecord {
        faculty_id: Some(String::from("FAC001")),
        name: Some(String::from("Dr. Smith")),
        department: Some(String::from("Computer Science")),
        email: Some(String::from("smith@university.edu")),
        phone: None,
        availability: Some(String::from("true")),
        max_students: Some(String::from("30")),
    }
}
