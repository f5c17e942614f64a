// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mentor_alloc_domain::{Assignment, AssignmentConfig, AssignmentSummary, Mentor, Student};

const BRANCHES: [&str; 3] = ["CSE", "ECE", "MECH"];

/// Students with roll numbers `first..=last`, spread across three branches.
pub fn create_students(first: u32, last: u32) -> Vec<Student> {
    (first..=last)
        .map(|roll_no| {
            let branch: &str = BRANCHES[(roll_no as usize) % BRANCHES.len()];
            Student::new(roll_no, &format!("Student {roll_no:02}"), branch, 1).unwrap()
        })
        .collect()
}

/// Mentors `FAC001..` with the default capacity of 30.
pub fn create_mentors(count: usize) -> Vec<Mentor> {
    (1..=count)
        .map(|i| Mentor::new(&format!("FAC{i:03}"), &format!("Dr. Mentor {i}"), "CS").unwrap())
        .collect()
}

pub fn create_strict_config() -> AssignmentConfig {
    let mut config: AssignmentConfig = AssignmentConfig::default();
    config.assignment_rules.allow_mentor_overload = false;
    config
}

/// Reduces assignments to the fields that identify them, dropping timestamps.
pub fn assignment_shape(summary: &AssignmentSummary) -> Vec<(usize, String, Vec<u32>)> {
    summary
        .assignments()
        .iter()
        .map(|a: &Assignment| {
            (
                a.batch_number(),
                a.mentor_id().to_string(),
                a.student_roll_numbers().to_vec(),
            )
        })
        .collect()
}

pub fn mentor_of(students: &[Student], roll_no: u32) -> Option<&str> {
    students
        .iter()
        .find(|s| s.roll_no == roll_no)
        .and_then(|s| s.assigned_mentor_id.as_deref())
}
