// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use mentor_alloc_domain::{Mentor, Student};
use std::path::Path;

pub fn create_test_students(count: u32) -> Vec<Student> {
    (1..=count)
        .map(|roll_no| {
            Student::new(roll_no, &format!("Student {roll_no:02}"), "CSE", 1)
                .unwrap()
                .with_contact(
                    Some(format!("student{roll_no:02}@university.edu")),
                    Some(format!("98765{roll_no:05}")),
                )
        })
        .collect()
}

pub fn create_test_mentors(count: usize) -> Vec<Mentor> {
    (1..=count)
        .map(|i| {
            Mentor::new(&format!("FAC{i:03}"), &format!("Dr. Mentor {i}"), "Computer Science")
                .unwrap()
        })
        .collect()
}

pub fn write_file(path: &Path, contents: &str) {
    std::fs::write(path, contents).unwrap();
}
