// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mentor_alloc_domain::{AssignmentConfig, Mentor, Student};
use serde::Serialize;
use std::collections::BTreeMap;

/// A snapshot of a roster before assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterOverview {
    /// Number of students on the roster.
    pub total_students: usize,
    /// Number of mentors, available or not.
    pub total_mentors: usize,
    /// Number of mentors marked available.
    pub available_mentors: usize,
    /// Combined `max_students` of available mentors.
    pub total_capacity: usize,
    /// Students as a fraction of total capacity; 0 when there is no capacity.
    pub capacity_utilization: f64,
    /// Configured batch size.
    pub batch_size: usize,
    /// Number of batches the roster splits into.
    pub batches_needed: usize,
    /// Students per branch, ordered by branch.
    pub students_by_branch: BTreeMap<String, usize>,
    /// Mentors per department, ordered by department.
    pub mentors_by_department: BTreeMap<String, usize>,
}

impl RosterOverview {
    /// Builds an overview of `students` and `mentors`.
    ///
    /// # Arguments
    ///
    /// * `students` - The students on the roster
    /// * `mentors` - Every mentor, available or not
    /// * `config` - Supplies the batch size
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_roster(
        students: &[Student],
        mentors: &[Mentor],
        config: &AssignmentConfig,
    ) -> Self {
        let available: Vec<&Mentor> = mentors.iter().filter(|m| m.availability).collect();
        let total_capacity: usize = available.iter().map(|m| m.max_students).sum();

        let capacity_utilization: f64 = if total_capacity == 0 {
            0.0
        } else {
            students.len() as f64 / total_capacity as f64
        };

        let batches_needed: usize = if config.batch_size == 0 {
            0
        } else {
            students.len().div_ceil(config.batch_size)
        };

        let mut students_by_branch: BTreeMap<String, usize> = BTreeMap::new();
        for student in students {
            *students_by_branch.entry(student.branch.clone()).or_default() += 1;
        }

        let mut mentors_by_department: BTreeMap<String, usize> = BTreeMap::new();
        for mentor in mentors {
            *mentors_by_department
                .entry(mentor.department.clone())
                .or_default() += 1;
        }

        Self {
            total_students: students.len(),
            total_mentors: mentors.len(),
            available_mentors: available.len(),
            total_capacity,
            capacity_utilization,
            batch_size: config.batch_size,
            batches_needed,
            students_by_branch,
            mentors_by_department,
        }
    }
}
