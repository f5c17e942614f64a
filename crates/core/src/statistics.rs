// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mentor_alloc_domain::{Assignment, AssignmentSummary};
use serde::Serialize;

/// Derived figures for an assignment summary.
///
/// Ratios and percentages are rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentStatistics {
    /// Number of students in the run.
    pub total_students: usize,
    /// Number of mentors supplied.
    pub total_mentors: usize,
    /// Number of assignments created.
    pub total_assignments: usize,
    /// Mean students per assignment.
    pub students_per_mentor_avg: f64,
    /// Number of students left without a mentor.
    pub unassigned_count: usize,
    /// Percentage of students that received a mentor.
    pub assignment_efficiency: f64,
    /// Assignments as a percentage of mentors supplied.
    pub mentor_utilization: f64,
    /// One row per assignment, in summary order.
    pub batch_details: Vec<BatchDetail>,
}

/// One row of the per-batch breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchDetail {
    /// The batch number of the assignment.
    pub batch_number: usize,
    /// The mentor holding the batch.
    pub mentor_id: String,
    /// Number of students in the batch.
    pub student_count: usize,
    /// Lowest and highest roll number, if the batch holds any student.
    pub roll_range: Option<(u32, u32)>,
}

impl From<&Assignment> for BatchDetail {
    fn from(assignment: &Assignment) -> Self {
        Self {
            batch_number: assignment.batch_number(),
            mentor_id: assignment.mentor_id().to_string(),
            student_count: assignment.student_count(),
            roll_range: assignment.roll_range(),
        }
    }
}

/// Computes statistics for `summary`.
///
/// This function is pure; calling it twice on the same summary yields
/// identical values.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn get_assignment_statistics(summary: &AssignmentSummary) -> AssignmentStatistics {
    let total_students: usize = summary.total_students();
    let total_mentors: usize = summary.total_mentors();
    let unassigned_count: usize = summary.unassigned_students().len();

    let assignment_efficiency: f64 = if total_students == 0 {
        0.0
    } else {
        total_students.saturating_sub(unassigned_count) as f64 / total_students as f64 * 100.0
    };

    let mentor_utilization: f64 = if total_mentors == 0 {
        0.0
    } else {
        summary.total_assignments() as f64 / total_mentors as f64 * 100.0
    };

    AssignmentStatistics {
        total_students,
        total_mentors,
        total_assignments: summary.total_assignments(),
        students_per_mentor_avg: round_to_hundredths(summary.students_per_mentor_avg()),
        unassigned_count,
        assignment_efficiency: round_to_hundredths(assignment_efficiency),
        mentor_utilization: round_to_hundredths(mentor_utilization),
        batch_details: summary.assignments().iter().map(BatchDetail::from).collect(),
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
