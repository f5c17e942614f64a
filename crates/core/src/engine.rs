// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The batch assignment run.
//!
//! Students are split into fixed-size batches and each batch is handed to
//! the next available mentor. The trailing remainder is either folded into
//! the last batch or given a mentor of its own, depending on
//! `remainder_threshold`.

use crate::error::CoreError;
use mentor_alloc_domain::{
    Assignment, AssignmentConfig, AssignmentRules, AssignmentSummary, ConsistencyReport, Mentor,
    Student, validate_data_consistency,
};
use time::OffsetDateTime;
use tracing::{debug, error, info, warn};

/// Assigns every student to a mentor in batches.
///
/// Students and mentors are updated in place: each placed student gets its
/// `assigned_mentor_id`, and each available mentor's `assigned_students` is
/// rebuilt from scratch. Every student's previous `assigned_mentor_id` is
/// cleared first, so a student left unassigned names no mentor, and
/// unavailable mentors drop these students from their lists.
///
/// # Arguments
///
/// * `students` - The students to assign
/// * `mentors` - Every mentor, available or not
/// * `config` - The policy in effect
///
/// # Returns
///
/// * `Ok(AssignmentSummary)` describing the assignments created and the
///   students left without a mentor
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - The roster fails validation or feasibility checks
/// - No mentor is available
pub fn assign_students_to_mentors(
    students: &mut [Student],
    mentors: &mut [Mentor],
    config: &AssignmentConfig,
) -> Result<AssignmentSummary, CoreError> {
    info!(
        students = students.len(),
        mentors = mentors.len(),
        "Starting assignment run"
    );

    config.validate()?;

    let report: ConsistencyReport = validate_data_consistency(students, mentors, config);
    if !report.is_ok() {
        error!(issues = ?report.issues, "Data validation failed");
        return Err(CoreError::ValidationFailed {
            issues: report.issues,
        });
    }
    for warning in &report.warnings {
        warn!("{}", warning);
    }

    let rules: AssignmentRules = config.assignment_rules;
    let order: Vec<usize> = student_order(students, rules.sort_by_roll_number);

    let available: Vec<usize> = mentors
        .iter()
        .enumerate()
        .filter(|(_, mentor)| mentor.availability)
        .map(|(index, _)| index)
        .collect();
    if available.is_empty() {
        return Err(CoreError::NoAvailableMentors);
    }
    info!(available = available.len(), "Found available mentors");

    for &index in &available {
        mentors[index].clear_assignments();
    }
    // Every student is placed afresh; unavailable mentors let go of them too.
    for student in students.iter_mut() {
        student.assigned_mentor_id = None;
    }
    for mentor in mentors.iter_mut().filter(|m| !m.availability) {
        for student in students.iter() {
            mentor.remove_student(student.roll_no);
        }
    }

    let batch_size: usize = config.batch_size;
    let batches = order.chunks_exact(batch_size);
    let remainder: &[usize] = batches.remainder();
    let complete_batches: usize = order.len() / batch_size;

    info!(
        complete_batches,
        batch_size,
        remainder = remainder.len(),
        "Planned batches"
    );

    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let mut assignments: Vec<Assignment> = Vec::new();
    let mut unassigned: Vec<u32> = Vec::new();
    let mut last_mentor: Option<usize> = None;
    let mut cursor: usize = 0;

    for (batch_index, batch) in batches.enumerate() {
        let batch_number: usize = batch_index + 1;
        debug!(batch_number, size = batch.len(), "Processing batch");

        if cursor >= available.len() {
            if rules.wrap_around_mentors {
                cursor = 0;
                warn!("Wrapping around mentors; some mentors will receive multiple batches");
            } else {
                // Exhaustion persists: the cursor stays past the end.
                unassigned.extend(batch.iter().map(|&index| students[index].roll_no));
                warn!(
                    batch_number,
                    students = batch.len(),
                    "No more mentors available; batch left unassigned"
                );
                continue;
            }
        }

        let mentor_index: usize = available[cursor];
        let roll_numbers: Vec<u32> = place(students, &mut mentors[mentor_index], batch);
        let assignment: Assignment = Assignment::new(
            &mentors[mentor_index].faculty_id,
            roll_numbers,
            now,
            batch_number,
        )?
        .with_notes(format!("Batch assignment with {} students", batch.len()));

        info!(
            batch_number,
            mentor_id = %mentors[mentor_index].faculty_id,
            students = batch.len(),
            "Assigned batch"
        );

        assignments.push(assignment);
        last_mentor = Some(mentor_index);
        cursor += 1;
    }

    if !remainder.is_empty() {
        if remainder.len() <= rules.remainder_threshold {
            fold_remainder(
                students,
                mentors,
                remainder,
                &mut assignments,
                last_mentor,
                &rules,
                &mut unassigned,
            );
        } else if let Some(&mentor_index) = available.get(cursor) {
            let roll_numbers: Vec<u32> = place(students, &mut mentors[mentor_index], remainder);
            let assignment: Assignment = Assignment::new(
                &mentors[mentor_index].faculty_id,
                roll_numbers,
                now,
                complete_batches + 1,
            )?
            .with_notes(format!(
                "Remainder batch assignment with {} students",
                remainder.len()
            ));

            info!(
                mentor_id = %mentors[mentor_index].faculty_id,
                students = remainder.len(),
                threshold = rules.remainder_threshold,
                "Assigned remainder to a new mentor"
            );
            assignments.push(assignment);
        } else {
            unassigned.extend(remainder.iter().map(|&index| students[index].roll_no));
            warn!(
                students = remainder.len(),
                "No more mentors available for remainder students"
            );
        }
    }

    let summary: AssignmentSummary =
        AssignmentSummary::new(students.len(), mentors.len(), assignments, unassigned, now);

    info!(
        assignments = summary.total_assignments(),
        unassigned = summary.unassigned_students().len(),
        "Assignment run completed"
    );

    Ok(summary)
}

/// Folds a small remainder into the most recent assignment.
///
/// The fold is all-or-nothing: if the mentor would exceed capacity and
/// overload is disallowed, the whole remainder is left unassigned.
fn fold_remainder(
    students: &mut [Student],
    mentors: &mut [Mentor],
    remainder: &[usize],
    assignments: &mut [Assignment],
    last_mentor: Option<usize>,
    rules: &AssignmentRules,
    unassigned: &mut Vec<u32>,
) {
    let (Some(assignment), Some(mentor_index)) = (assignments.last_mut(), last_mentor) else {
        unassigned.extend(remainder.iter().map(|&index| students[index].roll_no));
        warn!(
            students = remainder.len(),
            "No previous assignment to fold remainder students into"
        );
        return;
    };

    let mentor: &mut Mentor = &mut mentors[mentor_index];
    let total_after: usize = mentor.student_count() + remainder.len();

    if total_after > mentor.max_students && !rules.allow_mentor_overload {
        unassigned.extend(remainder.iter().map(|&index| students[index].roll_no));
        warn!(
            mentor_id = %mentor.faculty_id,
            students = remainder.len(),
            max_students = mentor.max_students,
            "Remainder would exceed mentor capacity; left unassigned"
        );
        return;
    }

    let roll_numbers: Vec<u32> = place(students, mentor, remainder);
    assignment.extend(&roll_numbers);
    assignment.set_notes(format!(
        "Batch assignment with {} students (includes {} remainder students)",
        assignment.student_count(),
        remainder.len()
    ));

    if total_after > mentor.max_students {
        warn!(
            mentor_id = %mentor.faculty_id,
            students = total_after,
            max_students = mentor.max_students,
            "Mentor exceeds normal capacity"
        );
    }

    info!(
        mentor_id = %mentor.faculty_id,
        students = remainder.len(),
        "Folded remainder into last batch"
    );
}

/// Gives `batch` to `mentor` and returns the roll numbers placed.
fn place(students: &mut [Student], mentor: &mut Mentor, batch: &[usize]) -> Vec<u32> {
    let roll_numbers: Vec<u32> = batch.iter().map(|&index| students[index].roll_no).collect();
    for &index in batch {
        students[index].assigned_mentor_id = Some(mentor.faculty_id.clone());
    }
    mentor.assigned_students.extend_from_slice(&roll_numbers);
    roll_numbers
}

/// Returns the order in which students are batched, as indices into
/// `students`. Sorting is stable, so equal roll numbers keep input order.
fn student_order(students: &[Student], sort_by_roll_number: bool) -> Vec<usize> {
    let mut order: Vec<usize> = (0..students.len()).collect();
    if sort_by_roll_number {
        order.sort_by_key(|&index| students[index].roll_no);
        debug!("Students sorted by roll number");
    }
    order
}

/// Clears every assignment and runs a fresh assignment.
///
/// When `mentor_to_remove` names a mentor, that mentor is marked
/// unavailable first and receives no students in the new run. An unknown
/// faculty ID is logged and otherwise ignored.
///
/// # Arguments
///
/// * `students` - The students to reassign
/// * `mentors` - Every mentor, available or not
/// * `mentor_to_remove` - Faculty ID of a mentor to take out of rotation
/// * `config` - The policy in effect
///
/// # Errors
///
/// Returns any error from [`assign_students_to_mentors`].
pub fn reassign_students(
    students: &mut [Student],
    mentors: &mut [Mentor],
    mentor_to_remove: Option<&str>,
    config: &AssignmentConfig,
) -> Result<AssignmentSummary, CoreError> {
    info!(mentor_to_remove, "Starting reassignment");

    if let Some(faculty_id) = mentor_to_remove {
        match mentors.iter_mut().find(|m| m.faculty_id == faculty_id) {
            Some(mentor) => {
                mentor.availability = false;
                info!(mentor_id = faculty_id, "Removed mentor from assignments");
            }
            None => warn!(mentor_id = faculty_id, "Mentor to remove was not found"),
        }
    }

    for student in students.iter_mut() {
        student.assigned_mentor_id = None;
    }
    for mentor in mentors.iter_mut() {
        mentor.clear_assignments();
    }

    assign_students_to_mentors(students, mentors, config)
}
