// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use mentor_alloc_domain::{Assignment, AssignmentConfig, AssignmentSummary, Mentor, Student};
use std::collections::HashSet;
use time::OffsetDateTime;
use tracing::{info, warn};

/// Places newly enrolled students with mentors that still have capacity.
///
/// Mentors with the fewest free slots are filled first, so nearly full
/// mentors are topped up before fresh capacity is touched. When capacity
/// runs out and overload is allowed, every remaining student goes to the
/// first available mentor.
///
/// Existing students and their assignments are left untouched. The
/// summary is rebuilt from each mentor's current student list, one
/// assignment per mentor holding at least one student, numbered by the
/// mentor's position in `mentors`.
///
/// # Arguments
///
/// * `existing_students` - Students already on the roster
/// * `new_students` - Students to add
/// * `mentors` - Every mentor, with their current assignments
/// * `config` - The policy in effect
///
/// # Returns
///
/// * `Ok((summary, students))` where `students` is the existing students
///   followed by the new ones, placed students before unplaced ones
///
/// # Errors
///
/// Returns `CoreError::DuplicateRollNumber` if a new student's roll number
/// is already taken, either by an existing student or by another new
/// student. Nothing is modified in that case.
pub fn add_new_students(
    existing_students: &[Student],
    mut new_students: Vec<Student>,
    mentors: &mut [Mentor],
    config: &AssignmentConfig,
) -> Result<(AssignmentSummary, Vec<Student>), CoreError> {
    info!(
        new_students = new_students.len(),
        "Adding new students to existing assignments"
    );

    let mut taken: HashSet<u32> = existing_students.iter().map(|s| s.roll_no).collect();
    if let Some(duplicate) = new_students.iter().find(|s| !taken.insert(s.roll_no)) {
        return Err(CoreError::DuplicateRollNumber(duplicate.roll_no));
    }

    if config.assignment_rules.sort_by_roll_number {
        new_students.sort_by_key(|s| s.roll_no);
    }

    let mut candidates: Vec<usize> = mentors
        .iter()
        .enumerate()
        .filter(|(_, mentor)| mentor.availability && mentor.available_slots() > 0)
        .map(|(index, _)| index)
        .collect();
    candidates.sort_by_key(|&index| mentors[index].available_slots());

    let mut placed: usize = 0;
    for index in candidates {
        if placed == new_students.len() {
            break;
        }
        let mentor: &mut Mentor = &mut mentors[index];
        let take: usize = mentor.available_slots().min(new_students.len() - placed);
        for student in &mut new_students[placed..placed + take] {
            mentor.assign_student(student.roll_no)?;
            student.assigned_mentor_id = Some(mentor.faculty_id.clone());
        }
        placed += take;
        info!(
            mentor_id = %mentor.faculty_id,
            students = take,
            "Assigned new students"
        );
    }

    if placed < new_students.len()
        && config.assignment_rules.allow_mentor_overload
        && let Some(mentor) = mentors.iter_mut().find(|m| m.availability)
    {
        let overflow: usize = new_students.len() - placed;
        for student in &mut new_students[placed..] {
            mentor.force_assign_student(student.roll_no);
            student.assigned_mentor_id = Some(mentor.faculty_id.clone());
        }
        placed = new_students.len();
        warn!(
            mentor_id = %mentor.faculty_id,
            students = overflow,
            "Assigned additional students beyond capacity"
        );
    }

    let unassigned: Vec<u32> = new_students[placed..].iter().map(|s| s.roll_no).collect();
    if !unassigned.is_empty() {
        warn!(
            students = unassigned.len(),
            "New students left without a mentor"
        );
    }

    let mut all_students: Vec<Student> = existing_students.to_vec();
    all_students.extend(new_students);

    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let assignments: Vec<Assignment> = current_assignments(mentors, now)?;
    let summary: AssignmentSummary =
        AssignmentSummary::new(all_students.len(), mentors.len(), assignments, unassigned, now);

    Ok((summary, all_students))
}

/// Rebuilds one assignment per mentor from its current student list.
fn current_assignments(
    mentors: &[Mentor],
    now: OffsetDateTime,
) -> Result<Vec<Assignment>, CoreError> {
    let mut assignments: Vec<Assignment> = Vec::new();
    for (index, mentor) in mentors.iter().enumerate() {
        if mentor.assigned_students.is_empty() {
            continue;
        }
        let assignment: Assignment = Assignment::new(
            &mentor.faculty_id,
            mentor.assigned_students.clone(),
            now,
            index + 1,
        )?
        .with_notes(format!(
            "Current assignment with {} students",
            mentor.student_count()
        ));
        assignments.push(assignment);
    }
    Ok(assignments)
}
