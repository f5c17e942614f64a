// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    assignment_shape, create_mentors, create_strict_config, create_students, mentor_of,
};
use crate::{CoreError, assign_students_to_mentors};
use mentor_alloc_domain::{
    Assignment, AssignmentConfig, AssignmentSummary, DomainError, Mentor, Student,
};

#[test]
fn test_default_policy_folds_small_remainder_into_last_batch() {
    let config: AssignmentConfig = AssignmentConfig::default();
    let mut students: Vec<Student> = create_students(1, 64);
    let mut mentors: Vec<Mentor> = create_mentors(3);

    let summary: AssignmentSummary =
        assign_students_to_mentors(&mut students, &mut mentors, &config).unwrap();

    assert_eq!(summary.total_students(), 64);
    assert_eq!(summary.total_mentors(), 3);
    assert_eq!(summary.total_assignments(), 2);
    assert!(summary.unassigned_students().is_empty());

    let assignments: &[Assignment] = summary.assignments();
    assert_eq!(assignments[0].mentor_id(), "FAC001");
    assert_eq!(assignments[0].student_count(), 30);
    assert_eq!(assignments[0].roll_range(), Some((1, 30)));
    assert_eq!(assignments[1].mentor_id(), "FAC002");
    assert_eq!(assignments[1].batch_number(), 2);
    assert_eq!(assignments[1].student_count(), 34);
    assert_eq!(assignments[1].roll_range(), Some((31, 64)));
    assert_eq!(
        assignments[1].notes(),
        Some("Batch assignment with 34 students (includes 4 remainder students)")
    );

    assert_eq!(mentors[0].student_count(), 30);
    assert_eq!(mentors[1].student_count(), 34);
    assert!(mentors[1].is_overloaded());
    assert!(mentors[2].assigned_students.is_empty());

    assert!((summary.students_per_mentor_avg() - 32.0).abs() < f64::EPSILON);
    assert_eq!(mentor_of(&students, 1), Some("FAC001"));
    assert_eq!(mentor_of(&students, 64), Some("FAC002"));
}

#[test]
fn test_large_remainder_gets_its_own_mentor() {
    let config: AssignmentConfig = AssignmentConfig::default();
    let mut students: Vec<Student> = create_students(1, 73);
    let mut mentors: Vec<Mentor> = create_mentors(3);

    let summary: AssignmentSummary =
        assign_students_to_mentors(&mut students, &mut mentors, &config).unwrap();

    assert_eq!(summary.total_assignments(), 3);
    let third: &Assignment = &summary.assignments()[2];
    assert_eq!(third.batch_number(), 3);
    assert_eq!(third.mentor_id(), "FAC003");
    assert_eq!(third.student_count(), 13);
    assert_eq!(third.roll_range(), Some((61, 73)));
    assert_eq!(
        third.notes(),
        Some("Remainder batch assignment with 13 students")
    );
    assert_eq!(mentors[1].student_count(), 30);
}

#[test]
fn test_remainder_below_one_batch_without_prior_assignment_is_unassigned() {
    let config: AssignmentConfig = AssignmentConfig::default();
    let mut students: Vec<Student> = create_students(1, 10);
    let mut mentors: Vec<Mentor> = create_mentors(1);

    let summary: AssignmentSummary =
        assign_students_to_mentors(&mut students, &mut mentors, &config).unwrap();

    assert_eq!(summary.total_assignments(), 0);
    assert_eq!(summary.unassigned_students(), (1..=10).collect::<Vec<u32>>());
    assert!(summary.students_per_mentor_avg().abs() < f64::EPSILON);
    assert!(students.iter().all(|s| s.assigned_mentor_id.is_none()));
}

#[test]
fn test_remainder_above_threshold_without_full_batch_takes_first_mentor() {
    let config: AssignmentConfig = AssignmentConfig::default();
    let mut students: Vec<Student> = create_students(1, 20);
    let mut mentors: Vec<Mentor> = create_mentors(2);

    let summary: AssignmentSummary =
        assign_students_to_mentors(&mut students, &mut mentors, &config).unwrap();

    assert_eq!(summary.total_assignments(), 1);
    assert_eq!(summary.assignments()[0].batch_number(), 1);
    assert_eq!(summary.assignments()[0].mentor_id(), "FAC001");
    assert_eq!(summary.assignments()[0].student_count(), 20);
}

#[test]
fn test_fold_blocked_by_capacity_leaves_whole_remainder_unassigned() {
    let config: AssignmentConfig = create_strict_config();
    let mut students: Vec<Student> = create_students(1, 64);
    let mut mentors: Vec<Mentor> = create_mentors(3);

    let summary: AssignmentSummary =
        assign_students_to_mentors(&mut students, &mut mentors, &config).unwrap();

    assert_eq!(summary.total_assignments(), 2);
    assert_eq!(summary.assignments()[1].student_count(), 30);
    assert_eq!(summary.unassigned_students(), &[61, 62, 63, 64]);
    assert_eq!(mentors[1].student_count(), 30);
    assert!(mentors[2].assigned_students.is_empty());
    assert_eq!(mentor_of(&students, 61), None);
    assert_eq!(mentor_of(&students, 60), Some("FAC002"));
}

#[test]
fn test_fold_within_capacity_succeeds_without_overload() {
    let config: AssignmentConfig = create_strict_config();
    let mut students: Vec<Student> = create_students(1, 64);
    let mut mentors: Vec<Mentor> = create_mentors(3)
        .into_iter()
        .map(|m| m.with_max_students(34).unwrap())
        .collect();

    let summary: AssignmentSummary =
        assign_students_to_mentors(&mut students, &mut mentors, &config).unwrap();

    assert!(summary.unassigned_students().is_empty());
    assert_eq!(mentors[1].student_count(), 34);
    assert!(!mentors[1].is_overloaded());
}

#[test]
fn test_wrap_around_reuses_mentors_from_the_start() {
    let mut config: AssignmentConfig = AssignmentConfig::default();
    config.assignment_rules.wrap_around_mentors = true;
    let mut students: Vec<Student> = create_students(1, 90);
    let mut mentors: Vec<Mentor> = create_mentors(2);

    let summary: AssignmentSummary =
        assign_students_to_mentors(&mut students, &mut mentors, &config).unwrap();

    let mentor_ids: Vec<&str> = summary
        .assignments()
        .iter()
        .map(Assignment::mentor_id)
        .collect();
    assert_eq!(mentor_ids, vec!["FAC001", "FAC002", "FAC001"]);
    assert_eq!(mentors[0].student_count(), 60);
    assert_eq!(mentor_of(&students, 90), Some("FAC001"));
}

#[test]
fn test_large_remainder_after_wrapped_batches_is_unassigned() {
    let mut config: AssignmentConfig = AssignmentConfig::default();
    config.assignment_rules.wrap_around_mentors = true;
    let mut students: Vec<Student> = create_students(1, 103);
    let mut mentors: Vec<Mentor> = create_mentors(3);

    let summary: AssignmentSummary =
        assign_students_to_mentors(&mut students, &mut mentors, &config).unwrap();

    assert_eq!(summary.total_assignments(), 3);
    assert_eq!(summary.unassigned_students(), (91..=103).collect::<Vec<u32>>());
}

#[test]
fn test_students_are_batched_in_roll_order() {
    let config: AssignmentConfig = AssignmentConfig::default();
    let mut students: Vec<Student> = create_students(1, 64);
    students.reverse();
    let mut mentors: Vec<Mentor> = create_mentors(3);

    let summary: AssignmentSummary =
        assign_students_to_mentors(&mut students, &mut mentors, &config).unwrap();

    assert_eq!(
        summary.assignments()[0].student_roll_numbers(),
        (1..=30).collect::<Vec<u32>>()
    );
    // The caller's ordering is preserved.
    assert_eq!(students[0].roll_no, 64);
}

#[test]
fn test_input_order_is_kept_when_sorting_is_disabled() {
    let mut config: AssignmentConfig = AssignmentConfig::default();
    config.assignment_rules.sort_by_roll_number = false;
    let mut students: Vec<Student> = create_students(1, 64);
    students.reverse();
    let mut mentors: Vec<Mentor> = create_mentors(3);

    let summary: AssignmentSummary =
        assign_students_to_mentors(&mut students, &mut mentors, &config).unwrap();

    assert_eq!(
        summary.assignments()[0].student_roll_numbers(),
        (35..=64).rev().collect::<Vec<u32>>()
    );
    assert_eq!(mentor_of(&students, 1), Some("FAC002"));
}

#[test]
fn test_unavailable_mentors_are_skipped() {
    let config: AssignmentConfig = AssignmentConfig::default();
    let mut students: Vec<Student> = create_students(1, 60);
    let mut mentors: Vec<Mentor> = create_mentors(3);
    mentors[0].availability = false;

    let summary: AssignmentSummary =
        assign_students_to_mentors(&mut students, &mut mentors, &config).unwrap();

    let mentor_ids: Vec<&str> = summary
        .assignments()
        .iter()
        .map(Assignment::mentor_id)
        .collect();
    assert_eq!(mentor_ids, vec!["FAC002", "FAC003"]);
    assert!(mentors[0].assigned_students.is_empty());
}

#[test]
fn test_previous_assignments_of_available_mentors_are_discarded() {
    let config: AssignmentConfig = AssignmentConfig::default();
    let mut students: Vec<Student> = create_students(1, 64);
    let mut mentors: Vec<Mentor> = create_mentors(3);
    mentors[2].assigned_students = vec![999];

    assign_students_to_mentors(&mut students, &mut mentors, &config).unwrap();

    assert!(mentors[2].assigned_students.is_empty());
}

#[test]
fn test_rerun_clears_mentor_of_students_left_unassigned() {
    let mut students: Vec<Student> = create_students(1, 64);
    let mut mentors: Vec<Mentor> = create_mentors(3);
    assign_students_to_mentors(&mut students, &mut mentors, &AssignmentConfig::default())
        .unwrap();
    assert_eq!(mentor_of(&students, 64), Some("FAC002"));

    let summary: AssignmentSummary =
        assign_students_to_mentors(&mut students, &mut mentors, &create_strict_config())
            .unwrap();

    assert_eq!(summary.unassigned_students(), &[61, 62, 63, 64]);
    for roll_no in 61..=64 {
        assert_eq!(mentor_of(&students, roll_no), None);
    }
    for student in &students {
        if let Some(mentor_id) = student.assigned_mentor_id.as_deref() {
            let mentor: &Mentor = mentors.iter().find(|m| m.faculty_id == mentor_id).unwrap();
            assert!(mentor.assigned_students.contains(&student.roll_no));
        }
    }
    assert!(mentors.iter().all(|m| m.student_count() <= m.max_students));
}

#[test]
fn test_unavailable_mentor_drops_students_placed_elsewhere() {
    let mut config: AssignmentConfig = AssignmentConfig::default();
    config.assignment_rules.wrap_around_mentors = true;
    let mut students: Vec<Student> = create_students(1, 64);
    let mut mentors: Vec<Mentor> = create_mentors(3);
    assign_students_to_mentors(&mut students, &mut mentors, &config).unwrap();
    assert_eq!(mentors[0].student_count(), 30);

    mentors[0].availability = false;
    assign_students_to_mentors(&mut students, &mut mentors, &config).unwrap();

    assert!(mentors[0].assigned_students.is_empty());
    assert_eq!(mentor_of(&students, 1), Some("FAC002"));
    assert_eq!(mentor_of(&students, 64), Some("FAC003"));
}

#[test]
fn test_validation_failure_reports_issues_and_changes_nothing() {
    let config: AssignmentConfig = AssignmentConfig::default();
    let mut students: Vec<Student> = create_students(1, 10);
    students.push(Student::new(5, "Second Five", "CSE", 1).unwrap());
    let mut mentors: Vec<Mentor> = create_mentors(1);

    let result: Result<AssignmentSummary, CoreError> =
        assign_students_to_mentors(&mut students, &mut mentors, &config);

    let Err(CoreError::ValidationFailed { issues }) = result else {
        panic!("expected validation failure");
    };
    assert_eq!(
        issues,
        vec![String::from(
            "Duplicate roll numbers found in student list: 5"
        )]
    );
    assert!(students.iter().all(|s| s.assigned_mentor_id.is_none()));
    assert!(mentors[0].assigned_students.is_empty());
}

#[test]
fn test_invalid_batch_size_is_rejected() {
    let mut config: AssignmentConfig = AssignmentConfig::default();
    config.batch_size = 0;
    let mut students: Vec<Student> = create_students(1, 10);
    let mut mentors: Vec<Mentor> = create_mentors(1);

    let result: Result<AssignmentSummary, CoreError> =
        assign_students_to_mentors(&mut students, &mut mentors, &config);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidBatchSize(0)))
    );
}

#[test]
fn test_no_available_mentors_is_an_error() {
    let mut config: AssignmentConfig = AssignmentConfig::default();
    config.assignment_rules.wrap_around_mentors = true;
    let mut students: Vec<Student> = create_students(1, 10);
    let mut mentors: Vec<Mentor> = create_mentors(2);
    for mentor in &mut mentors {
        mentor.availability = false;
    }

    let result: Result<AssignmentSummary, CoreError> =
        assign_students_to_mentors(&mut students, &mut mentors, &config);

    assert_eq!(result, Err(CoreError::NoAvailableMentors));
}

#[test]
fn test_every_student_is_either_assigned_or_unassigned() {
    let config: AssignmentConfig = AssignmentConfig::default();

    for count in 1..=90 {
        let mut students: Vec<Student> = create_students(1, count);
        let mut mentors: Vec<Mentor> = create_mentors(3);

        let summary: AssignmentSummary =
            assign_students_to_mentors(&mut students, &mut mentors, &config).unwrap();

        let mut seen: Vec<u32> = summary
            .assignments()
            .iter()
            .flat_map(|a| a.student_roll_numbers().iter().copied())
            .chain(summary.unassigned_students().iter().copied())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (1..=count).collect::<Vec<u32>>(), "count {count}");
        assert_eq!(
            summary.total_assigned() + summary.unassigned_students().len(),
            count as usize
        );
    }
}

#[test]
fn test_capacity_is_respected_without_overload() {
    let config: AssignmentConfig = create_strict_config();

    for count in 1..=90 {
        let mut students: Vec<Student> = create_students(1, count);
        let mut mentors: Vec<Mentor> = create_mentors(3);

        assign_students_to_mentors(&mut students, &mut mentors, &config).unwrap();

        for mentor in &mentors {
            assert!(
                mentor.student_count() <= mentor.max_students,
                "count {count}, mentor {}",
                mentor.faculty_id
            );
        }
    }
}

#[test]
fn test_identical_inputs_produce_identical_assignments() {
    let config: AssignmentConfig = AssignmentConfig::default();
    let students: Vec<Student> = create_students(1, 73);
    let mentors: Vec<Mentor> = create_mentors(3);

    let mut first_students: Vec<Student> = students.clone();
    let mut first_mentors: Vec<Mentor> = mentors.clone();
    let first: AssignmentSummary =
        assign_students_to_mentors(&mut first_students, &mut first_mentors, &config).unwrap();

    let mut second_students: Vec<Student> = students;
    let mut second_mentors: Vec<Mentor> = mentors;
    let second: AssignmentSummary =
        assign_students_to_mentors(&mut second_students, &mut second_mentors, &config).unwrap();

    assert_eq!(assignment_shape(&first), assignment_shape(&second));
    assert_eq!(first_students, second_students);
    assert_eq!(first_mentors, second_mentors);
}
