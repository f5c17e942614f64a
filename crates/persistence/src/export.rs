// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report exports.
//!
//! Every report is written to the reports directory under a name that
//! carries a `YYYYMMDD_HHMMSS` timestamp.

use crate::error::PersistenceError;
use mentor_alloc_domain::{Assignment, AssignmentSummary, Mentor, Student};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing::info;

const FILE_STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year][month][day]_[hour][minute][second]");

const DISPLAY_STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

const PLACEHOLDER: &str = "N/A";

/// Writes assignment reports into a directory.
#[derive(Debug, Clone)]
pub struct ReportExporter {
    reports_dir: PathBuf,
}

impl ReportExporter {
    /// Creates an exporter writing into `reports_dir`. The directory is
    /// created on first export.
    #[must_use]
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            reports_dir: reports_dir.into(),
        }
    }

    /// Returns the directory reports are written to.
    #[must_use]
    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    fn report_path(&self, prefix: &str, extension: &str) -> Result<PathBuf, PersistenceError> {
        std::fs::create_dir_all(&self.reports_dir)
            .map_err(|e| PersistenceError::io(&self.reports_dir, e))?;
        let stamp: String = OffsetDateTime::now_utc().format(FILE_STAMP)?;
        Ok(self
            .reports_dir
            .join(format!("{prefix}_{stamp}.{extension}")))
    }

    /// Writes the summary report as CSV.
    ///
    /// The report holds the generation time, the summary figures, one row
    /// per assignment with its roll numbers in ascending order, and the
    /// unassigned roll numbers if there are any.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn export_summary_csv(
        &self,
        summary: &AssignmentSummary,
    ) -> Result<PathBuf, PersistenceError> {
        let path: PathBuf = self.report_path("assignment_summary", "csv")?;
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&path)
            .map_err(|e| PersistenceError::csv(&path, e))?;

        let generated: String = summary.created_date().format(DISPLAY_STAMP)?;
        let average: String = format!("{:.2}", summary.students_per_mentor_avg());

        let mut rows: Vec<Vec<String>> = vec![
            vec![String::from("Assignment Summary Report")],
            vec![String::from("Generated on:"), generated],
            Vec::new(),
            vec![String::from("Summary Statistics")],
            vec![
                String::from("Total Students:"),
                summary.total_students().to_string(),
            ],
            vec![
                String::from("Total Mentors:"),
                summary.total_mentors().to_string(),
            ],
            vec![
                String::from("Total Assignments:"),
                summary.total_assignments().to_string(),
            ],
            vec![String::from("Average Students per Mentor:"), average],
            vec![
                String::from("Unassigned Students:"),
                summary.unassigned_students().len().to_string(),
            ],
            Vec::new(),
            vec![String::from("Assignment Details")],
            vec![
                String::from("Batch Number"),
                String::from("Mentor ID"),
                String::from("Student Count"),
                String::from("Student Roll Numbers"),
            ],
        ];

        for assignment in summary.assignments() {
            let mut roll_numbers: Vec<u32> = assignment.student_roll_numbers().to_vec();
            roll_numbers.sort_unstable();
            rows.push(vec![
                assignment.batch_number().to_string(),
                assignment.mentor_id().to_string(),
                assignment.student_count().to_string(),
                join_roll_numbers(&roll_numbers),
            ]);
        }

        if !summary.unassigned_students().is_empty() {
            rows.push(Vec::new());
            rows.push(vec![String::from("Unassigned Students")]);
            rows.push(vec![
                String::from("Roll Numbers:"),
                join_roll_numbers(summary.unassigned_students()),
            ]);
        }

        for row in &rows {
            writer
                .write_record(row)
                .map_err(|e| PersistenceError::csv(&path, e))?;
        }
        writer.flush().map_err(|e| PersistenceError::io(&path, e))?;

        info!(path = %path.display(), "Assignment summary exported to CSV");
        Ok(path)
    }

    /// Writes one row per student, in roll number order, with the assigned
    /// mentor's name and department.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn export_detailed_csv(
        &self,
        students: &[Student],
        mentors: &[Mentor],
    ) -> Result<PathBuf, PersistenceError> {
        let path: PathBuf = self.report_path("detailed_assignments", "csv")?;
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&path)
            .map_err(|e| PersistenceError::csv(&path, e))?;

        let generated: String = OffsetDateTime::now_utc().format(DISPLAY_STAMP)?;
        let by_id: HashMap<&str, &Mentor> = mentors
            .iter()
            .map(|mentor| (mentor.faculty_id.as_str(), mentor))
            .collect();

        let mut ordered: Vec<&Student> = students.iter().collect();
        ordered.sort_by_key(|s| s.roll_no);

        let mut rows: Vec<Vec<String>> = vec![
            vec![String::from("Detailed Assignment Report")],
            vec![String::from("Generated on:"), generated],
            Vec::new(),
            vec![String::from("Student-Mentor Assignments")],
            [
                "Roll No",
                "Student Name",
                "Branch",
                "Year",
                "Mentor ID",
                "Mentor Name",
                "Department",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        ];

        for student in ordered {
            let mentor: Option<&Mentor> = student
                .assigned_mentor_id
                .as_deref()
                .and_then(|id| by_id.get(id).copied());
            rows.push(vec![
                student.roll_no.to_string(),
                student.name.clone(),
                student.branch.clone(),
                student.year.to_string(),
                student
                    .assigned_mentor_id
                    .clone()
                    .unwrap_or_else(|| String::from("Unassigned")),
                mentor.map_or_else(|| String::from(PLACEHOLDER), |m| m.name.clone()),
                mentor.map_or_else(|| String::from(PLACEHOLDER), |m| m.department.clone()),
            ]);
        }

        for row in &rows {
            writer
                .write_record(row)
                .map_err(|e| PersistenceError::csv(&path, e))?;
        }
        writer.flush().map_err(|e| PersistenceError::io(&path, e))?;

        info!(path = %path.display(), "Detailed assignments exported to CSV");
        Ok(path)
    }

    /// Writes the summary as pretty-printed JSON. Each assignment carries
    /// its `student_count`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn export_json(&self, summary: &AssignmentSummary) -> Result<PathBuf, PersistenceError> {
        let path: PathBuf = self.report_path("assignment_summary", "json")?;
        let file: File = File::create(&path).map_err(|e| PersistenceError::io(&path, e))?;

        serde_json::to_writer_pretty(BufWriter::new(file), &SummaryDocument::from(summary))?;

        info!(path = %path.display(), "Assignment summary exported to JSON");
        Ok(path)
    }

    /// Writes every report and returns their paths.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub fn export_all(
        &self,
        students: &[Student],
        mentors: &[Mentor],
        summary: &AssignmentSummary,
    ) -> Result<Vec<PathBuf>, PersistenceError> {
        Ok(vec![
            self.export_summary_csv(summary)?,
            self.export_detailed_csv(students, mentors)?,
            self.export_json(summary)?,
        ])
    }
}

fn join_roll_numbers(roll_numbers: &[u32]) -> String {
    roll_numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(", ")
}

/// JSON layout of an exported summary.
#[derive(Debug, Serialize)]
struct SummaryDocument<'a> {
    total_students: usize,
    total_mentors: usize,
    total_assignments: usize,
    students_per_mentor_avg: f64,
    unassigned_students: &'a [u32],
    assignments: Vec<AssignmentDocument<'a>>,
    #[serde(with = "time::serde::rfc3339")]
    created_date: OffsetDateTime,
}

#[derive(Debug, Serialize)]
struct AssignmentDocument<'a> {
    mentor_id: &'a str,
    student_roll_numbers: &'a [u32],
    #[serde(with = "time::serde::rfc3339")]
    assignment_date: OffsetDateTime,
    batch_number: usize,
    notes: Option<&'a str>,
    student_count: usize,
}

impl<'a> From<&'a AssignmentSummary> for SummaryDocument<'a> {
    fn from(summary: &'a AssignmentSummary) -> Self {
        Self {
            total_students: summary.total_students(),
            total_mentors: summary.total_mentors(),
            total_assignments: summary.total_assignments(),
            students_per_mentor_avg: summary.students_per_mentor_avg(),
            unassigned_students: summary.unassigned_students(),
            assignments: summary
                .assignments()
                .iter()
                .map(AssignmentDocument::from)
                .collect(),
            created_date: summary.created_date(),
        }
    }
}

impl<'a> From<&'a Assignment> for AssignmentDocument<'a> {
    fn from(assignment: &'a Assignment) -> Self {
        Self {
            mentor_id: assignment.mentor_id(),
            student_roll_numbers: assignment.student_roll_numbers(),
            assignment_date: assignment.assignment_date(),
            batch_number: assignment.batch_number(),
            notes: assignment.notes(),
            student_count: assignment.student_count(),
        }
    }
}
