// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The work behind each subcommand.
//!
//! Every flow loads what it needs from the data directory, hands it to the
//! engine, prints the outcome and writes the results back.

use crate::report::{OverviewReport, StatisticsReport, SummaryReport};
use crate::sample::{sample_mentors, sample_students};
use color_eyre::Result;
use color_eyre::eyre::bail;
use mentor_alloc::{
    RosterOverview, add_new_students, assign_students_to_mentors, get_assignment_statistics,
    reassign_students,
};
use mentor_alloc_domain::{AssignmentConfig, AssignmentSummary, Mentor, Student, ValidationRules};
use mentor_alloc_persistence::{
    CsvStore, LoadOutcome, ReportExporter, load_students, restore_mentor_assignments,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Everything a command needs: the effective configuration and where data
/// and reports live.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub config: AssignmentConfig,
    pub store: CsvStore,
    pub exporter: ReportExporter,
}

/// The outcome of a command that changed assignments.
#[derive(Debug)]
pub struct RunOutcome {
    pub summary: AssignmentSummary,
    pub students: Vec<Student>,
    pub mentors: Vec<Mentor>,
    pub reports: Vec<PathBuf>,
}

impl Workspace {
    /// Writes the sample rosters into the data directory, replacing any
    /// existing files.
    ///
    /// # Errors
    ///
    /// Returns an error if the files cannot be written.
    pub fn write_sample_data(&self) -> Result<()> {
        let students: Vec<Student> = sample_students()?;
        let mentors: Vec<Mentor> = sample_mentors()?;
        self.store.save_students(&students)?;
        self.store.save_mentors(&mentors)?;
        info!(
            students = students.len(),
            mentors = mentors.len(),
            "Sample data written"
        );
        println!(
            "Wrote {} students to {}",
            students.len(),
            self.store.students_path().display()
        );
        println!(
            "Wrote {} mentors to {}",
            mentors.len(),
            self.store.mentors_path().display()
        );
        Ok(())
    }

    /// Loads both rosters and rebuilds each mentor's student list from the
    /// students' recorded mentors.
    fn load_roster(&self) -> Result<(Vec<Student>, Vec<Mentor>)> {
        let rules: &ValidationRules = &self.config.validation_rules;
        let students: LoadOutcome<Student> = self.store.load_students(rules)?;
        let mentors: LoadOutcome<Mentor> = self.store.load_mentors(rules)?;

        report_skipped("student", &self.store.students_path(), &students);
        report_skipped("mentor", &self.store.mentors_path(), &mentors);

        let students: Vec<Student> = students.records;
        let mut mentors: Vec<Mentor> = mentors.records;
        restore_mentor_assignments(&students, &mut mentors);
        Ok((students, mentors))
    }

    /// Prints the outcome, saves both rosters and writes every report.
    fn finish(
        &self,
        summary: AssignmentSummary,
        students: Vec<Student>,
        mentors: Vec<Mentor>,
    ) -> Result<RunOutcome> {
        print!(
            "{}",
            SummaryReport {
                summary: &summary,
                mentors: &mentors,
            }
        );
        print!("{}", StatisticsReport(&get_assignment_statistics(&summary)));

        self.store.save_students(&students)?;
        self.store.save_mentors(&mentors)?;

        let reports: Vec<PathBuf> = self.exporter.export_all(&students, &mentors, &summary)?;
        for path in &reports {
            println!("Report written to {}", path.display());
        }

        Ok(RunOutcome {
            summary,
            students,
            mentors,
            reports,
        })
    }

    /// Runs a full assignment over the rosters in the data directory.
    ///
    /// # Arguments
    ///
    /// * `with_sample_data` - Write the sample rosters first
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either roster is empty after loading
    /// - The engine rejects the roster
    /// - Results or reports cannot be written
    pub fn assign(&self, with_sample_data: bool) -> Result<RunOutcome> {
        if with_sample_data {
            self.write_sample_data()?;
        }

        let (mut students, mut mentors) = self.load_roster()?;
        if students.is_empty() || mentors.is_empty() {
            bail!(
                "No students or mentors found in {} and {}",
                self.store.students_path().display(),
                self.store.mentors_path().display()
            );
        }

        let overview: RosterOverview =
            RosterOverview::from_roster(&students, &mentors, &self.config);
        print!("{}", OverviewReport(&overview));

        let summary: AssignmentSummary =
            assign_students_to_mentors(&mut students, &mut mentors, &self.config)?;
        self.finish(summary, students, mentors)
    }

    /// Places the students listed in `new_students_file` with mentors that
    /// still have room. Existing assignments are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file holds no valid students or no mentors are loaded
    /// - A new roll number is already taken
    /// - Results or reports cannot be written
    pub fn add(&self, new_students_file: &Path) -> Result<RunOutcome> {
        let (existing, mut mentors) = self.load_roster()?;
        if mentors.is_empty() {
            bail!("No mentors found in {}", self.store.mentors_path().display());
        }

        let new_students: LoadOutcome<Student> =
            load_students(new_students_file, &self.config.validation_rules)?;
        report_skipped("student", new_students_file, &new_students);
        if new_students.records.is_empty() {
            bail!("No valid students found in {}", new_students_file.display());
        }

        let (summary, students) =
            add_new_students(&existing, new_students.records, &mut mentors, &self.config)?;
        self.finish(summary, students, mentors)
    }

    /// Clears every assignment and runs again, optionally taking one
    /// mentor out of rotation first.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either roster is empty after loading
    /// - The engine rejects the roster
    /// - Results or reports cannot be written
    pub fn reassign(&self, mentor_to_remove: Option<&str>) -> Result<RunOutcome> {
        let (mut students, mut mentors) = self.load_roster()?;
        if students.is_empty() || mentors.is_empty() {
            bail!(
                "No students or mentors found in {} and {}",
                self.store.students_path().display(),
                self.store.mentors_path().display()
            );
        }

        let summary: AssignmentSummary =
            reassign_students(&mut students, &mut mentors, mentor_to_remove, &self.config)?;
        self.finish(summary, students, mentors)
    }

    /// Prints the effective configuration as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized.
    pub fn show_config(&self) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(&self.config)?);
        Ok(())
    }
}

fn report_skipped<T>(kind: &str, path: &Path, outcome: &LoadOutcome<T>) {
    if outcome.skipped.is_empty() {
        return;
    }
    let lines: Vec<usize> = outcome.skipped.iter().map(|row| row.line).collect();
    warn!(
        path = %path.display(),
        skipped = outcome.skipped.len(),
        lines = ?lines,
        "Some {} rows were skipped",
        kind
    );
}
