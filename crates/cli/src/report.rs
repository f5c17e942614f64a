// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of overviews, results and statistics.

use mentor_alloc::{AssignmentStatistics, RosterOverview};
use mentor_alloc_domain::{AssignmentSummary, Mentor};
use std::collections::HashMap;
use std::fmt;

const RULE_WIDTH: usize = 60;

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))
}

/// The roster as seen before an assignment run.
pub struct OverviewReport<'a>(pub &'a RosterOverview);

impl fmt::Display for OverviewReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let overview: &RosterOverview = self.0;
        heading(f, "ROSTER OVERVIEW")?;
        writeln!(f, "Total students: {}", overview.total_students)?;
        writeln!(
            f,
            "Mentors: {} ({} available)",
            overview.total_mentors, overview.available_mentors
        )?;
        writeln!(f, "Total capacity: {}", overview.total_capacity)?;
        writeln!(
            f,
            "Capacity utilization: {:.1}%",
            overview.capacity_utilization * 100.0
        )?;
        writeln!(
            f,
            "Batches needed: {} (batch size {})",
            overview.batches_needed, overview.batch_size
        )?;

        writeln!(f, "Students by branch:")?;
        for (branch, count) in &overview.students_by_branch {
            writeln!(f, "  {branch}: {count}")?;
        }
        writeln!(f, "Mentors by department:")?;
        for (department, count) in &overview.mentors_by_department {
            writeln!(f, "  {department}: {count}")?;
        }
        Ok(())
    }
}

/// The assignments produced by a run, one line per batch.
pub struct SummaryReport<'a> {
    pub summary: &'a AssignmentSummary,
    pub mentors: &'a [Mentor],
}

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: HashMap<&str, &str> = self
            .mentors
            .iter()
            .map(|m| (m.faculty_id.as_str(), m.name.as_str()))
            .collect();

        heading(f, "ASSIGNMENT RESULTS")?;
        for assignment in self.summary.assignments() {
            let name: &str = names
                .get(assignment.mentor_id())
                .copied()
                .unwrap_or("Unknown mentor");
            write!(
                f,
                "Batch {}: {} ({}) - {} students",
                assignment.batch_number(),
                assignment.mentor_id(),
                name,
                assignment.student_count()
            )?;
            if let Some((first, last)) = assignment.roll_range() {
                write!(f, ", roll numbers {first}-{last}")?;
            }
            writeln!(f)?;
        }

        let unassigned: &[u32] = self.summary.unassigned_students();
        if unassigned.is_empty() {
            writeln!(f, "Every student has a mentor.")
        } else {
            let rolls: Vec<String> = unassigned.iter().map(ToString::to_string).collect();
            writeln!(
                f,
                "Unassigned students ({}): {}",
                unassigned.len(),
                rolls.join(", ")
            )
        }
    }
}

/// Derived statistics of a run.
pub struct StatisticsReport<'a>(pub &'a AssignmentStatistics);

impl fmt::Display for StatisticsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats: &AssignmentStatistics = self.0;
        heading(f, "STATISTICS")?;
        writeln!(f, "Total assignments: {}", stats.total_assignments)?;
        writeln!(
            f,
            "Average students per mentor: {:.2}",
            stats.students_per_mentor_avg
        )?;
        writeln!(f, "Unassigned students: {}", stats.unassigned_count)?;
        writeln!(
            f,
            "Assignment efficiency: {:.2}%",
            stats.assignment_efficiency
        )?;
        writeln!(f, "Mentor utilization: {:.2}%", stats.mentor_utilization)
    }
}
