// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the mentor allocation system.
//!
//! Rosters live in two CSV files inside a data directory:
//!
//! - `students.csv`: `roll_no,name,branch,year,email,phone,assigned_mentor_id`
//! - `mentors.csv`: `faculty_id,name,department,email,phone,availability,max_students`
//!
//! The mentor file does not carry assigned students. After loading both
//! files, call [`restore_mentor_assignments`] to rebuild each mentor's list
//! from the student roster.
//!
//! Reports are written by [`ReportExporter`] as a summary CSV, a detailed
//! per-student CSV, and a JSON document.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod export;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use export::ReportExporter;
pub use store::{
    CsvStore, LoadOutcome, MENTORS_FILE, STUDENTS_FILE, SkippedRow, load_mentors, load_students,
    restore_mentor_assignments, save_mentors, save_students,
};
