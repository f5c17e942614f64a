// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod engine;
mod error;
mod incremental;
mod overview;
mod statistics;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use engine::{assign_students_to_mentors, reassign_students};
pub use error::CoreError;
pub use incremental::add_new_students;
pub use overview::RosterOverview;
pub use statistics::{AssignmentStatistics, BatchDetail, get_assignment_statistics};
