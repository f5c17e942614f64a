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

mod config;
mod error;
mod record;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use config::{
    AssignmentConfig, AssignmentRules, DEFAULT_BATCH_SIZE, DEFAULT_REMAINDER_THRESHOLD,
    ValidationRules,
};
pub use error::DomainError;
pub use record::{MentorRecord, StudentRecord};
pub use types::{
    ACADEMIC_YEARS, Assignment, AssignmentSummary, DEFAULT_MAX_STUDENTS, Mentor, Student,
};
pub use validation::{
    ConsistencyReport, is_valid_email, is_valid_phone, validate_assignment_feasibility,
    validate_data_consistency, validate_mentor, validate_student,
};
