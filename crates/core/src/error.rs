// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mentor_alloc_domain::DomainError;

/// Errors that can occur while running an assignment operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The roster failed validation. Every issue found is listed.
    ValidationFailed {
        /// Human-readable issues, prefixed with the offending entity.
        issues: Vec<String>,
    },
    /// No mentor is marked available.
    NoAvailableMentors,
    /// A new student reuses a roll number that is already taken.
    DuplicateRollNumber(u32),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::ValidationFailed { issues } => {
                write!(f, "Data validation failed: {}", issues.join("; "))
            }
            Self::NoAvailableMentors => write!(f, "No available mentors found"),
            Self::DuplicateRollNumber(roll_no) => {
                write!(f, "Student with roll number {roll_no} already exists")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
