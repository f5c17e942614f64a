// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment policy and validation rule settings.
//!
//! The engine never reads ambient state: every operation takes an
//! `AssignmentConfig` by reference. Every key has a default, so a partial
//! configuration document deserializes into a complete value.

use crate::error::DomainError;
use crate::types::ACADEMIC_YEARS;
use serde::{Deserialize, Serialize};

/// Number of students placed in each batch unless configured otherwise.
pub const DEFAULT_BATCH_SIZE: usize = 30;

/// Largest remainder that is folded into the last batch.
pub const DEFAULT_REMAINDER_THRESHOLD: usize = 12;

/// The complete parameter set consumed by the validator and the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentConfig {
    /// Number of students per batch. Must be positive.
    pub batch_size: usize,
    /// Policy flags for the assignment run.
    pub assignment_rules: AssignmentRules,
    /// Field-level validation rules.
    pub validation_rules: ValidationRules,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            assignment_rules: AssignmentRules::default(),
            validation_rules: ValidationRules::default(),
        }
    }
}

impl AssignmentConfig {
    /// The development profile. Identical to the defaults.
    #[must_use]
    pub fn development() -> Self {
        Self::default()
    }

    /// The production profile.
    ///
    /// Overload is disallowed and mentors are reused once every mentor has
    /// received a batch.
    #[must_use]
    pub fn production() -> Self {
        Self {
            assignment_rules: AssignmentRules {
                strict_batch_size: true,
                allow_mentor_overload: false,
                sort_by_roll_number: true,
                wrap_around_mentors: true,
                remainder_threshold: DEFAULT_REMAINDER_THRESHOLD,
            },
            ..Self::default()
        }
    }

    /// Changes the batch size.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBatchSize` if `batch_size` is zero.
    pub const fn set_batch_size(&mut self, batch_size: usize) -> Result<(), DomainError> {
        if batch_size == 0 {
            return Err(DomainError::InvalidBatchSize(batch_size));
        }
        self.batch_size = batch_size;
        Ok(())
    }

    /// Checks that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The batch size is zero
    /// - The minimum roll number exceeds the maximum roll number
    pub const fn validate(&self) -> Result<(), DomainError> {
        if self.batch_size == 0 {
            return Err(DomainError::InvalidBatchSize(self.batch_size));
        }
        let rules: &ValidationRules = &self.validation_rules;
        if rules.min_roll_number > rules.max_roll_number {
            return Err(DomainError::InvalidRollNumberRange {
                min: rules.min_roll_number,
                max: rules.max_roll_number,
            });
        }
        Ok(())
    }
}

/// Policy flags for an assignment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct AssignmentRules {
    /// Recognized and carried through configuration. The engine does not
    /// consult it.
    pub strict_batch_size: bool,
    /// Allows a mentor to hold more students than its `max_students`.
    pub allow_mentor_overload: bool,
    /// Orders students by ascending roll number before batching.
    pub sort_by_roll_number: bool,
    /// Reuses mentors from the start of the list once all have a batch.
    pub wrap_around_mentors: bool,
    /// A remainder of at most this many students is folded into the last
    /// batch; a larger remainder becomes a batch of its own.
    pub remainder_threshold: usize,
}

impl Default for AssignmentRules {
    fn default() -> Self {
        Self {
            strict_batch_size: false,
            allow_mentor_overload: true,
            sort_by_roll_number: true,
            wrap_around_mentors: false,
            remainder_threshold: DEFAULT_REMAINDER_THRESHOLD,
        }
    }
}

/// Field-level validation rules for raw records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Smallest accepted roll number.
    pub min_roll_number: u32,
    /// Largest accepted roll number.
    pub max_roll_number: u32,
    /// Accepted academic years. Only years within `ACADEMIC_YEARS` take
    /// effect.
    pub valid_years: Vec<u8>,
    /// Student record fields that must be present and non-empty.
    pub required_student_fields: Vec<String>,
    /// Mentor record fields that must be present and non-empty.
    pub required_mentor_fields: Vec<String>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_roll_number: 1,
            max_roll_number: 9999,
            valid_years: vec![1, 2, 3, 4],
            required_student_fields: ["roll_no", "name", "branch", "year"]
                .into_iter()
                .map(String::from)
                .collect(),
            required_mentor_fields: ["faculty_id", "name", "department"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ValidationRules {
    /// Returns whether `year` is one of the accepted academic years.
    ///
    /// A configured year outside [`ACADEMIC_YEARS`] is never accepted.
    #[must_use]
    pub fn accepts_year(&self, year: i64) -> bool {
        self.valid_years
            .iter()
            .filter(|valid| ACADEMIC_YEARS.contains(*valid))
            .any(|valid| i64::from(*valid) == year)
    }

    /// Returns whether `roll_no` lies within the configured bounds.
    #[must_use]
    pub fn accepts_roll_number(&self, roll_no: i64) -> bool {
        (i64::from(self.min_roll_number)..=i64::from(self.max_roll_number)).contains(&roll_no)
    }
}
