// ABOUTME: Boundary validation of numeric answers before they reach the risk engine
// ABOUTME: Strict mode rejects implausible values, lenient mode drops them with a warning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Answer Validation
//!
//! The engine itself never fails: it treats anything it cannot use as
//! missing. Plausibility is a policy of the service boundary instead. An age
//! of 400 or a BMI of 3 is almost certainly a unit or typing mistake, and the
//! deployment decides whether the caller should be told (strict) or the
//! value silently ignored (lenient).

use crate::constants::answer_bounds;
use crate::errors::{AppError, AppResult};
use crate::models::{AnswerRecord, Waist};
use std::ops::RangeInclusive;
use tracing::warn;

/// What to do with an implausible numeric answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Drop the value and log a warning
    #[default]
    Lenient,
    /// Reject the whole record with `ValueOutOfRange`
    Strict,
}

/// Plausibility checks for answer records
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerValidator {
    mode: ValidationMode,
}

/// One numeric answer slot
struct NumericField {
    name: &'static str,
    range: RangeInclusive<f64>,
}

const AGE: NumericField = NumericField {
    name: "age",
    range: answer_bounds::MIN_AGE_YEARS..=answer_bounds::MAX_AGE_YEARS,
};
const BMI: NumericField = NumericField {
    name: "bmi",
    range: answer_bounds::MIN_BMI..=answer_bounds::MAX_BMI,
};
const WAIST: NumericField = NumericField {
    name: "waist",
    range: answer_bounds::MIN_WAIST_CM..=answer_bounds::MAX_WAIST_CM,
};
const HEIGHT: NumericField = NumericField {
    name: "height_cm",
    range: answer_bounds::MIN_HEIGHT_CM..=answer_bounds::MAX_HEIGHT_CM,
};
const WEIGHT: NumericField = NumericField {
    name: "weight_kg",
    range: answer_bounds::MIN_WEIGHT_KG..=answer_bounds::MAX_WEIGHT_KG,
};

impl AnswerValidator {
    /// Validator with the given mode
    #[must_use]
    pub const fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    /// Validator from the `strict_validation` flag
    #[must_use]
    pub const fn from_strict_flag(strict: bool) -> Self {
        Self::new(if strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Lenient
        })
    }

    /// Active mode
    #[must_use]
    pub const fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Validate a record, returning the (possibly trimmed) record
    ///
    /// Non-numeric answers are never touched; enum and flag answers were
    /// already normalized while decoding.
    ///
    /// # Errors
    ///
    /// In strict mode, returns `ValueOutOfRange` for the first implausible value
    pub fn validate(&self, mut answers: AnswerRecord) -> AppResult<AnswerRecord> {
        answers.age = self
            .check(&AGE, answers.age.map(f64::from))?
            .and(answers.age);
        answers.bmi = self.check(&BMI, answers.bmi)?;
        answers.height_cm = self.check(&HEIGHT, answers.height_cm)?;
        answers.weight_kg = self.check(&WEIGHT, answers.weight_kg)?;

        // Height and weight can each be plausible while their ratio is not
        if answers.bmi.is_none() {
            let derived = answers.effective_bmi();
            if derived.is_some() && self.check(&BMI, derived)?.is_none() {
                answers.height_cm = None;
                answers.weight_kg = None;
            }
        }

        if let Some(Waist::Centimeters(cm)) = answers.waist {
            if self.check(&WAIST, Some(cm))?.is_none() {
                answers.waist = None;
            }
        }

        Ok(answers)
    }

    /// `Some(value)` when plausible; otherwise an error or `None` by mode
    fn check(&self, field: &NumericField, value: Option<f64>) -> AppResult<Option<f64>> {
        let Some(value) = value else {
            return Ok(None);
        };
        if field.range.contains(&value) {
            return Ok(Some(value));
        }

        match self.mode {
            ValidationMode::Strict => Err(AppError::out_of_range(
                field.name,
                value,
                *field.range.start(),
                *field.range.end(),
            )),
            ValidationMode::Lenient => {
                warn!(
                    field = field.name,
                    min = field.range.start(),
                    max = field.range.end(),
                    "Dropping implausible answer value"
                );
                Ok(None)
            }
        }
    }
}
