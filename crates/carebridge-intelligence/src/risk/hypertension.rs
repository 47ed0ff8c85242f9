// ABOUTME: Hypertension risk score on a 0-15 point scale
// ABOUTME: Age, BMI, family history, salt, stress, activity and tobacco contributions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::factors::{self, BmiCategory};
use super::{confidence, ConditionScore};
use crate::config::PopulationThresholds;
use carebridge_core::models::{AnswerRecord, Condition, IntakeLevel, StressLevel};

const AGE_BRACKETS: &[(i32, u32)] = &[(55, 3), (45, 2), (35, 1)];
const FAMILY_HISTORY_POINTS: u32 = 2;
const TOBACCO_POINTS: u32 = 1;

const fn bmi_points(category: Option<BmiCategory>) -> u32 {
    match category {
        Some(BmiCategory::Obese) => 3,
        Some(BmiCategory::Overweight) => 2,
        Some(BmiCategory::Normal) | None => 0,
    }
}

const fn salt_points(salt: Option<IntakeLevel>) -> u32 {
    match salt {
        Some(IntakeLevel::High) => 2,
        Some(IntakeLevel::Moderate) => 1,
        Some(IntakeLevel::Low) | None => 0,
    }
}

const fn stress_points(stress: Option<StressLevel>) -> u32 {
    match stress {
        Some(StressLevel::High) => 2,
        Some(StressLevel::Moderate) => 1,
        Some(StressLevel::Low) | None => 0,
    }
}

/// Score hypertension risk
///
/// The maximum attainable total is exactly 15.
#[must_use]
pub fn score(answers: &AnswerRecord, population: &PopulationThresholds) -> ConditionScore {
    let family = answers
        .family_hypertension
        .is_some_and(|history| history.is_present());
    let tobacco = answers.uses_tobacco().unwrap_or(false);

    let raw = factors::age_points(answers.age, AGE_BRACKETS)
        + bmi_points(factors::bmi_category(answers, population))
        + if family { FAMILY_HISTORY_POINTS } else { 0 }
        + salt_points(answers.diet_salt)
        + stress_points(answers.stress_level)
        + factors::inactivity_points(answers.physical_activity)
        + if tobacco { TOBACCO_POINTS } else { 0 };

    let confidence = confidence::from_answered(
        &[answers.age.is_some(), answers.effective_bmi().is_some()],
        &[answers.diet_salt.is_some(), answers.stress_level.is_some()],
    );

    ConditionScore {
        score: factors::clamp_score(raw, Condition::Hypertension),
        confidence,
    }
}
