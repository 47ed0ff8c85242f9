// ABOUTME: Type 2 diabetes risk score (0-100) modelled on the Indian Diabetes Risk Score
// ABOUTME: Age, BMI, waist band, parental history, activity and diet with South-Asian cutoffs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Diabetes Risk
//!
//! The age, waist, family and activity terms follow the Indian Diabetes Risk
//! Score (Mohan et al., 2005), which on its own spans 0-100. BMI and diet
//! quality are added on top and the total is clamped to 100.
//!
//! | Factor | Points |
//! |---|---|
//! | Age 35-49 / >=50 | 20 / 30 |
//! | BMI overweight / obese | 5 / 10 |
//! | Waist over threshold / >=10 cm over | 10 / 20 |
//! | Family: per affected parent | 10 |
//! | Activity moderate / low or sedentary | 10 / 30 |
//! | Sugar intake moderate / high | 2 / 5 |
//! | Vegetable intake moderate / low | 2 / 5 |

use super::factors::{self, BmiCategory, WaistCategory};
use super::{confidence, ConditionScore};
use crate::config::PopulationThresholds;
use carebridge_core::models::{ActivityLevel, AnswerRecord, Condition, IntakeLevel};

const AGE_BRACKETS: &[(i32, u32)] = &[(50, 30), (35, 20)];
const POINTS_PER_AFFECTED_PARENT: u32 = 10;

const fn bmi_points(category: Option<BmiCategory>) -> u32 {
    match category {
        Some(BmiCategory::Obese) => 10,
        Some(BmiCategory::Overweight) => 5,
        Some(BmiCategory::Normal) | None => 0,
    }
}

const fn waist_points(category: Option<WaistCategory>) -> u32 {
    match category {
        Some(WaistCategory::WellOverThreshold) => 20,
        Some(WaistCategory::OverThreshold) => 10,
        Some(WaistCategory::BelowThreshold) | None => 0,
    }
}

const fn activity_points(activity: Option<ActivityLevel>) -> u32 {
    match activity {
        Some(ActivityLevel::Low | ActivityLevel::Sedentary) => 30,
        Some(ActivityLevel::Moderate) => 10,
        Some(ActivityLevel::High) | None => 0,
    }
}

const fn diet_points(sugar: Option<IntakeLevel>, vegetables: Option<IntakeLevel>) -> u32 {
    let sugar_points = match sugar {
        Some(IntakeLevel::High) => 5,
        Some(IntakeLevel::Moderate) => 2,
        Some(IntakeLevel::Low) | None => 0,
    };
    // Low vegetable intake is the risk direction
    let vegetable_points = match vegetables {
        Some(IntakeLevel::Low) => 5,
        Some(IntakeLevel::Moderate) => 2,
        Some(IntakeLevel::High) | None => 0,
    };
    sugar_points + vegetable_points
}

/// Score diabetes risk
///
/// Confidence is `low` without BMI or waist, `moderate` when at most one of
/// the thirst/urination/fatigue symptom questions was answered, else `high`.
/// A symptom counts once answered, whether the answer is yes or no.
#[must_use]
pub fn score(answers: &AnswerRecord, population: &PopulationThresholds) -> ConditionScore {
    let raw = factors::age_points(answers.age, AGE_BRACKETS)
        + bmi_points(factors::bmi_category(answers, population))
        + waist_points(factors::waist_category(answers, population))
        + answers
            .family_diabetes
            .map_or(0, |history| history.affected_parents() * POINTS_PER_AFFECTED_PARENT)
        + activity_points(answers.physical_activity)
        + diet_points(answers.diet_sugar, answers.diet_vegetables);

    let confidence = confidence::from_answered(
        &[answers.effective_bmi().is_some(), answers.waist.is_some()],
        &[answers.answered_diabetes_symptoms() > 1],
    );

    ConditionScore {
        score: factors::clamp_score(raw, Condition::Diabetes),
        confidence,
    }
}
