// ABOUTME: Dyslipidemia risk score on a 0-15 point scale
// ABOUTME: Age, BMI, fried food intake, activity, family cholesterol history and waist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::factors::{self, BmiCategory};
use super::{confidence, ConditionScore};
use crate::config::PopulationThresholds;
use carebridge_core::models::{AnswerRecord, Condition, IntakeLevel};

const AGE_BRACKETS: &[(i32, u32)] = &[(45, 3), (35, 2)];
const FAMILY_HISTORY_POINTS: u32 = 2;
const CENTRAL_OBESITY_POINTS: u32 = 1;

const fn bmi_points(category: Option<BmiCategory>) -> u32 {
    match category {
        Some(BmiCategory::Obese) => 4,
        Some(BmiCategory::Overweight) => 3,
        Some(BmiCategory::Normal) | None => 0,
    }
}

const fn fried_food_points(fried: Option<IntakeLevel>) -> u32 {
    match fried {
        Some(IntakeLevel::High) => 3,
        Some(IntakeLevel::Moderate) => 2,
        Some(IntakeLevel::Low) | None => 0,
    }
}

/// Score dyslipidemia risk
#[must_use]
pub fn score(answers: &AnswerRecord, population: &PopulationThresholds) -> ConditionScore {
    let family = answers
        .family_cholesterol
        .is_some_and(|history| history.is_present());
    let central_obesity = factors::waist_category(answers, population)
        .is_some_and(factors::WaistCategory::is_central_obesity);

    let raw = factors::age_points(answers.age, AGE_BRACKETS)
        + bmi_points(factors::bmi_category(answers, population))
        + fried_food_points(answers.diet_fried)
        + factors::inactivity_points(answers.physical_activity)
        + if family { FAMILY_HISTORY_POINTS } else { 0 }
        + if central_obesity {
            CENTRAL_OBESITY_POINTS
        } else {
            0
        };

    let confidence = confidence::from_answered(
        &[answers.age.is_some(), answers.effective_bmi().is_some()],
        &[
            answers.diet_fried.is_some(),
            answers.family_cholesterol.is_some(),
        ],
    );

    ConditionScore {
        score: factors::clamp_score(raw, Condition::Dyslipidemia),
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carebridge_core::models::{ActivityLevel, ConfidenceLevel, FamilyHistory, Waist, WaistBand};

    #[test]
    fn test_all_factors_sum() {
        let answers = AnswerRecord {
            age: Some(50),
            bmi: Some(28.0),
            diet_fried: Some(IntakeLevel::High),
            physical_activity: Some(ActivityLevel::Sedentary),
            family_cholesterol: Some(FamilyHistory::One),
            waist: Some(Waist::Band(WaistBand::Medium)),
            ..AnswerRecord::default()
        };
        let result = score(&answers, &PopulationThresholds::default());

        assert_eq!(result.score, 15);
        assert_eq!(result.confidence, ConfidenceLevel::High);
    }

    #[test]
    fn test_overweight_young_adult() {
        let answers = AnswerRecord {
            age: Some(30),
            bmi: Some(24.0),
            diet_fried: Some(IntakeLevel::Moderate),
            ..AnswerRecord::default()
        };
        let result = score(&answers, &PopulationThresholds::default());

        assert_eq!(result.score, 5);
        assert_eq!(result.confidence, ConfidenceLevel::Moderate);
    }

    #[test]
    fn test_bmi_derived_from_height_and_weight() {
        let answers = AnswerRecord {
            height_cm: Some(160.0),
            weight_kg: Some(72.0),
            ..AnswerRecord::default()
        };
        // 72 / 1.6^2 = 28.1, obese under South-Asian cutoffs
        assert_eq!(score(&answers, &PopulationThresholds::default()).score, 4);
    }
}
