// ABOUTME: Cardiovascular disease risk score on a 0-20 point scale
// ABOUTME: Age, male sex, tobacco, cardiac family history, BMI, activity, stress and waist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Cardiovascular Risk
//!
//! A questionnaire-only screen: no blood pressure or lipid panel is available,
//! so the score leans on demographics and lifestyle. Male sex only counts from
//! age 45, where the sex gap in incidence opens up.

use super::factors::{self, BmiCategory};
use super::{confidence, ConditionScore};
use crate::config::PopulationThresholds;
use carebridge_core::models::{AnswerRecord, Condition, Gender, StressLevel};

const AGE_BRACKETS: &[(i32, u32)] = &[(55, 5), (45, 4), (35, 2)];
const MALE_RISK_MIN_AGE: i32 = 45;
const MALE_POINTS: u32 = 2;
const TOBACCO_POINTS: u32 = 4;
const FAMILY_HISTORY_POINTS: u32 = 3;
const HIGH_STRESS_POINTS: u32 = 1;
const CENTRAL_OBESITY_POINTS: u32 = 1;

const fn bmi_points(category: Option<BmiCategory>) -> u32 {
    match category {
        Some(BmiCategory::Obese) => 3,
        Some(BmiCategory::Overweight) => 2,
        Some(BmiCategory::Normal) | None => 0,
    }
}

/// Score cardiovascular disease risk
#[must_use]
pub fn score(answers: &AnswerRecord, population: &PopulationThresholds) -> ConditionScore {
    let older_male = answers.gender == Some(Gender::Male)
        && answers.age.is_some_and(|age| age >= MALE_RISK_MIN_AGE);
    let tobacco = answers.uses_tobacco().unwrap_or(false);
    let family = answers
        .family_heart
        .is_some_and(|history| history.is_present());
    let high_stress = answers.stress_level == Some(StressLevel::High);
    let central_obesity = factors::waist_category(answers, population)
        .is_some_and(factors::WaistCategory::is_central_obesity);

    let mut raw = factors::age_points(answers.age, AGE_BRACKETS)
        + bmi_points(factors::bmi_category(answers, population))
        + factors::inactivity_points(answers.physical_activity);
    for (present, points) in [
        (older_male, MALE_POINTS),
        (tobacco, TOBACCO_POINTS),
        (family, FAMILY_HISTORY_POINTS),
        (high_stress, HIGH_STRESS_POINTS),
        (central_obesity, CENTRAL_OBESITY_POINTS),
    ] {
        if present {
            raw += points;
        }
    }

    let confidence = confidence::from_answered(
        &[answers.age.is_some(), answers.effective_bmi().is_some()],
        &[
            answers.uses_tobacco().is_some(),
            answers.family_heart.is_some(),
        ],
    );

    ConditionScore {
        score: factors::clamp_score(raw, Condition::Cvd),
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carebridge_core::models::{ActivityLevel, ConfidenceLevel, FamilyHistory, Waist};

    #[test]
    fn test_male_points_need_age_45() {
        let population = PopulationThresholds::default();
        let male_at = |age| AnswerRecord {
            age: Some(age),
            gender: Some(Gender::Male),
            ..AnswerRecord::default()
        };

        assert_eq!(score(&male_at(44), &population).score, 2);
        assert_eq!(score(&male_at(45), &population).score, 6);
    }

    #[test]
    fn test_worst_case_is_clamped_to_twenty() {
        let answers = AnswerRecord {
            age: Some(65),
            gender: Some(Gender::Male),
            tobacco_use: Some(true),
            family_heart: Some(FamilyHistory::Yes),
            bmi: Some(30.0),
            physical_activity: Some(ActivityLevel::Low),
            stress_level: Some(StressLevel::High),
            waist: Some(Waist::Centimeters(110.0)),
            ..AnswerRecord::default()
        };
        let result = score(&answers, &PopulationThresholds::default());

        assert_eq!(result.score, 20);
        assert_eq!(result.confidence, ConfidenceLevel::High);
    }

    #[test]
    fn test_waist_over_threshold_adds_a_point() {
        let population = PopulationThresholds::default();
        let with_waist = |cm| AnswerRecord {
            gender: Some(Gender::Male),
            waist: Some(Waist::Centimeters(cm)),
            ..AnswerRecord::default()
        };

        assert_eq!(score(&with_waist(85.0), &population).score, 0);
        assert_eq!(score(&with_waist(92.0), &population).score, 1);
    }

    #[test]
    fn test_missing_family_history_is_moderate_confidence() {
        let answers = AnswerRecord {
            age: Some(30),
            bmi: Some(21.0),
            tobacco_use: Some(false),
            ..AnswerRecord::default()
        };
        assert_eq!(
            score(&answers, &PopulationThresholds::default()).confidence,
            ConfidenceLevel::Moderate
        );
    }
}
