// ABOUTME: Thyroid disorder risk score on a 0-20 point scale
// ABOUTME: Symptoms, family history, female sex, autoimmune history and neck swelling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{confidence, factors, ConditionScore};
use carebridge_core::models::{AnswerRecord, Condition, Gender};

const SYMPTOM_POINTS: u32 = 4;
const FAMILY_HISTORY_POINTS: u32 = 4;
const FEMALE_POINTS: u32 = 2;
const AUTOIMMUNE_POINTS: u32 = 3;
const NECK_SWELLING_POINTS: u32 = 3;

/// Score thyroid disorder risk
///
/// No anthropometric input is used, so population thresholds do not apply.
#[must_use]
pub fn score(answers: &AnswerRecord) -> ConditionScore {
    let factors_present = [
        (answers.thyroid_symptoms == Some(true), SYMPTOM_POINTS),
        (
            answers
                .family_thyroid
                .is_some_and(|history| history.is_present()),
            FAMILY_HISTORY_POINTS,
        ),
        (answers.gender == Some(Gender::Female), FEMALE_POINTS),
        (answers.history_autoimmune == Some(true), AUTOIMMUNE_POINTS),
        (answers.neck_swelling == Some(true), NECK_SWELLING_POINTS),
    ];
    let raw = factors_present
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, points)| points)
        .sum();

    let confidence = confidence::from_answered(
        &[answers.thyroid_symptoms.is_some()],
        &[answers.family_thyroid.is_some(), answers.gender.is_some()],
    );

    ConditionScore {
        score: factors::clamp_score(raw, Condition::Thyroid),
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carebridge_core::models::{ConfidenceLevel, FamilyHistory};

    #[test]
    fn test_all_factors_present() {
        let answers = AnswerRecord {
            thyroid_symptoms: Some(true),
            family_thyroid: Some(FamilyHistory::Yes),
            gender: Some(Gender::Female),
            history_autoimmune: Some(true),
            neck_swelling: Some(true),
            ..AnswerRecord::default()
        };
        let result = score(&answers);

        assert_eq!(result.score, 16);
        assert_eq!(result.confidence, ConfidenceLevel::High);
    }

    #[test]
    fn test_explicit_no_answers_score_zero_high_confidence() {
        let answers = AnswerRecord {
            thyroid_symptoms: Some(false),
            family_thyroid: Some(FamilyHistory::No),
            gender: Some(Gender::Male),
            ..AnswerRecord::default()
        };
        let result = score(&answers);

        assert_eq!(result.score, 0);
        assert_eq!(result.confidence, ConfidenceLevel::High);
    }

    #[test]
    fn test_missing_symptoms_is_low_confidence() {
        let answers = AnswerRecord {
            gender: Some(Gender::Female),
            ..AnswerRecord::default()
        };
        let result = score(&answers);

        assert_eq!(result.score, 2);
        assert_eq!(result.confidence, ConfidenceLevel::Low);
    }
}
