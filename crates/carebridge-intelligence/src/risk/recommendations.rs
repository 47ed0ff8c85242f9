// ABOUTME: Static recommendation messages for elevated risk levels
// ABOUTME: One educational, non-diagnostic recommendation per Moderate or High condition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use carebridge_core::models::{Condition, LevelRecord, Recommendation, RiskLevel};

/// Message for an elevated level, `None` for `Low`
#[must_use]
pub const fn message_for(condition: Condition, level: RiskLevel) -> Option<&'static str> {
    let message = match (condition, level) {
        (_, RiskLevel::Low) => return None,
        (Condition::Diabetes, RiskLevel::High) => {
            "Your answers indicate a high risk of type 2 diabetes. Please see a doctor soon for a fasting blood sugar or HbA1c test."
        }
        (Condition::Diabetes, RiskLevel::Moderate) => {
            "Your answers indicate a moderate risk of type 2 diabetes. Consider a blood sugar check and aim for 150 minutes of activity a week."
        }
        (Condition::Hypertension, RiskLevel::High) => {
            "Your answers indicate a high risk of high blood pressure. Please have your blood pressure measured by a doctor soon."
        }
        (Condition::Hypertension, RiskLevel::Moderate) => {
            "Your answers indicate a moderate risk of high blood pressure. Reduce salt, manage stress and check your blood pressure regularly."
        }
        (Condition::Cvd, RiskLevel::High) => {
            "Your answers indicate a high risk of heart disease. Please book a cardiac check-up with a doctor soon."
        }
        (Condition::Cvd, RiskLevel::Moderate) => {
            "Your answers indicate a moderate risk of heart disease. Stay active, avoid tobacco and discuss a heart check-up at your next visit."
        }
        (Condition::Dyslipidemia, RiskLevel::High) => {
            "Your answers indicate a high risk of high cholesterol. Please get a lipid profile blood test soon."
        }
        (Condition::Dyslipidemia, RiskLevel::Moderate) => {
            "Your answers indicate a moderate risk of high cholesterol. Cut down on fried food and consider a lipid profile test."
        }
        (Condition::Thyroid, RiskLevel::High) => {
            "Your answers indicate a high risk of a thyroid disorder. Please see a doctor soon for a thyroid function test."
        }
        (Condition::Thyroid, RiskLevel::Moderate) => {
            "Your answers indicate a moderate risk of a thyroid disorder. Consider a thyroid function test at your next check-up."
        }
    };
    Some(message)
}

/// Recommendations for every elevated condition, in report order
#[must_use]
pub fn build(levels: &LevelRecord) -> Vec<Recommendation> {
    levels
        .iter()
        .filter_map(|(condition, &level)| {
            let priority = level.recommendation_priority()?;
            let message = message_for(condition, level)?;
            Some(Recommendation {
                condition,
                message: message.to_owned(),
                priority,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use carebridge_core::models::Priority;

    #[test]
    fn test_all_low_has_no_recommendations() {
        assert!(build(&LevelRecord::default()).is_empty());
    }

    #[test]
    fn test_priorities_follow_levels() {
        let levels = LevelRecord {
            diabetes: RiskLevel::High,
            thyroid: RiskLevel::Moderate,
            ..LevelRecord::default()
        };
        let recommendations = build(&levels);

        assert_eq!(recommendations.len(), 2);
        assert_eq!(recommendations[0].condition, Condition::Diabetes);
        assert_eq!(recommendations[0].priority, Priority::Urgent);
        assert_eq!(recommendations[1].condition, Condition::Thyroid);
        assert_eq!(recommendations[1].priority, Priority::Moderate);
    }

    #[test]
    fn test_every_elevated_pair_has_a_message() {
        for condition in Condition::ALL {
            for level in [RiskLevel::Moderate, RiskLevel::High] {
                assert!(message_for(condition, level).is_some());
            }
        }
    }
}
