// ABOUTME: Specialist referral suggestions from a score record
// ABOUTME: Normalizes scores to 0-10, routes by condition, merges duplicates by specialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Specialist Referrals
//!
//! Each condition score is first scaled onto a shared 0-10 range so that a
//! single pair of cutoffs works for every condition:
//!
//! - at or above `specialist_cutoff`: the condition's specialist, `urgent`
//! - at or above `general_physician_cutoff`: a general physician, `moderate`
//!
//! Conditions routed to the same specialization are merged into one referral
//! whose reason lists every contributing condition.

use crate::config::ReferralConfig;
use carebridge_core::models::{Condition, Priority, ScoreRecord, SpecialistReferral};

/// Referral target for scores in the general physician band
pub const GENERAL_PHYSICIAN: &str = "General Physician";

/// Specialist for a condition scoring at or above the specialist cutoff
#[must_use]
pub const fn specialization_for(condition: Condition) -> &'static str {
    match condition {
        Condition::Diabetes | Condition::Thyroid => "Endocrinologist",
        Condition::Hypertension | Condition::Cvd | Condition::Dyslipidemia => "Cardiologist",
    }
}

/// Score on the 0-10 scale, rounded to one decimal
#[must_use]
pub fn normalized_score(condition: Condition, score: u32) -> f64 {
    let max = condition.max_score();
    let scaled = f64::from(score.min(max)) / f64::from(max) * 10.0;
    (scaled * 10.0).round() / 10.0
}

/// Suggest specialists for a score record
///
/// Ordered by priority (urgent first), then by normalized score.
#[must_use]
pub fn recommend_specialists(scores: &ScoreRecord, config: &ReferralConfig) -> Vec<SpecialistReferral> {
    let mut referrals: Vec<SpecialistReferral> = Vec::new();

    for (condition, &score) in scores.iter() {
        let risk_score = normalized_score(condition, score);
        let (specialization, priority, reason) = if risk_score >= config.specialist_cutoff {
            (
                specialization_for(condition),
                Priority::Urgent,
                format!("High {} risk score ({risk_score}/10)", condition.display_name()),
            )
        } else if risk_score >= config.general_physician_cutoff {
            (
                GENERAL_PHYSICIAN,
                Priority::Moderate,
                format!(
                    "Moderate {} risk score ({risk_score}/10)",
                    condition.display_name()
                ),
            )
        } else {
            continue;
        };

        if let Some(existing) = referrals
            .iter_mut()
            .find(|referral| referral.specialization == specialization)
        {
            existing.reason.push_str("; ");
            existing.reason.push_str(&reason);
            existing.priority = existing.priority.max(priority);
            existing.risk_score = existing.risk_score.max(risk_score);
        } else {
            referrals.push(SpecialistReferral {
                specialization: specialization.to_owned(),
                reason,
                priority,
                risk_score,
            });
        }
    }

    referrals.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.risk_score.total_cmp(&a.risk_score))
    });
    referrals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        assert!((normalized_score(Condition::Diabetes, 70) - 7.0).abs() < f64::EPSILON);
        assert!((normalized_score(Condition::Hypertension, 9) - 6.0).abs() < f64::EPSILON);
        assert!((normalized_score(Condition::Cvd, 17) - 8.5).abs() < f64::EPSILON);
        assert!((normalized_score(Condition::Thyroid, 40) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_diabetes_bands() {
        let config = ReferralConfig::default();
        let for_diabetes = |diabetes| ScoreRecord {
            diabetes,
            ..ScoreRecord::default()
        };

        let urgent = recommend_specialists(&for_diabetes(80), &config);
        assert_eq!(urgent.len(), 1);
        assert_eq!(urgent[0].specialization, "Endocrinologist");
        assert_eq!(urgent[0].priority, Priority::Urgent);

        let moderate = recommend_specialists(&for_diabetes(50), &config);
        assert_eq!(moderate.len(), 1);
        assert_eq!(moderate[0].specialization, GENERAL_PHYSICIAN);
        assert_eq!(moderate[0].priority, Priority::Moderate);

        assert!(recommend_specialists(&for_diabetes(39), &config).is_empty());
    }

    #[test]
    fn test_cardiac_conditions_merge_into_one_referral() {
        let scores = ScoreRecord {
            hypertension: 12,
            cvd: 18,
            ..ScoreRecord::default()
        };
        let referrals = recommend_specialists(&scores, &ReferralConfig::default());

        assert_eq!(referrals.len(), 1);
        assert_eq!(referrals[0].specialization, "Cardiologist");
        assert!(referrals[0].reason.contains("; "));
        assert!((referrals[0].risk_score - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_urgent_sorted_before_moderate() {
        let scores = ScoreRecord {
            diabetes: 50,
            cvd: 16,
            ..ScoreRecord::default()
        };
        let referrals = recommend_specialists(&scores, &ReferralConfig::default());

        assert_eq!(referrals.len(), 2);
        assert_eq!(referrals[0].specialization, "Cardiologist");
        assert_eq!(referrals[1].specialization, GENERAL_PHYSICIAN);
    }
}
