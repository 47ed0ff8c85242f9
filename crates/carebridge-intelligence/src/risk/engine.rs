// ABOUTME: Risk engine tying scorers, classification, recommendations and referrals together
// ABOUTME: Stateless apart from its configuration and safe to share across threads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{
    classification, cvd, diabetes, dyslipidemia, hypertension, recommendations, specialists,
    thyroid, ConditionScore,
};
use crate::config::RiskEngineConfig;
use carebridge_core::models::{
    AnswerRecord, Condition, ConditionMap, ConfidenceLevel, ConfidenceRecord, LevelRecord,
    Recommendation, RiskLevel, ScoreRecord, SpecialistReferral,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of `RiskEngine::aggregate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Score per condition
    pub scores: ScoreRecord,
    /// Risk level per condition
    pub levels: LevelRecord,
    /// Lowest confidence over all conditions
    pub confidence: ConfidenceLevel,
    /// One entry per Moderate or High condition
    pub recommendations: Vec<Recommendation>,
}

/// Aggregate assessment plus per-condition confidence and referrals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedAssessment {
    /// Aggregate result
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    /// Confidence per condition
    pub condition_confidence: ConfidenceRecord,
    /// Suggested specialists
    pub specialists: Vec<SpecialistReferral>,
}

/// Questionnaire risk engine
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: RiskEngineConfig,
}

impl RiskEngine {
    /// Engine with a custom configuration
    ///
    /// The configuration is taken as given; call `RiskEngineConfig::validate`
    /// first when it comes from outside.
    #[must_use]
    pub const fn new(config: RiskEngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &RiskEngineConfig {
        &self.config
    }

    /// Diabetes score, 0-100
    #[must_use]
    pub fn score_diabetes(&self, answers: &AnswerRecord) -> ConditionScore {
        diabetes::score(answers, &self.config.population)
    }

    /// Hypertension score, 0-15
    #[must_use]
    pub fn score_hypertension(&self, answers: &AnswerRecord) -> ConditionScore {
        hypertension::score(answers, &self.config.population)
    }

    /// Cardiovascular disease score, 0-20
    #[must_use]
    pub fn score_cvd(&self, answers: &AnswerRecord) -> ConditionScore {
        cvd::score(answers, &self.config.population)
    }

    /// Dyslipidemia score, 0-15
    #[must_use]
    pub fn score_dyslipidemia(&self, answers: &AnswerRecord) -> ConditionScore {
        dyslipidemia::score(answers, &self.config.population)
    }

    /// Thyroid score, 0-20
    #[must_use]
    pub fn score_thyroid(&self, answers: &AnswerRecord) -> ConditionScore {
        thyroid::score(answers)
    }

    /// Score one condition
    #[must_use]
    pub fn score(&self, condition: Condition, answers: &AnswerRecord) -> ConditionScore {
        match condition {
            Condition::Diabetes => self.score_diabetes(answers),
            Condition::Hypertension => self.score_hypertension(answers),
            Condition::Cvd => self.score_cvd(answers),
            Condition::Dyslipidemia => self.score_dyslipidemia(answers),
            Condition::Thyroid => self.score_thyroid(answers),
        }
    }

    /// Classify a score with the configured cutoffs
    #[must_use]
    pub fn classify_risk(&self, condition: Condition, score: u32) -> RiskLevel {
        classification::classify_risk(condition, score, &self.config.classification)
    }

    /// Scores, levels, overall confidence and recommendations
    #[must_use]
    pub fn aggregate(&self, answers: &AnswerRecord) -> RiskAssessment {
        self.assess(answers).assessment
    }

    /// Referrals for a score record
    #[must_use]
    pub fn recommend_specialists(&self, scores: &ScoreRecord) -> Vec<SpecialistReferral> {
        specialists::recommend_specialists(scores, &self.config.referral)
    }

    /// Full assessment including per-condition confidence and referrals
    #[must_use]
    pub fn assess(&self, answers: &AnswerRecord) -> DetailedAssessment {
        let results: ConditionMap<ConditionScore> =
            ConditionMap::from_fn(|condition| self.score(condition, answers));

        let scores = results.map(|_, result| result.score);
        let condition_confidence = results.map(|_, result| result.confidence);
        let levels = scores.map(|condition, &score| self.classify_risk(condition, score));
        let confidence = ConfidenceLevel::lowest(condition_confidence.iter().map(|(_, &c)| c));
        let recommendations = recommendations::build(&levels);
        let specialists = self.recommend_specialists(&scores);

        debug!(
            diabetes = scores.diabetes,
            hypertension = scores.hypertension,
            cvd = scores.cvd,
            dyslipidemia = scores.dyslipidemia,
            thyroid = scores.thyroid,
            %confidence,
            recommendations = recommendations.len(),
            specialists = specialists.len(),
            "Risk assessment computed"
        );

        DetailedAssessment {
            assessment: RiskAssessment {
                scores,
                levels,
                confidence,
                recommendations,
            },
            condition_confidence,
            specialists,
        }
    }

    /// Assess many records in parallel, preserving input order
    #[must_use]
    pub fn assess_batch(&self, records: &[AnswerRecord]) -> Vec<DetailedAssessment> {
        records.par_iter().map(|answers| self.assess(answers)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carebridge_core::models::{FamilyHistory, Gender, Priority};

    #[test]
    fn test_empty_record() {
        let assessment = RiskEngine::default().aggregate(&AnswerRecord::default());

        assert_eq!(assessment.scores, ScoreRecord::default());
        assert_eq!(assessment.levels, LevelRecord::default());
        assert_eq!(assessment.confidence, ConfidenceLevel::Low);
        assert!(assessment.recommendations.is_empty());
    }

    #[test]
    fn test_score_dispatch_matches_named_scorers() {
        let engine = RiskEngine::default();
        let answers = AnswerRecord {
            age: Some(48),
            gender: Some(Gender::Male),
            bmi: Some(26.0),
            ..AnswerRecord::default()
        };

        assert_eq!(
            engine.score(Condition::Cvd, &answers),
            engine.score_cvd(&answers)
        );
        assert_eq!(
            engine.score(Condition::Diabetes, &answers),
            engine.score_diabetes(&answers)
        );
    }

    #[test]
    fn test_detailed_assessment_serializes_flat() {
        let answers = AnswerRecord {
            thyroid_symptoms: Some(true),
            family_thyroid: Some(FamilyHistory::Yes),
            gender: Some(Gender::Female),
            neck_swelling: Some(true),
            ..AnswerRecord::default()
        };
        let detailed = RiskEngine::default().assess(&answers);
        let json = serde_json::to_value(&detailed).unwrap();

        assert_eq!(json["scores"]["thyroid"], 13);
        assert_eq!(json["levels"]["thyroid"], "High");
        assert_eq!(json["condition_confidence"]["thyroid"], "high");
        assert_eq!(json["recommendations"][0]["priority"], "urgent");
        assert_eq!(json["specialists"][0]["specialization"], "General Physician");
        assert_eq!(detailed.specialists[0].priority, Priority::Moderate);
    }

    #[test]
    fn test_batch_preserves_order() {
        let engine = RiskEngine::default();
        let records = vec![
            AnswerRecord::default(),
            AnswerRecord {
                age: Some(60),
                ..AnswerRecord::default()
            },
        ];
        let results = engine.assess_batch(&records);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0], engine.assess(&records[0]));
        assert_eq!(results[1], engine.assess(&records[1]));
    }
}
