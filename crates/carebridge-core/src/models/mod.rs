// ABOUTME: Core data models for the CareBridge risk service
// ABOUTME: Re-exports questionnaire answer types and the risk vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Questionnaire answer record with lenient field decoding
pub mod answers;

/// Conditions, risk levels, confidence, recommendations and referrals
pub mod risk;

pub use answers::{
    ActivityLevel, AlcoholUse, AnswerRecord, FamilyHistory, Gender, IntakeLevel, StressLevel,
    UnrecognizedAnswer, Waist, WaistBand,
};
pub use risk::{
    Condition, ConditionMap, ConfidenceLevel, ConfidenceRecord, LevelRecord, Priority,
    Recommendation, RiskLevel, ScoreRecord, SpecialistReferral,
};
