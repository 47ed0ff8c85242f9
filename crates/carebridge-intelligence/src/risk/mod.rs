// ABOUTME: Risk scoring module: per-condition scorers and the aggregating engine
// ABOUTME: Re-exports the engine and its result types for path-based access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Risk Scoring
//!
//! Each condition module exposes a single `score` function turning an
//! [`AnswerRecord`](carebridge_core::models::AnswerRecord) into a
//! [`ConditionScore`]. Point tables live next to the scorer that uses them.
//! [`RiskEngine`] runs all five, classifies, and builds recommendations.

pub mod classification;
pub mod confidence;
pub mod cvd;
pub mod diabetes;
pub mod dyslipidemia;
pub mod engine;
pub mod factors;
pub mod hypertension;
pub mod recommendations;
pub mod specialists;
pub mod thyroid;

pub use engine::{DetailedAssessment, RiskAssessment, RiskEngine};

use carebridge_core::models::ConfidenceLevel;
use serde::{Deserialize, Serialize};

/// Score and data confidence for one condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionScore {
    /// Points accumulated, clamped to the condition's range
    pub score: u32,
    /// Completeness of the answers the score was built from
    pub confidence: ConfidenceLevel,
}
