// ABOUTME: Risk intelligence crate root for the CareBridge service
// ABOUTME: Exposes the scoring engine, its configuration and population thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # CareBridge Intelligence
//!
//! Deterministic chronic disease risk scoring from questionnaire answers.
//!
//! Five conditions are scored by monotonic point accumulation (diabetes,
//! hypertension, cardiovascular disease, dyslipidemia, thyroid), classified
//! into `Low`/`Moderate`/`High` through a cutoff table, and annotated with a
//! data-completeness confidence. Elevated conditions produce educational
//! recommendations and specialist referral suggestions.
//!
//! The engine is a pure function of its input: no I/O, no shared mutable
//! state, safe to call from any number of threads.
//!
//! ```rust
//! use carebridge_core::models::AnswerRecord;
//! use carebridge_intelligence::RiskEngine;
//!
//! let engine = RiskEngine::default();
//! let assessment = engine.aggregate(&AnswerRecord::default());
//! assert!(assessment.recommendations.is_empty());
//! ```

/// Engine configuration (classification cutoffs, population thresholds, referral cutoffs)
pub mod config;

/// Population-specific anthropometric thresholds with references
pub mod population_thresholds;

/// Per-condition scorers, classification, confidence, recommendations and the engine
pub mod risk;

pub use config::{ConfigError, RiskEngineConfig};
pub use risk::{ConditionScore, DetailedAssessment, RiskAssessment, RiskEngine};
