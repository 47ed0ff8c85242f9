// ABOUTME: Data-completeness confidence shared by all condition scorers
// ABOUTME: Key inputs missing gives low confidence, supporting inputs missing gives moderate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use carebridge_core::models::ConfidenceLevel;

/// Confidence from which inputs were answered
///
/// `key_inputs` are the answers a score cannot be trusted without;
/// `supporting_inputs` refine it. Each slice holds "was this answered" flags.
#[must_use]
pub fn from_answered(key_inputs: &[bool], supporting_inputs: &[bool]) -> ConfidenceLevel {
    if key_inputs.iter().any(|answered| !answered) {
        ConfidenceLevel::Low
    } else if supporting_inputs.iter().any(|answered| !answered) {
        ConfidenceLevel::Moderate
    } else {
        ConfidenceLevel::High
    }
}
