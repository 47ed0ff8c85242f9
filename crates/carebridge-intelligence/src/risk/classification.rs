// ABOUTME: Table-driven mapping from a condition score to Low, Moderate or High
// ABOUTME: Buckets are inclusive at the low end and exclusive at the high end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ClassificationTable;
use carebridge_core::models::{Condition, RiskLevel};

/// Classify a score using the condition's cutoffs
#[must_use]
pub fn classify_risk(condition: Condition, score: u32, table: &ClassificationTable) -> RiskLevel {
    let cutoffs = table.get(condition);
    if score >= cutoffs.high {
        RiskLevel::High
    } else if score >= cutoffs.moderate {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}
