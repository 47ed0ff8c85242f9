// ABOUTME: Configuration error types for risk engine validation
// ABOUTME: Defines error variants for invalid cutoffs, ranges and unparseable overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for risk engine validation.

use carebridge_core::models::Condition;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Classification cutoffs are not strictly increasing inside the score range
    #[error("Invalid cutoffs for {condition}: {reason}")]
    InvalidCutoffs {
        /// Condition whose cutoffs are wrong
        condition: Condition,
        /// What is wrong with them
        reason: &'static str,
    },

    /// Value outside acceptable range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse a configuration override
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
