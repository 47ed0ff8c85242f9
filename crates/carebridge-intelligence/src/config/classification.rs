// ABOUTME: Classification cutoff table mapping condition scores to risk levels
// ABOUTME: Inclusive-low / exclusive-high buckets with per-condition defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Risk Classification Configuration
//!
//! Each condition has two cutoffs. A score below `moderate` is `Low`, a score
//! in `moderate..high` is `Moderate`, and a score at or above `high` is `High`.
//! Overrides merge over the defaults cutoff by cutoff.

use super::ConfigError;
use carebridge_core::models::{Condition, ConditionMap};
use serde::{Deserialize, Deserializer, Serialize};

/// Cutoffs for one condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RiskCutoffs {
    /// Lowest score classified `Moderate`
    pub moderate: u32,
    /// Lowest score classified `High`
    pub high: u32,
}

impl RiskCutoffs {
    /// Check `0 < moderate < high <= max_score`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidCutoffs` naming the violated constraint
    pub fn validate(self, condition: Condition) -> Result<(), ConfigError> {
        let reason = if self.moderate == 0 {
            Some("moderate cutoff must be above zero")
        } else if self.moderate >= self.high {
            Some("moderate cutoff must be below the high cutoff")
        } else if self.high > condition.max_score() {
            Some("high cutoff exceeds the condition's score range")
        } else {
            None
        };

        reason.map_or(Ok(()), |reason| {
            Err(ConfigError::InvalidCutoffs { condition, reason })
        })
    }
}

/// Classification table for all conditions
pub type ClassificationTable = ConditionMap<RiskCutoffs>;

/// Default cutoffs per condition
///
/// Diabetes follows the Indian Diabetes Risk Score bands (<30, 30-59, >=60).
#[must_use]
pub fn default_classification() -> ClassificationTable {
    ConditionMap {
        diabetes: RiskCutoffs {
            moderate: 30,
            high: 60,
        },
        hypertension: RiskCutoffs {
            moderate: 5,
            high: 9,
        },
        cvd: RiskCutoffs {
            moderate: 7,
            high: 13,
        },
        dyslipidemia: RiskCutoffs {
            moderate: 5,
            high: 10,
        },
        thyroid: RiskCutoffs {
            moderate: 5,
            high: 10,
        },
    }
}

/// One condition's cutoffs as written in an override file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CutoffOverride {
    moderate: Option<u32>,
    high: Option<u32>,
}

/// Deserialize a classification override, taking omitted conditions and
/// cutoffs from `default_classification`
pub(crate) fn deserialize_classification<'de, D>(
    deserializer: D,
) -> Result<ClassificationTable, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = ConditionMap::<CutoffOverride>::deserialize(deserializer)?;
    let defaults = default_classification();

    Ok(ConditionMap::from_fn(|condition| {
        let base = defaults.get(condition);
        let named = overrides.get(condition);
        RiskCutoffs {
            moderate: named.moderate.unwrap_or(base.moderate),
            high: named.high.unwrap_or(base.high),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        let table = default_classification();
        for (condition, cutoffs) in table.iter() {
            assert!(cutoffs.validate(condition).is_ok(), "{condition}");
        }
    }

    #[test]
    fn test_non_increasing_cutoffs_rejected() {
        let cutoffs = RiskCutoffs {
            moderate: 9,
            high: 9,
        };
        assert!(matches!(
            cutoffs.validate(Condition::Hypertension),
            Err(ConfigError::InvalidCutoffs {
                condition: Condition::Hypertension,
                ..
            })
        ));
    }

    #[test]
    fn test_cutoff_above_range_rejected() {
        let cutoffs = RiskCutoffs {
            moderate: 10,
            high: 16,
        };
        assert!(cutoffs.validate(Condition::Dyslipidemia).is_err());
        assert!(cutoffs.validate(Condition::Cvd).is_ok());
    }
}
