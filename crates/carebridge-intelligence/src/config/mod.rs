// ABOUTME: Configuration module for the risk engine
// ABOUTME: Aggregates classification cutoffs, population thresholds and referral cutoffs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Risk Engine Configuration
//!
//! Every tunable of the engine lives here with a `Default` that reproduces the
//! canonical rule set. Deployments may override it with a JSON document; any
//! omitted section keeps its default.

/// Score to risk-level cutoffs
pub mod classification;

/// Configuration error types
pub mod error;

pub use classification::{default_classification, ClassificationTable, RiskCutoffs};
pub use error::ConfigError;

use crate::population_thresholds::{bmi, waist};
use carebridge_core::models::Condition;
use serde::{Deserialize, Serialize};

/// Risk Engine Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskEngineConfig {
    /// Classification cutoffs per condition
    #[serde(deserialize_with = "classification::deserialize_classification")]
    pub classification: ClassificationTable,
    /// Anthropometric thresholds
    pub population: PopulationThresholds,
    /// Specialist referral cutoffs
    pub referral: ReferralConfig,
}

impl Default for RiskEngineConfig {
    fn default() -> Self {
        Self {
            classification: default_classification(),
            population: PopulationThresholds::default(),
            referral: ReferralConfig::default(),
        }
    }
}

impl RiskEngineConfig {
    /// Parse a JSON override and validate it
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` for malformed JSON, or the first validation failure
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        for condition in Condition::ALL {
            self.classification.get(condition).validate(condition)?;
        }
        self.population.validate()?;
        self.referral.validate()
    }
}

/// BMI and waist thresholds; defaults are the South-Asian values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationThresholds {
    /// Overweight from this BMI
    pub overweight_bmi: f64,
    /// Obese from this BMI
    pub obese_bmi: f64,
    /// Male central obesity threshold (cm)
    pub male_waist_cm: f64,
    /// Female central obesity threshold (cm)
    pub female_waist_cm: f64,
    /// Width of the first band over the waist threshold (cm)
    pub waist_band_width_cm: f64,
}

impl Default for PopulationThresholds {
    fn default() -> Self {
        Self {
            overweight_bmi: bmi::OVERWEIGHT,
            obese_bmi: bmi::OBESE,
            male_waist_cm: waist::MALE_CM,
            female_waist_cm: waist::FEMALE_CM,
            waist_band_width_cm: waist::BAND_WIDTH_CM,
        }
    }
}

impl PopulationThresholds {
    /// Global WHO cutoffs, for comparison against the South-Asian defaults
    #[must_use]
    pub fn global() -> Self {
        Self {
            overweight_bmi: 25.0,
            obese_bmi: 30.0,
            male_waist_cm: 102.0,
            female_waist_cm: 88.0,
            waist_band_width_cm: waist::BAND_WIDTH_CM,
        }
    }

    /// Validate threshold ordering
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidRange` when thresholds are not positive or out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.overweight_bmi > 0.0 && self.overweight_bmi < self.obese_bmi) {
            return Err(ConfigError::InvalidRange(
                "overweight_bmi must be positive and below obese_bmi",
            ));
        }
        if self.male_waist_cm <= 0.0 || self.female_waist_cm <= 0.0 {
            return Err(ConfigError::InvalidRange("waist thresholds must be positive"));
        }
        if self.waist_band_width_cm <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "waist_band_width_cm must be positive",
            ));
        }
        Ok(())
    }
}

/// Referral cutoffs on the normalized 0-10 score scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferralConfig {
    /// Normalized score from which a condition specialist is suggested
    pub specialist_cutoff: f64,
    /// Normalized score from which a general physician visit is suggested
    pub general_physician_cutoff: f64,
}

impl Default for ReferralConfig {
    fn default() -> Self {
        Self {
            specialist_cutoff: 7.0,
            general_physician_cutoff: 4.0,
        }
    }
}

impl ReferralConfig {
    /// Validate `0 < general_physician_cutoff < specialist_cutoff <= 10`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidRange` when the ordering does not hold
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general_physician_cutoff > 0.0
            && self.general_physician_cutoff < self.specialist_cutoff
            && self.specialist_cutoff <= 10.0
        {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange(
                "referral cutoffs must satisfy 0 < general_physician < specialist <= 10",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(RiskEngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config =
            RiskEngineConfig::from_json_str(r#"{"referral": {"specialist_cutoff": 8.0}}"#)
                .unwrap();

        assert!((config.referral.specialist_cutoff - 8.0).abs() < f64::EPSILON);
        assert!((config.referral.general_physician_cutoff - 4.0).abs() < f64::EPSILON);
        assert_eq!(config.classification, default_classification());
    }

    #[test]
    fn test_classification_override_merges_per_condition() {
        let config = RiskEngineConfig::from_json_str(
            r#"{"classification": {"diabetes": {"moderate": 40, "high": 70}}}"#,
        )
        .unwrap();

        let defaults = default_classification();
        assert_eq!(
            config.classification.diabetes,
            RiskCutoffs {
                moderate: 40,
                high: 70
            }
        );
        assert_eq!(config.classification.hypertension, defaults.hypertension);
        assert_eq!(config.classification.thyroid, defaults.thyroid);
    }

    #[test]
    fn test_classification_override_merges_per_cutoff() {
        let config = RiskEngineConfig::from_json_str(
            r#"{"classification": {"cvd": {"moderate": 8}}}"#,
        )
        .unwrap();

        assert_eq!(
            config.classification.cvd,
            RiskCutoffs {
                moderate: 8,
                high: 13
            }
        );
    }

    #[test]
    fn test_merged_classification_still_validated() {
        let result = RiskEngineConfig::from_json_str(
            r#"{"classification": {"diabetes": {"moderate": 65}}}"#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidCutoffs {
                condition: Condition::Diabetes,
                ..
            })
        ));
    }

    #[test]
    fn test_override_with_bad_population_rejected() {
        let result =
            RiskEngineConfig::from_json_str(r#"{"population": {"overweight_bmi": 31.0}}"#);
        assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_malformed_override_is_parse_error() {
        let result = RiskEngineConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
