// ABOUTME: Shared risk factor bucketing used by several condition scorers
// ABOUTME: Age brackets, BMI categories, waist categories and score clamping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::PopulationThresholds;
use carebridge_core::models::{ActivityLevel, AnswerRecord, Condition, Gender, Waist, WaistBand};

/// BMI category under the configured population thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BmiCategory {
    /// Below the overweight cutoff
    Normal,
    /// Overweight, below obese
    Overweight,
    /// At or above the obese cutoff
    Obese,
}

/// Waist category relative to the gender-specific threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WaistCategory {
    /// Below the threshold
    BelowThreshold,
    /// At the threshold, less than one band width over it
    OverThreshold,
    /// One band width or more over the threshold
    WellOverThreshold,
}

impl WaistCategory {
    /// Whether the waist is at or over the central obesity threshold
    #[must_use]
    pub const fn is_central_obesity(self) -> bool {
        !matches!(self, Self::BelowThreshold)
    }
}

/// Points for the first bracket whose minimum age the answer reaches
///
/// `brackets` must be ordered by descending minimum age. Missing or negative
/// ages match nothing.
#[must_use]
pub fn age_points(age: Option<i32>, brackets: &[(i32, u32)]) -> u32 {
    age.and_then(|age| {
        brackets
            .iter()
            .find(|(min_age, _)| age >= *min_age)
            .map(|(_, points)| *points)
    })
    .unwrap_or(0)
}

/// Classify the answered (or derived) BMI
#[must_use]
pub fn bmi_category(
    answers: &AnswerRecord,
    population: &PopulationThresholds,
) -> Option<BmiCategory> {
    answers.effective_bmi().map(|bmi| {
        if bmi >= population.obese_bmi {
            BmiCategory::Obese
        } else if bmi >= population.overweight_bmi {
            BmiCategory::Overweight
        } else {
            BmiCategory::Normal
        }
    })
}

/// Classify the waist answer
///
/// Measured waists use the gender-specific threshold. Without a gender the
/// male (higher) threshold applies, so a missing answer never adds risk.
#[must_use]
pub fn waist_category(
    answers: &AnswerRecord,
    population: &PopulationThresholds,
) -> Option<WaistCategory> {
    answers.waist.map(|waist| match waist {
        Waist::Centimeters(cm) => {
            let threshold = match answers.gender {
                Some(Gender::Female) => population.female_waist_cm,
                Some(Gender::Male) | None => population.male_waist_cm,
            };
            if cm < threshold {
                WaistCategory::BelowThreshold
            } else if cm < threshold + population.waist_band_width_cm {
                WaistCategory::OverThreshold
            } else {
                WaistCategory::WellOverThreshold
            }
        }
        Waist::Band(WaistBand::Low) => WaistCategory::BelowThreshold,
        Waist::Band(WaistBand::Medium) => WaistCategory::OverThreshold,
        Waist::Band(WaistBand::High) => WaistCategory::WellOverThreshold,
    })
}

/// Common 2/1 activity penalty used by the smaller-range scorers
#[must_use]
pub const fn inactivity_points(activity: Option<ActivityLevel>) -> u32 {
    match activity {
        Some(ActivityLevel::Low | ActivityLevel::Sedentary) => 2,
        Some(ActivityLevel::Moderate) => 1,
        Some(ActivityLevel::High) | None => 0,
    }
}

/// Clamp raw points into the condition's score range
#[must_use]
pub fn clamp_score(raw: u32, condition: Condition) -> u32 {
    raw.min(condition.max_score())
}
