// ABOUTME: South-Asian anthropometric cutoffs used by the risk scorers
// ABOUTME: BMI and waist circumference thresholds lower than the global WHO defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Population thresholds based on published consensus statements
//!
//! South Asian populations show higher metabolic risk at lower body mass and
//! waist values than the populations the global WHO cutoffs were derived from.
//! These constants seed [`crate::config::PopulationThresholds`].

/// BMI cutoffs for Asian populations
///
/// References:
/// - WHO Expert Consultation (2004). Appropriate body-mass index for Asian populations
///   and its implications for policy and intervention strategies. *Lancet*, 363, 157-163.
/// - Misra, A., et al. (2009). Consensus statement for diagnosis of obesity, abdominal
///   obesity and the metabolic syndrome for Asian Indians. *JAPI*, 57, 163-170.
pub mod bmi {
    /// Overweight from this BMI (global default: 25.0)
    pub const OVERWEIGHT: f64 = 23.0;

    /// Obese from this BMI (global default: 30.0)
    pub const OBESE: f64 = 27.5;
}

/// Waist circumference cutoffs for South Asian adults
///
/// References:
/// - International Diabetes Federation (2006). The IDF consensus worldwide definition
///   of the metabolic syndrome.
/// - Mohan, V., et al. (2005). A simplified Indian Diabetes Risk Score for screening for
///   undiagnosed diabetic subjects. *JAPI*, 53, 759-763.
pub mod waist {
    /// Central obesity threshold for men (cm)
    pub const MALE_CM: f64 = 90.0;

    /// Central obesity threshold for women (cm)
    pub const FEMALE_CM: f64 = 80.0;

    /// Width of the first band above the threshold (cm); beyond it is "well over"
    pub const BAND_WIDTH_CM: f64 = 10.0;
}
