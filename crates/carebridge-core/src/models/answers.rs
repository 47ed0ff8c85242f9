// ABOUTME: Questionnaire answer record consumed by the risk scoring engine
// ABOUTME: Typed optional fields with lenient decoding so malformed answers become "missing"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Questionnaire answer record
//!
//! Assessment answers arrive as a flat JSON object produced by the portal's
//! questionnaire. Every recognized key is a typed optional field. Decoding is
//! lenient: a value that cannot be understood (a word where a number was
//! expected, an unknown enum label) decodes to `None` and is treated by the
//! engine exactly like an unanswered question. Unknown keys are ignored.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// An answer label that does not map to any known option
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized answer value '{0}'")]
pub struct UnrecognizedAnswer(pub String);

/// Lowercase, trim and unify separators so "Both Parents" matches "both_parents"
fn normalize_label(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace([' ', '-'], "_")
}

/// Biological sex as asked by the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

impl FromStr for Gender {
    type Err = UnrecognizedAnswer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "male" | "m" | "man" => Ok(Self::Male),
            "female" | "f" | "woman" => Ok(Self::Female),
            _ => Err(UnrecognizedAnswer(s.to_owned())),
        }
    }
}

/// Habitual physical activity, most active first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Regular vigorous exercise
    High,
    /// Regular moderate exercise
    Moderate,
    /// Occasional light activity
    Low,
    /// No exercise, sedentary work
    Sedentary,
}

impl FromStr for ActivityLevel {
    type Err = UnrecognizedAnswer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "high" | "vigorous" | "active" | "very_active" => Ok(Self::High),
            "moderate" | "medium" => Ok(Self::Moderate),
            "low" | "light" => Ok(Self::Low),
            "sedentary" | "inactive" | "none" => Ok(Self::Sedentary),
            _ => Err(UnrecognizedAnswer(s.to_owned())),
        }
    }
}

/// Family history answer for one condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyHistory {
    /// No affected relatives
    No,
    /// Affected relatives, count unspecified
    Yes,
    /// One affected parent
    One,
    /// Both parents affected
    Both,
}

impl FamilyHistory {
    /// Whether any relative is affected
    #[must_use]
    pub const fn is_present(self) -> bool {
        !matches!(self, Self::No)
    }

    /// Number of affected parents; an unspecified "yes" counts as one
    #[must_use]
    pub const fn affected_parents(self) -> u32 {
        match self {
            Self::No => 0,
            Self::Yes | Self::One => 1,
            Self::Both => 2,
        }
    }
}

impl FromStr for FamilyHistory {
    type Err = UnrecognizedAnswer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "no" | "none" | "false" => Ok(Self::No),
            "yes" | "true" => Ok(Self::Yes),
            "one" | "one_parent" | "1" => Ok(Self::One),
            "both" | "both_parents" | "2" => Ok(Self::Both),
            _ => Err(UnrecognizedAnswer(s.to_owned())),
        }
    }
}

/// Dietary intake frequency for one food group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntakeLevel {
    /// Rarely or never
    Low,
    /// A few times a week
    Moderate,
    /// Daily or more
    High,
}

impl FromStr for IntakeLevel {
    type Err = UnrecognizedAnswer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "low" | "rarely" | "never" | "none" => Ok(Self::Low),
            "moderate" | "medium" | "sometimes" | "occasionally" => Ok(Self::Moderate),
            "high" | "often" | "daily" | "frequent" => Ok(Self::High),
            _ => Err(UnrecognizedAnswer(s.to_owned())),
        }
    }
}

/// Self-reported stress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    /// Low stress
    Low,
    /// Moderate stress
    Moderate,
    /// High stress
    High,
}

impl FromStr for StressLevel {
    type Err = UnrecognizedAnswer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "low" | "none" => Ok(Self::Low),
            "moderate" | "medium" => Ok(Self::Moderate),
            "high" | "severe" => Ok(Self::High),
            _ => Err(UnrecognizedAnswer(s.to_owned())),
        }
    }
}

/// Alcohol consumption frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlcoholUse {
    /// Does not drink
    None,
    /// Occasionally
    Occasional,
    /// About once a week
    Weekly,
    /// More than three times a week
    Frequent,
}

impl FromStr for AlcoholUse {
    type Err = UnrecognizedAnswer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "none" | "never" | "no" => Ok(Self::None),
            "occasional" | "occasionally" | "rarely" => Ok(Self::Occasional),
            "weekly" => Ok(Self::Weekly),
            "frequent" | "often" | "daily" | ">3/week" => Ok(Self::Frequent),
            _ => Err(UnrecognizedAnswer(s.to_owned())),
        }
    }
}

/// Pre-bucketed waist circumference from questionnaires that do not ask for cm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaistBand {
    /// Below the population threshold
    Low,
    /// At or up to 10 cm over the threshold
    Medium,
    /// More than 10 cm over the threshold
    High,
}

impl FromStr for WaistBand {
    type Err = UnrecognizedAnswer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "low" | "normal" => Ok(Self::Low),
            "medium" | "moderate" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(UnrecognizedAnswer(s.to_owned())),
        }
    }
}

/// Waist answer: a measurement or a pre-bucketed band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Waist {
    /// Measured circumference in centimeters
    Centimeters(f64),
    /// Questionnaire band
    Band(WaistBand),
}

/// One assessment's questionnaire answers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerRecord {
    /// Age in whole years
    #[serde(
        deserialize_with = "lenient::integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<i32>,
    /// Body mass index (kg/m²)
    #[serde(
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub bmi: Option<f64>,
    /// Height in centimeters, used to derive BMI when `bmi` is absent
    #[serde(
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub height_cm: Option<f64>,
    /// Weight in kilograms, used to derive BMI when `bmi` is absent
    #[serde(
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight_kg: Option<f64>,
    /// Waist circumference
    #[serde(
        deserialize_with = "lenient::waist",
        skip_serializing_if = "Option::is_none"
    )]
    pub waist: Option<Waist>,
    /// Biological sex
    #[serde(
        deserialize_with = "lenient::choice",
        skip_serializing_if = "Option::is_none"
    )]
    pub gender: Option<Gender>,
    /// Habitual physical activity
    #[serde(
        deserialize_with = "lenient::choice",
        skip_serializing_if = "Option::is_none"
    )]
    pub physical_activity: Option<ActivityLevel>,
    /// Family history of diabetes
    #[serde(
        deserialize_with = "lenient::choice",
        skip_serializing_if = "Option::is_none"
    )]
    pub family_diabetes: Option<FamilyHistory>,
    /// Family history of high blood pressure
    #[serde(
        deserialize_with = "lenient::choice",
        skip_serializing_if = "Option::is_none"
    )]
    pub family_hypertension: Option<FamilyHistory>,
    /// Family history of heart disease
    #[serde(
        deserialize_with = "lenient::choice",
        skip_serializing_if = "Option::is_none"
    )]
    pub family_heart: Option<FamilyHistory>,
    /// Family history of high cholesterol
    #[serde(
        deserialize_with = "lenient::choice",
        skip_serializing_if = "Option::is_none"
    )]
    pub family_cholesterol: Option<FamilyHistory>,
    /// Family history of thyroid disease
    #[serde(
        deserialize_with = "lenient::choice",
        skip_serializing_if = "Option::is_none"
    )]
    pub family_thyroid: Option<FamilyHistory>,
    /// Current tobacco use
    #[serde(
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub tobacco_use: Option<bool>,
    /// Older questionnaires send `tobacco` instead of `tobacco_use`
    #[serde(deserialize_with = "lenient::flag", skip_serializing)]
    pub tobacco: Option<bool>,
    /// Alcohol consumption (recognized, not scored)
    #[serde(
        deserialize_with = "lenient::choice",
        skip_serializing_if = "Option::is_none"
    )]
    pub alcohol: Option<AlcoholUse>,
    /// Salt intake
    #[serde(
        deserialize_with = "lenient::choice",
        skip_serializing_if = "Option::is_none"
    )]
    pub diet_salt: Option<IntakeLevel>,
    /// Sugar and sweetened drink intake
    #[serde(
        deserialize_with = "lenient::choice",
        skip_serializing_if = "Option::is_none"
    )]
    pub diet_sugar: Option<IntakeLevel>,
    /// Fried food intake
    #[serde(
        deserialize_with = "lenient::choice",
        skip_serializing_if = "Option::is_none"
    )]
    pub diet_fried: Option<IntakeLevel>,
    /// Vegetable intake (low intake raises risk)
    #[serde(
        deserialize_with = "lenient::choice",
        skip_serializing_if = "Option::is_none"
    )]
    pub diet_vegetables: Option<IntakeLevel>,
    /// Self-reported stress
    #[serde(
        deserialize_with = "lenient::choice",
        skip_serializing_if = "Option::is_none"
    )]
    pub stress_level: Option<StressLevel>,
    /// Excessive thirst
    #[serde(
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub symptom_thirst: Option<bool>,
    /// Frequent urination
    #[serde(
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub symptom_urination: Option<bool>,
    /// Unexplained fatigue
    #[serde(
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub symptom_fatigue: Option<bool>,
    /// Thyroid symptoms (weight change, heat/cold intolerance, palpitations)
    #[serde(
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub thyroid_symptoms: Option<bool>,
    /// Visible neck swelling
    #[serde(
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub neck_swelling: Option<bool>,
    /// Previously diagnosed diabetes (recognized, not scored)
    #[serde(
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub history_diabetes: Option<bool>,
    /// Previously diagnosed high blood pressure (recognized, not scored)
    #[serde(
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub history_bp: Option<bool>,
    /// Autoimmune disease history
    #[serde(
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub history_autoimmune: Option<bool>,
}

impl AnswerRecord {
    /// BMI as answered, otherwise derived from height and weight
    #[must_use]
    pub fn effective_bmi(&self) -> Option<f64> {
        self.bmi.or_else(|| {
            let height_m = self.height_cm? / 100.0;
            let weight = self.weight_kg?;
            (height_m > 0.0).then(|| weight / (height_m * height_m))
        })
    }

    /// Tobacco answer under either key, `tobacco_use` winning
    #[must_use]
    pub fn uses_tobacco(&self) -> Option<bool> {
        self.tobacco_use.or(self.tobacco)
    }

    /// How many of the classic diabetes symptom questions were answered
    #[must_use]
    pub fn answered_diabetes_symptoms(&self) -> usize {
        [
            self.symptom_thirst,
            self.symptom_urination,
            self.symptom_fatigue,
        ]
        .iter()
        .filter(|flag| flag.is_some())
        .count()
    }
}

/// Field decoders that turn anything unparseable into `None`
mod lenient {
    use super::{normalize_label, Waist, WaistBand};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::str::FromStr;
    use tracing::trace;

    fn coerce_number(value: &Value) -> Option<f64> {
        match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|number| number.is_finite())
    }

    fn note_discarded<T>(value: &Value, parsed: Option<T>) -> Option<T> {
        if parsed.is_none() && !value.is_null() {
            trace!(%value, "Discarding unrecognized answer value");
        }
        parsed
    }

    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(note_discarded(&value, coerce_number(&value)))
    }

    pub fn integer<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let parsed = coerce_number(&value)
            .map(f64::trunc)
            .filter(|whole| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(whole))
            .map(|whole| whole as i32);
        Ok(note_discarded(&value, parsed))
    }

    pub fn choice<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
    {
        let value = Value::deserialize(deserializer)?;
        let parsed = match &value {
            Value::String(text) => text.parse().ok(),
            Value::Bool(answer) => (if *answer { "yes" } else { "no" }).parse().ok(),
            _ => None,
        };
        Ok(note_discarded(&value, parsed))
    }

    pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let parsed = match &value {
            Value::Bool(answer) => Some(*answer),
            Value::Number(number) => match number.as_i64() {
                Some(1) => Some(true),
                Some(0) => Some(false),
                _ => None,
            },
            Value::String(text) => match normalize_label(text).as_str() {
                "yes" | "y" | "true" | "1" => Some(true),
                "no" | "n" | "false" | "0" | "none" => Some(false),
                _ => None,
            },
            _ => None,
        };
        Ok(note_discarded(&value, parsed))
    }

    pub fn waist<'de, D>(deserializer: D) -> Result<Option<Waist>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let parsed = match &value {
            Value::String(text) => text
                .parse::<WaistBand>()
                .ok()
                .map(Waist::Band)
                .or_else(|| coerce_number(&value).map(Waist::Centimeters)),
            _ => coerce_number(&value).map(Waist::Centimeters),
        };
        Ok(note_discarded(&value, parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> AnswerRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_object_decodes_to_default() {
        assert_eq!(decode(json!({})), AnswerRecord::default());
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let record = decode(json!({ "age": "47", "bmi": " 24.5 ", "waist": "92" }));

        assert_eq!(record.age, Some(47));
        assert_eq!(record.bmi, Some(24.5));
        assert_eq!(record.waist, Some(Waist::Centimeters(92.0)));
    }

    #[test]
    fn test_malformed_values_become_missing() {
        let record = decode(json!({
            "age": "forty",
            "bmi": "NaN",
            "gender": "unknown",
            "physical_activity": 3,
            "tobacco_use": "sometimes",
            "waist": [90]
        }));

        assert_eq!(record, AnswerRecord::default());
    }

    #[test]
    fn test_enum_labels_accept_aliases_and_case() {
        let record = decode(json!({
            "gender": "Female",
            "physical_activity": "Sedentary",
            "family_diabetes": "Both Parents",
            "alcohol": ">3/week",
            "diet_salt": "often",
            "waist": "HIGH"
        }));

        assert_eq!(record.gender, Some(Gender::Female));
        assert_eq!(record.physical_activity, Some(ActivityLevel::Sedentary));
        assert_eq!(record.family_diabetes, Some(FamilyHistory::Both));
        assert_eq!(record.alcohol, Some(AlcoholUse::Frequent));
        assert_eq!(record.diet_salt, Some(IntakeLevel::High));
        assert_eq!(record.waist, Some(Waist::Band(WaistBand::High)));
    }

    #[test]
    fn test_flags_accept_booleans_words_and_digits() {
        let record = decode(json!({
            "symptom_thirst": true,
            "symptom_urination": "no",
            "symptom_fatigue": 1,
            "family_thyroid": true
        }));

        assert_eq!(record.symptom_thirst, Some(true));
        assert_eq!(record.symptom_urination, Some(false));
        assert_eq!(record.symptom_fatigue, Some(true));
        assert_eq!(record.family_thyroid, Some(FamilyHistory::Yes));
        assert_eq!(record.answered_diabetes_symptoms(), 3);
    }

    #[test]
    fn test_legacy_tobacco_key() {
        let legacy = decode(json!({ "tobacco": "yes" }));
        assert_eq!(legacy.uses_tobacco(), Some(true));

        let both = decode(json!({ "tobacco": "yes", "tobacco_use": "no" }));
        assert_eq!(both.uses_tobacco(), Some(false));
    }

    #[test]
    fn test_bmi_derived_from_height_and_weight() {
        let record = decode(json!({ "height_cm": 170, "weight_kg": 72.25 }));
        let bmi = record.effective_bmi().unwrap();
        assert!((bmi - 25.0).abs() < 1e-9);

        let explicit = decode(json!({ "bmi": 22, "height_cm": 170, "weight_kg": 72.25 }));
        assert_eq!(explicit.effective_bmi(), Some(22.0));

        let partial = decode(json!({ "height_cm": 170 }));
        assert_eq!(partial.effective_bmi(), None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let record = decode(json!({ "age": 30, "favourite_colour": "blue" }));
        assert_eq!(record.age, Some(30));
    }

    #[test]
    fn test_fractional_age_is_truncated() {
        assert_eq!(decode(json!({ "age": 44.9 })).age, Some(44));
        assert_eq!(decode(json!({ "age": -3 })).age, Some(-3));
    }
}
