// ABOUTME: Risk vocabulary shared by the engine, the HTTP surface and the CLI
// ABOUTME: Conditions, per-condition maps, risk levels, confidence, recommendations and referrals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// A screened condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// Type 2 diabetes
    Diabetes,
    /// High blood pressure
    Hypertension,
    /// Cardiovascular disease
    Cvd,
    /// Abnormal blood lipids
    Dyslipidemia,
    /// Thyroid disorder
    Thyroid,
}

impl Condition {
    /// Every condition, in report order
    pub const ALL: [Self; 5] = [
        Self::Diabetes,
        Self::Hypertension,
        Self::Cvd,
        Self::Dyslipidemia,
        Self::Thyroid,
    ];

    /// Upper bound of this condition's score range (lower bound is always 0)
    #[must_use]
    pub const fn max_score(self) -> u32 {
        match self {
            Self::Diabetes => 100,
            Self::Hypertension | Self::Dyslipidemia => 15,
            Self::Cvd | Self::Thyroid => 20,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes",
            Self::Hypertension => "hypertension",
            Self::Cvd => "cvd",
            Self::Dyslipidemia => "dyslipidemia",
            Self::Thyroid => "thyroid",
        }
    }

    /// Human-readable name for messages
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes",
            Self::Hypertension => "high blood pressure",
            Self::Cvd => "cardiovascular disease",
            Self::Dyslipidemia => "high cholesterol",
            Self::Thyroid => "thyroid disorder",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per condition, serialized as `{diabetes, hypertension, cvd, dyslipidemia, thyroid}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct ConditionMap<T> {
    /// Diabetes entry
    pub diabetes: T,
    /// Hypertension entry
    pub hypertension: T,
    /// Cardiovascular disease entry
    pub cvd: T,
    /// Dyslipidemia entry
    pub dyslipidemia: T,
    /// Thyroid entry
    pub thyroid: T,
}

impl<T> ConditionMap<T> {
    /// Build a map by evaluating `f` for every condition in report order
    pub fn from_fn(mut f: impl FnMut(Condition) -> T) -> Self {
        Self {
            diabetes: f(Condition::Diabetes),
            hypertension: f(Condition::Hypertension),
            cvd: f(Condition::Cvd),
            dyslipidemia: f(Condition::Dyslipidemia),
            thyroid: f(Condition::Thyroid),
        }
    }

    /// Entry for one condition
    #[must_use]
    pub const fn get(&self, condition: Condition) -> &T {
        match condition {
            Condition::Diabetes => &self.diabetes,
            Condition::Hypertension => &self.hypertension,
            Condition::Cvd => &self.cvd,
            Condition::Dyslipidemia => &self.dyslipidemia,
            Condition::Thyroid => &self.thyroid,
        }
    }

    /// Entries in report order
    pub fn iter(&self) -> impl Iterator<Item = (Condition, &T)> {
        Condition::ALL
            .into_iter()
            .map(move |condition| (condition, self.get(condition)))
    }

    /// Transform every entry
    pub fn map<U>(&self, mut f: impl FnMut(Condition, &T) -> U) -> ConditionMap<U> {
        ConditionMap::from_fn(|condition| f(condition, self.get(condition)))
    }
}

/// Integer score per condition
pub type ScoreRecord = ConditionMap<u32>;

/// Risk level per condition
pub type LevelRecord = ConditionMap<RiskLevel>;

/// Confidence per condition
pub type ConfidenceRecord = ConditionMap<ConfidenceLevel>;

/// Categorical risk bucket
///
/// `Medium` from older clients is accepted and normalized to `Moderate`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum RiskLevel {
    /// Below the moderate cutoff
    #[default]
    Low,
    /// At or above the moderate cutoff, below the high cutoff
    #[serde(alias = "Medium")]
    Moderate,
    /// At or above the high cutoff
    High,
}

impl RiskLevel {
    /// Whether this level warrants a recommendation
    #[must_use]
    pub const fn is_elevated(self) -> bool {
        !matches!(self, Self::Low)
    }

    /// Recommendation priority for elevated levels
    #[must_use]
    pub const fn recommendation_priority(self) -> Option<Priority> {
        match self {
            Self::Low => None,
            Self::Moderate => Some(Priority::Moderate),
            Self::High => Some(Priority::Urgent),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("Low"),
            Self::Moderate => f.write_str("Moderate"),
            Self::High => f.write_str("High"),
        }
    }
}

/// How complete the answers behind a score were; ordered `Low < Moderate < High`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// Key inputs missing
    #[default]
    Low,
    /// Secondary inputs missing
    Moderate,
    /// All relevant inputs present
    High,
}

impl ConfidenceLevel {
    /// Most conservative confidence among `levels`; `Low` when there are none
    pub fn lowest(levels: impl IntoIterator<Item = Self>) -> Self {
        levels.into_iter().min().unwrap_or(Self::Low)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("low"),
            Self::Moderate => f.write_str("moderate"),
            Self::High => f.write_str("high"),
        }
    }
}

/// Follow-up urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Routine follow-up
    Moderate,
    /// Prompt follow-up
    Urgent,
}

/// Educational, non-diagnostic follow-up message for one elevated condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Condition the message concerns
    pub condition: Condition,
    /// Message text
    pub message: String,
    /// `urgent` for High risk, `moderate` for Moderate risk
    pub priority: Priority,
}

/// Suggested specialist for provider search pre-filtering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialistReferral {
    /// Specialist type, e.g. "Endocrinologist"
    pub specialization: String,
    /// Human-readable justification
    pub reason: String,
    /// Referral urgency
    pub priority: Priority,
    /// Highest contributing score on the normalized 0-10 scale
    pub risk_score: f64,
}
