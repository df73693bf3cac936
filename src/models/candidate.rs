//! Retake candidate model.
//!
//! A candidate is a passed course whose grade leaves room for improvement,
//! annotated with the scores the valuation engine derives for it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::CourseRecord;

/// Coarse, human-facing urgency of a retake.
///
/// Derived from `(4.0 − grade) × credits`, independently of the numeric
/// ranking score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLabel {
    /// Severity ≥ 6.0.
    Urgent,
    /// Severity ≥ 4.0.
    StronglyRecommended,
    /// Severity ≥ 2.5.
    Recommended,
    /// Severity ≥ 1.5.
    Optional,
    /// Severity < 1.5.
    NotRecommended,
}

impl PriorityLabel {
    /// Classifies a severity score.
    pub fn from_severity(severity: f64) -> Self {
        if severity >= 6.0 {
            Self::Urgent
        } else if severity >= 4.0 {
            Self::StronglyRecommended
        } else if severity >= 2.5 {
            Self::Recommended
        } else if severity >= 1.5 {
            Self::Optional
        } else {
            Self::NotRecommended
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::StronglyRecommended => "strongly recommended",
            Self::Recommended => "recommended",
            Self::Optional => "optional",
            Self::NotRecommended => "not recommended",
        }
    }
}

impl fmt::Display for PriorityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Priority label together with the severity it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Priority {
    /// Ordinal label.
    pub label: PriorityLabel,
    /// `(4.0 − grade) × credits`.
    pub severity: f64,
}

impl Priority {
    /// Builds a priority from its severity score.
    pub fn from_severity(severity: f64) -> Self {
        Self {
            label: PriorityLabel::from_severity(severity),
            severity,
        }
    }
}

/// A scored retake candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetakeCandidate {
    /// The underlying course.
    pub course: CourseRecord,
    /// Difficulty multiplier from the credit weight.
    pub difficulty: f64,
    /// Estimated probability of reaching the target grade (0.0..=1.0).
    pub success_rate: f64,
    /// Estimated GPA-improvement worth (higher = more valuable).
    pub value_score: f64,
    /// Coarse urgency classification.
    pub priority: Priority,
    /// Ranking key (higher = selected first).
    #[serde(skip_serializing, default)]
    pub sorting_score: f64,
}

impl RetakeCandidate {
    /// Course code.
    pub fn code(&self) -> &str {
        &self.course.code
    }

    /// Credit weight of the course.
    pub fn credits(&self) -> f64 {
        self.course.credits()
    }

    /// Current grade of the course (0.0 if ungraded).
    pub fn grade(&self) -> f64 {
        self.course.grade_or_zero()
    }
}

impl AsRef<CourseRecord> for RetakeCandidate {
    fn as_ref(&self) -> &CourseRecord {
        &self.course
    }
}

/// Risk classification of a whole retake plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Mean success rate below 0.6.
    High,
    /// Mean success rate below 0.8.
    Medium,
    /// Mean success rate of at least 0.8.
    Low,
    /// No course data to assess.
    #[serde(rename = "n/a")]
    NotApplicable,
}

impl RiskLevel {
    /// Classifies a mean success rate.
    pub fn from_success_rate(rate: f64) -> Self {
        if rate < 0.6 {
            Self::High
        } else if rate < 0.8 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
