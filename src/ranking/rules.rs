//! Built-in ranking rules.
//!
//! All rules read scores already attached to the candidate by the
//! valuation engine and return lower values for candidates that should
//! come first.

use super::{RankingRule, RuleScore};
use crate::models::RetakeCandidate;

/// Composite sorting score, highest first.
#[derive(Debug, Clone, Copy)]
pub struct SortingScore;

impl RankingRule for SortingScore {
    fn name(&self) -> &'static str {
        "SORTING"
    }

    fn evaluate(&self, candidate: &RetakeCandidate) -> RuleScore {
        -candidate.sorting_score
    }

    fn description(&self) -> &'static str {
        "Composite Sorting Score"
    }
}

/// Estimated success rate, highest first.
#[derive(Debug, Clone, Copy)]
pub struct SuccessRate;

impl RankingRule for SuccessRate {
    fn name(&self) -> &'static str {
        "SUCCESS"
    }

    fn evaluate(&self, candidate: &RetakeCandidate) -> RuleScore {
        -candidate.success_rate
    }

    fn description(&self) -> &'static str {
        "Highest Success Rate"
    }
}

/// Value score, highest first.
#[derive(Debug, Clone, Copy)]
pub struct ValueScore;

impl RankingRule for ValueScore {
    fn name(&self) -> &'static str {
        "VALUE"
    }

    fn evaluate(&self, candidate: &RetakeCandidate) -> RuleScore {
        -candidate.value_score
    }

    fn description(&self) -> &'static str {
        "Highest Value Score"
    }
}

/// Priority severity `(4 − grade) × credits`, highest first.
#[derive(Debug, Clone, Copy)]
pub struct Severity;

impl RankingRule for Severity {
    fn name(&self) -> &'static str {
        "SEVERITY"
    }

    fn evaluate(&self, candidate: &RetakeCandidate) -> RuleScore {
        -candidate.priority.severity
    }

    fn description(&self) -> &'static str {
        "Highest Priority Severity"
    }
}

/// Lowest current grade first.
#[derive(Debug, Clone, Copy)]
pub struct LowestGrade;

impl RankingRule for LowestGrade {
    fn name(&self) -> &'static str {
        "GRADE"
    }

    fn evaluate(&self, candidate: &RetakeCandidate) -> RuleScore {
        candidate.grade()
    }

    fn description(&self) -> &'static str {
        "Lowest Current Grade"
    }
}
