//! Ranking rules and rule engine for retake candidates.
//!
//! Provides single-criterion ranking rules and a composable engine that
//! applies them in sequence, falling through to the next rule whenever two
//! candidates are within the current rule's tolerance.
//!
//! # Usage
//!
//! ```
//! use retake_planner::ranking::{rules, RankingEngine};
//!
//! let engine = RankingEngine::new()
//!     .with_rule(rules::SortingScore, 5.0)
//!     .with_rule(rules::SuccessRate, 0.1)
//!     .with_tie_breaker(rules::ValueScore);
//! assert_eq!(engine.rule_names(), vec!["SORTING", "SUCCESS", "VALUE"]);
//! ```
//!
//! # Tolerance Semantics
//! Tolerance comparisons are not transitive: `a ≈ b` and `b ≈ c` do not
//! imply `a ≈ c`. The engine therefore orders with a stable insertion sort
//! whose result depends only on the input order, never on the sort
//! algorithm's internal probing. When scores cluster within tolerance,
//! the order may differ from what a JavaScript `Array.prototype.sort`
//! produces for the same comparator.

mod engine;
pub mod rules;

pub use engine::{RankingEngine, TieBreaker};

use crate::models::RetakeCandidate;
use std::fmt::Debug;

/// Score returned by a ranking rule.
///
/// Lower scores = ranked earlier.
pub type RuleScore = f64;

/// A rule that scores one ranking criterion of a candidate.
///
/// # Score Convention
/// **Lower score = ranked earlier.** Rules over "higher is better" metrics
/// return the negated metric.
pub trait RankingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SORTING", "VALUE").
    fn name(&self) -> &'static str;

    /// Scores a candidate. Lower = ranked earlier.
    fn evaluate(&self, candidate: &RetakeCandidate) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
