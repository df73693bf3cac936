//! Retake candidate valuation and selection.
//!
//! Scores every eligible course, ranks the candidates with a
//! [`RankingEngine`], truncates to the strategy's selection limit, and
//! aggregates the projected outcome of the selection.
//!
//! # Algorithm
//!
//! 1. Filter eligible courses: passed, graded, below the grade ceiling,
//!    and either graded below 3.0 or worth at least 2 credits.
//! 2. Score each: difficulty, success rate, value score, priority,
//!    sorting score (see [`scoring`]).
//! 3. Rank: sorting score, then success rate, then value score, each
//!    rule deferring to the next within its tolerance.
//! 4. Select the first `strategy.selection_limit()` candidates.
//! 5. Aggregate projected GPA, best-case GPA, mean success rate and risk.

mod ips;
pub mod scoring;

pub use ips::{recommend_by_ips, IpsRecommendation, IPS_RECOMMENDATION_LIMIT};

use serde::{Deserialize, Serialize};

use crate::gpa::{total_credits, weighted_gpa};
use crate::models::{CourseRecord, CourseStatus, Priority, RetakeCandidate, RiskLevel, Strategy};
use crate::ranking::RankingEngine;
use scoring::MAX_GRADE;

/// Default exclusive grade ceiling for eligibility.
pub const DEFAULT_GRADE_CEILING: f64 = 4.0;

/// Default target grade assumed for retaken courses.
pub const DEFAULT_TARGET_GPA: f64 = 4.0;

/// Selected retake candidates with their projected effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetakePlan {
    /// Strategy the plan was built with.
    pub strategy: Strategy,
    /// Target grade assumed for every retake.
    pub target_gpa: f64,
    /// Selected candidates in ranked order.
    pub candidates: Vec<RetakeCandidate>,
    /// Number of eligible courses before truncation.
    pub eligible_count: usize,
    /// Credit weight of all input courses.
    pub total_credits: f64,
    /// Current weighted GPA.
    pub original_gpa: f64,
    /// GPA if every selected course reaches the target.
    pub projected_gpa: f64,
    /// GPA if every selected course reaches 4.0.
    pub best_case_gpa: f64,
    /// Mean success rate of the selection (0.0 when empty).
    pub overall_success_rate: f64,
    /// Risk classification of the selection.
    pub risk_level: RiskLevel,
}

impl RetakePlan {
    /// The neutral plan for an empty course list.
    pub fn empty(strategy: Strategy, target_gpa: f64) -> Self {
        Self {
            strategy,
            target_gpa,
            candidates: Vec::new(),
            eligible_count: 0,
            total_credits: 0.0,
            original_gpa: 0.0,
            projected_gpa: 0.0,
            best_case_gpa: 0.0,
            overall_success_rate: 0.0,
            risk_level: RiskLevel::NotApplicable,
        }
    }

    /// Whether no candidate was selected.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Codes of the selected candidates, in ranked order.
    pub fn selected_codes(&self) -> Vec<&str> {
        self.candidates.iter().map(|c| c.code()).collect()
    }

    /// Total credits of the selected candidates.
    pub fn selected_credits(&self) -> f64 {
        self.candidates.iter().map(|c| c.credits()).sum()
    }
}

/// Scores, ranks and selects retake candidates.
///
/// # Example
/// ```
/// use retake_planner::models::{CourseRecord, Strategy};
/// use retake_planner::valuation::ValuationEngine;
///
/// let courses = vec![
///     CourseRecord::new("MATH101").with_credits(4.0).with_grade(2.0).passed(),
///     CourseRecord::new("ART100").with_credits(1.0).with_grade(3.5).passed(),
/// ];
/// let plan = ValuationEngine::new()
///     .with_strategy(Strategy::Conservative)
///     .evaluate(&courses);
/// assert_eq!(plan.selected_codes(), vec!["MATH101"]);
/// ```
#[derive(Debug, Clone)]
pub struct ValuationEngine {
    strategy: Strategy,
    target_gpa: f64,
    grade_ceiling: f64,
    ranking: RankingEngine,
}

impl ValuationEngine {
    /// Creates an engine with the conservative strategy, target 4.0 and
    /// the retake ranking order.
    pub fn new() -> Self {
        Self {
            strategy: Strategy::default(),
            target_gpa: DEFAULT_TARGET_GPA,
            grade_ceiling: DEFAULT_GRADE_CEILING,
            ranking: RankingEngine::retake_order(),
        }
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the target grade.
    pub fn with_target_gpa(mut self, target_gpa: f64) -> Self {
        self.target_gpa = target_gpa;
        self
    }

    /// Sets the exclusive grade ceiling for eligibility.
    pub fn with_grade_ceiling(mut self, grade_ceiling: f64) -> Self {
        self.grade_ceiling = grade_ceiling;
        self
    }

    /// Replaces the ranking engine.
    pub fn with_ranking(mut self, ranking: RankingEngine) -> Self {
        self.ranking = ranking;
        self
    }

    /// The configured strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Whether a course qualifies as a retake candidate.
    pub fn is_eligible(&self, course: &CourseRecord) -> bool {
        if course.status != CourseStatus::Passed {
            return false;
        }
        match course.grade() {
            Some(grade) => grade < self.grade_ceiling && (grade < 3.0 || course.credits() >= 2.0),
            None => false,
        }
    }

    /// Scores one course against the given total credit weight.
    pub fn score(&self, course: &CourseRecord, total_credits: f64) -> RetakeCandidate {
        let grade = course.grade_or_zero();
        let credits = course.credits();

        RetakeCandidate {
            course: course.clone(),
            difficulty: scoring::difficulty_factor(credits),
            success_rate: scoring::success_rate(grade, self.target_gpa, credits, course.category),
            value_score: scoring::value_score(grade, credits, total_credits),
            priority: Priority::from_severity(scoring::severity(grade, credits)),
            sorting_score: scoring::sorting_score(grade, credits, total_credits),
        }
    }

    /// All eligible courses, scored and ranked (no truncation).
    pub fn rank_candidates(&self, courses: &[CourseRecord]) -> Vec<RetakeCandidate> {
        let total = total_credits(courses);
        let scored: Vec<RetakeCandidate> = courses
            .iter()
            .filter(|c| self.is_eligible(c))
            .map(|c| self.score(c, total))
            .collect();
        self.ranking.rank(scored)
    }

    /// Builds the retake plan for a course list.
    pub fn evaluate(&self, courses: &[CourseRecord]) -> RetakePlan {
        if courses.is_empty() {
            return RetakePlan::empty(self.strategy, self.target_gpa);
        }

        let total = total_credits(courses);
        let original_gpa = weighted_gpa(courses);

        let mut candidates = self.rank_candidates(courses);
        let eligible_count = candidates.len();
        candidates.truncate(self.strategy.selection_limit());

        let projected_gpa = project(original_gpa, &candidates, self.target_gpa, total);
        let best_case_gpa = project(original_gpa, &candidates, MAX_GRADE, total);

        let overall_success_rate = if candidates.is_empty() {
            0.0
        } else {
            candidates.iter().map(|c| c.success_rate).sum::<f64>() / candidates.len() as f64
        };

        log::debug!(
            "valuation: strategy={} eligible={} selected={} original_gpa={:.4} projected_gpa={:.4}",
            self.strategy,
            eligible_count,
            candidates.len(),
            original_gpa,
            projected_gpa
        );

        RetakePlan {
            strategy: self.strategy,
            target_gpa: self.target_gpa,
            candidates,
            eligible_count,
            total_credits: total,
            original_gpa,
            projected_gpa,
            best_case_gpa,
            overall_success_rate,
            risk_level: RiskLevel::from_success_rate(overall_success_rate),
        }
    }
}

impl Default for ValuationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// `original + Σ w·(target − g) / total`; `original` when `total` is zero.
fn project(original: f64, candidates: &[RetakeCandidate], target: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return original;
    }
    let gain: f64 = candidates
        .iter()
        .map(|c| c.credits() * (target - c.grade()))
        .sum();
    original + gain / total
}
