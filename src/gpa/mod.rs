//! Weighted GPA aggregation.
//!
//! Pure aggregation over a course collection: the overall credit-weighted
//! GPA, attempted-credit totals, the per-semester trend, and what-if
//! projections.
//!
//! # Inclusion Rules
//!
//! | Aggregate | Included courses |
//! |-----------|------------------|
//! | Weighted GPA | `passed` with grade > 0 |
//! | GPA credits | same as weighted GPA |
//! | Credits taken | `passed` or `failed` (never `unrepaired`) |
//!
//! # Numeric Policy
//! Results are full-precision; rounding belongs to the presentation layer.
//! Empty inputs and zero credit denominators yield `0.0`.

mod distribution;
mod projection;
mod trend;

pub use distribution::{
    credit_grade_points, grade_distribution, grade_heatmap, group_by_credit, CreditGradePoint,
    GradeCount, GradeHeatmap, GradeHeatmapCell, LETTER_GRADES,
};
pub use projection::{ideal_gpa, required_gpa, required_gpa_after_retake, what_if_gpa};
pub use trend::{semester_trend, SemesterTrend, TrendPoint};

use serde::{Deserialize, Serialize};

use crate::models::{CourseRecord, CourseStatus};

/// Credit-weighted mean of `(credits, grade)` pairs; `0.0` when the
/// credit total is not positive.
pub(crate) fn weighted_mean(pairs: impl IntoIterator<Item = (f64, f64)>) -> f64 {
    let (points, credits) = pairs
        .into_iter()
        .fold((0.0, 0.0), |(p, w), (credits, grade)| {
            (p + credits * grade, w + credits)
        });
    if credits > 0.0 {
        points / credits
    } else {
        0.0
    }
}

/// Overall credit-weighted GPA.
///
/// Only passed courses with a positive grade are included. Returns `0.0`
/// when no course qualifies or their credit total is zero.
///
/// # Example
/// ```
/// use retake_planner::gpa::weighted_gpa;
/// use retake_planner::models::CourseRecord;
///
/// let courses = vec![
///     CourseRecord::new("A").with_credits(4.0).with_grade(2.0).passed(),
///     CourseRecord::new("B").with_credits(2.0).with_grade(4.0).passed(),
///     CourseRecord::new("C").with_credits(3.0).ungraded(),
/// ];
/// let gpa = weighted_gpa(&courses);
/// assert!((gpa - 8.0 / 3.0).abs() < 1e-10);
/// ```
pub fn weighted_gpa(courses: &[CourseRecord]) -> f64 {
    weighted_mean(
        courses
            .iter()
            .filter(|c| c.counts_toward_gpa())
            .map(|c| (c.credits(), c.grade_or_zero())),
    )
}

/// Credits that enter the weighted GPA denominator.
pub fn gpa_credit_total(courses: &[CourseRecord]) -> f64 {
    courses
        .iter()
        .filter(|c| c.counts_toward_gpa())
        .map(|c| c.credits())
        .sum()
}

/// Attempted credits: passed or failed courses, never unrepaired ones.
pub fn credits_taken(courses: &[CourseRecord]) -> f64 {
    courses
        .iter()
        .filter(|c| c.status.is_completed())
        .map(|c| c.credits())
        .sum()
}

/// Credit weight of every course regardless of status.
pub fn total_credits(courses: &[CourseRecord]) -> f64 {
    courses.iter().map(|c| c.credits()).sum()
}

/// Headline GPA statistics of a course collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GpaSummary {
    /// Overall credit-weighted GPA.
    pub weighted_gpa: f64,
    /// Credits included in the weighted GPA.
    pub gpa_credits: f64,
    /// Passed + failed credits.
    pub credits_taken: f64,
    /// Credit weight of all courses.
    pub total_credits: f64,
    /// Number of passed courses.
    pub passed_count: usize,
    /// Number of failed courses.
    pub failed_count: usize,
}

impl GpaSummary {
    /// Computes the summary of a course collection.
    pub fn calculate(courses: &[CourseRecord]) -> Self {
        let count = |status: CourseStatus| courses.iter().filter(|c| c.status == status).count();
        Self {
            weighted_gpa: weighted_gpa(courses),
            gpa_credits: gpa_credit_total(courses),
            credits_taken: credits_taken(courses),
            total_credits: total_credits(courses),
            passed_count: count(CourseStatus::Passed),
            failed_count: count(CourseStatus::Failed),
        }
    }
}
