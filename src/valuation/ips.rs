//! Improvement-performance score (IPS) recommender.
//!
//! A lighter alternative to the full valuation: one score per course,
//! top-N by score.

use serde::{Deserialize, Serialize};

use super::scoring::ips_score;
use crate::gpa::total_credits;
use crate::models::{CourseRecord, CourseStatus};

/// Number of courses returned by [`recommend_by_ips`].
pub const IPS_RECOMMENDATION_LIMIT: usize = 7;

/// A course with its improvement-performance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpsRecommendation {
    /// The recommended course.
    pub course: CourseRecord,
    /// Improvement-performance score; higher is recommended first.
    pub ips: f64,
}

/// Recommends up to seven passed courses graded strictly between 0 and
/// `target`, highest IPS first. Equal scores keep input order.
pub fn recommend_by_ips(courses: &[CourseRecord], target: f64) -> Vec<IpsRecommendation> {
    let total = total_credits(courses);

    let mut recommendations: Vec<IpsRecommendation> = courses
        .iter()
        .filter(|c| c.status == CourseStatus::Passed)
        .filter_map(|c| {
            let grade = c.grade()?;
            (grade > 0.0 && grade < target).then(|| IpsRecommendation {
                course: c.clone(),
                ips: ips_score(grade, c.credits(), total, target),
            })
        })
        .collect();

    recommendations.sort_by(|a, b| b.ips.total_cmp(&a.ips));
    recommendations.truncate(IPS_RECOMMENDATION_LIMIT);
    recommendations
}
