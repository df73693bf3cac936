//! What-if GPA projections.
//!
//! Answers "what grade do I need" and "what if these courses were
//! retaken" questions over an unchanged course list. Inputs are never
//! mutated; substitutions happen on a private copy.

use std::collections::HashMap;

use super::{weighted_gpa, weighted_mean};
use crate::models::{CourseRecord, CourseStatus, GradePoint};

/// Top of the grade scale, assumed for every retaken course.
const MAX_GRADE: f64 = 4.0;

/// Average grade required on outstanding credit to reach `target`.
///
/// Outstanding credit is every failed or ungraded course. Completed
/// points come from passed courses (ungraded ones contribute zero points).
/// Returns `0.0` when nothing is outstanding. The result may exceed 4.0
/// when the target is out of reach.
pub fn required_gpa(courses: &[CourseRecord], target: f64) -> f64 {
    let mut completed_points = 0.0;
    let mut completed_credits = 0.0;
    let mut outstanding_credits = 0.0;

    for course in courses {
        let credits = course.credits();
        if course.status == CourseStatus::Passed {
            completed_points += credits * course.grade_or_zero();
            completed_credits += credits;
        }
        if course.status == CourseStatus::Failed || !course.grade_point.is_graded() {
            outstanding_credits += credits;
        }
    }

    if outstanding_credits <= 0.0 {
        return 0.0;
    }

    let required_points = target * (completed_credits + outstanding_credits) - completed_points;
    required_points / outstanding_credits
}

/// Weighted GPA after the named courses are retaken at 4.0.
pub fn ideal_gpa(courses: &[CourseRecord], retake_codes: &[&str]) -> f64 {
    weighted_gpa(&with_retakes(courses, retake_codes))
}

/// Grade required on outstanding credit after the named courses are
/// retaken at 4.0.
pub fn required_gpa_after_retake(
    courses: &[CourseRecord],
    target: f64,
    retake_codes: &[&str],
) -> f64 {
    required_gpa(&with_retakes(courses, retake_codes), target)
}

/// Weighted average over all courses with per-course target grades
/// substituted for their current grades.
///
/// Unlike [`weighted_gpa`], every course enters the average regardless of
/// status, with ungraded courses at 0.0. Codes missing from `courses` are
/// ignored.
pub fn what_if_gpa(courses: &[CourseRecord], targets: &HashMap<String, f64>) -> f64 {
    weighted_mean(courses.iter().map(|c| {
        let grade = targets
            .get(&c.code)
            .copied()
            .unwrap_or_else(|| c.grade_or_zero());
        (c.credits(), grade)
    }))
}

fn with_retakes(courses: &[CourseRecord], retake_codes: &[&str]) -> Vec<CourseRecord> {
    courses
        .iter()
        .map(|c| {
            if retake_codes.contains(&c.code.as_str()) {
                let mut retaken = c.clone();
                retaken.grade_point = GradePoint::Graded(MAX_GRADE);
                retaken.status = CourseStatus::Passed;
                retaken
            } else {
                c.clone()
            }
        })
        .collect()
}
