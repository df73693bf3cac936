//! Per-course scoring functions.
//!
//! Every function is pure over `(grade, credits, ...)` and returns full
//! precision. Constants are calibrated against a 4.0 grade scale.
//!
//! # Formulas
//!
//! | Score | Definition |
//! |-------|------------|
//! | difficulty | step function of credits (0.85 / 0.8 / 0.75 / 0.7) |
//! | success rate | `0.8 / difficulty' × history × gap × category`, clamped to [0, 1] |
//! | value | `0.7·potential + 0.2·impact + 0.1·effort_return` |
//! | sorting | `0.5·gap + 0.2·credit + 0.3·impact·grade_weight` |
//! | severity | `(4 − grade) × credits` |
//! | IPS | `share × (t − g)/(1 + 0.2|t − g|) × (t − g)·share` |

use crate::models::CourseCategory;

/// Top of the grade scale.
pub const MAX_GRADE: f64 = 4.0;

const BASE_SUCCESS_RATE: f64 = 0.8;

/// Difficulty multiplier of a course by credit weight.
///
/// Heavier courses are harder: below 2 credits → 0.85, below 3 → 0.8,
/// below 4 → 0.75, otherwise 0.7.
pub fn difficulty_factor(credits: f64) -> f64 {
    if credits < 2.0 {
        0.85
    } else if credits < 3.0 {
        0.8
    } else if credits < 4.0 {
        0.75
    } else {
        0.7
    }
}

/// Estimated probability of reaching `target` when retaking a course
/// currently graded `grade`.
///
/// Always within `[0, 1]`.
pub fn success_rate(grade: f64, target: f64, credits: f64, category: CourseCategory) -> f64 {
    let mut difficulty = difficulty_factor(credits);
    if credits >= 3.0 {
        difficulty *= 0.9;
    }

    let mut history = (MAX_GRADE - grade) / MAX_GRADE;
    if grade < 2.5 {
        history = (history * 1.2).min(1.0);
    }
    let history = history.max(0.5);

    let gap = target - grade;
    let gap_factor = if gap > 2.0 {
        0.8
    } else if gap > 1.5 {
        0.85
    } else if gap > 1.0 {
        0.9
    } else {
        1.0
    };

    let category_factor = match category {
        CourseCategory::Core => 1.05,
        CourseCategory::Elective => 0.95,
        CourseCategory::Other => 1.0,
    };

    let rate = BASE_SUCCESS_RATE * (1.0 / difficulty) * history * gap_factor * category_factor;
    if rate.is_nan() {
        return 0.0;
    }
    rate.clamp(0.0, 1.0)
}

/// Share of the course in the total credit weight, `0.0` when the total
/// is not positive.
fn credit_share(credits: f64, total_credits: f64) -> f64 {
    if total_credits > 0.0 {
        credits / total_credits
    } else {
        0.0
    }
}

/// Estimated worth of retaking a course (higher = more valuable).
///
/// Effort-return always assumes a 4.0 outcome.
pub fn value_score(grade: f64, credits: f64, total_credits: f64) -> f64 {
    let room = (MAX_GRADE - grade).max(0.0);
    let potential = (room / MAX_GRADE).powf(0.8) * (credits / MAX_GRADE).powf(0.9) * 100.0;
    let impact = credit_share(credits, total_credits) * 100.0;
    let effort_return = (room * credits) / (difficulty_factor(credits) * MAX_GRADE);

    0.7 * potential + 0.2 * impact + 0.1 * effort_return
}

/// Composite ranking key (higher = ranked earlier).
pub fn sorting_score(grade: f64, credits: f64, total_credits: f64) -> f64 {
    let gap_score = (MAX_GRADE - grade) / MAX_GRADE * 100.0;
    let credit_score = credits / 5.0 * 100.0;
    let impact_score = (MAX_GRADE - grade) * credit_share(credits, total_credits) * 100.0;
    let grade_weight = if grade < 2.0 {
        1.5
    } else if grade < 2.5 {
        1.3
    } else {
        1.0
    };

    0.5 * gap_score + 0.2 * credit_score + 0.3 * impact_score * grade_weight
}

/// Priority severity `(4 − grade) × credits`.
pub fn severity(grade: f64, credits: f64) -> f64 {
    (MAX_GRADE - grade) * credits
}

/// Improvement-performance score of a course against `target`.
///
/// Combines the credit share (twice) with the grade gap damped by its own
/// magnitude. `0.0` when the total credit weight is not positive.
pub fn ips_score(grade: f64, credits: f64, total_credits: f64, target: f64) -> f64 {
    if total_credits <= 0.0 {
        return 0.0;
    }
    let share = credits / total_credits;
    let gap = target - grade;
    let probability = 1.0 / (1.0 + 0.2 * gap.abs());
    let improvement_space = gap * probability;
    let impact = gap * credits / total_credits;
    share * improvement_space * impact
}
