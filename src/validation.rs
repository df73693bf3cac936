//! Input validation for course collections.
//!
//! Checks structural integrity of course records before planning.
//! Detects:
//! - Empty or duplicate course codes
//! - Grade points outside the 0.0–4.0 scale
//! - Negative or non-finite credit weights
//! - Offering sets that name no term
//!
//! Validation is advisory. The engines accept any input and apply their
//! lenient numeric policy (bad credits read as zero, a course offered in no
//! term is reported unplaced); this module lets callers surface the same
//! problems up front.

use crate::models::{CourseRecord, GradePoint, OfferingPattern};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A course has a blank code.
    EmptyCode,
    /// Two courses share the same code.
    DuplicateCode,
    /// A grade point is negative, above 4.0, or not a number.
    GradeOutOfRange,
    /// A credit weight is negative or not a number.
    InvalidCredit,
    /// An explicit offering set contains no slot number.
    EmptyOffering,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course collection.
///
/// Checks:
/// 1. Every course has a non-blank code
/// 2. No duplicate codes
/// 3. Graded courses lie within 0.0..=4.0
/// 4. Credit weights are finite and non-negative
/// 5. Explicit offering sets are non-empty
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_courses(courses: &[CourseRecord]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut codes = HashSet::new();

    for (position, course) in courses.iter().enumerate() {
        if course.code.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCode,
                format!("Course at position {position} has no code"),
            ));
        } else if !codes.insert(course.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCode,
                format!("Duplicate course code: {}", course.code),
            ));
        }

        if let GradePoint::Graded(grade) = course.grade_point {
            if !(0.0..=4.0).contains(&grade) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::GradeOutOfRange,
                    format!("Course '{}' has grade point {grade} outside 0.0..=4.0", course.code),
                ));
            }
        }

        if !course.credit_weight.is_finite() || course.credit_weight < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCredit,
                format!(
                    "Course '{}' has invalid credit weight {}",
                    course.code, course.credit_weight
                ),
            ));
        }

        if let OfferingPattern::Slots(numbers) = &course.offering {
            if numbers.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptyOffering,
                    format!("Course '{}' is offered in no term", course.code),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
