//! Course record model.
//!
//! A course record is the immutable input unit of every engine in this
//! crate: one attempted (or planned) course with its credit weight, grade
//! point, completion status and offering pattern.
//!
//! # Numeric Policy
//! Numeric fields are never a source of errors. Credit weights that are
//! negative or non-finite read as `0.0`; grade points are either a finite
//! value or the distinct `Ungraded` sentinel.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::TermParity;

/// Completion status of a course.
///
/// Tri-state: an `Unrepaired` course (in progress or not yet attempted) is
/// never counted as completed credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    /// Completed with a passing result.
    Passed,
    /// Completed with a failing result.
    Failed,
    /// In progress or not yet attempted.
    Unrepaired,
}

impl CourseStatus {
    /// Parses a status label. Anything other than `passed`/`failed` is
    /// treated as `Unrepaired`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "passed" => Self::Passed,
            "failed" => Self::Failed,
            _ => Self::Unrepaired,
        }
    }

    /// Whether the course counts as attempted credit (passed or failed).
    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Passed | Self::Failed)
    }
}

/// Grade point on the 0–4.0 scale, or the ungraded sentinel.
///
/// Serializes as a number, or `null` when ungraded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum GradePoint {
    /// A recorded grade point.
    Graded(f64),
    /// No grade recorded (`--` or empty in raw data).
    Ungraded,
}

impl GradePoint {
    /// Parses a raw grade field.
    ///
    /// `--` and blank fields are `Ungraded`; any other unparseable text
    /// reads as a grade of `0.0`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "--" {
            return Self::Ungraded;
        }
        Self::Graded(parse_lenient(trimmed))
    }

    /// The grade value, if graded and finite.
    #[inline]
    pub fn value(&self) -> Option<f64> {
        match *self {
            Self::Graded(v) if v.is_finite() => Some(v),
            _ => None,
        }
    }

    /// Whether a grade is recorded.
    #[inline]
    pub fn is_graded(&self) -> bool {
        self.value().is_some()
    }
}

impl From<Option<f64>> for GradePoint {
    fn from(value: Option<f64>) -> Self {
        value.map(Self::Graded).unwrap_or(Self::Ungraded)
    }
}

impl From<GradePoint> for Option<f64> {
    fn from(grade: GradePoint) -> Self {
        grade.value()
    }
}

/// Which term types a course is offered in.
///
/// Slot numbers follow the academic numbering of the source data:
/// odd numbers are fall-type terms, even numbers are spring-type terms.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferingPattern {
    /// Offered every term.
    #[default]
    Any,
    /// Offered in the terms whose parity matches one of these slot numbers.
    Slots(BTreeSet<u32>),
}

impl OfferingPattern {
    /// Creates a pattern from explicit slot numbers. Zero is dropped.
    pub fn slots(numbers: impl IntoIterator<Item = u32>) -> Self {
        Self::Slots(numbers.into_iter().filter(|&n| n > 0).collect())
    }

    /// Parses a raw offering field such as `"1,3"`, `"any"` or `"--"`.
    ///
    /// Blank, `--` and `any` mean always offered. Tokens that are not
    /// positive integers are dropped; if none remain the course is treated
    /// as always offered.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "--" || trimmed.eq_ignore_ascii_case("any") {
            return Self::Any;
        }

        let numbers: BTreeSet<u32> = trimmed
            .split(',')
            .filter_map(|token| token.trim().parse::<u32>().ok())
            .filter(|&n| n > 0)
            .collect();

        if numbers.is_empty() {
            Self::Any
        } else {
            Self::Slots(numbers)
        }
    }

    /// Whether the course runs in a term of the given parity.
    pub fn is_offered_in(&self, parity: TermParity) -> bool {
        match self {
            Self::Any => true,
            Self::Slots(numbers) => numbers
                .iter()
                .any(|&n| TermParity::of_slot(n) == parity),
        }
    }

    /// Declared slot numbers in ascending order (empty for `Any`).
    pub fn slot_numbers(&self) -> Vec<u32> {
        match self {
            Self::Any => Vec::new(),
            Self::Slots(numbers) => numbers.iter().copied().collect(),
        }
    }
}

impl fmt::Display for OfferingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Slots(numbers) if numbers.is_empty() => f.write_str("none"),
            Self::Slots(numbers) => {
                let joined: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
                f.write_str(&joined.join(","))
            }
        }
    }
}

/// Course category, used as a success-rate modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseCategory {
    /// Required course of the programme.
    #[default]
    Core,
    /// Elective course.
    Elective,
    /// Anything else (general education, activities).
    Other,
}

impl CourseCategory {
    /// Parses a category label; blank means `Core`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "core" => Self::Core,
            "elective" => Self::Elective,
            _ => Self::Other,
        }
    }
}

/// A course record.
///
/// Immutable from the engines' perspective; all derived values are
/// recomputed from it on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Unique course code.
    pub code: String,
    /// Display name (not used in computation).
    pub name: String,
    /// Credit weight (non-negative; zero-weight activities are valid).
    pub credit_weight: f64,
    /// Grade point or ungraded sentinel.
    pub grade_point: GradePoint,
    /// Terms in which the course is offered.
    pub offering: OfferingPattern,
    /// Completion status.
    pub status: CourseStatus,
    /// Category (defaults to core).
    #[serde(default)]
    pub category: CourseCategory,
    /// Letter grade label (`A`, `B+`, ...), if recorded.
    #[serde(default)]
    pub letter_grade: Option<String>,
}

impl CourseRecord {
    /// Creates an ungraded, unrepaired, zero-credit course offered every term.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            credit_weight: 0.0,
            grade_point: GradePoint::Ungraded,
            offering: OfferingPattern::Any,
            status: CourseStatus::Unrepaired,
            category: CourseCategory::Core,
            letter_grade: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the credit weight.
    pub fn with_credits(mut self, credit_weight: f64) -> Self {
        self.credit_weight = credit_weight;
        self
    }

    /// Sets a recorded grade point.
    pub fn with_grade(mut self, grade_point: f64) -> Self {
        self.grade_point = GradePoint::Graded(grade_point);
        self
    }

    /// Marks the course as ungraded.
    pub fn ungraded(mut self) -> Self {
        self.grade_point = GradePoint::Ungraded;
        self
    }

    /// Sets the completion status.
    pub fn with_status(mut self, status: CourseStatus) -> Self {
        self.status = status;
        self
    }

    /// Shorthand for `with_status(CourseStatus::Passed)`.
    pub fn passed(self) -> Self {
        self.with_status(CourseStatus::Passed)
    }

    /// Shorthand for `with_status(CourseStatus::Failed)`.
    pub fn failed(self) -> Self {
        self.with_status(CourseStatus::Failed)
    }

    /// Sets the offering pattern.
    pub fn with_offering(mut self, offering: OfferingPattern) -> Self {
        self.offering = offering;
        self
    }

    /// Restricts the offering to the given slot numbers.
    pub fn offered_in(self, numbers: &[u32]) -> Self {
        self.with_offering(OfferingPattern::slots(numbers.iter().copied()))
    }

    /// Sets the category.
    pub fn with_category(mut self, category: CourseCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the letter grade label.
    pub fn with_letter_grade(mut self, letter: impl Into<String>) -> Self {
        self.letter_grade = Some(letter.into());
        self
    }

    /// Credit weight with malformed values read as zero.
    #[inline]
    pub fn credits(&self) -> f64 {
        if self.credit_weight.is_finite() && self.credit_weight > 0.0 {
            self.credit_weight
        } else {
            0.0
        }
    }

    /// Recorded grade point, if any.
    #[inline]
    pub fn grade(&self) -> Option<f64> {
        self.grade_point.value()
    }

    /// Grade point with the ungraded sentinel read as zero.
    #[inline]
    pub fn grade_or_zero(&self) -> f64 {
        self.grade().unwrap_or(0.0)
    }

    /// Whether the course enters the weighted GPA: passed with a positive grade.
    pub fn counts_toward_gpa(&self) -> bool {
        self.status == CourseStatus::Passed && self.grade().is_some_and(|g| g > 0.0)
    }
}

impl AsRef<CourseRecord> for CourseRecord {
    fn as_ref(&self) -> &CourseRecord {
        self
    }
}

/// Loosely-typed course record as delivered by an ingestion layer.
///
/// Every field is text; conversion into [`CourseRecord`] never fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCourseRecord {
    /// Course code; surrounding whitespace is trimmed.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Credit weight; unparseable text reads as `0`.
    pub credit_weight: String,
    /// Grade point; `--` or blank means ungraded.
    pub grade_point: String,
    /// Comma-separated slot numbers, `any`, `--` or blank.
    pub offering: String,
    /// `passed`, `failed`, anything else is unrepaired.
    pub status: String,
    /// `core`, `elective` or other; blank means core.
    pub category: String,
    /// Letter grade such as `B+`; `--` or blank means none.
    pub letter_grade: String,
}

impl From<RawCourseRecord> for CourseRecord {
    fn from(raw: RawCourseRecord) -> Self {
        let letter = raw.letter_grade.trim();
        Self {
            code: raw.code.trim().to_string(),
            name: raw.name.trim().to_string(),
            credit_weight: parse_lenient(&raw.credit_weight),
            grade_point: GradePoint::parse(&raw.grade_point),
            offering: OfferingPattern::parse(&raw.offering),
            status: CourseStatus::parse(&raw.status),
            category: CourseCategory::parse(&raw.category),
            letter_grade: (!letter.is_empty() && letter != "--").then(|| letter.to_string()),
        }
    }
}

/// Parses a numeric field, reading anything unparseable or non-finite as `0.0`.
pub fn parse_lenient(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
