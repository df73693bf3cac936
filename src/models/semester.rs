//! Semester schedule (solution) model.
//!
//! A semester schedule assigns retake courses to upcoming terms. Courses
//! that fit no term of the horizon are kept in a separate `unplaced`
//! report instead of failing the whole schedule.

use serde::{Deserialize, Serialize};

use super::{CourseRecord, OfferingPattern, TermParity};

/// A course placed into a semester, with its derived workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledCourse {
    /// The scheduled course.
    pub course: CourseRecord,
    /// Total study hours for the course.
    pub hours: u32,
    /// Number of weeks the course runs.
    pub duration_weeks: u32,
}

impl ScheduledCourse {
    /// Study hours per running week (`0.0` for zero-duration courses).
    #[inline]
    pub fn weekly_hours(&self) -> f64 {
        if self.duration_weeks == 0 {
            0.0
        } else {
            self.hours as f64 / self.duration_weeks as f64
        }
    }
}

/// One term of the planning horizon with its assigned courses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterSlot {
    /// Position in the generated horizon (kept after empty slots are dropped).
    pub index: usize,
    /// Academic slot number.
    pub slot_number: u32,
    /// Term type.
    pub parity: TermParity,
    /// Human-readable label.
    pub display_name: String,
    /// Assigned courses in placement order.
    pub courses: Vec<ScheduledCourse>,
    /// Accumulated study hours.
    pub total_hours: u32,
}

impl SemesterSlot {
    /// Creates an empty slot.
    pub fn new(
        index: usize,
        slot_number: u32,
        parity: TermParity,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            index,
            slot_number,
            parity,
            display_name: display_name.into(),
            courses: Vec::new(),
            total_hours: 0,
        }
    }

    /// Assigns a course and accumulates its hours.
    pub fn assign(&mut self, course: ScheduledCourse) {
        self.total_hours += course.hours;
        self.courses.push(course);
    }

    /// Whether a course with the given offering may run in this slot.
    #[inline]
    pub fn accepts(&self, offering: &OfferingPattern) -> bool {
        offering.is_offered_in(self.parity)
    }

    /// Whether no course is assigned.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Number of assigned courses.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }
}

/// A course that could not be placed in any term of the horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnplacedCourse {
    /// Course code.
    pub code: String,
    /// Course name.
    pub name: String,
    /// The offering pattern that excluded every term.
    pub offering: OfferingPattern,
    /// Human-readable description.
    pub message: String,
}

/// Aggregated study load of one week in one kept semester.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyLoadCell {
    /// Week within the semester window (0-indexed).
    pub week_index: usize,
    /// Row of the semester among the kept (non-empty) slots.
    pub semester_index: usize,
    /// Study hours that week, rounded to one decimal.
    pub hours: f64,
}

/// A complete semester schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemesterSchedule {
    /// Non-empty slots in horizon order.
    pub slots: Vec<SemesterSlot>,
    /// Courses that no slot could accept.
    pub unplaced: Vec<UnplacedCourse>,
}

impl SemesterSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every course found a slot.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Finds the slot a course was placed in.
    pub fn slot_for_course(&self, code: &str) -> Option<&SemesterSlot> {
        self.slots
            .iter()
            .find(|s| s.courses.iter().any(|c| c.course.code == code))
    }

    /// Whether a course was reported as unplaceable.
    pub fn is_unplaced(&self, code: &str) -> bool {
        self.unplaced.iter().any(|u| u.code == code)
    }

    /// Total scheduled hours across all slots.
    pub fn total_hours(&self) -> u32 {
        self.slots.iter().map(|s| s.total_hours).sum()
    }

    /// Number of placed courses.
    pub fn placed_count(&self) -> usize {
        self.slots.iter().map(|s| s.course_count()).sum()
    }
}
