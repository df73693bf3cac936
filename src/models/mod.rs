//! Retake planning domain models.
//!
//! Provides the input course record, the derived retake candidate, the
//! term calendar, and the semester schedule produced by the scheduler.
//!
//! # Lifecycle
//!
//! Only [`CourseRecord`] is an input. Every other type is derived and
//! recomputed from scratch on each call; nothing is cached or mutated
//! across calls.

mod calendar;
mod candidate;
mod course;
mod semester;
mod strategy;

pub use calendar::{term_label, TermCalendar, TermParity, TermSlot};
pub use candidate::{Priority, PriorityLabel, RetakeCandidate, RiskLevel};
pub use course::{
    parse_lenient, CourseCategory, CourseRecord, CourseStatus, GradePoint, OfferingPattern,
    RawCourseRecord,
};
pub use semester::{
    ScheduledCourse, SemesterSchedule, SemesterSlot, UnplacedCourse, WeeklyLoadCell,
};
pub use strategy::{PlacementPolicy, Strategy};
