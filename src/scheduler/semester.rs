//! Parity-aware greedy semester scheduler.
//!
//! # Algorithm
//!
//! 1. Derive each course's workload (hours, duration weeks) from its credit
//!    weight.
//! 2. Stable-sort courses by hours, heaviest first.
//! 3. For each course, collect the horizon terms whose parity the course is
//!    offered in, and pick one according to the placement policy:
//!    - `FirstAvailable`: the earliest such term.
//!    - `LeastLoaded`: the term with the fewest accumulated hours, ties
//!      going to the earlier term.
//! 4. Courses with no acceptable term are reported as unplaced.
//! 5. Drop terms that received no course.
//!
//! # Complexity
//! O(n log n + n * t) where n=courses, t=horizon terms.

use crate::models::{
    CourseRecord, PlacementPolicy, ScheduledCourse, SemesterSchedule, SemesterSlot, Strategy,
    TermSlot, UnplacedCourse,
};

/// Total study hours of a course by credit weight.
///
/// | Credits | Hours |
/// |---------|-------|
/// | ≥ 4 | 48 |
/// | ≥ 3 | 36 |
/// | ≥ 2 | 24 |
/// | ≥ 1 | 12 |
/// | < 1 | 0 |
pub fn course_hours(credits: f64) -> u32 {
    if credits >= 4.0 {
        48
    } else if credits >= 3.0 {
        36
    } else if credits >= 2.0 {
        24
    } else if credits >= 1.0 {
        12
    } else {
        0
    }
}

/// Number of weeks a course runs: 16 from 3 credits, 8 from 1 credit,
/// otherwise 0.
pub fn course_duration_weeks(credits: f64) -> u32 {
    if credits >= 3.0 {
        16
    } else if credits >= 1.0 {
        8
    } else {
        0
    }
}

/// Greedy scheduler placing retake courses into upcoming terms.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use retake_planner::models::{CourseRecord, Strategy, TermCalendar};
/// use retake_planner::scheduler::SemesterScheduler;
///
/// let today = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
/// let terms = TermCalendar::at(today).upcoming(2);
/// let courses = vec![
///     CourseRecord::new("MATH101").with_credits(4.0).with_grade(2.0).passed(),
/// ];
///
/// let schedule = SemesterScheduler::for_strategy(Strategy::Conservative)
///     .schedule(&courses, &terms);
/// assert_eq!(schedule.placed_count(), 1);
/// assert_eq!(schedule.slots[0].total_hours, 48);
/// ```
#[derive(Debug, Clone)]
pub struct SemesterScheduler {
    policy: PlacementPolicy,
}

impl SemesterScheduler {
    /// Creates a least-loaded scheduler.
    pub fn new() -> Self {
        Self {
            policy: PlacementPolicy::LeastLoaded,
        }
    }

    /// Creates a scheduler using the strategy's placement policy.
    pub fn for_strategy(strategy: Strategy) -> Self {
        Self::new().with_policy(strategy.placement_policy())
    }

    /// Sets the placement policy.
    pub fn with_policy(mut self, policy: PlacementPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configured placement policy.
    pub fn policy(&self) -> PlacementPolicy {
        self.policy
    }

    /// Places courses into the given terms.
    ///
    /// Accepts plain course records or scored candidates. Returned slots
    /// keep their horizon `index`; empty terms are omitted.
    pub fn schedule<C: AsRef<CourseRecord>>(
        &self,
        courses: &[C],
        terms: &[TermSlot],
    ) -> SemesterSchedule {
        let mut items: Vec<ScheduledCourse> = courses
            .iter()
            .map(|c| {
                let course = c.as_ref();
                let credits = course.credits();
                ScheduledCourse {
                    course: course.clone(),
                    hours: course_hours(credits),
                    duration_weeks: course_duration_weeks(credits),
                }
            })
            .collect();
        items.sort_by(|a, b| b.hours.cmp(&a.hours));

        let mut slots: Vec<SemesterSlot> = terms
            .iter()
            .map(|t| SemesterSlot::new(t.index, t.slot_number, t.parity, t.display_name.clone()))
            .collect();
        let mut unplaced = Vec::new();

        for item in items {
            match self.select_slot(&slots, &item) {
                Some(idx) => slots[idx].assign(item),
                None => {
                    log::warn!(
                        "course {} ({}) is not offered in any of the {} planned terms",
                        item.course.code,
                        item.course.offering,
                        slots.len()
                    );
                    unplaced.push(UnplacedCourse {
                        message: format!(
                            "not offered in any planned term (offered: {})",
                            item.course.offering
                        ),
                        code: item.course.code,
                        name: item.course.name,
                        offering: item.course.offering,
                    });
                }
            }
        }

        slots.retain(|s| !s.is_empty());

        log::debug!(
            "schedule: policy={:?} terms={} kept={} unplaced={}",
            self.policy,
            terms.len(),
            slots.len(),
            unplaced.len()
        );

        SemesterSchedule { slots, unplaced }
    }

    fn select_slot(&self, slots: &[SemesterSlot], item: &ScheduledCourse) -> Option<usize> {
        let mut open = slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.accepts(&item.course.offering));

        match self.policy {
            PlacementPolicy::FirstAvailable => open.next().map(|(i, _)| i),
            // min_by_key keeps the first of equal minima.
            PlacementPolicy::LeastLoaded => open.min_by_key(|(_, s)| s.total_hours).map(|(i, _)| i),
        }
    }
}

impl Default for SemesterScheduler {
    fn default() -> Self {
        Self::new()
    }
}
