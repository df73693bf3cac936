//! Week-by-week workload heatmap.
//!
//! Each kept semester is a row of a fixed 16-week window. A course spreads
//! its hours evenly over its first `duration_weeks` weeks; weekly loads are
//! summed per semester and emitted as one cell per non-zero week.

use serde::{Deserialize, Serialize};

use crate::models::{SemesterSchedule, SemesterSlot, WeeklyLoadCell};

/// Weeks in one semester window.
pub const SEMESTER_WEEKS: usize = 16;

/// Sparse workload grid over kept semesters and weeks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkloadHeatmap {
    /// Non-zero cells, row by row, weeks ascending.
    pub cells: Vec<WeeklyLoadCell>,
    /// Row labels, one per kept semester.
    pub semester_labels: Vec<String>,
    /// Column labels, `Week 1` through `Week 16`.
    pub week_labels: Vec<String>,
}

impl WorkloadHeatmap {
    /// Builds the heatmap of a schedule.
    pub fn from_schedule(schedule: &SemesterSchedule) -> Self {
        let mut cells = Vec::new();
        let mut semester_labels = Vec::with_capacity(schedule.slots.len());

        for (semester_index, slot) in schedule.slots.iter().enumerate() {
            semester_labels.push(format!("Semester {}", slot.index + 1));
            for (week_index, &hours) in weekly_profile(slot).iter().enumerate() {
                if hours > 0.0 {
                    cells.push(WeeklyLoadCell {
                        week_index,
                        semester_index,
                        hours: round_to_tenth(hours),
                    });
                }
            }
        }

        Self {
            cells,
            semester_labels,
            week_labels: (1..=SEMESTER_WEEKS).map(|w| format!("Week {w}")).collect(),
        }
    }

    /// Whether no week carries load.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rounded load of one cell (0.0 when absent).
    pub fn hours_at(&self, week_index: usize, semester_index: usize) -> f64 {
        self.cells
            .iter()
            .find(|c| c.week_index == week_index && c.semester_index == semester_index)
            .map_or(0.0, |c| c.hours)
    }

    /// Sum of rounded loads of one semester row.
    pub fn row_total(&self, semester_index: usize) -> f64 {
        self.cells
            .iter()
            .filter(|c| c.semester_index == semester_index)
            .map(|c| c.hours)
            .sum()
    }

    /// Largest rounded weekly load.
    pub fn peak(&self) -> f64 {
        self.cells.iter().map(|c| c.hours).fold(0.0, f64::max)
    }
}

/// Unrounded weekly loads of one semester.
pub fn weekly_profile(slot: &SemesterSlot) -> [f64; SEMESTER_WEEKS] {
    let mut weeks = [0.0; SEMESTER_WEEKS];
    for course in &slot.courses {
        let per_week = course.weekly_hours();
        let span = (course.duration_weeks as usize).min(SEMESTER_WEEKS);
        for week in weeks.iter_mut().take(span) {
            *week += per_week;
        }
    }
    weeks
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
