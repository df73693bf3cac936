//! Workload quality metrics (KPIs).
//!
//! Computes study-load indicators from a completed semester schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Hours | Sum of scheduled course hours |
//! | Peak Weekly Load | Largest unrounded weekly load of any semester |
//! | Mean Semester Hours | Total hours / kept semesters |
//! | Load Imbalance | Max − min semester hours |
//! | Placement Rate | Placed / (placed + unplaced) |

use serde::{Deserialize, Serialize};

use super::heatmap::weekly_profile;
use crate::models::SemesterSchedule;

/// Schedule workload indicators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkloadKpi {
    /// Sum of scheduled hours.
    pub total_hours: u32,
    /// Largest weekly load across semesters (hours/week).
    pub peak_weekly_load: f64,
    /// Mean hours per kept semester.
    pub mean_semester_hours: f64,
    /// Difference between the heaviest and lightest kept semester.
    pub load_imbalance: u32,
    /// Fraction of courses that found a slot (1.0 when nothing to place).
    pub placement_rate: f64,
    /// Number of kept semesters.
    pub semester_count: usize,
}

impl WorkloadKpi {
    /// Computes KPIs from a schedule.
    pub fn calculate(schedule: &SemesterSchedule) -> Self {
        let total_hours = schedule.total_hours();
        let semester_count = schedule.slots.len();

        let peak_weekly_load = schedule
            .slots
            .iter()
            .flat_map(weekly_profile)
            .fold(0.0, f64::max);

        let mean_semester_hours = if semester_count == 0 {
            0.0
        } else {
            total_hours as f64 / semester_count as f64
        };

        let max = schedule.slots.iter().map(|s| s.total_hours).max();
        let min = schedule.slots.iter().map(|s| s.total_hours).min();
        let load_imbalance = match (max, min) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        };

        let placed = schedule.placed_count();
        let attempted = placed + schedule.unplaced.len();
        let placement_rate = if attempted == 0 {
            1.0
        } else {
            placed as f64 / attempted as f64
        };

        Self {
            total_hours,
            peak_weekly_load,
            mean_semester_hours,
            load_imbalance,
            placement_rate,
            semester_count,
        }
    }

    /// Whether the schedule stays within the given weekly load and placed
    /// every course.
    pub fn meets_thresholds(&self, max_weekly_load: f64) -> bool {
        self.peak_weekly_load <= max_weekly_load && self.placement_rate >= 1.0
    }
}
