//! Semester scheduling, workload heatmap and KPI evaluation.
//!
//! Places selected retake courses into upcoming terms and derives the
//! resulting study load.
//!
//! # Algorithm
//!
//! `SemesterScheduler` is a greedy, heaviest-course-first heuristic with two
//! placement policies (first available term, least loaded term). Courses
//! are only placed in terms whose parity they are offered in.
//!
//! # Workload
//!
//! `WorkloadHeatmap` spreads each course's hours evenly over its running
//! weeks; `WorkloadKpi` summarizes total, peak and balance of the load.

mod heatmap;
mod kpi;
mod semester;

pub use heatmap::{weekly_profile, WorkloadHeatmap, SEMESTER_WEEKS};
pub use kpi::WorkloadKpi;
pub use semester::{course_duration_weeks, course_hours, SemesterScheduler};
