//! End-to-end retake planning.
//!
//! Runs the GPA engine, the valuation engine and the semester scheduler in
//! sequence under one [`PlannerConfig`] and collects their outputs in a
//! serializable [`PlanReport`].
//!
//! The reference date is an explicit input; identical courses, config and
//! date always produce an identical report.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::gpa::{required_gpa, semester_trend, GpaSummary, SemesterTrend};
use crate::models::{CourseRecord, SemesterSchedule, TermCalendar, TermSlot};
use crate::scheduler::{SemesterScheduler, WorkloadHeatmap, WorkloadKpi};
use crate::validation::validate_courses;
use crate::valuation::{recommend_by_ips, IpsRecommendation, RetakePlan, ValuationEngine};

/// Everything derived from one planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    /// Reference date the term calendar was derived from.
    pub reference_date: NaiveDate,
    /// Configuration used.
    pub config: PlannerConfig,
    /// Headline GPA statistics.
    pub summary: GpaSummary,
    /// Per-semester GPA series.
    pub trend: SemesterTrend,
    /// Grade needed on outstanding credits to reach the target GPA
    /// (0 when nothing is outstanding).
    pub required_gpa: f64,
    /// Top courses by improvement-performance score.
    pub ips_recommendations: Vec<IpsRecommendation>,
    /// Selected retake candidates and projections.
    pub plan: RetakePlan,
    /// Generated planning horizon.
    pub terms: Vec<TermSlot>,
    /// Placement of the selected candidates, including unplaced courses.
    pub schedule: SemesterSchedule,
    /// Weekly workload grid.
    pub heatmap: WorkloadHeatmap,
    /// Workload indicators.
    pub kpi: WorkloadKpi,
}

/// Runs the full planning pipeline.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use retake_planner::config::PlannerConfig;
/// use retake_planner::models::CourseRecord;
/// use retake_planner::planner::RetakePlanner;
///
/// let courses = vec![
///     CourseRecord::new("MATH101").with_credits(4.0).with_grade(2.0).passed(),
/// ];
/// let today = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
/// let report = RetakePlanner::new(PlannerConfig::default()).plan(&courses, today);
///
/// assert_eq!(report.plan.candidates.len(), 1);
/// assert_eq!(report.schedule.placed_count(), 1);
/// assert_eq!(report.heatmap.cells.len(), 16);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RetakePlanner {
    config: PlannerConfig,
}

impl RetakePlanner {
    /// Creates a planner with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The planner configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans against the local system date.
    pub fn plan_today(&self, courses: &[CourseRecord]) -> PlanReport {
        self.plan(courses, Local::now().date_naive())
    }

    /// Plans against an explicit reference date.
    pub fn plan(&self, courses: &[CourseRecord], reference_date: NaiveDate) -> PlanReport {
        if let Err(errors) = validate_courses(courses) {
            for error in &errors {
                log::warn!("input: {}", error.message);
            }
        }

        let summary = GpaSummary::calculate(courses);
        let trend = semester_trend(courses);
        let required = required_gpa(courses, self.config.target_gpa);
        let ips_recommendations = recommend_by_ips(courses, self.config.target_gpa);

        let plan = ValuationEngine::new()
            .with_strategy(self.config.strategy)
            .with_target_gpa(self.config.target_gpa)
            .with_grade_ceiling(self.config.grade_ceiling)
            .evaluate(courses);

        let terms = TermCalendar::at(reference_date).upcoming(self.config.horizon);
        let schedule =
            SemesterScheduler::for_strategy(self.config.strategy).schedule(&plan.candidates, &terms);
        let heatmap = WorkloadHeatmap::from_schedule(&schedule);
        let kpi = WorkloadKpi::calculate(&schedule);

        log::debug!(
            "plan: courses={} selected={} placed={} unplaced={}",
            courses.len(),
            plan.candidates.len(),
            schedule.placed_count(),
            schedule.unplaced.len()
        );

        PlanReport {
            reference_date,
            config: self.config.clone(),
            summary,
            trend,
            required_gpa: required,
            ips_recommendations,
            plan,
            terms,
            schedule,
            heatmap,
            kpi,
        }
    }
}
