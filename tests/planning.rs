//! End-to-end planning scenarios and seeded property checks.

use chrono::NaiveDate;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use retake_planner::config::PlannerConfig;
use retake_planner::gpa::{credits_taken, weighted_gpa};
use retake_planner::models::{
    CourseRecord, CourseStatus, OfferingPattern, RawCourseRecord, RiskLevel, Strategy,
    TermCalendar, TermParity,
};
use retake_planner::planner::RetakePlanner;
use retake_planner::scheduler::{SemesterScheduler, WorkloadHeatmap};
use retake_planner::valuation::ValuationEngine;

const STRATEGIES: [Strategy; 5] = [
    Strategy::Conservative,
    Strategy::Balanced,
    Strategy::Aggressive,
    Strategy::Burnout,
    Strategy::Unspecified,
];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn random_courses(rng: &mut SmallRng, count: usize) -> Vec<CourseRecord> {
    (0..count)
        .map(|i| {
            let credits = rng.random_range(0..=5) as f64;
            let status = match rng.random_range(0..3) {
                0 => CourseStatus::Passed,
                1 => CourseStatus::Failed,
                _ => CourseStatus::Unrepaired,
            };
            let mut course = CourseRecord::new(format!("C{i:03}"))
                .with_credits(credits)
                .with_status(status);
            course = if rng.random_bool(0.9) {
                course.with_grade((rng.random_range(0..=40) as f64) / 10.0)
            } else {
                course.ungraded()
            };
            match rng.random_range(0..4) {
                0 => course,
                1 => course.offered_in(&[1]),
                2 => course.offered_in(&[2, 4]),
                _ => course.offered_in(&[1, 2]),
            }
        })
        .collect()
}

#[test]
fn single_course_scenario() {
    let courses = vec![CourseRecord::new("MATH201")
        .with_credits(4.0)
        .with_grade(2.0)
        .passed()];

    assert!((weighted_gpa(&courses) - 2.0).abs() < 1e-10);

    let report = RetakePlanner::new(PlannerConfig::new().with_horizon(1))
        .plan(&courses, date(2025, 10, 1));

    assert_eq!(report.plan.selected_codes(), vec!["MATH201"]);
    let slot = &report.schedule.slots[0];
    assert_eq!(slot.total_hours, 48);
    assert_eq!(slot.courses[0].duration_weeks, 16);

    assert_eq!(report.heatmap.cells.len(), 16);
    for (week, cell) in report.heatmap.cells.iter().enumerate() {
        assert_eq!(cell.week_index, week);
        assert_eq!(cell.semester_index, 0);
        assert!((cell.hours - 3.0).abs() < 1e-10);
    }
}

#[test]
fn empty_input_scenario() {
    let report = RetakePlanner::default().plan(&[], date(2025, 4, 1));

    assert_eq!(report.summary.weighted_gpa, 0.0);
    assert_eq!(report.summary.credits_taken, 0.0);
    assert!(report.plan.candidates.is_empty());
    assert_eq!(report.plan.risk_level, RiskLevel::NotApplicable);
    assert!(report.schedule.slots.is_empty());
    assert!(report.schedule.unplaced.is_empty());
    assert!(report.heatmap.cells.is_empty());
    assert!(report.trend.is_empty());
}

#[test]
fn odd_only_course_unplaceable_in_single_spring_term() {
    let courses = vec![CourseRecord::new("FALL101")
        .with_credits(3.0)
        .with_grade(1.5)
        .passed()
        .offered_in(&[1])];

    // October: the next term is spring-type.
    let terms = TermCalendar::at(date(2025, 10, 15)).upcoming(1);
    assert_eq!(terms[0].parity, TermParity::Spring);

    for strategy in STRATEGIES {
        let schedule = SemesterScheduler::for_strategy(strategy).schedule(&courses, &terms);
        assert!(schedule.slots.is_empty(), "{strategy}");
        assert!(schedule.is_unplaced("FALL101"), "{strategy}");
    }
}

#[test]
fn unrecognized_strategy_behaves_as_documented() {
    let courses: Vec<CourseRecord> = (0..10)
        .map(|i| {
            CourseRecord::new(format!("C{i}"))
                .with_credits(3.0)
                .with_grade(1.0 + i as f64 * 0.1)
                .passed()
        })
        .collect();
    let config = PlannerConfig::from_yaml_str("strategy: moderate\nhorizon: 4\n").unwrap();
    let report = RetakePlanner::new(config).plan(&courses, date(2025, 10, 1));

    assert_eq!(report.plan.strategy, Strategy::Unspecified);
    assert_eq!(report.plan.candidates.len(), 8);
    // Least-loaded placement spreads 8 equal courses over 4 terms.
    assert_eq!(report.schedule.slots.len(), 4);
    assert!(report.schedule.slots.iter().all(|s| s.total_hours == 72));
}

#[test]
fn gpa_bounded_and_credits_exclude_unrepaired() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..50 {
        let courses = random_courses(&mut rng, 25);

        let gpa = weighted_gpa(&courses);
        assert!((0.0..=4.0).contains(&gpa));

        let expected: f64 = courses
            .iter()
            .filter(|c| c.status != CourseStatus::Unrepaired)
            .map(|c| c.credits())
            .sum();
        assert!((credits_taken(&courses) - expected).abs() < 1e-10);
    }
}

#[test]
fn success_rates_clamped_and_selection_bounded() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..30 {
        let courses = random_courses(&mut rng, 30);
        for strategy in STRATEGIES {
            let engine = ValuationEngine::new().with_strategy(strategy);
            let eligible = courses.iter().filter(|c| engine.is_eligible(c)).count();
            let plan = engine.evaluate(&courses);

            assert!(plan.candidates.len() <= strategy.selection_limit());
            assert!(plan.candidates.len() <= eligible);
            assert_eq!(plan.eligible_count, eligible);
            assert!(plan
                .candidates
                .iter()
                .all(|c| (0.0..=1.0).contains(&c.success_rate)));
        }
    }
}

#[test]
fn parity_safety_across_strategies() {
    let mut rng = SmallRng::seed_from_u64(2024);
    for round in 0..40 {
        let courses = random_courses(&mut rng, 20);
        let month = rng.random_range(1..=12);
        let horizon = rng.random_range(1..=6);
        let terms = TermCalendar::at(date(2025, month, 1)).upcoming(horizon);

        for strategy in STRATEGIES {
            let schedule = SemesterScheduler::for_strategy(strategy).schedule(&courses, &terms);
            for slot in &schedule.slots {
                assert!(!slot.is_empty());
                for placed in &slot.courses {
                    let offering = &placed.course.offering;
                    assert!(
                        *offering == OfferingPattern::Any || offering.is_offered_in(slot.parity),
                        "round {round}: {} placed in {} term",
                        placed.course.code,
                        slot.parity
                    );
                }
            }
            assert_eq!(
                schedule.placed_count() + schedule.unplaced.len(),
                courses.len()
            );
        }
    }
}

#[test]
fn heatmap_rows_sum_to_course_hours() {
    let mut rng = SmallRng::seed_from_u64(99);
    for _ in 0..20 {
        let courses = random_courses(&mut rng, 12);
        let terms = TermCalendar::at(date(2025, 2, 1)).upcoming(3);
        let schedule = SemesterScheduler::new().schedule(&courses, &terms);
        let heatmap = WorkloadHeatmap::from_schedule(&schedule);

        for (row, slot) in schedule.slots.iter().enumerate() {
            let spread: u32 = slot
                .courses
                .iter()
                .filter(|c| c.duration_weeks > 0)
                .map(|c| c.hours)
                .sum();
            let tolerance = 0.05 * 16.0 + 1e-9;
            assert!((heatmap.row_total(row) - spread as f64).abs() <= tolerance);
        }
    }
}

#[test]
fn repeated_planning_is_byte_identical() {
    let mut rng = SmallRng::seed_from_u64(1);
    let courses = random_courses(&mut rng, 40);
    let planner = RetakePlanner::new(
        PlannerConfig::new()
            .with_strategy(Strategy::Aggressive)
            .with_horizon(4),
    );

    let first = serde_json::to_string(&planner.plan(&courses, date(2025, 11, 3))).unwrap();
    let second = serde_json::to_string(&planner.plan(&courses, date(2025, 11, 3))).unwrap();
    assert_eq!(first, second);
}

#[test]
fn raw_records_normalize_leniently() {
    let json = r#"[
        {"code": "MATH101", "credit_weight": "4", "grade_point": "2.0", "offering": "1,3", "status": "passed"},
        {"code": "PE100", "credit_weight": "abc", "grade_point": "--", "offering": "any", "status": "unrepaired"},
        {"code": "CHEM101", "credit_weight": "3", "grade_point": "", "offering": "--", "status": "failed"}
    ]"#;
    let raw: Vec<RawCourseRecord> = serde_json::from_str(json).unwrap();
    let courses: Vec<CourseRecord> = raw.into_iter().map(CourseRecord::from).collect();

    assert_eq!(courses[0].offering, OfferingPattern::slots([1, 3]));
    assert_eq!(courses[1].credits(), 0.0);
    assert!(courses[1].grade().is_none());
    assert_eq!(courses[2].offering, OfferingPattern::Any);

    assert!((weighted_gpa(&courses) - 2.0).abs() < 1e-10);
    assert!((credits_taken(&courses) - 7.0).abs() < 1e-10);

    let report = RetakePlanner::default().plan(&courses, date(2025, 3, 1));
    assert_eq!(report.plan.selected_codes(), vec!["MATH101"]);
    // March: the next term is fall-type, which MATH101 is offered in.
    assert_eq!(report.schedule.slots[0].parity, TermParity::Fall);
}
