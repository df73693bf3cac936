//! Per-semester GPA trend.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::weighted_gpa;
use crate::models::{term_label, CourseRecord};

/// Weighted GPA of one semester slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Academic slot number.
    pub slot_number: u32,
    /// Ordinal label of the slot.
    pub label: String,
    /// Weighted GPA of the courses declaring this slot.
    pub gpa: f64,
    /// Credits behind `gpa`.
    pub credits: f64,
}

/// Semester GPA series with the overall GPA as a flat reference line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemesterTrend {
    /// Points in ascending slot order.
    pub points: Vec<TrendPoint>,
    /// Running weighted GPA over this and all earlier slots.
    pub cumulative: Vec<f64>,
    /// Overall weighted GPA, repeated once per point.
    pub reference_line: Vec<f64>,
    /// Overall weighted GPA.
    pub overall_gpa: f64,
}

impl SemesterTrend {
    /// Whether no slot carries graded credit.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// GPA values in slot order.
    pub fn gpas(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.gpa).collect()
    }
}

/// Groups passed, graded courses by every slot number they declare and
/// computes a weighted GPA per slot.
///
/// A course declaring several slots contributes to each of them. Courses
/// offered in `any` term declare no slot and only affect the reference line.
pub fn semester_trend(courses: &[CourseRecord]) -> SemesterTrend {
    let mut buckets: BTreeMap<u32, (f64, f64)> = BTreeMap::new();

    for course in courses.iter().filter(|c| c.counts_toward_gpa()) {
        let credits = course.credits();
        let grade = course.grade_or_zero();
        for slot in course.offering.slot_numbers() {
            let entry = buckets.entry(slot).or_insert((0.0, 0.0));
            entry.0 += credits * grade;
            entry.1 += credits;
        }
    }

    let points: Vec<TrendPoint> = buckets
        .into_iter()
        .map(|(slot_number, (points, credits))| TrendPoint {
            slot_number,
            label: term_label(slot_number),
            gpa: if credits > 0.0 { points / credits } else { 0.0 },
            credits,
        })
        .collect();

    let cumulative = points
        .iter()
        .scan((0.0, 0.0), |(p, w), point| {
            *p += point.gpa * point.credits;
            *w += point.credits;
            Some(if *w > 0.0 { *p / *w } else { 0.0 })
        })
        .collect();

    let overall_gpa = weighted_gpa(courses);

    SemesterTrend {
        reference_line: vec![overall_gpa; points.len()],
        cumulative,
        points,
        overall_gpa,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_groups_and_sorts() {
        let courses = vec![
            CourseRecord::new("C").with_credits(2.0).with_grade(3.0).passed().offered_in(&[3]),
            CourseRecord::new("A").with_credits(4.0).with_grade(2.0).passed().offered_in(&[1]),
            CourseRecord::new("B").with_credits(2.0).with_grade(4.0).passed().offered_in(&[1]),
        ];
        let trend = semester_trend(&courses);

        assert_eq!(
            trend.points.iter().map(|p| p.slot_number).collect::<Vec<_>>(),
            vec![1, 3]
        );
        // Slot 1: (8 + 8) / 6
        assert!((trend.points[0].gpa - 16.0 / 6.0).abs() < 1e-10);
        assert!((trend.points[1].gpa - 3.0).abs() < 1e-10);
        assert_eq!(trend.points[0].label, "Year 1 Fall");
        // Cumulative through slot 3: (16 + 6) / 8
        assert!((trend.cumulative[0] - 16.0 / 6.0).abs() < 1e-10);
        assert!((trend.cumulative[1] - 22.0 / 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_multi_slot_course_contributes_to_each() {
        let courses = vec![CourseRecord::new("PE")
            .with_credits(1.0)
            .with_grade(3.5)
            .passed()
            .offered_in(&[1, 2, 3])];
        let trend = semester_trend(&courses);
        assert_eq!(trend.points.len(), 3);
        assert!(trend.gpas().iter().all(|&g| (g - 3.5).abs() < 1e-10));
    }

    #[test]
    fn test_reference_line_is_flat_overall() {
        let courses = vec![
            CourseRecord::new("A").with_credits(4.0).with_grade(2.0).passed().offered_in(&[1]),
            CourseRecord::new("B").with_credits(2.0).with_grade(4.0).passed().offered_in(&[2]),
        ];
        let trend = semester_trend(&courses);
        let overall = weighted_gpa(&courses);
        assert_eq!(trend.reference_line.len(), 2);
        assert!(trend.reference_line.iter().all(|&g| g == overall));
        assert_eq!(trend.overall_gpa, overall);
    }

    #[test]
    fn test_trend_applies_gpa_filter() {
        let courses = vec![
            CourseRecord::new("A").with_credits(3.0).with_grade(1.0).failed().offered_in(&[1]),
            CourseRecord::new("B").with_credits(3.0).ungraded().passed().offered_in(&[2]),
            CourseRecord::new("C").with_credits(3.0).with_grade(3.0).passed(),
        ];
        let trend = semester_trend(&courses);
        assert!(trend.is_empty());
        assert!((trend.overall_gpa - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_trend_empty() {
        let trend = semester_trend(&[]);
        assert!(trend.is_empty());
        assert!(trend.reference_line.is_empty());
        assert!(trend.cumulative.is_empty());
        assert_eq!(trend.overall_gpa, 0.0);
    }
}
