//! Grade and credit distributions.
//!
//! Chart-oriented aggregates: letter-grade counts, credit buckets,
//! (credits, grade) points and the per-slot average-grade grid.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::models::{term_label, CourseRecord};

/// Letter grades counted by [`grade_distribution`], best first.
pub const LETTER_GRADES: [&str; 10] = ["A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D", "F"];

/// Number of courses holding one letter grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeCount {
    /// Letter grade, one of [`LETTER_GRADES`].
    pub letter: String,
    /// Number of courses with this letter.
    pub count: usize,
}

/// Counts courses per letter grade in [`LETTER_GRADES`] order.
///
/// Unknown letters and missing grades are ignored; letters with no course
/// are omitted.
pub fn grade_distribution(courses: &[CourseRecord]) -> Vec<GradeCount> {
    LETTER_GRADES
        .iter()
        .map(|&letter| GradeCount {
            letter: letter.to_string(),
            count: courses
                .iter()
                .filter(|c| c.letter_grade.as_deref() == Some(letter))
                .count(),
        })
        .filter(|g| g.count > 0)
        .collect()
}

/// Buckets courses by credit weight rounded to the nearest integer.
///
/// Buckets 1 through 4 are always present; courses rounding outside that
/// range are left out.
pub fn group_by_credit(courses: &[CourseRecord]) -> BTreeMap<u32, Vec<&CourseRecord>> {
    let mut groups: BTreeMap<u32, Vec<&CourseRecord>> =
        (1..=4).map(|credit| (credit, Vec::new())).collect();

    for course in courses {
        let rounded = course.credits().round() as u32;
        if let Some(group) = groups.get_mut(&rounded) {
            group.push(course);
        }
    }

    groups
}

/// Courses sharing one (credits, grade) combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditGradePoint {
    /// Credit weight.
    pub credits: f64,
    /// Grade point.
    pub grade: f64,
    /// Number of courses at this point.
    pub count: usize,
    /// Course names (code when unnamed), in input order.
    pub course_names: Vec<String>,
}

/// Groups graded courses by their exact (credits, grade) pair.
///
/// Points appear in order of first occurrence. Ungraded courses are left
/// out; status is not considered.
pub fn credit_grade_points(courses: &[CourseRecord]) -> Vec<CreditGradePoint> {
    let mut points: Vec<CreditGradePoint> = Vec::new();
    let mut index: HashMap<(u64, u64), usize> = HashMap::new();

    for course in courses {
        let Some(grade) = course.grade() else {
            continue;
        };
        let credits = course.credits();
        let label = if course.name.is_empty() {
            course.code.clone()
        } else {
            course.name.clone()
        };

        let key = (credits.to_bits(), grade.to_bits());
        match index.get(&key) {
            Some(&i) => {
                points[i].count += 1;
                points[i].course_names.push(label);
            }
            None => {
                index.insert(key, points.len());
                points.push(CreditGradePoint {
                    credits,
                    grade,
                    count: 1,
                    course_names: vec![label],
                });
            }
        }
    }

    points
}

/// One cell of a [`GradeHeatmap`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeHeatmapCell {
    /// Row into [`GradeHeatmap::slots`].
    pub slot_index: usize,
    /// Column into [`GradeHeatmap::credits`].
    pub credit_index: usize,
    /// Mean grade of the courses in this cell.
    pub average_grade: f64,
    /// Number of courses averaged.
    pub count: usize,
}

/// Average grade per (offering slot, credit weight).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeHeatmap {
    /// Non-empty cells, row-major.
    pub cells: Vec<GradeHeatmapCell>,
    /// Slot axis, ascending.
    pub slots: Vec<u32>,
    /// Credit axis, ascending.
    pub credits: Vec<f64>,
    /// Term label per slot.
    pub slot_labels: Vec<String>,
    /// `"{credits} credits"` per credit value.
    pub credit_labels: Vec<String>,
}

impl GradeHeatmap {
    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Average grade at (`slot`, `credits`), if any course falls there.
    pub fn average_at(&self, slot: u32, credits: f64) -> Option<f64> {
        let row = self.slots.iter().position(|&s| s == slot)?;
        let col = self.credits.iter().position(|&c| c == credits)?;
        self.cells
            .iter()
            .find(|c| c.slot_index == row && c.credit_index == col)
            .map(|c| c.average_grade)
    }
}

/// Builds the average-grade grid.
///
/// Each course is filed under its lowest declared slot. Axes cover every
/// course with a declared slot; cells only average graded ones. Courses
/// offered in any term have no row.
pub fn grade_heatmap(courses: &[CourseRecord]) -> GradeHeatmap {
    let slotted: Vec<(u32, &CourseRecord)> = courses
        .iter()
        .filter_map(|c| c.offering.slot_numbers().first().map(|&s| (s, c)))
        .collect();

    let mut slots: Vec<u32> = slotted.iter().map(|&(s, _)| s).collect();
    slots.sort_unstable();
    slots.dedup();

    let mut credits: Vec<f64> = slotted.iter().map(|(_, c)| c.credits()).collect();
    credits.sort_by(f64::total_cmp);
    credits.dedup();

    let mut sums: BTreeMap<(usize, usize), (f64, usize)> = BTreeMap::new();
    for (slot, course) in &slotted {
        let Some(grade) = course.grade() else {
            continue;
        };
        let row = slots.partition_point(|s| s < slot);
        let col = credits.partition_point(|&c| c < course.credits());
        let entry = sums.entry((row, col)).or_insert((0.0, 0));
        entry.0 += grade;
        entry.1 += 1;
    }

    let cells = sums
        .into_iter()
        .map(|((slot_index, credit_index), (sum, count))| GradeHeatmapCell {
            slot_index,
            credit_index,
            average_grade: sum / count as f64,
            count,
        })
        .collect();

    GradeHeatmap {
        cells,
        slot_labels: slots.iter().map(|&s| term_label(s)).collect(),
        credit_labels: credits.iter().map(|c| format!("{c} credits")).collect(),
        slots,
        credits,
    }
}
