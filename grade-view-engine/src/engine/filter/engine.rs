use bevy::prelude::*;
use serde::Serialize;

use constants::colour_ramp::ramp_rgb;
use constants::confidence::Confidence;
use constants::render_settings::DIMMED_GREY;

use crate::engine::assets::sample_set::SamplePoint;
use crate::engine::filter::window::FilterWindow;

/// A point passing both filter predicates, carrying everything the
/// renderer and picking need.
#[derive(Debug, Clone)]
pub struct VisiblePoint {
    /// Index into the source sample array.
    pub index: usize,
    pub position: Vec3,
    pub colour: [f32; 3],
    pub grade: f64,
    pub depth: f64,
    pub confidence: Confidence,
}

/// Per-confidence-category counts of visible points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ConfidenceMix {
    pub measured: usize,
    pub indicated: usize,
    pub inferred: usize,
}

impl ConfidenceMix {
    pub fn total(&self) -> usize {
        self.measured + self.indicated + self.inferred
    }
}

/// Aggregate statistics over the visible subset. Fully recomputed on
/// every filter pass; never incrementally updated.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterStats {
    pub visible_count: usize,
    pub avg_grade: f64,
    pub tonnage: f64,
    pub mix: ConfidenceMix,
}

/// Partition of the dataset produced by one filter pass.
#[derive(Resource, Debug, Default)]
pub struct FilterResult {
    pub visible: Vec<VisiblePoint>,
    /// Dimmed points exist purely for spatial context: positions only,
    /// drawn in a fixed neutral grey regardless of grade.
    pub dimmed: Vec<Vec3>,
    pub stats: FilterStats,
}

/// Fixed grey for every dimmed point.
pub fn dimmed_colour() -> [f32; 3] {
    [DIMMED_GREY, DIMMED_GREY, DIMMED_GREY]
}

/// Classify every point against the depth window and grade range
/// (both inclusive), colour the visible set through the grade ramp,
/// and accumulate statistics in the same pass.
pub fn apply_filter(
    points: &[SamplePoint],
    window: &FilterWindow,
    tons_per_point: f64,
) -> FilterResult {
    let mut result = FilterResult::default();
    let mut grade_sum = 0.0;

    for (index, point) in points.iter().enumerate() {
        let in_depth = point.z >= window.depth_lo && point.z <= window.depth_hi;
        let in_grade = point.grade >= window.grade_lo && point.grade <= window.grade_hi;
        if in_depth && in_grade {
            grade_sum += point.grade;
            match point.confidence {
                Confidence::Measured => result.stats.mix.measured += 1,
                Confidence::Indicated => result.stats.mix.indicated += 1,
                Confidence::Inferred => result.stats.mix.inferred += 1,
            }
            result.visible.push(VisiblePoint {
                index,
                position: point.position(),
                colour: ramp_rgb(point.grade),
                grade: point.grade,
                depth: point.z,
                confidence: point.confidence,
            });
        } else {
            result.dimmed.push(point.position());
        }
    }

    let count = result.visible.len();
    result.stats.visible_count = count;
    result.stats.avg_grade = if count > 0 {
        grade_sum / count as f64
    } else {
        0.0
    };
    result.stats.tonnage = count as f64 * tons_per_point;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(z: f64, grade: f64, confidence: Confidence) -> SamplePoint {
        SamplePoint {
            x: 0.0,
            y: 0.0,
            z,
            grade,
            confidence,
        }
    }

    fn window(depth: (f64, f64), grade: (f64, f64)) -> FilterWindow {
        let mut w = FilterWindow::default();
        w.set_depth(depth.0, depth.1);
        w.set_grade(grade.0, grade.1);
        w
    }

    #[test]
    fn partition_is_total() {
        let points: Vec<SamplePoint> = (0..50)
            .map(|i| sample(-(i as f64) * 40.0, (i % 40) as f64, Confidence::Indicated))
            .collect();
        let result = apply_filter(&points, &window((-1000.0, -200.0), (5.0, 25.0)), 100.0);
        assert_eq!(result.visible.len() + result.dimmed.len(), points.len());
    }

    #[test]
    fn both_predicates_must_hold() {
        let points = vec![
            sample(-300.0, 10.0, Confidence::Measured), // both hold
            sample(-300.0, 35.0, Confidence::Measured), // grade outside
            sample(-50.0, 10.0, Confidence::Measured),  // depth outside
        ];
        let result = apply_filter(&points, &window((-600.0, -100.0), (0.0, 30.0)), 100.0);
        assert_eq!(result.visible.len(), 1);
        assert_eq!(result.dimmed.len(), 2);
    }

    #[test]
    fn boundary_points_are_visible() {
        let points = vec![
            sample(-600.0, 15.0, Confidence::Measured),
            sample(-100.0, 15.0, Confidence::Measured),
            sample(-300.0, 0.0, Confidence::Measured),
            sample(-300.0, 30.0, Confidence::Measured),
        ];
        let result = apply_filter(&points, &window((-600.0, -100.0), (0.0, 30.0)), 100.0);
        assert_eq!(result.visible.len(), 4);
    }

    #[test]
    fn stats_match_worked_example() {
        let points = vec![
            sample(-100.0, 10.0, Confidence::Measured),
            sample(-500.0, 25.0, Confidence::Indicated),
            sample(-900.0, 35.0, Confidence::Inferred),
        ];
        let result = apply_filter(&points, &window((-600.0, 0.0), (0.0, 30.0)), 100.0);
        assert_eq!(result.visible.len(), 2);
        assert_eq!(result.dimmed.len(), 1);
        assert_eq!(result.stats.avg_grade, 17.5);
        assert_eq!(result.stats.tonnage, 200.0);
        assert_eq!(
            result.stats.mix,
            ConfidenceMix {
                measured: 1,
                indicated: 1,
                inferred: 0
            }
        );
    }

    #[test]
    fn empty_visible_set_has_zero_stats() {
        let points = vec![sample(-900.0, 35.0, Confidence::Inferred)];
        let result = apply_filter(&points, &window((-100.0, 0.0), (0.0, 30.0)), 100.0);
        assert_eq!(result.stats.avg_grade, 0.0);
        assert_eq!(result.stats.tonnage, 0.0);
        assert_eq!(result.stats.mix.total(), 0);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let points: Vec<SamplePoint> = (0..100)
            .map(|i| {
                sample(
                    -(i as f64) * 13.7,
                    (i as f64 * 0.37) % 40.0,
                    Confidence::from_code((i % 3) as u32),
                )
            })
            .collect();
        let w = window((-1000.0, -100.0), (3.0, 33.0));
        let a = apply_filter(&points, &w, 100.0);
        let b = apply_filter(&points, &w, 100.0);
        assert_eq!(a.stats, b.stats);
        let indices = |r: &FilterResult| r.visible.iter().map(|v| v.index).collect::<Vec<_>>();
        assert_eq!(indices(&a), indices(&b));
        assert_eq!(a.dimmed, b.dimmed);
    }

    #[test]
    fn dimmed_points_carry_no_value_encoding() {
        assert_eq!(dimmed_colour(), [0.28, 0.28, 0.28]);
    }
}
