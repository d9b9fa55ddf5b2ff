use bevy::prelude::*;

use constants::coordinate_system::DEPTH_TICK_STEP;

use crate::engine::assets::bounds::SampleBounds;

/// A text label anchored at a world position; projected into the
/// viewport by the label system each frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameLabel {
    pub text: String,
    pub position: Vec3,
}

/// Static frame description built from the dataset bounds: wireframe
/// edges, corner axis lines, depth ticks with labels, and a faint grid
/// rectangle per tick. Everything here is rebuilt only on dataset
/// reload; the slice planes are the sole moving parts and live in
/// `slice_planes`.
#[derive(Debug, Clone, Default)]
pub struct FrameGeometry {
    pub edges: Vec<[Vec3; 2]>,
    pub axes: Vec<[Vec3; 2]>,
    /// Tick depths, sorted shallow (largest Z) to deep.
    pub ticks: Vec<f64>,
    pub tick_lines: Vec<[Vec3; 2]>,
    pub grid_lines: Vec<[Vec3; 2]>,
    pub tick_labels: Vec<FrameLabel>,
    pub axis_label: FrameLabel,
}

/// Depth tick values at a fixed interval across the Z extent. The
/// zero-depth tick is always present when zero falls inside the range.
/// Sorted shallow to deep.
pub fn depth_ticks(zmin: f64, zmax: f64, step: f64) -> Vec<f64> {
    let lo = zmin.min(zmax);
    let hi = zmin.max(zmax);
    let k0 = (lo / step).ceil() as i64;
    let k1 = (hi / step).floor() as i64;
    let mut ticks: Vec<f64> = (k0..=k1).map(|k| k as f64 * step).collect();
    ticks.sort_by(|a, b| b.total_cmp(a));
    ticks
}

pub fn build_frame(bounds: &SampleBounds) -> FrameGeometry {
    let min = bounds.min();
    let max = bounds.max();
    let size = bounds.size();

    // 12-edge wireframe of the bounding box.
    let corners = [
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(max.x, min.y, min.z),
        Vec3::new(max.x, max.y, min.z),
        Vec3::new(min.x, max.y, min.z),
        Vec3::new(min.x, min.y, max.z),
        Vec3::new(max.x, min.y, max.z),
        Vec3::new(max.x, max.y, max.z),
        Vec3::new(min.x, max.y, max.z),
    ];
    const EDGE_INDICES: [[usize; 2]; 12] = [
        [0, 1],
        [1, 2],
        [2, 3],
        [3, 0],
        [4, 5],
        [5, 6],
        [6, 7],
        [7, 4],
        [0, 4],
        [1, 5],
        [2, 6],
        [3, 7],
    ];
    let edges = EDGE_INDICES
        .iter()
        .map(|[a, b]| [corners[*a], corners[*b]])
        .collect();

    // Three axis reference lines anchored at the shallow corner.
    let anchor = Vec3::new(min.x, min.y, max.z);
    let axes = vec![
        [anchor, Vec3::new(max.x, min.y, max.z)],
        [anchor, Vec3::new(min.x, max.y, max.z)],
        [anchor, Vec3::new(min.x, min.y, min.z)],
    ];

    let ticks = depth_ticks(bounds.min_z, bounds.max_z, DEPTH_TICK_STEP);
    let tick_len = (size.x * 0.05).clamp(10.0, 30.0);

    let mut tick_lines = Vec::with_capacity(ticks.len());
    let mut grid_lines = Vec::with_capacity(ticks.len() * 4);
    let mut tick_labels = Vec::with_capacity(ticks.len());
    for &tick in &ticks {
        let z = tick as f32;
        tick_lines.push([
            Vec3::new(min.x, min.y, z),
            Vec3::new(min.x + tick_len, min.y, z),
        ]);
        tick_labels.push(FrameLabel {
            text: format!("{} m", tick as i64),
            position: Vec3::new(min.x - tick_len * 0.4, min.y, z),
        });
        // Faint rectangle spanning the X/Y extent at this depth.
        grid_lines.extend_from_slice(&[
            [Vec3::new(min.x, min.y, z), Vec3::new(max.x, min.y, z)],
            [Vec3::new(max.x, min.y, z), Vec3::new(max.x, max.y, z)],
            [Vec3::new(max.x, max.y, z), Vec3::new(min.x, max.y, z)],
            [Vec3::new(min.x, max.y, z), Vec3::new(min.x, min.y, z)],
        ]);
    }

    let axis_label = FrameLabel {
        text: "DEPTH".to_string(),
        position: Vec3::new(min.x - tick_len * 0.8, min.y, max.z + 20.0),
    };

    FrameGeometry {
        edges,
        axes,
        ticks,
        tick_lines,
        grid_lines,
        tick_labels,
        axis_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::confidence::Confidence;

    use crate::engine::assets::sample_set::SamplePoint;

    fn bounds(zmin: f64, zmax: f64) -> SampleBounds {
        let make = |x: f64, y: f64, z: f64| SamplePoint {
            x,
            y,
            z,
            grade: 1.0,
            confidence: Confidence::Indicated,
        };
        SampleBounds::from_points(&[make(-400.0, -300.0, zmin), make(400.0, 300.0, zmax)]).unwrap()
    }

    #[test]
    fn ticks_cover_extent_shallow_to_deep() {
        let ticks = depth_ticks(-1600.0, 0.0, 200.0);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&-1600.0));
        assert_eq!(ticks.len(), 9);
        assert!(ticks.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn zero_tick_included_when_spanned() {
        assert!(depth_ticks(-500.0, 100.0, 200.0).contains(&0.0));
        assert!(!depth_ticks(-900.0, -500.0, 200.0).contains(&0.0));
    }

    #[test]
    fn reversed_arguments_are_tolerated() {
        assert_eq!(
            depth_ticks(0.0, -400.0, 200.0),
            depth_ticks(-400.0, 0.0, 200.0)
        );
    }

    #[test]
    fn frame_has_expected_shape() {
        let frame = build_frame(&bounds(-1000.0, 0.0));
        assert_eq!(frame.edges.len(), 12);
        assert_eq!(frame.axes.len(), 3);
        assert_eq!(frame.ticks.len(), 6);
        assert_eq!(frame.tick_lines.len(), frame.ticks.len());
        assert_eq!(frame.tick_labels.len(), frame.ticks.len());
        assert_eq!(frame.grid_lines.len(), frame.ticks.len() * 4);
        assert_eq!(frame.axis_label.text, "DEPTH");
    }

    #[test]
    fn default_frame_is_empty() {
        let frame = FrameGeometry::default();
        assert!(frame.edges.is_empty());
        assert!(frame.ticks.is_empty());
        assert_eq!(frame.axis_label, FrameLabel::default());
    }

    #[test]
    fn tick_labels_name_their_depth() {
        let frame = build_frame(&bounds(-400.0, 0.0));
        let texts: Vec<&str> = frame.tick_labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["0 m", "-200 m", "-400 m"]);
    }
}
