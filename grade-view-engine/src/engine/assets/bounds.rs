use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::assets::sample_set::SamplePoint;

/// Axis-aligned spatial bounds of the sample array in world
/// coordinates. Derived data: recomputed whenever the point array
/// changes, never mutated in place.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct SampleBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl SampleBounds {
    /// Single linear scan tracking running min/max per axis. An empty
    /// point set has no bounds; callers render a fallback marker
    /// instead of a frame.
    pub fn from_points(points: &[SamplePoint]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = SampleBounds {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
            min_z: first.z,
            max_z: first.z,
        };
        for p in &points[1..] {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_y = bounds.max_y.max(p.y);
            bounds.min_z = bounds.min_z.min(p.z);
            bounds.max_z = bounds.max_z.max(p.z);
        }
        Some(bounds)
    }

    pub fn min(&self) -> Vec3 {
        Vec3::new(self.min_x as f32, self.min_y as f32, self.min_z as f32)
    }

    pub fn max(&self) -> Vec3 {
        Vec3::new(self.max_x as f32, self.max_y as f32, self.max_z as f32)
    }

    /// Midpoint of min/max, used for camera targeting and slice planes.
    pub fn center(&self) -> Vec3 {
        (self.min() + self.max()) * 0.5
    }

    /// Component-wise extent (max − min).
    pub fn size(&self) -> Vec3 {
        self.max() - self.min()
    }

    /// Clamp a depth value into the Z extent.
    pub fn clamp_depth(&self, z: f64) -> f64 {
        z.clamp(self.min_z, self.max_z)
    }
}

/// Bounds of the current dataset, if any. `None` for an empty dataset,
/// in which case the frame is skipped and a fallback marker is drawn.
#[derive(Resource, Debug, Clone, Default)]
pub struct SceneBounds(pub Option<SampleBounds>);

#[cfg(test)]
mod tests {
    use super::*;
    use constants::confidence::Confidence;

    fn sample(x: f64, y: f64, z: f64) -> SamplePoint {
        SamplePoint {
            x,
            y,
            z,
            grade: 1.0,
            confidence: Confidence::Indicated,
        }
    }

    #[test]
    fn empty_points_have_no_bounds() {
        assert!(SampleBounds::from_points(&[]).is_none());
    }

    #[test]
    fn tracks_min_max_center_size() {
        let bounds =
            SampleBounds::from_points(&[sample(-10.0, 0.0, -100.0), sample(30.0, 20.0, 0.0)])
                .unwrap();
        assert_eq!(bounds.min_x, -10.0);
        assert_eq!(bounds.max_z, 0.0);
        assert_eq!(bounds.center(), Vec3::new(10.0, 10.0, -50.0));
        assert_eq!(bounds.size(), Vec3::new(40.0, 20.0, 100.0));
    }

    #[test]
    fn single_point_gives_degenerate_bounds() {
        let bounds = SampleBounds::from_points(&[sample(5.0, 6.0, -7.0)]).unwrap();
        assert_eq!(bounds.size(), Vec3::ZERO);
        assert_eq!(bounds.center(), Vec3::new(5.0, 6.0, -7.0));
    }
}
