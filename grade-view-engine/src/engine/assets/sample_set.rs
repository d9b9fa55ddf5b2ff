use bevy::prelude::*;
use constants::confidence::Confidence;

/// One validated geological sample. Immutable once created; the
/// containing array is the dataset's single source of truth.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub grade: f64,
    pub confidence: Confidence,
}

impl SamplePoint {
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

/// The session's dataset. Reload swaps the whole array; points are
/// never edited in place while filter or picking scans run.
#[derive(Resource, Default)]
pub struct SampleSet {
    pub points: Vec<SamplePoint>,
    /// Human-readable origin of the data, shown in the stats panel.
    pub source: String,
}

impl SampleSet {
    pub fn new(points: Vec<SamplePoint>, source: impl Into<String>) -> Self {
        Self {
            points,
            source: source.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}
