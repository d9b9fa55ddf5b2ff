use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use constants::render_settings::TONS_PER_POINT;

/// Viewer configuration, loaded from `assets/viewer_config.json` via
/// the JSON asset plugin. Every field has a default so a missing or
/// partial file still yields a working session.
#[derive(Resource, Debug, Clone, Serialize, Deserialize, Asset, TypePath)]
pub struct ViewerConfig {
    /// CSV resource read at startup and on reload.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
    /// Estimated tons represented by one visible sample.
    #[serde(default = "default_tons_per_point")]
    pub tons_per_point: f64,
}

fn default_dataset_path() -> String {
    "assets/3Dmodel.csv".to_string()
}

fn default_tons_per_point() -> f64 {
    TONS_PER_POINT
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            tons_per_point: default_tons_per_point(),
        }
    }
}
