//! Startup loading pipeline: viewer config first, then the CSV
//! dataset, then the transition into the running state.
//!
//! The config arrives through the asset server as JSON; the dataset is
//! read directly from disk. Either can fail, and both failures have a
//! graceful path: default config, synthetic fallback dataset.

use std::fs;

use bevy::prelude::*;
use thiserror::Error;

use crate::engine::assets::bounds::{SampleBounds, SceneBounds};
use crate::engine::assets::sample_set::SampleSet;
use crate::engine::assets::viewer_config::ViewerConfig;
use crate::engine::camera::OrbitCamera;
use crate::engine::core::app_state::AppState;
use crate::engine::filter::window::{FilterWindow, RangeDrag, RangeDragInputs};
use crate::engine::loading::fallback::synthetic_csv;
use crate::engine::loading::normalise::ingest;

const CONFIG_PATH: &str = "viewer_config.json";

/// Frames to wait for the config asset before falling back to the
/// built-in defaults.
const CONFIG_WAIT_FRAMES: u32 = 120;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<ViewerConfig>>,
    frames_waited: u32,
}

/// Kick off the config asset load.
pub fn start_loading(mut loader: ResMut<ConfigLoader>, asset_server: Res<AssetServer>) {
    loader.handle = Some(asset_server.load(CONFIG_PATH));
}

fn read_dataset(path: &str) -> Result<String, DatasetError> {
    fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_string(),
        source,
    })
}

/// Dataset text, either from disk or the synthetic fallback.
fn dataset_text(config: &ViewerConfig) -> (String, String) {
    match read_dataset(&config.dataset_path) {
        Ok(text) => (text, config.dataset_path.clone()),
        Err(err) => {
            warn!("{err}; using synthetic fallback dataset");
            (synthetic_csv(), "synthetic fallback".to_string())
        }
    }
}

/// Install a parsed dataset: publish points and bounds, clamp the
/// filter window to the new extent and rebuild the depth drag domain.
pub fn apply_dataset(
    text: &str,
    source: &str,
    samples: &mut SampleSet,
    scene_bounds: &mut SceneBounds,
    window: &mut FilterWindow,
    drags: &mut RangeDragInputs,
) {
    let points = ingest(text);
    info!("Loaded {} samples from {}", points.len(), source);

    let bounds = SampleBounds::from_points(&points);
    match bounds.as_ref() {
        Some(bounds) => {
            window.clamp_to(bounds);
            drags.depth = RangeDrag::new(bounds.min_z.floor(), bounds.max_z.ceil());
        }
        None => {
            // Degenerate domain: slider gestures pin to zero until a
            // dataset arrives.
            drags.depth = RangeDrag::new(0.0, 0.0);
        }
    }
    scene_bounds.0 = bounds;
    *samples = SampleSet::new(points, source.to_string());
}

/// Wait for the config asset, then load the dataset and move to the
/// running state. A config that never arrives times out into defaults.
pub fn load_when_ready(
    mut commands: Commands,
    mut loader: ResMut<ConfigLoader>,
    configs: Res<Assets<ViewerConfig>>,
    mut samples: ResMut<SampleSet>,
    mut scene_bounds: ResMut<SceneBounds>,
    mut window: ResMut<FilterWindow>,
    mut drags: ResMut<RangeDragInputs>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let config = match loader.handle.as_ref().and_then(|h| configs.get(h)) {
        Some(config) => config.clone(),
        None => {
            loader.frames_waited += 1;
            if loader.frames_waited < CONFIG_WAIT_FRAMES {
                return;
            }
            warn!("Viewer config not found at assets/{CONFIG_PATH}; using defaults");
            ViewerConfig::default()
        }
    };

    let (text, source) = dataset_text(&config);
    apply_dataset(
        &text,
        &source,
        &mut samples,
        &mut scene_bounds,
        &mut window,
        &mut drags,
    );
    commands.insert_resource(config);
    next_state.set(AppState::Running);
}

/// Reload hotkeys while running: R re-reads the dataset from disk, F
/// forces the synthetic fallback. A reload re-arms the automatic
/// camera fit so the view frames the incoming data.
pub fn reload_dataset_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<ViewerConfig>,
    mut samples: ResMut<SampleSet>,
    mut scene_bounds: ResMut<SceneBounds>,
    mut window: ResMut<FilterWindow>,
    mut drags: ResMut<RangeDragInputs>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        let (text, source) = dataset_text(&config);
        apply_dataset(
            &text,
            &source,
            &mut samples,
            &mut scene_bounds,
            &mut window,
            &mut drags,
        );
        orbit.view_initialised = false;
    } else if keyboard.just_pressed(KeyCode::KeyF) {
        let text = synthetic_csv();
        apply_dataset(
            &text,
            "synthetic fallback",
            &mut samples,
            &mut scene_bounds,
            &mut window,
            &mut drags,
        );
        orbit.view_initialised = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_dataset_publishes_points_and_bounds() {
        let mut samples = SampleSet::default();
        let mut scene_bounds = SceneBounds::default();
        let mut window = FilterWindow::default();
        let mut drags = RangeDragInputs::default();

        let csv = "X,Y,Z,AUGT,CONF\n0,0,-100,5,Measured\n10,10,-900,20,Inferred\n";
        apply_dataset(
            csv,
            "test",
            &mut samples,
            &mut scene_bounds,
            &mut window,
            &mut drags,
        );

        assert_eq!(samples.len(), 2);
        let bounds = scene_bounds.0.as_ref().unwrap();
        assert_eq!((bounds.min_z, bounds.max_z), (-900.0, -100.0));
        // The default window (-1000..-800) clamps into the extent.
        assert_eq!((window.depth_lo, window.depth_hi), (-900.0, -800.0));
        assert_eq!(drags.depth.domain, (-900.0, -100.0));
    }

    #[test]
    fn empty_dataset_clears_bounds() {
        let mut samples = SampleSet::default();
        let mut scene_bounds = SceneBounds(Some(
            SampleBounds::from_points(&ingest("X,Y,Z,AUGT\n0,0,-1,1\n")).unwrap(),
        ));
        let mut window = FilterWindow::default();
        let mut drags = RangeDragInputs::default();

        apply_dataset(
            "",
            "test",
            &mut samples,
            &mut scene_bounds,
            &mut window,
            &mut drags,
        );
        assert!(samples.is_empty());
        assert!(scene_bounds.0.is_none());
        assert_eq!(drags.depth.domain, (0.0, 0.0));
    }

    #[test]
    fn reload_rearms_the_camera_fit() {
        let mut app = App::new();
        app.init_resource::<SampleSet>()
            .init_resource::<SceneBounds>()
            .init_resource::<FilterWindow>()
            .init_resource::<RangeDragInputs>()
            .init_resource::<ViewerConfig>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Update, reload_dataset_system);

        // A user has already orbited away from the initial fit.
        let mut orbit = OrbitCamera::default();
        orbit.view_initialised = true;
        app.insert_resource(orbit);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyF);
        app.update();

        let orbit = app.world().resource::<OrbitCamera>();
        assert!(!orbit.view_initialised);
        assert!(!app.world().resource::<SampleSet>().is_empty());
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = read_dataset("does/not/exist.csv").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.csv"));
    }
}
