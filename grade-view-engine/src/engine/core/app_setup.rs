// Standard library and external crates
use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::assets::bounds::SceneBounds;
use crate::engine::assets::sample_set::SampleSet;
use crate::engine::assets::viewer_config::ViewerConfig;
use crate::engine::camera::{OrbitCamera, camera_controller, fit_camera_system};
use crate::engine::core::app_state::AppState;
use crate::engine::core::window_config::create_window_config;
use crate::engine::filter::engine::{FilterResult, FilterStats};
use crate::engine::filter::systems::{recompute_filter_system, rebuild_point_clouds_system};
use crate::engine::filter::window::{FilterWindow, RangeDragInputs};
use crate::engine::loading::dataset_loader::{
    ConfigLoader, load_when_ready, reload_dataset_system, start_loading,
};
use crate::engine::scene::labels::project_world_labels;
use crate::engine::scene::slice_planes::update_slice_planes;
use crate::engine::scene::spawn::rebuild_frame_system;
use crate::engine::systems::range_input::{keyboard_range_system, pointer_range_system};
use crate::engine::systems::ui::{
    spawn_hud, update_selection_text, update_stats_panel, update_tooltip,
};

// Crate tools modules
use crate::tools::picking::{HoverState, SelectionState, click_select_system, hover_system};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers ViewerConfig as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ViewerConfig>::new(&["json"]));

    // Initialise resources early
    app.init_resource::<SampleSet>()
        .init_resource::<SceneBounds>()
        .init_resource::<FilterWindow>()
        .init_resource::<RangeDragInputs>()
        .init_resource::<FilterResult>()
        .init_resource::<FilterStats>()
        .init_resource::<OrbitCamera>()
        .init_resource::<ConfigLoader>()
        .init_resource::<HoverState>()
        .init_resource::<SelectionState>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, spawn_hud, start_loading).chain())
        .add_systems(Update, load_when_ready.run_if(in_state(AppState::Loading)));

    // Input feeds the filter window before the filter pass reads it;
    // draw sets rebuild from the freshly published result.
    let runtime_systems = (
        keyboard_range_system,
        pointer_range_system,
        reload_dataset_system,
        recompute_filter_system,
        rebuild_point_clouds_system,
        rebuild_frame_system,
        update_slice_planes,
        fit_camera_system,
        camera_controller,
        hover_system,
        click_select_system,
    )
        .chain();

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));
    app.add_systems(
        Update,
        (
            project_world_labels,
            update_stats_panel,
            update_selection_text,
            update_tooltip,
        )
            .run_if(in_state(AppState::Running)),
    );

    app
}

fn setup(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(1800.0, 1100.0, 900.0).looking_at(Vec3::ZERO, Vec3::Z),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 500.0,
        ..default()
    });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
