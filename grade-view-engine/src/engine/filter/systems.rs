//! Filter recomputation and draw-set rebuild.
//!
//! Whenever the sample set or the filter window changes, the whole
//! dataset is re-partitioned and both point meshes are rebuilt from
//! scratch. No incremental updates.

use bevy::prelude::*;

use constants::colour_ramp::ramp_rgb;
use constants::render_settings::{DIMMED_OPACITY, VIVID_OPACITY};

use crate::engine::assets::sample_set::SampleSet;
use crate::engine::assets::viewer_config::ViewerConfig;
use crate::engine::filter::engine::{FilterResult, FilterStats, apply_filter, dimmed_colour};
use crate::engine::filter::window::FilterWindow;
use crate::engine::scene::points::{
    DimmedPoints, FallbackMarker, VividPoints, point_cloud_mesh, unlit_material,
};

/// Recompute the visible/dimmed partition when the dataset or window
/// changes, and publish fresh statistics.
pub fn recompute_filter_system(
    samples: Res<SampleSet>,
    window: Res<FilterWindow>,
    config: Res<ViewerConfig>,
    mut result: ResMut<FilterResult>,
    mut stats: ResMut<FilterStats>,
) {
    if !samples.is_changed() && !window.is_changed() && !config.is_changed() {
        return;
    }

    *result = apply_filter(&samples.points, &window, config.tons_per_point);
    *stats = result.stats.clone();

    info!(
        "filter/stats {}",
        serde_json::json!({
            "visible": stats.visible_count,
            "avg_grade": stats.avg_grade,
            "tonnage": stats.tonnage,
            "measured": stats.mix.measured,
            "indicated": stats.mix.indicated,
            "inferred": stats.mix.inferred,
        })
    );
}

/// Despawn and respawn both point-cloud meshes from the latest filter
/// result. An empty dataset gets a single neutral marker point so the
/// scene is never entirely blank.
pub fn rebuild_point_clouds_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    result: Res<FilterResult>,
    samples: Res<SampleSet>,
    vivid: Query<Entity, With<VividPoints>>,
    dimmed: Query<Entity, With<DimmedPoints>>,
    markers: Query<Entity, With<FallbackMarker>>,
) {
    if !result.is_changed() {
        return;
    }

    for entity in vivid.iter().chain(dimmed.iter()).chain(markers.iter()) {
        commands.entity(entity).despawn();
    }

    if samples.is_empty() {
        let rgb = ramp_rgb(0.0);
        let mesh = point_cloud_mesh(
            &[Vec3::new(0.0, 0.0, -1.0)],
            &[[rgb[0], rgb[1], rgb[2], VIVID_OPACITY]],
        );
        commands.spawn((
            FallbackMarker,
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(materials.add(unlit_material(Color::WHITE))),
            Transform::IDENTITY,
        ));
        return;
    }

    if !result.visible.is_empty() {
        let positions: Vec<Vec3> = result.visible.iter().map(|v| v.position).collect();
        let colours: Vec<[f32; 4]> = result
            .visible
            .iter()
            .map(|v| [v.colour[0], v.colour[1], v.colour[2], VIVID_OPACITY])
            .collect();
        commands.spawn((
            VividPoints,
            Mesh3d(meshes.add(point_cloud_mesh(&positions, &colours))),
            MeshMaterial3d(materials.add(unlit_material(Color::WHITE))),
            Transform::IDENTITY,
        ));
    }

    if !result.dimmed.is_empty() {
        let grey = dimmed_colour();
        let colours = vec![[grey[0], grey[1], grey[2], DIMMED_OPACITY]; result.dimmed.len()];
        commands.spawn((
            DimmedPoints,
            Mesh3d(meshes.add(point_cloud_mesh(&result.dimmed, &colours))),
            MeshMaterial3d(materials.add(unlit_material(Color::WHITE))),
            Transform::IDENTITY,
        ));
    }
}
