use bevy::prelude::*;

use constants::render_settings::{
    AXIS_OPACITY, FRAME_EDGE_OPACITY, GRID_OPACITY, TICK_OPACITY,
};

use crate::engine::assets::bounds::SceneBounds;
use crate::engine::scene::frame::build_frame;
use crate::engine::scene::labels::{WorldLabel, spawn_world_label};
use crate::engine::scene::points::{line_segment_mesh, unlit_material};
use crate::engine::filter::window::FilterWindow;
use crate::engine::scene::slice_planes::{SliceBottom, SliceTop, spawn_slice_planes};

/// Marker for static frame entities (wireframe, axes, ticks, grid).
#[derive(Component)]
pub struct FramePart;

fn spawn_line_group(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    segments: &[[Vec3; 2]],
    opacity: f32,
) {
    if segments.is_empty() {
        return;
    }
    commands.spawn((
        Mesh3d(meshes.add(line_segment_mesh(segments))),
        MeshMaterial3d(materials.add(unlit_material(Color::srgba(1.0, 1.0, 1.0, opacity)))),
        Transform::IDENTITY,
        FramePart,
    ));
}

/// Rebuild the whole frame when the dataset bounds change: despawn the
/// previous frame, labels and slice planes, then build from the new
/// bounds. An empty dataset gets no frame at all.
pub fn rebuild_frame_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scene_bounds: Res<SceneBounds>,
    window: Res<FilterWindow>,
    frame_parts: Query<Entity, With<FramePart>>,
    labels: Query<Entity, With<WorldLabel>>,
    slice_tops: Query<Entity, With<SliceTop>>,
    slice_bottoms: Query<Entity, With<SliceBottom>>,
) {
    if !scene_bounds.is_changed() {
        return;
    }
    for entity in frame_parts
        .iter()
        .chain(labels.iter())
        .chain(slice_tops.iter())
        .chain(slice_bottoms.iter())
    {
        commands.entity(entity).despawn();
    }

    let Some(bounds) = scene_bounds.0.as_ref() else {
        info!("No bounds: dataset empty, skipping frame");
        return;
    };

    let frame = build_frame(bounds);
    spawn_line_group(&mut commands, &mut meshes, &mut materials, &frame.edges, FRAME_EDGE_OPACITY);
    spawn_line_group(&mut commands, &mut meshes, &mut materials, &frame.axes, AXIS_OPACITY);
    spawn_line_group(&mut commands, &mut meshes, &mut materials, &frame.tick_lines, TICK_OPACITY);
    spawn_line_group(&mut commands, &mut meshes, &mut materials, &frame.grid_lines, GRID_OPACITY);

    for label in &frame.tick_labels {
        spawn_world_label(&mut commands, &label.text, label.position, 12.0);
    }
    spawn_world_label(
        &mut commands,
        &frame.axis_label.text,
        frame.axis_label.position,
        14.0,
    );

    spawn_slice_planes(&mut commands, &mut meshes, &mut materials, bounds, &window);
    info!(
        "Frame rebuilt: {} ticks across Z [{:.0}, {:.0}]",
        frame.ticks.len(),
        bounds.min_z,
        bounds.max_z
    );
}
