use bevy::prelude::*;

use constants::render_settings::SLICE_PLANE_OPACITY;

use crate::engine::assets::bounds::{SampleBounds, SceneBounds};
use crate::engine::filter::window::FilterWindow;

/// The two translucent slicing planes bracketing the depth window.
/// They are the only frame parts that move after construction.
#[derive(Component)]
pub struct SliceTop;

#[derive(Component)]
pub struct SliceBottom;

pub fn spawn_slice_planes(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    bounds: &SampleBounds,
    window: &FilterWindow,
) {
    let size = bounds.size();
    let center = bounds.center();
    // Rectangles lie in the XY plane, which matches the Z-up world.
    let plane = meshes.add(Rectangle::new(size.x.max(1.0), size.y.max(1.0)));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, SLICE_PLANE_OPACITY),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        cull_mode: None,
        ..default()
    });
    let z_top = bounds.clamp_depth(window.depth_hi) as f32;
    let z_bottom = bounds.clamp_depth(window.depth_lo) as f32;
    commands.spawn((
        Mesh3d(plane.clone()),
        MeshMaterial3d(material.clone()),
        Transform::from_translation(Vec3::new(center.x, center.y, z_top)),
        SliceTop,
    ));
    commands.spawn((
        Mesh3d(plane),
        MeshMaterial3d(material),
        Transform::from_translation(Vec3::new(center.x, center.y, z_bottom)),
        SliceBottom,
    ));
}

/// Reposition the slice planes whenever the depth window (or the
/// dataset) changes, clamping both to the dataset's Z extent. Updates
/// the existing entities in place; the rest of the frame stays put.
pub fn update_slice_planes(
    window: Res<FilterWindow>,
    scene_bounds: Res<SceneBounds>,
    mut top_query: Query<&mut Transform, (With<SliceTop>, Without<SliceBottom>)>,
    mut bottom_query: Query<&mut Transform, With<SliceBottom>>,
) {
    if !window.is_changed() && !scene_bounds.is_changed() {
        return;
    }
    let Some(bounds) = scene_bounds.0.as_ref() else {
        return;
    };
    let center = bounds.center();
    let z_top = bounds.clamp_depth(window.depth_hi) as f32;
    let z_bottom = bounds.clamp_depth(window.depth_lo) as f32;
    if let Ok(mut transform) = top_query.single_mut() {
        transform.translation = Vec3::new(center.x, center.y, z_top);
    }
    if let Ok(mut transform) = bottom_query.single_mut() {
        transform.translation = Vec3::new(center.x, center.y, z_bottom);
    }
}
