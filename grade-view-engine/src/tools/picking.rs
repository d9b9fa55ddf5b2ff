//! Ray picking against the visible point set.
//!
//! Picking only ever considers points that passed the current filter;
//! dimmed context points are not selectable.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use constants::confidence::Confidence;
use constants::render_settings::{HIGHLIGHT_RADIUS, PICK_THRESHOLD};

use crate::engine::filter::engine::{FilterResult, VisiblePoint};

/// Visible point currently under the cursor, if any.
#[derive(Resource, Default)]
pub struct HoverState {
    pub hovered: Option<HoveredSample>,
}

#[derive(Debug, Clone)]
pub struct HoveredSample {
    pub grade: f64,
    pub cursor: Vec2,
}

/// Most recently clicked visible point.
#[derive(Resource, Default)]
pub struct SelectionState {
    pub selected: Option<SelectedSample>,
}

#[derive(Debug, Clone)]
pub struct SelectedSample {
    pub position: Vec3,
    pub grade: f64,
    pub depth: f64,
    pub confidence: Confidence,
}

/// Sphere spawned at the selected point.
#[derive(Component)]
pub struct SelectionHighlight;

/// Find the visible point nearest the pick ray, within a fixed
/// perpendicular-distance threshold. Points behind the ray origin are
/// skipped; among equally near candidates the closest along the ray
/// wins.
pub fn pick_nearest(
    origin: Vec3,
    direction: Vec3,
    points: &[VisiblePoint],
    threshold: f32,
) -> Option<usize> {
    let dir = direction.normalize();
    let mut best: Option<(usize, f32, f32)> = None;

    for (i, point) in points.iter().enumerate() {
        let to_point = point.position - origin;
        let t = to_point.dot(dir);
        if t < 0.0 {
            continue;
        }
        let perp = (to_point - dir * t).length();
        if perp > threshold {
            continue;
        }
        let closer = match best {
            None => true,
            Some((_, best_perp, best_t)) => {
                perp < best_perp - 1e-6 || ((perp - best_perp).abs() <= 1e-6 && t < best_t)
            }
        };
        if closer {
            best = Some((i, perp, t));
        }
    }

    best.map(|(i, _, _)| i)
}

fn cursor_ray(
    windows: &Query<&Window, With<PrimaryWindow>>,
    camera_query: &Query<(&Camera, &GlobalTransform), With<Camera3d>>,
) -> Option<(Ray3d, Vec2)> {
    let window = windows.single().ok()?;
    let cursor_pos = window.cursor_position()?;
    let (camera, camera_transform) = camera_query.single().ok()?;
    let ray = camera.viewport_to_world(camera_transform, cursor_pos).ok()?;
    Some((ray, cursor_pos))
}

/// Track which visible point the cursor is over.
pub fn hover_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    result: Res<FilterResult>,
    mut hover: ResMut<HoverState>,
) {
    let Some((ray, cursor_pos)) = cursor_ray(&windows, &camera_query) else {
        hover.hovered = None;
        return;
    };

    hover.hovered = pick_nearest(
        ray.origin,
        ray.direction.as_vec3(),
        &result.visible,
        PICK_THRESHOLD,
    )
    .map(|i| HoveredSample {
        grade: result.visible[i].grade,
        cursor: cursor_pos,
    });
}

/// On left click, select the picked point and move the highlight
/// sphere onto it. A click that hits nothing leaves the previous
/// selection alone.
pub fn click_select_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    result: Res<FilterResult>,
    mut selection: ResMut<SelectionState>,
    highlights: Query<Entity, With<SelectionHighlight>>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }
    // Modifier-drags steer the range inputs, not selection.
    if keyboard.any_pressed([
        KeyCode::ShiftLeft,
        KeyCode::ShiftRight,
        KeyCode::ControlLeft,
        KeyCode::ControlRight,
    ]) {
        return;
    }

    let Some((ray, _)) = cursor_ray(&windows, &camera_query) else {
        return;
    };
    let Some(index) = pick_nearest(
        ray.origin,
        ray.direction.as_vec3(),
        &result.visible,
        PICK_THRESHOLD,
    ) else {
        return;
    };

    let point = &result.visible[index];
    selection.selected = Some(SelectedSample {
        position: point.position,
        grade: point.grade,
        depth: point.depth,
        confidence: point.confidence,
    });

    for entity in highlights.iter() {
        commands.entity(entity).despawn();
    }
    commands.spawn((
        SelectionHighlight,
        Mesh3d(meshes.add(Sphere::new(HIGHLIGHT_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::from_translation(point.position),
    ));

    info!(
        "Selected sample: {:.2} g/T at {:.0} m ({})",
        point.grade,
        point.depth,
        point.confidence.label()
    );
}
