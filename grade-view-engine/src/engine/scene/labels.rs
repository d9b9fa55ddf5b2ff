use bevy::prelude::*;

/// UI text pinned to a world position. The projection system moves the
/// node to the position's viewport coordinates every frame and hides
/// it while the anchor sits behind the camera.
#[derive(Component)]
pub struct WorldLabel {
    pub world_position: Vec3,
}

pub fn spawn_world_label(
    commands: &mut Commands,
    text: &str,
    world_position: Vec3,
    font_size: f32,
) -> Entity {
    commands
        .spawn((
            Text::new(text),
            TextFont {
                font_size,
                ..default()
            },
            TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            Visibility::Hidden,
            WorldLabel { world_position },
        ))
        .id()
}

/// Project every world label into the viewport.
pub fn project_world_labels(
    camera_query: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    mut labels: Query<(&WorldLabel, &mut Node, &mut Visibility)>,
) {
    let Ok((camera_transform, camera)) = camera_query.single() else {
        return;
    };
    for (label, mut node, mut visibility) in &mut labels {
        match camera.world_to_viewport(camera_transform, label.world_position) {
            Ok(screen) => {
                node.left = Val::Px(screen.x);
                node.top = Val::Px(screen.y);
                *visibility = Visibility::Visible;
            }
            Err(_) => {
                *visibility = Visibility::Hidden;
            }
        }
    }
}
