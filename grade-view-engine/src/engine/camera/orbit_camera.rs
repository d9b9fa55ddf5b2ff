use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use constants::coordinate_system::WORLD_UP;
use constants::render_settings::CAMERA_FIT_MARGIN;

use crate::engine::assets::bounds::{SampleBounds, SceneBounds};

/// Orbit camera state. Purely presentational: pose changes never feed
/// back into filtering or frame construction.
#[derive(Resource)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    /// One-shot flag: once the first fit (or a manual orbit) has
    /// happened, automatic reset-to-fit stops overriding the user.
    pub view_initialised: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::new(0.0, 0.0, -900.0),
            yaw: 0.54,
            pitch: 0.6,
            distance: 1800.0,
            view_initialised: false,
        }
    }
}

impl OrbitCamera {
    /// Camera position derived from target, yaw, pitch and distance,
    /// with Z as the vertical axis.
    pub fn position(&self) -> Vec3 {
        let offset = Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
        ) * self.distance;
        self.target + offset
    }

    /// Deterministic fit: aim at the bounds centre from an offset
    /// scaled by the bounds diagonal plus a fixed margin, so the whole
    /// dataset is framed.
    pub fn reset_to_fit(&mut self, bounds: &SampleBounds) {
        let r = bounds.size().length() * 0.9 + CAMERA_FIT_MARGIN;
        let offset = Vec3::new(r, r * 0.6, r);
        self.target = bounds.center();
        self.distance = offset.length();
        self.yaw = offset.y.atan2(offset.x);
        self.pitch = (offset.z / self.distance).asin();
    }
}

/// Apply pointer input to the orbit camera and write the resulting
/// pose onto the camera entity every frame. Drags with Shift or Ctrl
/// held belong to the range inputs and are ignored here.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    scene_bounds: Res<SceneBounds>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let range_modifier = keyboard.any_pressed([
        KeyCode::ShiftLeft,
        KeyCode::ShiftRight,
        KeyCode::ControlLeft,
        KeyCode::ControlRight,
    ]);

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_button.pressed(MouseButton::Left) && !range_modifier && mouse_delta != Vec2::ZERO {
        orbit.yaw -= mouse_delta.x * 0.005;
        orbit.pitch = (orbit.pitch + mouse_delta.y * 0.004).clamp(-1.5, 1.5);
        orbit.view_initialised = true;
    }

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        orbit.distance = (orbit.distance * (1.0 - scroll_accum * 0.1)).clamp(10.0, 50_000.0);
    }

    // Home: explicit re-fit, allowed even after manual orbiting.
    if keyboard.just_pressed(KeyCode::KeyH) {
        if let Some(bounds) = scene_bounds.0.as_ref() {
            orbit.reset_to_fit(bounds);
        }
    }

    *camera_transform =
        Transform::from_translation(orbit.position()).looking_at(orbit.target, WORLD_UP);
}

/// Fit the camera to freshly computed bounds exactly once; afterwards
/// user-driven orbiting wins until an explicit Home request.
pub fn fit_camera_system(mut orbit: ResMut<OrbitCamera>, scene_bounds: Res<SceneBounds>) {
    if orbit.view_initialised || !scene_bounds.is_changed() {
        return;
    }
    if let Some(bounds) = scene_bounds.0.as_ref() {
        orbit.reset_to_fit(bounds);
        orbit.view_initialised = true;
        info!("Camera fitted to bounds (target {:?})", orbit.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::confidence::Confidence;

    use crate::engine::assets::sample_set::SamplePoint;

    fn bounds() -> SampleBounds {
        let make = |x: f64, y: f64, z: f64| SamplePoint {
            x,
            y,
            z,
            grade: 1.0,
            confidence: Confidence::Indicated,
        };
        SampleBounds::from_points(&[make(-400.0, -300.0, -1200.0), make(400.0, 300.0, 0.0)])
            .unwrap()
    }

    #[test]
    fn fit_is_deterministic_and_aims_at_center() {
        let mut a = OrbitCamera::default();
        let mut b = OrbitCamera::default();
        a.reset_to_fit(&bounds());
        b.reset_to_fit(&bounds());
        assert_eq!(a.target, bounds().center());
        assert_eq!(a.position(), b.position());
    }

    #[test]
    fn fit_frames_the_whole_diagonal() {
        let mut camera = OrbitCamera::default();
        camera.reset_to_fit(&bounds());
        let r = bounds().size().length() * 0.9 + CAMERA_FIT_MARGIN;
        let expected = bounds().center() + Vec3::new(r, r * 0.6, r);
        assert!((camera.position() - expected).length() < 1.0);
        assert!(camera.distance > bounds().size().length());
    }
}
