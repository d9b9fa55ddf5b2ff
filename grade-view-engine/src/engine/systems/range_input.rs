//! Range steering for the depth and grade filters.
//!
//! Two gestures drive the window: Shift plus left-drag moves the depth
//! range vertically, Ctrl plus left-drag moves the grade range
//! horizontally. Keyboard nudges steer depth as centre plus thickness.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::filter::window::{FilterWindow, RangeDrag, RangeDragInputs};

const DEPTH_NUDGE: f64 = 10.0;
const THICKNESS_NUDGE: f64 = 20.0;

/// Keyboard steering of the depth window.
pub fn keyboard_range_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut window: ResMut<FilterWindow>,
) {
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        let center = window.depth_center() + DEPTH_NUDGE;
        window.set_depth_center(center);
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        let center = window.depth_center() - DEPTH_NUDGE;
        window.set_depth_center(center);
    }
    if keyboard.just_pressed(KeyCode::BracketRight) {
        let thickness = window.depth_thickness() + THICKNESS_NUDGE;
        window.set_depth_thickness(thickness);
    }
    if keyboard.just_pressed(KeyCode::BracketLeft) {
        let thickness = window.depth_thickness() - THICKNESS_NUDGE;
        window.set_depth_thickness(thickness);
    }
}

/// Map a vertical cursor position to depth-domain value space. The top
/// of the window is the shallow end of the domain.
fn depth_value(cursor_y: f32, window_height: f32, drag: &RangeDrag) -> f64 {
    let (lo, hi) = drag.domain;
    let frac = (cursor_y / window_height.max(1.0)).clamp(0.0, 1.0) as f64;
    hi - frac * (hi - lo)
}

/// Map a horizontal cursor position to grade-domain value space.
fn grade_value(cursor_x: f32, window_width: f32, drag: &RangeDrag) -> f64 {
    let (lo, hi) = drag.domain;
    let frac = (cursor_x / window_width.max(1.0)).clamp(0.0, 1.0) as f64;
    lo + frac * (hi - lo)
}

/// Drive the two drag machines from modifier-qualified left drags.
pub fn pointer_range_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut drags: ResMut<RangeDragInputs>,
    mut filter: ResMut<FilterWindow>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        if mouse_button.just_released(MouseButton::Left) {
            drags.depth.end();
            drags.grade.end();
        }
        return;
    };

    let shift = keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
    let ctrl = keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]);

    if mouse_button.just_pressed(MouseButton::Left) {
        if shift {
            let value = depth_value(cursor.y, window.height(), &drags.depth);
            drags.depth.begin(value, (filter.depth_lo, filter.depth_hi));
        } else if ctrl {
            let value = grade_value(cursor.x, window.width(), &drags.grade);
            drags.grade.begin(value, (filter.grade_lo, filter.grade_hi));
        }
    }

    if mouse_button.pressed(MouseButton::Left) {
        if !drags.depth.is_idle() {
            let value = depth_value(cursor.y, window.height(), &drags.depth);
            let (lo, hi) = drags.depth.drag_to(value, (filter.depth_lo, filter.depth_hi));
            if (lo, hi) != (filter.depth_lo, filter.depth_hi) {
                filter.set_depth(lo, hi);
            }
        }
        if !drags.grade.is_idle() {
            let value = grade_value(cursor.x, window.width(), &drags.grade);
            let (lo, hi) = drags.grade.drag_to(value, (filter.grade_lo, filter.grade_hi));
            if (lo, hi) != (filter.grade_lo, filter.grade_hi) {
                filter.set_grade(lo, hi);
            }
        }
    }

    if mouse_button.just_released(MouseButton::Left) {
        drags.depth.end();
        drags.grade.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_top_maps_to_shallow_depth() {
        let drag = RangeDrag::new(-1600.0, 0.0);
        assert_eq!(depth_value(0.0, 800.0, &drag), 0.0);
        assert_eq!(depth_value(800.0, 800.0, &drag), -1600.0);
        assert_eq!(depth_value(400.0, 800.0, &drag), -800.0);
    }

    #[test]
    fn cursor_left_maps_to_low_grade() {
        let drag = RangeDrag::new(0.0, 40.0);
        assert_eq!(grade_value(0.0, 1000.0, &drag), 0.0);
        assert_eq!(grade_value(1000.0, 1000.0, &drag), 40.0);
        assert_eq!(grade_value(250.0, 1000.0, &drag), 10.0);
    }

    #[test]
    fn off_screen_cursor_clamps_to_domain() {
        let drag = RangeDrag::new(0.0, 40.0);
        assert_eq!(grade_value(-50.0, 1000.0, &drag), 0.0);
        assert_eq!(grade_value(2000.0, 1000.0, &drag), 40.0);
    }
}
