use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::input::{keyboard::KeyCode, ButtonInput};
use bevy::prelude::*;

use crate::layout::LayoutKind;
use crate::setup::MainCamera;
use crate::tiles::ActiveLayout;

pub const PAN_SPEED: f32 = 1200.0;
pub const ROTATE_SPEED: f32 = 0.2;
pub const MIN_DISTANCE: f32 = 500.0;
pub const MAX_DISTANCE: f32 = 6000.0;
pub const MAX_CAMERA_DT: f32 = 0.05; // never use a dt larger than 50ms

#[derive(Component)]
pub struct CameraOrbit {
    pub focus: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

/// Pan keys held this frame.
#[derive(Resource, Default, Clone, Copy)]
pub struct PanInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl PanInput {
    /// Combined pan direction for the given camera ground-plane axes.
    /// Opposing keys cancel; the result is unnormalized.
    pub fn direction(self, forward: Vec2, right: Vec2) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.forward { dir += forward; }
        if self.backward { dir -= forward; }
        if self.left { dir -= right; }
        if self.right { dir += right; }
        dir
    }
}

pub fn pan_input_system(keys: Res<ButtonInput<KeyCode>>, mut pan: ResMut<PanInput>) {
    pan.forward = keys.pressed(KeyCode::KeyW);
    pan.backward = keys.pressed(KeyCode::KeyS);
    pan.left = keys.pressed(KeyCode::KeyA);
    pan.right = keys.pressed(KeyCode::KeyD);
}

/// Number keys pick the layout the tiles fly toward.
pub fn layout_hotkeys_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut active: ResMut<ActiveLayout>,
) {
    let picked = if keys.just_pressed(KeyCode::Digit1) {
        Some(LayoutKind::Table)
    } else if keys.just_pressed(KeyCode::Digit2) {
        Some(LayoutKind::Sphere)
    } else if keys.just_pressed(KeyCode::Digit3) {
        Some(LayoutKind::Helix)
    } else if keys.just_pressed(KeyCode::Digit4) {
        Some(LayoutKind::Grid)
    } else if keys.just_pressed(KeyCode::Digit5) {
        Some(LayoutKind::Pyramid)
    } else {
        None
    };

    if let Some(kind) = picked {
        if active.0 != kind {
            active.0 = kind;
        }
    }
}

pub fn camera_controller(
    time: Res<Time>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut motion_evr: EventReader<MouseMotion>,
    mut scroll_evr: EventReader<MouseWheel>,
    pan: Res<PanInput>,
    mut query: Query<(&mut Transform, &mut CameraOrbit), With<MainCamera>>,
) {
    // 0) Clamp delta
    let mut dt = time.delta_secs();
    if dt > MAX_CAMERA_DT {
        dt = MAX_CAMERA_DT;
    }

    let Ok((mut tf, mut orbit)) = query.single_mut() else { return; };

    // 1) Camera-relative panning in the XZ plane
    let forward = Vec2::new(-orbit.yaw.cos(), -orbit.yaw.sin());
    let right = Vec2::new(-forward.y, forward.x);

    let dir = pan.direction(forward, right);
    if dir != Vec2::ZERO {
        let delta = dir.normalize() * PAN_SPEED * dt;
        orbit.focus.x += delta.x;
        orbit.focus.z += delta.y;
    }

    // 2) Zoom
    for ev in scroll_evr.read() {
        let amount = match ev.unit {
            MouseScrollUnit::Line => ev.y * 150.0,
            MouseScrollUnit::Pixel => ev.y * 2.0,
        };
        orbit.radius = (orbit.radius - amount).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    // 3) Orbit
    if mouse_buttons.pressed(MouseButton::Middle) {
        for ev in motion_evr.read() {
            orbit.yaw += ev.delta.x * ROTATE_SPEED * dt;
            orbit.pitch += ev.delta.y * ROTATE_SPEED * dt;
        }
    }

    orbit.pitch = orbit.pitch.clamp(
        -std::f32::consts::FRAC_PI_2 + 0.01,
        std::f32::consts::FRAC_PI_2 - 0.01,
    );

    // 4) Position camera
    let xz_radius = orbit.radius * orbit.pitch.cos();
    let offset = Vec3::new(
        xz_radius * orbit.yaw.cos(),
        orbit.radius * orbit.pitch.sin(),
        xz_radius * orbit.yaw.sin(),
    );

    tf.translation = orbit.focus + offset;
    tf.look_at(orbit.focus, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_pan_keys_cancel() {
        let pan = PanInput { forward: true, backward: true, left: true, right: true };
        assert_eq!(pan.direction(Vec2::NEG_X, Vec2::Y), Vec2::ZERO);
    }

    #[test]
    fn single_key_follows_its_axis() {
        let forward = Vec2::new(-1.0, 0.0);
        let right = Vec2::new(0.0, -1.0);

        let pan = PanInput { forward: true, ..default() };
        assert_eq!(pan.direction(forward, right), forward);

        let pan = PanInput { right: true, ..default() };
        assert_eq!(pan.direction(forward, right), right);
    }

    #[test]
    fn diagonals_combine_axes() {
        let forward = Vec2::X;
        let right = Vec2::Y;
        let pan = PanInput { forward: true, left: true, ..default() };
        assert_eq!(pan.direction(forward, right), Vec2::new(1.0, -1.0));
    }
}
