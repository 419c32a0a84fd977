use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::input::CameraOrbit;

#[derive(Component)]
pub struct MainCamera;

/// Starting distance from the tile cloud; the layouts span roughly
/// a 2800-unit table and a 1800-unit sphere.
pub const CAMERA_START_DISTANCE: f32 = 3000.0;

pub fn setup(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 40.0_f32.to_radians(),
            near: 1.0,
            far: 10_000.0,
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, CAMERA_START_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
        CameraOrbit {
            focus: Vec3::ZERO,
            radius: CAMERA_START_DISTANCE,
            // yaw = PI/2 puts the camera on +Z, matching the transform above
            yaw: FRAC_PI_2,
            pitch: 0.0,
        },
    ));
}
