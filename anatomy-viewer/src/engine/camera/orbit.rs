use bevy::input::mouse::MouseScrollUnit;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

use crate::engine::camera::flight::CameraFlight;
use constants::camera::{
    INITIAL_CAMERA_POSITION, ORBIT_DOLLY_LINE_STEP, ORBIT_DOLLY_PIXEL_STEP, ORBIT_MAX_RADIUS,
    ORBIT_MIN_RADIUS, ORBIT_PITCH_LIMIT, ORBIT_ROTATE_SENSITIVITY,
};

/// Manual orbit rig around the world origin. Rotation and dolly only; the
/// viewer deliberately has no pan input path.
#[derive(Resource, Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_position(INITIAL_CAMERA_POSITION)
    }
}

impl OrbitCamera {
    /// Derive orbit angles from a world position, used at startup and when a
    /// camera flight hands control back to the rig.
    pub fn from_position(position: Vec3) -> Self {
        let radius = position.length().clamp(ORBIT_MIN_RADIUS, ORBIT_MAX_RADIUS);
        let pitch = (position.y / radius)
            .clamp(-1.0, 1.0)
            .asin()
            .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
        Self {
            yaw: position.x.atan2(position.z),
            pitch,
            radius,
        }
    }

    pub fn sync_from(&mut self, position: Vec3) {
        *self = Self::from_position(position);
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        ) * self.radius
    }
}

/// Free-orbit camera control: left drag rotates, wheel dollies. Suspended
/// while a focus flight owns the camera.
pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    flight: Res<CameraFlight>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
) {
    if flight.is_active() {
        // Drain stale input so releasing the flight does not jump the rig.
        mouse_motion.clear();
        scroll_events.clear();
        return;
    }

    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        orbit.yaw -= mouse_delta.x * ORBIT_ROTATE_SENSITIVITY;
        orbit.pitch = (orbit.pitch + mouse_delta.y * ORBIT_ROTATE_SENSITIVITY)
            .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
    }

    let mut scroll_accum = 0.0;
    for event in scroll_events.read() {
        scroll_accum += match event.unit {
            MouseScrollUnit::Line => event.y * ORBIT_DOLLY_LINE_STEP,
            MouseScrollUnit::Pixel => event.y * ORBIT_DOLLY_PIXEL_STEP,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        orbit.radius = (orbit.radius - scroll_accum).clamp(ORBIT_MIN_RADIUS, ORBIT_MAX_RADIUS);
    }

    camera_transform.translation = orbit.position();
    camera_transform.look_at(Vec3::ZERO, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_angles_round_trip_the_start_position() {
        let orbit = OrbitCamera::from_position(INITIAL_CAMERA_POSITION);
        let restored = orbit.position();
        assert!(
            restored.distance(INITIAL_CAMERA_POSITION) < 1e-4,
            "expected {INITIAL_CAMERA_POSITION}, got {restored}"
        );
    }

    #[test]
    fn pitch_and_radius_stay_inside_their_limits() {
        // Directly overhead and far outside the dolly range.
        let orbit = OrbitCamera::from_position(Vec3::new(0.0, 500.0, 0.0));
        assert!(orbit.pitch <= ORBIT_PITCH_LIMIT);
        assert_eq!(orbit.radius, ORBIT_MAX_RADIUS);

        let close = OrbitCamera::from_position(Vec3::new(0.1, 0.0, 0.1));
        assert_eq!(close.radius, ORBIT_MIN_RADIUS);
    }
}
