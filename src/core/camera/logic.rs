use bevy::math::{Quat, Vec2, Vec3};
use fieldgen::config::CameraConfig;

pub struct CameraInput {
    pub mouse_left_pressed: bool,
    pub mouse_delta: Vec2,
    pub mouse_wheel_delta: f32,
}

pub struct OrbitUpdate {
    pub rotation: Quat,
    pub distance: f32,
}

/// Calculate the new orbit around the target based on input.
/// Dragging turns the camera around its local axes, the wheel zooms in and out.
pub fn calculate_orbit(
    current_rotation: Quat,
    current_distance: f32,
    input: &CameraInput,
    config: &CameraConfig,
) -> OrbitUpdate {
    let mut rotation = current_rotation;
    let mut distance = current_distance;

    if input.mouse_left_pressed && input.mouse_delta.length_squared() > 0.0 {
        let up = rotation * Vec3::Y;
        let right = rotation * Vec3::X;
        let yaw = Quat::from_axis_angle(up, -input.mouse_delta.x * config.rotation_speed);
        let pitch = Quat::from_axis_angle(right, -input.mouse_delta.y * config.rotation_speed);
        rotation = (yaw * pitch * rotation).normalize();
    }

    if input.mouse_wheel_delta.abs() > 0.0 {
        distance -= input.mouse_wheel_delta * config.zoom_speed;
    }
    distance = distance.max(config.min_distance).min(config.max_distance);

    OrbitUpdate { rotation, distance }
}

/// Camera position for an orbit; the camera's -Z axis points at `target`.
pub fn orbit_translation(target: Vec3, rotation: Quat, distance: f32) -> Vec3 {
    target + rotation * Vec3::new(0.0, 0.0, distance)
}

pub fn aspect_ratio(width: f32, height: f32) -> f32 {
    if height <= 0.0 {
        return 1.0;
    }
    width / height
}
