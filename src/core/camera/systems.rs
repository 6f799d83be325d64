use crate::core::camera::components::{MainCamera, OrbitCamera};
use crate::core::camera::logic::{CameraInput, aspect_ratio, calculate_orbit, orbit_translation};
use crate::core::camera::resources::ViewportSize;
use crate::core::settings::FieldSettings;
use bevy::input::ButtonInput;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::light::{AmbientLight, DirectionalLight};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

// Scroll events in pixels are roughly this many times larger than line events
const PIXELS_PER_SCROLL_LINE: f32 = 100.0;

pub fn spawn_camera(mut commands: Commands, settings: Res<FieldSettings>) {
    let camera = &settings.camera;
    let orbit = OrbitCamera {
        target: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        distance: camera.distance,
    };

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: camera.fov_degrees.to_radians(),
            near: camera.near,
            far: camera.far,
            ..default()
        }),
        Transform::from_translation(orbit_translation(orbit.target, orbit.rotation, orbit.distance))
            .looking_at(orbit.target, Vec3::Y),
        AmbientLight {
            color: Color::WHITE,
            brightness: 400.0,
            ..default()
        },
        MainCamera,
        orbit,
    ));

    commands.spawn((
        Transform::from_xyz(-1.0, 2.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
        DirectionalLight {
            color: Color::WHITE,
            ..default()
        },
    ));

    info!("Camera spawned");
}

pub fn init_viewport_size(
    window_q: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportSize>,
) {
    let Ok(window) = window_q.single() else {
        warn!("No primary window, keeping default viewport size");
        return;
    };
    viewport.0 = Vec2::new(window.width(), window.height());
}

/// Keeps the projection's aspect ratio and the cached viewport size in sync
/// with the window. Bevy resizes the render surface itself.
pub fn handle_window_resize(
    mut resized: MessageReader<WindowResized>,
    mut viewport: ResMut<ViewportSize>,
    mut camera_q: Query<&mut Projection, With<MainCamera>>,
) {
    let Some(last) = resized.read().last() else {
        return;
    };

    viewport.0 = Vec2::new(last.width, last.height);
    let aspect = aspect_ratio(last.width, last.height);
    for mut projection in &mut camera_q {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = aspect;
        }
    }

    debug!("Viewport resized to {}x{}", last.width, last.height);
}

pub fn camera_control(
    mouse_input: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    settings: Res<FieldSettings>,
    mut camera_q: Query<(&mut Transform, &mut OrbitCamera), With<MainCamera>>,
) {
    let Ok((mut transform, mut orbit)) = camera_q.single_mut() else {
        return;
    };

    let mut total_mouse_delta = Vec2::ZERO;
    for ev in mouse_motion.read() {
        total_mouse_delta += ev.delta;
    }

    let mut total_wheel_delta = 0.0;
    for ev in mouse_wheel.read() {
        total_wheel_delta += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / PIXELS_PER_SCROLL_LINE,
        };
    }

    let input = CameraInput {
        mouse_left_pressed: mouse_input.pressed(MouseButton::Left),
        mouse_delta: total_mouse_delta,
        mouse_wheel_delta: total_wheel_delta,
    };

    let update = calculate_orbit(orbit.rotation, orbit.distance, &input, &settings.camera);
    if update.rotation == orbit.rotation && update.distance == orbit.distance {
        return;
    }

    orbit.rotation = update.rotation;
    orbit.distance = update.distance;
    transform.translation = orbit_translation(orbit.target, orbit.rotation, orbit.distance);
    transform.rotation = orbit.rotation;
}
