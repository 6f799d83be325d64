use bevy::prelude::*;

#[derive(Component, Reflect)]
pub struct MainCamera;

/// Orbit around a fixed point; the camera transform is derived from it.
#[derive(Component, Reflect)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub rotation: Quat,
    pub distance: f32,
}
