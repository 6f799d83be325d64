pub(crate) mod components;
pub(crate) mod logic;
pub(crate) mod resources;
mod systems;

use crate::core::camera::components::*;
use crate::core::camera::resources::ViewportSize;
use crate::core::camera::systems::*;
use bevy::prelude::*;

pub(crate) struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MainCamera>()
            .register_type::<OrbitCamera>()
            .init_resource::<ViewportSize>()
            .add_systems(Startup, (spawn_camera, init_viewport_size))
            .add_systems(PreUpdate, handle_window_resize)
            .add_systems(Update, camera_control);
    }
}
