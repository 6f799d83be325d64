pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
mod logic;

use crate::field::events::ParticleAwakened;
use crate::field::resources::CursorState;
use crate::field::systems::*;
use bevy::prelude::*;

pub struct FieldPlugin;

impl Plugin for FieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ParticleAwakened>()
            .init_resource::<CursorState>()
            .add_systems(Startup, spawn_field)
            .add_systems(
                Update,
                (
                    // picking must run before the update pass so a freshly
                    // hovered particle animates in the same frame
                    (track_cursor, awaken_hovered, animate_particles).chain(),
                    reload_field_config,
                ),
            );
    }
}
