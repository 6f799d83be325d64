pub mod components;
mod systems;

use crate::ui::components::HoverStats;
use crate::ui::systems::*;
use bevy::prelude::*;

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoverStats>()
            .add_systems(Startup, spawn_hud)
            .add_systems(Update, (count_awakenings, update_hud).chain());
    }
}
