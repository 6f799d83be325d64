use bevy::prelude::*;

#[derive(Component)]
pub struct HudText;

/// Running totals shown in the corner overlay.
#[derive(Resource, Debug, Default)]
pub struct HoverStats {
    pub awakenings: u64,
}
