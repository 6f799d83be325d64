use bevy::prelude::*;

/// Marks the box renderable of a grid particle, the only pick targets.
#[derive(Component)]
pub struct FieldParticle;
