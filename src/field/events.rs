use bevy::prelude::*;

/// A dormant particle started its hover animation.
#[derive(Message, Debug, Clone, Copy)]
pub struct ParticleAwakened {
    pub entity: Entity,
    pub index: usize,
    pub time: f64,
}
