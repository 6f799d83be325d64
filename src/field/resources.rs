use bevy::prelude::*;
use fieldgen::field::ParticleField;

/// Latest pointer position in normalized device coordinates, `None` until
/// the pointer first moves over the window.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct CursorState {
    pub ndc: Option<Vec2>,
}

#[derive(Resource, Deref, DerefMut)]
pub struct Field(pub ParticleField<Entity>);
