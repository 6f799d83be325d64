use bevy::prelude::*;

/// Logical size of the primary window's drawable area.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Deref)]
pub struct ViewportSize(pub Vec2);

impl Default for ViewportSize {
    fn default() -> Self {
        Self(Vec2::new(1280.0, 800.0))
    }
}
