use bevy::prelude::*;
use fieldgen::config::FieldConfig;

/// Active field configuration, shared by the camera and the particle systems.
#[derive(Resource, Clone, Debug, Deref, DerefMut)]
pub struct FieldSettings(pub FieldConfig);

impl Default for FieldSettings {
    fn default() -> Self {
        Self(fieldgen::get_config())
    }
}
