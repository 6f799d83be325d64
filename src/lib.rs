mod core;
mod field;
mod ui;

use crate::core::camera::CameraPlugin;
use crate::core::settings::FieldSettings;
use crate::field::FieldPlugin;
use crate::ui::UIPlugin;
use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;

pub struct HoverFieldPlugin;

impl Plugin for HoverFieldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FieldSettings>()
            .add_plugins((CameraPlugin, FieldPlugin, UIPlugin));

        #[cfg(debug_assertions)]
        {
            app.add_plugins((FrameTimeDiagnosticsPlugin::default(), LogDiagnosticsPlugin::default()));
        }
    }
}
