use crate::field::events::ParticleAwakened;
use crate::field::resources::Field;
use crate::ui::components::{HoverStats, HudText};
use bevy::prelude::*;

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new(hud_label(0, 0, 0)),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

pub fn count_awakenings(
    mut awakened: MessageReader<ParticleAwakened>,
    mut stats: ResMut<HoverStats>,
) {
    for ev in awakened.read() {
        debug!("Particle {} ({:?}) awakened at {:.2}s", ev.index, ev.entity, ev.time);
        stats.awakenings += 1;
    }
}

pub fn update_hud(
    field: Res<Field>,
    stats: Res<HoverStats>,
    mut text_q: Query<&mut Text, With<HudText>>,
) {
    if !field.is_changed() && !stats.is_changed() {
        return;
    }
    let label = hud_label(field.active_count(), field.len(), stats.awakenings);
    for mut text in &mut text_q {
        if text.0 != label {
            text.0 = label.clone();
        }
    }
}

pub fn hud_label(active: usize, total: usize, awakenings: u64) -> String {
    format!("Awake: {active}/{total}\nHovers: {awakenings}\n[R] reload config")
}
