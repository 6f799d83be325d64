use crate::core::camera::components::MainCamera;
use crate::core::camera::resources::ViewportSize;
use crate::core::settings::FieldSettings;
use crate::field::components::FieldParticle;
use crate::field::events::ParticleAwakened;
use crate::field::logic::{
    ndc_to_viewport, normalize_pointer, particle_color, particle_transform, pick_hovered,
};
use crate::field::resources::{CursorState, Field};
use bevy::input::ButtonInput;
use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;
use fieldgen::animation::ParticleVisual;
use fieldgen::field::ParticleField;

pub fn spawn_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<FieldSettings>,
) {
    let mut field: ParticleField<Entity> = ParticleField::from_config(&settings);
    let size = settings.grid.box_size;
    let mesh = meshes.add(Cuboid::new(size, size, size));
    let resting = ParticleVisual::resting(&settings.animation);

    let spawned: Vec<(Entity, usize)> = field
        .particles()
        .iter()
        .enumerate()
        .map(|(index, particle)| {
            // every particle gets its own material so colors animate independently
            let material = materials.add(StandardMaterial {
                base_color: particle_color(&resting),
                ..default()
            });
            let entity = commands
                .spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material),
                    particle_transform(particle.position(), &resting),
                    FieldParticle,
                ))
                .id();
            (entity, index)
        })
        .collect();

    for (entity, index) in spawned {
        field.bind(entity, index);
    }

    info!("Spawned particle field with {} particles", field.len());
    commands.insert_resource(Field(field));
}

/// Stores the latest pointer position; only the last move of a frame matters.
pub fn track_cursor(
    mut moved: MessageReader<CursorMoved>,
    viewport: Res<ViewportSize>,
    mut cursor: ResMut<CursorState>,
) {
    for ev in moved.read() {
        if let Some(ndc) = normalize_pointer(ev.position, viewport.0) {
            cursor.ndc = Some(ndc);
        }
    }
}

/// Casts a ray through the cursor and wakes the nearest particle it hits.
pub fn awaken_hovered(
    time: Res<Time>,
    cursor: Res<CursorState>,
    viewport: Res<ViewportSize>,
    camera_q: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    particle_q: Query<(), With<FieldParticle>>,
    mut ray_cast: MeshRayCast,
    mut field: ResMut<Field>,
    mut awakened: MessageWriter<ParticleAwakened>,
) {
    let now = time.elapsed_secs_f64();
    let cast = |ndc: Vec2| -> Vec<Entity> {
        let Ok((camera, camera_transform)) = camera_q.single() else {
            return Vec::new();
        };
        let Ok(ray) = camera.viewport_to_world(camera_transform, ndc_to_viewport(ndc, viewport.0)) else {
            return Vec::new();
        };
        let filter = |entity: Entity| particle_q.contains(entity);
        let settings = MeshRayCastSettings::default().with_filter(&filter);
        ray_cast.cast_ray(ray, &settings).iter().map(|(entity, _)| *entity).collect()
    };

    let Some(index) = pick_hovered(
        &mut field.bypass_change_detection().0,
        cursor.ndc,
        cast,
        |entity| particle_q.contains(*entity),
        now,
    ) else {
        return;
    };

    field.set_changed();
    if let Some(entity) = field.handle_of(index) {
        awakened.write(ParticleAwakened {
            entity,
            index,
            time: now,
        });
    }
}

/// Advances every particle and pushes changed visuals to their renderables.
/// `Field` is only flagged as changed on frames where some particle moved.
pub fn animate_particles(
    time: Res<Time>,
    mut field: ResMut<Field>,
    mut particle_q: Query<(&mut Transform, &MeshMaterial3d<StandardMaterial>), With<FieldParticle>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let now = time.elapsed_secs_f64();
    let mut touched = false;
    field.bypass_change_detection().update_all(now, |update| {
        touched = true;
        let Some(entity) = update.handle else {
            return;
        };
        let Ok((mut transform, material)) = particle_q.get_mut(entity) else {
            return;
        };
        *transform = particle_transform(update.position, &update.visual);
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color = particle_color(&update.visual);
        }
    });
    if touched {
        field.set_changed();
    }
}

/// `R` re-reads the config file. Animation and camera values apply at once,
/// grid changes need a restart.
pub fn reload_field_config(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<FieldSettings>,
    mut field: ResMut<Field>,
) {
    if !keyboard_input.just_pressed(KeyCode::KeyR) {
        return;
    }

    match fieldgen::reload_config() {
        Ok(config) => {
            if config.grid != settings.grid {
                warn!("Grid settings changed, restart to rebuild the field");
            }
            field.set_animation_config(config.animation);
            settings.0 = config;
            info!("Reloaded field config");
        }
        Err(err) => warn!("Keeping current field config: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::color::Hsla;
    use fieldgen::config::AnimationConfig;
    use std::time::Duration;

    #[test]
    fn test_cursor_keeps_last_move() {
        let mut app = App::new();
        app.add_message::<CursorMoved>()
            .insert_resource(ViewportSize(Vec2::new(800.0, 600.0)))
            .init_resource::<CursorState>()
            .add_systems(Update, track_cursor);

        assert_eq!(app.world().resource::<CursorState>().ndc, None);

        for position in [Vec2::new(0.0, 0.0), Vec2::new(400.0, 300.0)] {
            app.world_mut().write_message(CursorMoved {
                window: Entity::PLACEHOLDER,
                position,
                delta: None,
            });
        }
        app.update();

        let ndc = app.world().resource::<CursorState>().ndc.unwrap();
        assert!(ndc.length() < 1e-6);
    }

    #[test]
    fn test_animation_reaches_renderable() {
        let mut app = App::new();
        app.insert_resource(Time::<()>::default())
            .init_resource::<Assets<StandardMaterial>>()
            .add_systems(Update, animate_particles);

        let config = AnimationConfig::default();
        let resting = ParticleVisual::resting(&config);
        let positions = [Vec2::new(1.1, 2.2), Vec2::new(3.3, 4.4)];
        let mut field: ParticleField<Entity> = ParticleField::new(positions, config);

        let mut entities = Vec::new();
        for (index, position) in positions.into_iter().enumerate() {
            let material = app
                .world_mut()
                .resource_mut::<Assets<StandardMaterial>>()
                .add(StandardMaterial::default());
            let entity = app
                .world_mut()
                .spawn((
                    particle_transform(position, &resting),
                    MeshMaterial3d(material),
                    FieldParticle,
                ))
                .id();
            field.bind(entity, index);
            entities.push(entity);
        }
        field.awake_first_hit([entities[0]], 0.0);
        app.insert_resource(Field(field));

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(6));
        app.update();

        let hovered = app.world().get::<Transform>(entities[0]).unwrap();
        assert!((hovered.translation.z - 15.0).abs() < 1e-3);
        assert_eq!(hovered.translation.x, 1.1);

        let idle = app.world().get::<Transform>(entities[1]).unwrap();
        assert_eq!(idle.translation.z, 0.0);

        let handle = app
            .world()
            .get::<MeshMaterial3d<StandardMaterial>>(entities[0])
            .unwrap()
            .0
            .clone();
        let materials = app.world().resource::<Assets<StandardMaterial>>();
        let color = Hsla::from(materials.get(&handle).unwrap().base_color);
        assert!((color.lightness - 1.0).abs() < 1e-3);
    }
}
