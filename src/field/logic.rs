use bevy::color::Color;
use bevy::math::{Quat, Vec2};
use bevy::transform::components::Transform;
use fieldgen::animation::ParticleVisual;
use fieldgen::field::ParticleField;
use std::hash::Hash;

/// Maps a pointer position in window pixels to normalized device coordinates,
/// x to the right and y up, both in [-1, 1].
/// Returns `None` for a degenerate (minimized) viewport.
pub fn normalize_pointer(raw: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (raw.x / viewport.x) * 2.0 - 1.0,
        -(raw.y / viewport.y) * 2.0 + 1.0,
    ))
}

/// Inverse of [`normalize_pointer`].
pub fn ndc_to_viewport(ndc: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.x,
        (1.0 - ndc.y) * 0.5 * viewport.y,
    )
}

/// Hue and saturation share one value; hue is stored as a 0..1 fraction of
/// the color wheel.
pub fn particle_color(visual: &ParticleVisual) -> Color {
    Color::hsl(
        visual.hue_saturation * 360.0,
        visual.hue_saturation,
        visual.lightness,
    )
}

/// The grid lies in the XY plane; particles pop out along +Z and spin about X.
pub fn particle_transform(position: Vec2, visual: &ParticleVisual) -> Transform {
    Transform::from_xyz(position.x, position.y, visual.offset)
        .with_rotation(Quat::from_rotation_x(visual.rotation))
}

/// Wakes the particle under the cursor. Nothing is cast while the cursor is
/// unset. `cast` returns hits nearest first; hits rejected by `is_particle`
/// are skipped.
pub fn pick_hovered<K: Copy + Eq + Hash>(
    field: &mut ParticleField<K>,
    cursor: Option<Vec2>,
    cast: impl FnOnce(Vec2) -> Vec<K>,
    is_particle: impl Fn(&K) -> bool,
    time: f64,
) -> Option<usize> {
    let ndc = cursor?;
    let hits = cast(ndc);
    field.awake_first_hit(hits.into_iter().filter(|hit| is_particle(hit)), time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::color::Hsla;
    use bevy::math::Vec3;
    use fieldgen::animation::visual_at;
    use fieldgen::config::AnimationConfig;
    use rstest::rstest;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    #[rstest]
    #[case(Vec2::new(0.0, 0.0), Vec2::new(-1.0, 1.0))]       // top left
    #[case(Vec2::new(800.0, 600.0), Vec2::new(1.0, -1.0))]   // bottom right
    #[case(Vec2::new(400.0, 300.0), Vec2::new(0.0, 0.0))]    // center
    #[case(Vec2::new(200.0, 450.0), Vec2::new(-0.5, -0.5))]
    fn test_normalize_pointer(#[case] raw: Vec2, #[case] expected: Vec2) {
        let ndc = normalize_pointer(raw, VIEWPORT).unwrap();
        assert!((ndc - expected).length() < 1e-6, "ndc was {:?}", ndc);
    }

    #[rstest]
    #[case(Vec2::new(0.0, 600.0))]
    #[case(Vec2::new(800.0, 0.0))]
    fn test_empty_viewport_has_no_cursor(#[case] viewport: Vec2) {
        assert_eq!(normalize_pointer(Vec2::new(10.0, 10.0), viewport), None);
    }

    #[test]
    fn test_ndc_round_trips_to_pixels() {
        let raw = Vec2::new(123.0, 456.0);
        let ndc = normalize_pointer(raw, VIEWPORT).unwrap();

        assert!((ndc_to_viewport(ndc, VIEWPORT) - raw).length() < 1e-3);
    }

    #[test]
    fn test_resting_color_is_dark_gray() {
        let visual = visual_at(0.0, &AnimationConfig::default());
        let hsla = Hsla::from(particle_color(&visual));

        assert_eq!(hsla.saturation, 0.0);
        assert!((hsla.lightness - 0.1).abs() < 1e-4);
    }

    #[test]
    fn test_peak_color_is_fully_saturated() {
        let visual = visual_at(6.0, &AnimationConfig::default());
        let hsla = Hsla::from(particle_color(&visual));

        assert!((hsla.saturation - 1.0).abs() < 1e-4);
        assert!((hsla.lightness - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_transform_keeps_grid_position() {
        let visual = visual_at(3.0, &AnimationConfig::default());

        let transform = particle_transform(Vec2::new(-4.4, 2.2), &visual);

        assert_eq!(transform.translation.x, -4.4);
        assert_eq!(transform.translation.y, 2.2);
        assert!((transform.translation.z - 7.5).abs() < 1e-4);
    }

    #[test]
    fn test_spin_is_about_x() {
        let visual = visual_at(0.25, &AnimationConfig::default());

        let transform = particle_transform(Vec2::ZERO, &visual);

        assert!((transform.rotation * Vec3::X - Vec3::X).length() < 1e-5);
        assert!((transform.rotation * Vec3::Y - Vec3::Z).length() < 1e-4);
    }

    fn two_particle_field() -> ParticleField<u32> {
        let mut field = ParticleField::new(
            [Vec2::new(0.0, 0.0), Vec2::new(1.1, 0.0)],
            AnimationConfig::default(),
        );
        field.bind(10, 0);
        field.bind(11, 1);
        field
    }

    #[test]
    fn test_unset_cursor_casts_nothing() {
        let mut field = two_particle_field();
        let mut cast_called = false;

        let woken = pick_hovered(
            &mut field,
            None,
            |_| {
                cast_called = true;
                vec![10]
            },
            |_| true,
            1.0,
        );

        assert_eq!(woken, None);
        assert!(!cast_called);
        assert_eq!(field.active_count(), 0);
    }

    #[test]
    fn test_cast_receives_cursor() {
        let mut field = two_particle_field();
        let cursor = Vec2::new(0.25, -0.5);

        let woken = pick_hovered(
            &mut field,
            Some(cursor),
            |ndc| {
                assert_eq!(ndc, cursor);
                vec![11]
            },
            |_| true,
            1.0,
        );

        assert_eq!(woken, Some(1));
    }

    #[test]
    fn test_non_particle_hit_in_front_is_skipped() {
        let mut field = two_particle_field();
        // 7 is a bound handle that is no longer a particle, 99 is unknown
        field.bind(7, 0);

        let woken = pick_hovered(
            &mut field,
            Some(Vec2::ZERO),
            |_| vec![99, 7, 11, 10],
            |hit| *hit != 7,
            2.0,
        );

        assert_eq!(woken, Some(1));
        assert!(field.get(1).unwrap().is_active());
        assert!(!field.get(0).unwrap().is_active());
    }

    #[test]
    fn test_empty_cast_wakes_nothing() {
        let mut field = two_particle_field();

        let woken = pick_hovered(&mut field, Some(Vec2::ZERO), |_| Vec::new(), |_| true, 1.0);

        assert_eq!(woken, None);
        assert_eq!(field.active_count(), 0);
    }
}
