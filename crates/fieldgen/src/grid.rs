use crate::config::GridConfig;
use glam::Vec2;

/// Axis coordinates from `min`, stepping by `step` while `value <= max`.
///
/// Values are produced by repeated addition rather than `min + i * step`, so
/// the last coordinate carries the same float drift as an accumulating loop.
pub fn grid_axis(min: f64, max: f64, step: f64) -> Vec<f64> {
    let mut values = Vec::new();
    if step <= 0.0 {
        return values;
    }

    let mut value = min;
    while value <= max {
        values.push(value);
        value += step;
    }
    values
}

/// Every (x, y) cell of the square grid, x-major.
pub fn grid_points(config: &GridConfig) -> Vec<Vec2> {
    let axis = grid_axis(config.min, config.max, config.step);
    axis.iter()
        .flat_map(|&x| axis.iter().map(move |&y| Vec2::new(x as f32, y as f32)))
        .collect()
}
