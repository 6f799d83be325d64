/// Linear interpolation between `a` and `b`. `t` outside 0..1 extrapolates.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
