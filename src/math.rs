use std::f32::consts::TAU;

/// Scale `v` to unit length. A zero-length vector comes back unchanged
/// instead of dividing by zero.
#[inline]
pub fn normalize(v: [f32; 2]) -> [f32; 2] {
    let len = (v[0] * v[0] + v[1] * v[1]).sqrt();
    if len == 0.0 {
        return v;
    }
    [v[0] / len, v[1] / len]
}

#[inline]
pub fn distance(a: [f32; 2], b: [f32; 2]) -> f32 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    (dx * dx + dy * dy).sqrt()
}

/// Map an angle into [0, 2π) with a single correction step. Callers feed
/// angles at most one turn outside the range (per-frame turn rates are
/// small), so one add or subtract is enough; this is not a general modulo.
#[inline]
pub fn wrap_angle(a: f32) -> f32 {
    if a < 0.0 {
        a + TAU
    } else if a >= TAU {
        a - TAU
    } else {
        a
    }
}
