//! Single-precision 2D vector helpers.
//!
//! `Vec2` is a plain nalgebra vector, so add/sub/scale come from the operator
//! impls. The helpers here pin down the degenerate-case policy the rest of the
//! engine relies on.

use nalgebra::Vector2;

pub type Vec2 = Vector2<f32>;

#[inline]
pub fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

#[inline]
pub fn length(v: Vec2) -> f32 {
    v.norm()
}

/// Unit vector along `v`, or the zero vector when `v` has zero length
/// (nalgebra's `normalize` would produce NaN here).
#[inline]
pub fn normalize_or_zero(v: Vec2) -> Vec2 {
    let len = length(v);
    if len == 0.0 {
        return Vec2::zeros();
    }
    v * (1.0 / len)
}
