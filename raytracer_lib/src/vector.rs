//! Four component vector and the operations the tracer builds on.
//!
//! One type serves both as a spatial vector (`x, y, z`, with `w` ignored)
//! and as a color (`r, g, b, a`). Functions with a `3` suffix only touch the
//! spatial part, the `w` component of the left operand is carried over.

use nalgebra::{vector, Vector4};

pub type Vec4 = Vector4<f32>;

pub fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
    vector![x, y, z, w]
}

/// Spatial point or direction, `w` is zero
pub fn point(x: f32, y: f32, z: f32) -> Vec4 {
    vector![x, y, z, 0.0]
}

pub fn zero() -> Vec4 {
    vector![0.0, 0.0, 0.0, 0.0]
}

pub fn add(lhs: &Vec4, rhs: &Vec4) -> Vec4 {
    lhs + rhs
}

pub fn add3(lhs: &Vec4, rhs: &Vec4) -> Vec4 {
    vector![lhs.x + rhs.x, lhs.y + rhs.y, lhs.z + rhs.z, lhs.w]
}

pub fn subtract(lhs: &Vec4, rhs: &Vec4) -> Vec4 {
    lhs - rhs
}

pub fn subtract3(lhs: &Vec4, rhs: &Vec4) -> Vec4 {
    vector![lhs.x - rhs.x, lhs.y - rhs.y, lhs.z - rhs.z, lhs.w]
}

pub fn scale(v: &Vec4, scalar: f32) -> Vec4 {
    v * scalar
}

pub fn scale3(v: &Vec4, scalar: f32) -> Vec4 {
    vector![v.x * scalar, v.y * scalar, v.z * scalar, v.w]
}

/// Divide spatial part by its magnitude.
///
/// Returns `None` if magnitude is zero (or not finite), caller decides what
/// a degenerate vector means.
pub fn normalize(v: &Vec4) -> Option<Vec4> {
    let mag = magnitude3(v);
    if mag == 0.0 || !mag.is_finite() {
        return None;
    }
    Some(vector![v.x / mag, v.y / mag, v.z / mag, v.w])
}

/// Unit vector pointing from `from` to `to`
pub fn direction(from: &Vec4, to: &Vec4) -> Option<Vec4> {
    let mut dir = subtract3(to, from);
    dir.w = 0.0;
    normalize(&dir)
}

pub fn magnitude(v: &Vec4) -> f32 {
    magnitude_squared(v).sqrt()
}

pub fn magnitude3(v: &Vec4) -> f32 {
    magnitude3_squared(v).sqrt()
}

pub fn magnitude_squared(v: &Vec4) -> f32 {
    v.dot(v)
}

pub fn magnitude3_squared(v: &Vec4) -> f32 {
    dot3(v, v)
}

pub fn dot(lhs: &Vec4, rhs: &Vec4) -> f32 {
    lhs.dot(rhs)
}

pub fn dot3(lhs: &Vec4, rhs: &Vec4) -> f32 {
    lhs.x * rhs.x + lhs.y * rhs.y + lhs.z * rhs.z
}

pub fn cross3(lhs: &Vec4, rhs: &Vec4) -> Vec4 {
    let cross = lhs.xyz().cross(&rhs.xyz());
    vector![cross.x, cross.y, cross.z, 0.0]
}

pub fn distance3(lhs: &Vec4, rhs: &Vec4) -> f32 {
    magnitude3(&subtract3(rhs, lhs))
}

/// Reflect `v` about the plane with normal `n` (`n` must be unit length)
pub fn reflect3(v: &Vec4, n: &Vec4) -> Vec4 {
    subtract3(v, &scale3(n, 2.0 * dot3(n, v)))
}
