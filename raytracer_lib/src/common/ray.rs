use crate::vector::{self, Vec4};

/// Ray cast from the camera eye, or from a surface point towards a light.
///
/// Rays are built per pixel and thrown away, nothing keeps them around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec4,
    pub direction: Vec4, // unit length
}

impl Ray {
    /// Construct new ray using `origin` and `direction`.
    /// `direction` must be unit vector.
    pub fn new(origin: Vec4, direction: Vec4) -> Ray {
        Ray { origin, direction }
    }

    /// Ray starting at `origin`, passing through `target`.
    ///
    /// Returns `None` when both points coincide.
    pub fn through(origin: Vec4, target: Vec4) -> Option<Ray> {
        let direction = vector::direction(&origin, &target)?;
        Some(Ray { origin, direction })
    }

    /// Returns point `t` units far from ray origin in ray direction
    pub fn point_from_t(&self, t: f32) -> Vec4 {
        vector::add3(&self.origin, &vector::scale3(&self.direction, t))
    }
}
