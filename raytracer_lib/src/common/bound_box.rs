use crate::vector::{self, point, Vec4};

use super::Ray;

/// Axis aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundBox {
    pub lower: Vec4,
    pub upper: Vec4,
}

/// Result of ray-box intersection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxHit {
    /// Distance along the ray
    pub t: f32,
    /// Outward facing, axis aligned unit normal
    pub normal: Vec4,
}

impl BoundBox {
    pub fn new(lower: Vec4, upper: Vec4) -> BoundBox {
        BoundBox { lower, upper }
    }

    /// Box centered at `center` with full extents `dims`
    pub fn from_center_dims(center: Vec4, dims: Vec4) -> BoundBox {
        let half = vector::scale3(&dims, 0.5);
        BoundBox {
            lower: vector::subtract3(&center, &half),
            upper: vector::add3(&center, &half),
        }
    }

    pub fn center(&self) -> Vec4 {
        vector::scale3(&vector::add3(&self.lower, &self.upper), 0.5)
    }

    pub fn dims(&self) -> Vec4 {
        vector::subtract3(&self.upper, &self.lower)
    }

    pub fn is_in(&self, pos: &Vec4) -> bool {
        (0..3).all(|axis| self.lower[axis] <= pos[axis] && pos[axis] <= self.upper[axis])
    }

    /// Slab method.
    ///
    /// Keeps interval `[t0, t1]` of the ray inside all slabs seen so far and
    /// rejects as soon as it becomes empty. Returns the entry distance, or the
    /// exit distance if the ray starts inside the box. Hits behind the origin
    /// are misses.
    pub fn intersect(&self, ray: &Ray) -> Option<BoxHit> {
        let mut t0 = f32::NEG_INFINITY;
        let mut t1 = f32::INFINITY;
        // axis that last tightened t0 / t1
        let mut axis0 = None;
        let mut axis1 = None;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let dir = ray.direction[axis];
            let (low, high) = (self.lower[axis], self.upper[axis]);

            if dir == 0.0 {
                // parallel to slab, either always inside or never
                if origin < low || origin > high {
                    return None;
                }
                continue;
            }

            let near = (low - origin) / dir;
            let far = (high - origin) / dir;
            let (near, far) = if near < far { (near, far) } else { (far, near) };

            if t0 > far || near > t1 {
                return None;
            }

            if near > t0 {
                t0 = near;
                axis0 = Some(axis);
            }
            if far < t1 {
                t1 = far;
                axis1 = Some(axis);
            }
        }

        let (t, axis) = if t0 >= 0.0 {
            (t0, axis0)
        } else if t1 >= 0.0 {
            (t1, axis1)
        } else {
            return None;
        };

        // ray with all components zero never gets here with a finite t
        let axis = axis?;
        if !t.is_finite() {
            return None;
        }

        let hit_point = ray.point_from_t(t);
        let center = self.center();
        let sign = if hit_point[axis] < center[axis] {
            -1.0
        } else {
            1.0
        };

        let mut normal = point(0.0, 0.0, 0.0);
        normal[axis] = sign;

        Some(BoxHit { t, normal })
    }
}
