//! Ray-object intersection
//!
//! Brute force, every ray is tested against every object.

use crate::{
    common::{BoundBox, BoxHit, Ray},
    scene::{SceneObject, Shape},
    vector::{self, Vec4},
};

/// Ray-sphere roots
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SphereHits {
    Miss,
    /// Both roots of the quadratic, `t0 >= t1`
    Roots(f32, f32),
}

/// Nearest visible surface along a ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of object in the scene
    pub object: usize,
    pub t: f32,
    pub point: Vec4,
    pub normal: Vec4,
}

/// Classic quadratic.
///
/// A direction of zero length gives `Miss` rather than dividing by zero.
pub fn sphere(ray: &Ray, center: &Vec4, radius: f32) -> SphereHits {
    let co = vector::subtract3(&ray.origin, center);
    let d = &ray.direction;

    let a = vector::dot3(d, d);
    if a == 0.0 || !a.is_finite() {
        return SphereHits::Miss;
    }
    let b = 2.0 * vector::dot3(&co, d);
    let c = vector::dot3(&co, &co) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 || discriminant.is_nan() {
        return SphereHits::Miss;
    }

    let sqrt_d = discriminant.sqrt();
    let t0 = (-b + sqrt_d) / (2.0 * a);
    let t1 = (-b - sqrt_d) / (2.0 * a);

    SphereHits::Roots(t0, t1)
}

/// Axis aligned box given by its center and full extents
pub fn aabb(ray: &Ray, center: &Vec4, extents: &Vec4) -> Option<BoxHit> {
    BoundBox::from_center_dims(*center, *extents).intersect(ray)
}

/// Smallest non-negative root, or `None`
fn nearest_root(hits: SphereHits) -> Option<f32> {
    match hits {
        SphereHits::Miss => None,
        SphereHits::Roots(t0, t1) => [t1, t0].into_iter().find(|t| *t >= 0.0),
    }
}

/// Distance and outward normal of the nearest non-negative hit with `obj`
pub fn object(ray: &Ray, obj: &SceneObject) -> Option<(f32, Vec4)> {
    match obj.shape {
        Shape::Sphere { radius } => {
            let t = nearest_root(sphere(ray, &obj.position, radius))?;
            let hit_point = ray.point_from_t(t);
            let normal = vector::direction(&obj.position, &hit_point)?;
            Some((t, normal))
        }
        Shape::Box {
            width,
            height,
            depth,
        } => {
            let hit = aabb(ray, &obj.position, &vector::point(width, height, depth))?;
            Some((hit.t, hit.normal))
        }
    }
}

/// Scan all objects, keep the closest hit.
///
/// Ties go to the object seen first. `skip` excludes one object (the one
/// being shaded when casting secondary rays).
pub fn closest_hit(objects: &[SceneObject], ray: &Ray, skip: Option<usize>) -> Option<Hit> {
    let mut closest: Option<(usize, f32, Vec4)> = None;

    for (id, obj) in objects.iter().enumerate() {
        if Some(id) == skip {
            continue;
        }
        let (t, normal) = match object(ray, obj) {
            Some(hit) => hit,
            None => continue,
        };
        match closest {
            Some((_, closest_t, _)) if t >= closest_t => (),
            _ => closest = Some((id, t, normal)),
        }
    }

    closest.map(|(object, t, normal)| Hit {
        object,
        t,
        point: ray.point_from_t(t),
        normal,
    })
}

/// Is there an object (other than `skip`) hit at distance in `(min_t, max_t)`
pub fn occluded(objects: &[SceneObject], ray: &Ray, skip: usize, min_t: f32, max_t: f32) -> bool {
    objects.iter().enumerate().any(|(id, obj)| {
        if id == skip {
            return false;
        }
        match object(ray, obj) {
            Some((t, _)) => t > min_t && t < max_t,
            None => false,
        }
    })
}

#[cfg(test)]
mod test {

    use crate::{
        scene::{ObjectKind, Scene},
        vector::point,
    };

    use super::*;

    fn forward_ray() -> Ray {
        Ray::new(point(0.0, 0.0, 0.0), point(0.0, 0.0, 1.0))
    }

    #[test]
    fn sphere_hit_near_root() {
        let ray = forward_ray();

        let hits = sphere(&ray, &point(0.0, 0.0, 5.0), 1.0);

        assert_eq!(hits, SphereHits::Roots(6.0, 4.0));
        assert_eq!(nearest_root(hits), Some(4.0));
    }

    #[test]
    fn sphere_tangent() {
        let ray = forward_ray();

        let hits = sphere(&ray, &point(1.0, 0.0, 5.0), 1.0);

        match hits {
            SphereHits::Roots(t0, t1) => {
                assert_eq!(t0, t1);
                assert_eq!(t0, 5.0);
            }
            SphereHits::Miss => panic!("tangent ray should touch sphere"),
        }
    }

    #[test]
    fn sphere_miss() {
        let ray = forward_ray();
        assert_eq!(sphere(&ray, &point(3.0, 0.0, 5.0), 1.0), SphereHits::Miss);
    }

    #[test]
    fn degenerate_direction_misses() {
        let ray = Ray::new(point(0.0, 0.0, 0.0), point(0.0, 0.0, 0.0));
        assert_eq!(sphere(&ray, &point(0.0, 0.0, 0.0), 1.0), SphereHits::Miss);
    }

    #[test]
    fn aabb_from_extents() {
        let hit = aabb(&forward_ray(), &point(0.0, 0.0, 5.0), &point(2.0, 4.0, 2.0)).unwrap();
        assert_eq!(hit.t, 4.0);
        assert_eq!(hit.normal, point(0.0, 0.0, -1.0));

        assert!(aabb(&forward_ray(), &point(3.0, 0.0, 5.0), &point(2.0, 2.0, 2.0)).is_none());
    }

    #[test]
    fn sphere_behind_is_not_hit() {
        let mut scene = Scene::new();
        scene.add_sphere(point(0.0, 0.0, -5.0), 1.0, 0xFFFFFF);

        assert!(closest_hit(scene.objects(), &forward_ray(), None).is_none());
    }

    #[test]
    fn inside_sphere_hits_far_wall() {
        let mut scene = Scene::new();
        scene.add_sphere(point(0.0, 0.0, 0.0), 2.0, 0xFFFFFF);

        let hit = closest_hit(scene.objects(), &forward_ray(), None).unwrap();

        assert_eq!(hit.t, 2.0);
        assert_eq!(hit.normal, point(0.0, 0.0, 1.0));
    }

    #[test]
    fn nearest_object_wins() {
        let mut scene = Scene::new();
        let far = scene.add_sphere(point(0.0, 0.0, 10.0), 1.0, 0xFF0000);
        let near = scene.add_box(point(0.0, 0.0, 4.0), (2.0, 2.0, 2.0), 0x00FF00);

        let hit = closest_hit(scene.objects(), &forward_ray(), None).unwrap();

        assert_eq!(hit.object, near);
        assert_eq!(hit.t, 3.0);
        assert_eq!(hit.point, point(0.0, 0.0, 3.0));
        assert_eq!(hit.normal, point(0.0, 0.0, -1.0));

        let hit = closest_hit(scene.objects(), &forward_ray(), Some(near)).unwrap();
        assert_eq!(hit.object, far);
        assert_eq!(hit.t, 9.0);
    }

    #[test]
    fn tie_goes_to_first_object() {
        let mut scene = Scene::new();
        let first = scene.create_object(ObjectKind::Sphere);
        scene.create_object(ObjectKind::Sphere);
        for id in 0..2 {
            scene
                .set_object_field(id, crate::scene::ObjectValue::Position(point(0.0, 0.0, 5.0)))
                .unwrap();
        }

        let hit = closest_hit(scene.objects(), &forward_ray(), None).unwrap();
        assert_eq!(hit.object, first);
    }

    #[test]
    fn occlusion_range() {
        let mut scene = Scene::new();
        let shaded = scene.add_sphere(point(0.0, 0.0, 0.0), 1.0, 0xFFFFFF);
        scene.add_sphere(point(0.0, 0.0, 5.0), 1.0, 0xFFFFFF);

        let ray = forward_ray();

        assert!(occluded(scene.objects(), &ray, shaded, 0.0, f32::INFINITY));
        assert!(!occluded(scene.objects(), &ray, shaded, 0.0, 3.0));
    }
}
