//! Prebuilt scenes for the app, benchmarks and tests

use std::ops::Range;

use crate::{
    color,
    scene::{LightKind, LightUpdate, ObjectUpdate, Scene},
    vector::{point, Vec4},
};

/// Specular exponent of the demo spheres
const SHINY: f32 = 16.0;
const FLOOR_ALBEDO: f32 = 64.0;

/// Set specular exponent, failures are logged
fn set_albedo(scene: &mut Scene, id: usize, albedo: f32) {
    if let Err(e) = scene.update_object(id, &ObjectUpdate::new().albedo(albedo)) {
        log::error!("premade object {}: {}", id, e);
    }
}

/// Ambient floor, sun from above, warm point light to the right
fn add_standard_lights(scene: &mut Scene) {
    let ambient = scene.create_light(LightKind::Ambient);
    let sun = scene.create_light(LightKind::Directional);
    let lamp = scene.create_light(LightKind::Point);

    let updates = [
        (ambient, LightUpdate::new().intensity(0.2)),
        (
            sun,
            LightUpdate::new()
                .direction(point(0.0, -1.0, 0.0))
                .intensity(0.8),
        ),
        (
            lamp,
            LightUpdate::new()
                .position(point(3.0, 2.0, 1.0))
                .color(color::new(1.0, 0.9, 0.7, 1.0))
                .intensity(0.6)
                .range(12.0),
        ),
    ];

    for (id, update) in updates {
        if let Err(e) = scene.update_light(id, &update) {
            log::error!("premade light {}: {}", id, e);
        }
    }
}

/// Three unit spheres resting on a floor slab
pub fn demo_scene() -> Scene {
    let mut scene = Scene::new();

    for (position, color) in [
        (point(0.0, -1.0, 3.0), 0xFF0000),
        (point(2.0, 0.0, 4.0), 0x00FFFF),
        (point(-1.0, -1.0, 3.0), 0x00FF00),
    ] {
        let id = scene.add_sphere(position, 1.0, color);
        set_albedo(&mut scene, id, SHINY);
    }

    let floor = scene.add_box(point(0.0, -2.5, 5.0), (10.0, 1.0, 10.0), 0xC0C0C0);
    set_albedo(&mut scene, floor, FLOOR_ALBEDO);

    add_standard_lights(&mut scene);
    scene
}

/// Area in front of the default camera where random objects are placed
struct Bounds {
    x: Range<f32>,
    y: Range<f32>,
    z: Range<f32>,
}

const RANDOM_BOUNDS: Bounds = Bounds {
    x: -4.0..4.0,
    y: -2.0..2.0,
    z: 3.0..12.0,
};

struct RandomObjects {
    rng: fastrand::Rng,
}

impl RandomObjects {
    fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    fn in_range(&self, range: &Range<f32>) -> f32 {
        range.start + self.rng.f32() * (range.end - range.start)
    }

    fn position(&self) -> Vec4 {
        point(
            self.in_range(&RANDOM_BOUNDS.x),
            self.in_range(&RANDOM_BOUNDS.y),
            self.in_range(&RANDOM_BOUNDS.z),
        )
    }

    fn add_one(&self, scene: &mut Scene) {
        let position = self.position();
        let color = self.rng.u32(..) & 0xFFFFFF;

        let id = if self.rng.bool() {
            scene.add_sphere(position, self.in_range(&(0.2..1.2)), color)
        } else {
            let extents = (
                self.in_range(&(0.3..2.0)),
                self.in_range(&(0.3..2.0)),
                self.in_range(&(0.3..2.0)),
            );
            scene.add_box(position, extents, color)
        };

        let albedo = self.in_range(&(1.0..64.0));
        set_albedo(scene, id, albedo);
    }
}

/// `count` random spheres and boxes in front of the camera, same lights as
/// [`demo_scene`]. Same seed gives the same scene.
pub fn random_scene(count: usize, seed: u64) -> Scene {
    let mut scene = Scene::new();
    let gen = RandomObjects::new(seed);

    for _ in 0..count {
        gen.add_one(&mut scene);
    }

    add_standard_lights(&mut scene);
    log::debug!("random scene: {} objects, seed {}", count, seed);
    scene
}

#[cfg(test)]
mod test {

    use crate::scene::{Light, Shape};

    use super::*;

    #[test]
    fn demo_contents() {
        let scene = demo_scene();

        assert_eq!(scene.objects().len(), 4);
        assert_eq!(scene.lights().len(), 3);
        assert_eq!(scene.objects()[0].color, 0xFF0000);
        assert_eq!(scene.objects()[0].shape, Shape::Sphere { radius: 1.0 });
        assert!(matches!(scene.objects()[3].shape, Shape::Box { .. }));
        assert!(matches!(scene.lights()[1], Light::Directional { .. }));
    }

    #[test]
    fn demo_albedo_applied() {
        let scene = demo_scene();

        for sphere in &scene.objects()[..3] {
            assert_eq!(sphere.albedo, SHINY);
        }
        assert_eq!(scene.objects()[3].albedo, FLOOR_ALBEDO);
    }

    #[test]
    fn random_is_deterministic() {
        let a = random_scene(20, 7);
        let b = random_scene(20, 7);
        let c = random_scene(20, 8);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.objects().len(), 20);
    }

    fn within(range: &Range<f32>, v: f32) -> bool {
        range.start <= v && v <= range.end
    }

    #[test]
    fn random_objects_in_bounds() {
        let scene = random_scene(50, 1);

        for obj in scene.objects() {
            assert!(within(&RANDOM_BOUNDS.x, obj.position.x));
            assert!(within(&RANDOM_BOUNDS.y, obj.position.y));
            assert!(within(&RANDOM_BOUNDS.z, obj.position.z));
            assert!(obj.color <= 0xFFFFFF);
            assert!(within(&(1.0..64.0), obj.albedo));
        }
    }
}
