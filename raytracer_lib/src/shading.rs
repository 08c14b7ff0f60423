//! Phong style shading of the nearest hit
//!
//! Every light adds to two accumulators, diffuse (multiplied by the object
//! color) and specular (added on top). Shadows are binary: a light either
//! reaches the point or contributes nothing.

use crate::{
    color::{self, Color32, RGBA},
    common::Ray,
    intersect::{self, Hit},
    render::RenderOptions,
    scene::{Light, Scene, SceneObject},
    vector::{self, Vec4},
};

/// Shadow rays ignore hits closer than this
pub const SHADOW_EPSILON: f32 = 1e-4;

/// Diffuse and specular factors of one light, before light color and
/// intensity are applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phong {
    pub diffuse: f32,
    pub specular: f32,
}

/// Lambert term and Phong reflection term.
///
/// * `normal` - surface normal
/// * `light_dir` - direction of light travel, from light to surface
/// * `viewer` - unit vector from surface to eye
/// * `albedo` - specular exponent
///
/// The specular term does not depend on the diffuse one, a surface facing
/// away from the light can still catch a highlight.
pub fn phong(normal: &Vec4, light_dir: &Vec4, viewer: &Vec4, albedo: f32) -> Phong {
    let none = Phong {
        diffuse: 0.0,
        specular: 0.0,
    };

    let mags = vector::magnitude3(normal) * vector::magnitude3(light_dir);
    if mags == 0.0 || !mags.is_finite() {
        return none;
    }

    let n_dot_l = vector::dot3(normal, light_dir);
    let diffuse = f32::max(0.0, -n_dot_l) / mags;

    let reflected = vector::subtract3(light_dir, &vector::scale3(normal, 2.0 * n_dot_l));
    let spec_factor = vector::dot3(viewer, &reflected);
    let specular = if spec_factor > 0.0 {
        spec_factor.powf(albedo)
    } else {
        0.0
    };

    Phong { diffuse, specular }
}

/// Running sums over all lights
#[derive(Debug, Clone, Copy)]
struct Accumulator {
    diffuse: RGBA,
    specular: RGBA,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            diffuse: color::zero(),
            specular: color::zero(),
        }
    }

    fn add_flat(&mut self, intensity: f32) {
        self.diffuse = vector::add3(&self.diffuse, &color::mono(intensity, 0.0));
    }

    fn add(&mut self, light_color: &RGBA, intensity: f32, phong: Phong) {
        let diffuse = vector::scale3(light_color, phong.diffuse * intensity);
        let specular = vector::scale3(light_color, phong.specular * intensity);
        self.diffuse = vector::add3(&self.diffuse, &diffuse);
        self.specular = vector::add3(&self.specular, &specular);
    }

    /// `object * diffuse + specular`, per channel
    fn resolve(&self, object_color: &RGBA) -> RGBA {
        let lit = object_color.component_mul(&self.diffuse);
        let mut out = vector::add3(&lit, &self.specular);
        out.w = 1.0;
        out
    }
}

/// Does any other object block the way from `hit` in direction `towards`,
/// closer than `max_t`
fn in_shadow(objects: &[SceneObject], hit: &Hit, towards: Vec4, max_t: f32) -> bool {
    let ray = Ray::new(hit.point, towards);
    intersect::occluded(objects, &ray, hit.object, SHADOW_EPSILON, max_t)
}

/// Color of the surface at `hit`, seen along `ray`
pub fn shade(scene: &Scene, options: &RenderOptions, hit: &Hit, ray: &Ray) -> Color32 {
    let objects = scene.objects();
    let object = match objects.get(hit.object) {
        Some(o) => o,
        None => return options.background,
    };

    let viewer = vector::scale3(&ray.direction, -1.0);
    let mut acc = Accumulator::new();

    for light in scene.lights() {
        match light {
            Light::Ambient { intensity } => {
                if options.ambient_lighting {
                    acc.add_flat(*intensity);
                }
            }
            Light::Directional {
                direction,
                color,
                intensity,
            } => {
                if !options.directional_lighting {
                    continue;
                }
                let towards_light = vector::scale3(direction, -1.0);
                if options.shadows && in_shadow(objects, hit, towards_light, f32::INFINITY) {
                    continue;
                }
                let phong = phong(&hit.normal, direction, &viewer, object.albedo);
                acc.add(color, *intensity, phong);
            }
            Light::Point {
                position,
                color,
                intensity,
                range,
            } => {
                if !options.point_lighting {
                    continue;
                }
                let distance = vector::distance3(position, &hit.point);
                let falloff = if *range > 0.0 {
                    f32::max(0.0, 1.0 - distance / range)
                } else {
                    0.0
                };
                if falloff <= 0.0 {
                    continue;
                }
                // light sitting exactly on the surface has no direction
                let light_dir = match vector::direction(position, &hit.point) {
                    Some(d) => d,
                    None => continue,
                };
                let towards_light = vector::scale3(&light_dir, -1.0);
                if options.shadows && in_shadow(objects, hit, towards_light, distance) {
                    continue;
                }
                let phong = phong(&hit.normal, &light_dir, &viewer, object.albedo);
                acc.add(color, *intensity * falloff, phong);
            }
        }
    }

    color::pack(&acc.resolve(&color::unpack(object.color)))
}
