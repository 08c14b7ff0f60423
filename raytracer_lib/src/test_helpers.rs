//! Module with helper functions
//! Saves repetition in unit tests

use crate::{
    color::Color32,
    common::Ray,
    intersect::{closest_hit, Hit},
    scene::Scene,
    vector::point,
};

/// Default camera looking at a unit sphere at `[0, 0, 5]`, no lights
pub fn single_sphere_scene(color: Color32) -> Scene {
    let mut scene = Scene::new();
    scene.add_sphere(point(0.0, 0.0, 5.0), 1.0, color);
    scene
}

/// Ray from the camera straight down `+z` and what it hits.
/// Panics on miss, meant for scenes like [`single_sphere_scene`].
pub fn hit_of(scene: &Scene) -> (Hit, Ray) {
    let ray = Ray::new(scene.get_camera_position(), point(0.0, 0.0, 1.0));
    let hit = closest_hit(scene.objects(), &ray, None).expect("ray along +z should hit");
    (hit, ray)
}

/// Top left corners of render blocks, row by row
pub fn block_origins(width: usize, height: usize, size: usize) -> Vec<(usize, usize)> {
    let mut origins = vec![];
    for y in (0..height).step_by(size) {
        for x in (0..width).step_by(size) {
            origins.push((x, y));
        }
    }
    origins
}
