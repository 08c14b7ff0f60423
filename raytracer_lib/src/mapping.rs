//! Screen to world coordinate mapping
//!
//! Plane mapping: a pixel lands on the viewport rectangle placed `front`
//! units in front of the eye. Not a perspective transform, `Camera::fov`
//! plays no part here.

use crate::{
    camera::Camera,
    vector::{point, Vec4},
};

/// World-space point on the projection plane seen through pixel `[x, y]`.
///
/// Screen Y grows downward, world Y grows upward.
pub fn screen_to_world(camera: &Camera, width: usize, height: usize, x: i32, y: i32) -> Vec4 {
    let vp = &camera.viewport;
    let pos = &camera.position;

    let step_x = vp.width() / width as f32;
    let step_y = vp.height() / height as f32;

    point(
        x as f32 * step_x + vp.left + pos.x,
        vp.top - y as f32 * step_y + pos.y,
        camera.front + pos.z,
    )
}

/// Inverse of [`screen_to_world`], rounded to the nearest pixel.
/// The `z` coordinate of `world` is ignored.
pub fn world_to_screen(camera: &Camera, width: usize, height: usize, world: &Vec4) -> (i32, i32) {
    let vp = &camera.viewport;
    let pos = &camera.position;

    let x = (world.x - pos.x - vp.left) * (width as f32 / vp.width());
    let y = (vp.top - (world.y - pos.y)) * (height as f32 / vp.height());

    (x.round() as i32, y.round() as i32)
}
