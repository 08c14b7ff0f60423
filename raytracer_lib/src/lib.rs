//! Small interactive ray tracer
//!
//! A [`scene::Scene`] holds the camera, lights and objects. The
//! [`render::Renderer`] casts one ray per block of pixels, shades the nearest
//! hit and writes the result into any [`surface::Surface`].

pub mod camera;
pub mod color;
pub mod command;
pub mod common;
pub mod error;
pub mod intersect;
pub mod logging;
pub mod mapping;
pub mod premade;
pub mod render;
pub mod scene;
pub mod screenshot;
pub mod shading;
pub mod surface;
pub mod test_helpers;
pub mod vector;

pub use render::{RenderOptions, Renderer};
pub use scene::Scene;
pub use surface::{FrameBuffer, Surface};

/// Render `scene` into a new `width`x`height` buffer with default options
pub fn render_frame(scene: &Scene, width: usize, height: usize) -> FrameBuffer {
    let mut buffer = FrameBuffer::new(width, height);
    Renderer::default().render(scene, &mut buffer);
    buffer
}
