use std::time::{Duration, Instant};

use crate::{
    color::Color32,
    common::Ray,
    intersect::closest_hit,
    mapping::screen_to_world,
    scene::Scene,
    shading::shade,
    surface::Surface,
};

use super::RenderOptions;

/// What one render pass did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// One per block
    pub rays: usize,
    pub duration: Duration,
}

/// Single threaded block renderer.
///
/// The surface is split into `pixel_size`x`pixel_size` blocks, one ray is
/// traced per block and the whole block is filled with its color.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    render_options: RenderOptions,
}

impl Renderer {
    pub fn new(render_options: RenderOptions) -> Renderer {
        Renderer { render_options }
    }

    pub fn set_render_options(&mut self, opts: RenderOptions) {
        self.render_options = opts;
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }

    pub fn render_options_mut(&mut self) -> &mut RenderOptions {
        &mut self.render_options
    }

    /// Color seen through pixel `[x, y]` of a `width`x`height` surface
    pub fn trace_pixel(
        &self,
        scene: &Scene,
        width: usize,
        height: usize,
        x: usize,
        y: usize,
    ) -> Color32 {
        let camera = scene.camera();
        let target = screen_to_world(camera, width, height, x as i32, y as i32);

        let ray = match Ray::through(camera.get_position(), target) {
            Some(ray) => ray,
            None => return self.render_options.background,
        };

        match closest_hit(scene.objects(), &ray, None) {
            Some(hit) => shade(scene, &self.render_options, &hit, &ray),
            None => self.render_options.background,
        }
    }

    /// Paint the whole surface.
    ///
    /// Blocks start at multiples of the pixel size. Blocks at the right and
    /// bottom edge are cut to fit and sampled at the center of what is left.
    pub fn render<S>(&self, scene: &Scene, surface: &mut S) -> FrameStats
    where
        S: Surface + ?Sized,
    {
        let start = Instant::now();

        let (width, height) = (surface.width(), surface.height());
        let size = usize::max(scene.get_pixel_size() as usize, 1);

        let mut rays = 0;
        for block_y in (0..height).step_by(size) {
            let block_h = usize::min(size, height - block_y);
            let sample_y = block_y + block_h / 2;

            for block_x in (0..width).step_by(size) {
                let block_w = usize::min(size, width - block_x);
                let sample_x = block_x + block_w / 2;

                let color = self.trace_pixel(scene, width, height, sample_x, sample_y);
                surface.put_square(block_x, block_y, size, color);
                rays += 1;
            }
        }

        let stats = FrameStats {
            rays,
            duration: start.elapsed(),
        };
        log::debug!(
            "rendered {}x{} at pixel size {}: {} rays in {:?}",
            width,
            height,
            size,
            stats.rays,
            stats.duration
        );
        stats
    }

    /// [`Renderer::render`] followed by [`Surface::flip`]
    pub fn render_frame<S>(&self, scene: &Scene, surface: &mut S) -> FrameStats
    where
        S: Surface + ?Sized,
    {
        let stats = self.render(scene, surface);
        surface.flip();
        stats
    }
}
