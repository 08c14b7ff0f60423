//! Render frames of a scene while moving the camera

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use raytracer_lib::{
    premade, render::Renderer, screenshot::Screenshot, FrameBuffer, Scene,
};

use crate::config::{Config, GeneratorConfig};

pub fn build_scene(generator: GeneratorConfig) -> Scene {
    match generator {
        GeneratorConfig::Demo => premade::demo_scene(),
        GeneratorConfig::Random { objects, seed } => {
            log::info!("Random scene, {} objects, seed {}", objects, seed);
            premade::random_scene(objects, seed)
        }
    }
}

/// `<prefix>_<i>.shot`
pub fn frame_path(prefix: &Path, i: usize) -> PathBuf {
    let mut name = prefix.as_os_str().to_owned();
    name.push(format!("_{}.shot", i));
    PathBuf::from(name)
}

fn progress_bar(cfg: &Config) -> ProgressBar {
    if cfg.quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(cfg.frames as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{elapsed_precise} [{bar:40}] {pos}/{len} frames")
            .progress_chars("=> "),
    );
    bar
}

/// Renders `cfg.frames` frames, returns paths of written files
pub fn generate_frames(cfg: &Config) -> Result<Vec<PathBuf>> {
    let mut scene = build_scene(cfg.generator);
    scene.set_pixel_size(cfg.pixel_size);

    let renderer = Renderer::default();
    let mut buffer = FrameBuffer::new(cfg.width, cfg.height);
    let bar = progress_bar(cfg);
    let mut written = Vec::with_capacity(cfg.frames);

    for i in 0..cfg.frames {
        let stats = renderer.render(&scene, &mut buffer);
        log::debug!("Frame {}: {} rays in {:?}", i, stats.rays, stats.duration);

        let path = frame_path(&cfg.output_prefix, i);
        Screenshot::from_buffer(&buffer)
            .save(&path)
            .with_context(|| format!("cannot save frame {}", path.display()))?;
        written.push(path);

        scene.move_camera(cfg.step);
        bar.inc(1);
    }

    bar.finish_with_message("done");
    Ok(written)
}
