//! App state and frame loop

pub mod defaults;
mod input;
mod state;
mod window;

use std::{fs, thread, time::Duration};

use anyhow::{Context, Result};
use raytracer_lib::{command, premade, render::Renderer, screenshot::Screenshot, Scene};

pub use state::State;
use window::WindowSurface;

use crate::config::Config;

/// Scene the app starts with, demo or empty, then the startup script
pub fn initial_scene(cfg: &Config) -> Result<Scene> {
    let mut scene = if cfg.empty_scene {
        Scene::new()
    } else {
        premade::demo_scene()
    };
    scene.set_pixel_size(cfg.pixel_size);

    if let Some(path) = &cfg.script {
        let script = fs::read_to_string(path)
            .with_context(|| format!("cannot read script {}", path.display()))?;
        let failed = command::run_script(&mut scene, &script);
        if failed > 0 {
            log::warn!("{}: {} line(s) failed", path.display(), failed);
        }
    }

    Ok(scene)
}

fn save_screenshot(state: &mut State, surface: &WindowSurface) {
    let path = state.next_screenshot_path();
    if let Err(e) = Screenshot::from_buffer(surface.buffer()).save(&path) {
        log::error!("screenshot {}: {}", path.display(), e);
    }
}

/// Input, render, present, sleep, until the window closes
pub fn run(cfg: Config) -> Result<()> {
    let scene = initial_scene(&cfg)?;
    let mut state = State::new(scene, Renderer::default(), cfg.screenshot_prefix.clone());
    let mut surface = WindowSurface::open(defaults::TITLE, cfg.width, cfg.height)?;
    let delay = Duration::from_millis(cfg.frame_delay_ms);

    log::info!(
        "{} objects, {} lights, {}x{}",
        state.scene.objects().len(),
        state.scene.lights().len(),
        cfg.width,
        cfg.height
    );

    while state.running && surface.is_open() {
        for action in surface.poll_actions() {
            state.apply(action);
        }

        surface.sync_size();
        let stats = state.renderer.render_frame(&state.scene, &mut surface);
        state.frame_done(stats);

        if state.screenshot_requested {
            state.screenshot_requested = false;
            save_screenshot(&mut state, &surface);
        }

        surface.set_title(&state.title());
        thread::sleep(delay);
    }

    log::info!("App shutting down");
    Ok(())
}
