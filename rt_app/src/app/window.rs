use anyhow::{Context, Result};
use minifb::{KeyRepeat, Window, WindowOptions};
use raytracer_lib::{color::Color32, FrameBuffer, Surface};

use super::input::{held_action, pressed_action, Action, HELD_KEYS, PRESSED_KEYS};

/// Window backed by a frame buffer, `flip` pushes the buffer to screen
pub struct WindowSurface {
    window: Window,
    buffer: FrameBuffer,
}

impl WindowSurface {
    pub fn open(title: &str, width: usize, height: usize) -> Result<WindowSurface> {
        let options = WindowOptions {
            resize: true,
            ..WindowOptions::default()
        };
        let window = Window::new(title, width, height, options)
            .with_context(|| format!("cannot open {}x{} window", width, height))?;

        Ok(WindowSurface {
            window,
            buffer: FrameBuffer::new(width, height),
        })
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    /// Recreate buffer if the window changed size
    pub fn sync_size(&mut self) {
        let (width, height) = self.window.get_size();
        if width == 0 || height == 0 {
            // minimized
            return;
        }
        if (width, height) != (self.buffer.width(), self.buffer.height()) {
            self.buffer.resize(width, height);
        }
    }

    /// Actions of keys held or pressed since last update
    pub fn poll_actions(&self) -> Vec<Action> {
        let held = HELD_KEYS
            .into_iter()
            .filter(|&key| self.window.is_key_down(key))
            .filter_map(held_action);
        let pressed = PRESSED_KEYS
            .into_iter()
            .filter(|&key| self.window.is_key_pressed(key, KeyRepeat::No))
            .filter_map(pressed_action);
        held.chain(pressed).collect()
    }
}

impl Surface for WindowSurface {
    fn width(&self) -> usize {
        self.buffer.width()
    }

    fn height(&self) -> usize {
        self.buffer.height()
    }

    fn put_pixel(&mut self, x: usize, y: usize, color: Color32) {
        self.buffer.put_pixel(x, y, color);
    }

    fn put_square(&mut self, x: usize, y: usize, size: usize, color: Color32) {
        self.buffer.put_square(x, y, size, color);
    }

    fn flip(&mut self) {
        let (w, h) = (self.buffer.width(), self.buffer.height());
        if let Err(e) = self.window.update_with_buffer(self.buffer.pixels(), w, h) {
            log::error!("window update failed: {}", e);
        }
    }
}
