//! Colors
//!
//! Shading works with `RGBA` (channels in `<0;1>`), the frame buffer
//! stores packed `0xRRGGBB` words.

use nalgebra::vector;

use crate::vector::Vec4;

pub type RGBA = Vec4;

/// Packed 24bit color, `0xRRGGBB`
pub type Color32 = u32;

pub const BLACK: Color32 = 0x000000;
pub const WHITE: Color32 = 0xFFFFFF;

pub fn new(r: f32, g: f32, b: f32, a: f32) -> RGBA {
    vector![r, g, b, a]
}

pub fn zero() -> RGBA {
    vector![0.0, 0.0, 0.0, 0.0]
}

pub fn mono(v: f32, opacity: f32) -> RGBA {
    vector![v, v, v, opacity]
}

pub fn white() -> RGBA {
    mono(1.0, 1.0)
}

/// Split packed color into channels in range `<0;1>`, alpha is 1
pub fn unpack(c: Color32) -> RGBA {
    let r = ((c >> 16) & 0xFF) as f32 / 255.0;
    let g = ((c >> 8) & 0xFF) as f32 / 255.0;
    let b = (c & 0xFF) as f32 / 255.0;
    vector![r, g, b, 1.0]
}

/// Clamp channels to `<0;1>` and pack them, alpha is dropped.
/// NaN channels are written as 0.
pub fn pack(c: &RGBA) -> Color32 {
    let r = channel_to_byte(c.x);
    let g = channel_to_byte(c.y);
    let b = channel_to_byte(c.z);
    (r << 16) | (g << 8) | b
}

fn channel_to_byte(v: f32) -> u32 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u32
}
