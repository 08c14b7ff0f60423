//! # Default values
//!
//! Used as initial values, string forms feed `clap` defaults.

// Window
pub const WIDTH: usize = 1024;
pub const HEIGHT: usize = 768;
pub const WIDTH_STR: &str = "1024";
pub const HEIGHT_STR: &str = "768";

pub const PIXEL_SIZE: u32 = 2;
pub const PIXEL_SIZE_STR: &str = "2";
pub const MIN_PIXEL_SIZE: u32 = 1;
pub const MAX_PIXEL_SIZE: u32 = 64;

pub const FRAME_DELAY_MS: u64 = 15;
pub const FRAME_DELAY_MS_STR: &str = "15";

/// Camera travel per frame while a movement key is held
pub const CAMERA_STEP: f32 = 0.1;

pub const LIGHT_STEP: f32 = 0.1;

pub const SCREENSHOT_PREFIX: &str = "screenshot";

pub const TITLE: &str = "rt_app";
