//! Key bindings

use minifb::Key;
use nalgebra::vector;
use raytracer_lib::vector::Vec4;

use super::defaults::{CAMERA_STEP, LIGHT_STEP};

/// Render switch flipped by a number key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Ambient,
    Directional,
    Point,
    Shadows,
}

/// What a key does to the app state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Move camera by `(x,y,z)`
    MoveCamera(Vec4),
    /// Grow or shrink the render blocks
    PixelSize(i32),
    /// Change intensity of the first directional light
    LightIntensity(f32),
    Toggle(Toggle),
    Screenshot,
    Quit,
}

/// Keys acting every frame while held down
pub const HELD_KEYS: [Key; 6] = [Key::W, Key::S, Key::A, Key::D, Key::Q, Key::E];

/// Keys acting once per press
pub const PRESSED_KEYS: [Key; 14] = [
    Key::Equal,
    Key::NumPadPlus,
    Key::PageUp,
    Key::Minus,
    Key::NumPadMinus,
    Key::PageDown,
    Key::Left,
    Key::Right,
    Key::Key1,
    Key::Key2,
    Key::Key3,
    Key::Key4,
    Key::P,
    Key::Escape,
];

pub fn held_action(key: Key) -> Option<Action> {
    let step = CAMERA_STEP;
    let delta = match key {
        Key::W => vector![0.0, 0.0, step, 0.0],
        Key::S => vector![0.0, 0.0, -step, 0.0],
        Key::A => vector![-step, 0.0, 0.0, 0.0],
        Key::D => vector![step, 0.0, 0.0, 0.0],
        Key::Q => vector![0.0, -step, 0.0, 0.0],
        Key::E => vector![0.0, step, 0.0, 0.0],
        _ => return None,
    };
    Some(Action::MoveCamera(delta))
}

pub fn pressed_action(key: Key) -> Option<Action> {
    let action = match key {
        Key::Equal | Key::NumPadPlus | Key::PageUp => Action::PixelSize(1),
        Key::Minus | Key::NumPadMinus | Key::PageDown => Action::PixelSize(-1),
        Key::Left => Action::LightIntensity(-LIGHT_STEP),
        Key::Right => Action::LightIntensity(LIGHT_STEP),
        Key::Key1 => Action::Toggle(Toggle::Ambient),
        Key::Key2 => Action::Toggle(Toggle::Directional),
        Key::Key3 => Action::Toggle(Toggle::Point),
        Key::Key4 => Action::Toggle(Toggle::Shadows),
        Key::P => Action::Screenshot,
        Key::Escape => Action::Quit,
        _ => return None,
    };
    Some(action)
}
