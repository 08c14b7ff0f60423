use crate::{
    common::ViewportBox,
    error::SceneError,
    vector::{self, point, Vec4},
};

pub const DEFAULT_FRONT: f32 = 1.0;
pub const DEFAULT_DEPTH: f32 = 100.0;
pub const DEFAULT_FOV: f32 = 90.0;

/// Eye and projection plane.
///
/// Screen is mapped onto the `viewport` rectangle at distance `front` from
/// the eye. `back` is the far clip (`front + depth`).
///
/// `fov` is stored for callers that want it, ray generation does not read it.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub viewport: ViewportBox,
    pub front: f32,
    pub back: f32,
    pub fov: f32, // reserved
    pub position: Vec4,
    pub direction: Option<Vec4>,
}

impl Camera {
    pub fn new() -> Camera {
        Camera {
            viewport: ViewportBox::default(),
            front: DEFAULT_FRONT,
            back: DEFAULT_FRONT + DEFAULT_DEPTH,
            fov: DEFAULT_FOV,
            position: point(0.0, 0.0, 0.0),
            direction: None,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set_viewport(
        &mut self,
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
        front: f32,
        depth: f32,
        fov: f32,
    ) {
        self.viewport = ViewportBox::new(left, right, top, bottom);
        self.front = front;
        self.back = front + depth;
        self.fov = fov;
    }

    pub fn depth(&self) -> f32 {
        self.back - self.front
    }

    pub fn change_pos(&mut self, delta: Vec4) {
        self.position = vector::add3(&self.position, &delta);
    }

    pub fn set_pos(&mut self, pos: Vec4) {
        self.position = pos;
    }

    pub fn get_position(&self) -> Vec4 {
        self.position
    }

    /// Stored normalized, zero vector is rejected
    pub fn set_direction(&mut self, direction: Vec4) -> Result<(), SceneError> {
        let direction = vector::normalize(&direction).ok_or(SceneError::DegenerateDirection)?;
        self.direction = Some(direction);
        Ok(())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
