use crate::color::{Color32, BLACK};

/// Switches read by the shading pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub ambient_lighting: bool,
    pub directional_lighting: bool,
    pub point_lighting: bool,
    pub shadows: bool,
    /// Color of rays hitting nothing
    pub background: Color32,
}

impl RenderOptions {
    pub fn new(
        ambient_lighting: bool,
        directional_lighting: bool,
        point_lighting: bool,
        shadows: bool,
        background: Color32,
    ) -> RenderOptions {
        RenderOptions {
            ambient_lighting,
            directional_lighting,
            point_lighting,
            shadows,
            background,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(true, true, true, true, BLACK)
    }
}
