/// Rectangle of the projection plane, in camera space.
///
/// Screen pixels are mapped linearly onto it, `top` is the world-space
/// coordinate of screen row 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl ViewportBox {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Horizontal extent
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Vertical extent
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }
}

impl Default for ViewportBox {
    fn default() -> Self {
        Self::new(-1.0, 1.0, 1.0, -1.0)
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn viewport() {
        let vp = ViewportBox::default();

        assert_eq!(vp.width(), 2.0);
        assert_eq!(vp.height(), 2.0);

        let vp = ViewportBox::new(-2.0, 1.0, 0.5, -0.5);

        assert_eq!(vp.width(), 3.0);
        assert_eq!(vp.height(), 1.0);
    }
}
