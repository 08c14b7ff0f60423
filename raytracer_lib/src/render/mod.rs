mod render_options;
mod renderer;

pub use render_options::RenderOptions;
pub use renderer::{FrameStats, Renderer};
