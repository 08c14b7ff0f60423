mod bound_box;
mod ray;
mod viewport_box;

pub use bound_box::{BoundBox, BoxHit};
pub use ray::Ray;
pub use viewport_box::ViewportBox;
