//! Coordinate and color primitives.

mod color;
mod rect;
mod vec2;
mod vec3;
mod viewport;

pub use color::ColorRgba;
pub use rect::Rect;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use viewport::Viewport;
