//! Coordinate and color types shared by the border and blur kernels.
//!
//! Canonical CPU space:
//! - local pixels for border geometry, texels for blur rects
//! - origin top-left
//! - +X right, +Y down

mod color;
mod corner_radii;
mod rect;
mod vec2;

pub use color::ColorRgba;
pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
