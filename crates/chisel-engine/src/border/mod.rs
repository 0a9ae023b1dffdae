//! Border-corner attribute kernels.
//!
//! Pipeline per corner instance:
//! - pick the corner's style from its two sides (`style`)
//! - split the widths by style (`widths`)
//! - derive clip ellipses, edge line and edge descriptor (`corner`)
//! - shade the four quadrant colors (`color`)
//!
//! `eval` is the CPU reference of the per-pixel stage that consumes the result.

mod color;
mod corner;
mod descriptor;
mod geometry;
mod radius;
mod style;
mod widths;

pub mod eval;

pub use color::{modulation, quadrant_colors, QuadrantColors};
pub use corner::{
    clip_radii, edge_descriptor, ClipParameters, CornerAttributes, CornerBuilder, CornerIndex,
    EdgeDescriptor, EdgeLine,
};
pub use descriptor::{BorderDescriptor, Side};
pub use geometry::CornerGeometry;
pub use radius::{resolve_radius, SENTINEL_RADII, SENTINEL_RADIUS};
pub use style::{select_style, BorderStyle, SideSelect};
pub use widths::{CssWidths, StyledWidths, WidthAdjust};
