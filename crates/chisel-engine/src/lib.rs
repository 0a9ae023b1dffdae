//! Chisel engine crate.
//!
//! CPU-side preparation for two render-task kernels:
//! - `border`: per-corner attribute records for CSS border corners
//! - `blur`: separable Gaussian blur passes over render-task rects
//!
//! `render` packs both into GPU instance records.

pub mod logging;
pub mod coords;
pub mod border;
pub mod blur;
pub mod render;
