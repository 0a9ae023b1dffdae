//! Separable Gaussian blur.
//!
//! A blur is two [`BlurTask`]s: horizontal into an intermediate target, then
//! vertical into the final one. Each output texel is
//!
//! ```text
//! (G(0)·s(uv) + Σᵢ G(i)·(s(uv - i·step) + s(uv + i·step))) / Σ weights
//! ```
//!
//! for `i` in `1..=support`, with every tap clamped to the source rect inset
//! by half a texel.
//!
//! [`BlurInstance`](crate::render::BlurInstance) carries the same per-pass
//! constants to the GPU; [`blur_pass`] and [`blur_2d`] run them on the CPU.

mod image;
mod kernel;
mod pass;
mod task;

pub use image::{Image, Sample};
pub use kernel::{gaussian_weight, support_for, GaussianCoefficients};
pub use pass::{blur_2d, blur_pass};
pub use task::{BlurConfig, BlurDirection, BlurPass, BlurTask, SampleSource, TargetKind};
