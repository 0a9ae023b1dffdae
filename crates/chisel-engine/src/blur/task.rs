use anyhow::{ensure, Result};

use crate::coords::{Rect, Vec2};

use super::kernel::{support_for, GaussianCoefficients};
use super::Sample;

/// Axis a blur pass runs along.
#[repr(u32)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BlurDirection {
    #[default]
    Horizontal = 0,
    Vertical = 1,
}

/// Channel layout of a blur's source and target.
#[repr(u32)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TargetKind {
    /// Four-channel color target.
    #[default]
    Color = 0,
    /// Single-channel alpha target.
    Alpha = 1,
}

/// Tuning for blur passes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlurConfig {
    /// Taps per side are `2 * ceil(support_scale * sigma)`.
    pub support_scale: f32,
    /// Optional upper bound on `ceil(support_scale * sigma)`.
    ///
    /// `None` keeps the full kernel for every sigma.
    pub max_half_support: Option<u32>,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            support_scale: 1.5,
            max_half_support: None,
        }
    }
}

/// One blur pass as scheduled by the render-task graph.
///
/// Rects are in texels of their respective images: `source` in the image
/// being read, `target` in the image being written.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlurTask {
    pub target: Rect,
    pub source: Rect,
    pub sigma: f32,
    pub direction: BlurDirection,
    pub kind: TargetKind,
}

impl BlurTask {
    /// Checks the task against the images it will read and write.
    pub fn validate(&self, source_extent: Vec2, target_extent: Vec2) -> Result<()> {
        ensure!(
            self.sigma.is_finite() && self.sigma >= 0.0,
            "blur sigma must be finite and non-negative, got {}",
            self.sigma
        );
        check_rect("source", self.source, source_extent)?;
        check_rect("target", self.target, target_extent)?;
        Ok(())
    }
}

fn check_rect(what: &str, rect: Rect, extent: Vec2) -> Result<()> {
    ensure!(
        rect.is_finite() && !rect.is_empty(),
        "blur {what} rect {rect:?} is empty or not finite"
    );
    ensure!(
        rect.origin.floor() == rect.origin && rect.size.floor() == rect.size,
        "blur {what} rect {rect:?} is not texel aligned"
    );
    ensure!(
        Rect::from_origin_size(Vec2::zero(), extent).contains_rect(rect),
        "blur {what} rect {rect:?} exceeds image extent {extent:?}"
    );
    Ok(())
}

/// Per-pass constants, computed once and shared by every output sample.
///
/// UV values are normalized against the source texture extent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlurPass {
    pub target: Rect,
    /// Source rect in UV space.
    pub uv_rect: Rect,
    /// Source rect inset by half a texel, in UV space. Taps are clamped here
    /// so filtering never reads neighbouring content of a shared target.
    pub uv_bounds: Rect,
    /// UV distance between taps: one texel along the pass direction.
    pub offset_step: Vec2,
    pub sigma: f32,
    /// Taps on each side of the center; even.
    pub support: u32,
    pub direction: BlurDirection,
    pub kind: TargetKind,
}

impl BlurPass {
    pub fn new(task: &BlurTask, texture_extent: Vec2, config: &BlurConfig) -> Self {
        let offset_step = match task.direction {
            BlurDirection::Horizontal => Vec2::new(1.0 / texture_extent.x, 0.0),
            BlurDirection::Vertical => Vec2::new(0.0, 1.0 / texture_extent.y),
        };

        Self {
            target: task.target,
            uv_rect: task.source.normalized_by(texture_extent),
            uv_bounds: task.source.inset(0.5).normalized_by(texture_extent),
            offset_step,
            sigma: task.sigma,
            support: support_for(task.sigma, config),
            direction: task.direction,
            kind: task.kind,
        }
    }

    /// Source UV for a position in target texels.
    #[inline]
    pub fn uv_at(&self, pos: Vec2) -> Vec2 {
        let t = (pos - self.target.origin) / self.target.size;
        self.uv_rect.min().lerp(self.uv_rect.max(), t)
    }

    /// Filters one output sample centered on `uv`.
    ///
    /// The result is normalized by the weight actually accumulated, so
    /// clamped taps at the rect edges neither darken nor brighten it.
    pub fn filter<S: Sample>(&self, source: &impl SampleSource<S>, uv: Vec2) -> S {
        let center = source.sample(uv);
        if self.support == 0 {
            return center;
        }

        let lo = self.uv_bounds.min();
        let hi = self.uv_bounds.max();

        let coeffs = GaussianCoefficients::new(self.sigma);
        let mut sum = center * coeffs.weight();
        let mut total = coeffs.weight();

        for (i, w) in (1..=self.support).zip(coeffs) {
            let offset = self.offset_step * i as f32;
            let before = source.sample((uv - offset).clamp(lo, hi));
            let after = source.sample((uv + offset).clamp(lo, hi));
            sum = sum + before * w + after * w;
            total += 2.0 * w;
        }

        sum / total
    }
}

/// Anything a pass can read samples from by UV.
pub trait SampleSource<S> {
    fn sample(&self, uv: Vec2) -> S;
}
