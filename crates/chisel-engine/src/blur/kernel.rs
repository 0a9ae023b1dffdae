//! Gaussian weights.

use core::f32::consts::PI;

use super::BlurConfig;

/// Incremental Gaussian coefficients.
///
/// Starts at the peak weight `G(0)`; each `next()` yields `G(i)` for the
/// following integer offset using two multiplies and no `exp`. See GPU Gems 3,
/// chapter 40 ("Incremental Computation of the Gaussian").
///
/// `sigma` must be strictly positive; zero-sigma passes never build one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GaussianCoefficients {
    c0: f32,
    c1: f32,
    c2: f32,
}

impl GaussianCoefficients {
    pub fn new(sigma: f32) -> Self {
        let c0 = 1.0 / ((2.0 * PI).sqrt() * sigma);
        let c1 = (-0.5 / (sigma * sigma)).exp();
        Self { c0, c1, c2: c1 * c1 }
    }

    /// Weight at the current offset (the peak before any `next()`).
    #[inline]
    pub fn weight(&self) -> f32 {
        self.c0
    }
}

impl Iterator for GaussianCoefficients {
    type Item = f32;

    #[inline]
    fn next(&mut self) -> Option<f32> {
        self.c0 *= self.c1;
        self.c1 *= self.c2;
        Some(self.c0)
    }
}

/// Direct Gaussian density at `offset`; the reference the recurrence follows.
pub fn gaussian_weight(sigma: f32, offset: f32) -> f32 {
    (-offset * offset / (2.0 * sigma * sigma)).exp() / ((2.0 * PI).sqrt() * sigma)
}

/// Number of taps on each side of the center for `sigma`.
///
/// `2 * ceil(scale * sigma)`, capped by the config when it sets a bound;
/// always even so the sampling loop is symmetric.
pub fn support_for(sigma: f32, config: &BlurConfig) -> u32 {
    let half = (config.support_scale * sigma).ceil().max(0.0) as u32;
    let half = config.max_half_support.map_or(half, |cap| half.min(cap));
    half.saturating_mul(2) & !1
}
