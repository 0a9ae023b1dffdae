use std::ops::{Add, Div, Mul};

use crate::coords::{ColorRgba, Rect, Vec2};

use super::task::{SampleSource, TargetKind};

/// A texel type a blur can accumulate.
pub trait Sample:
    Copy
    + Default
    + Send
    + Sync
    + Add<Output = Self>
    + Mul<f32, Output = Self>
    + Div<f32, Output = Self>
{
    /// Which kind of target stores this sample type.
    const KIND: TargetKind;
}

impl Sample for f32 {
    const KIND: TargetKind = TargetKind::Alpha;
}

impl Sample for ColorRgba {
    const KIND: TargetKind = TargetKind::Color;
}

/// Row-major CPU image.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<S> {
    width: u32,
    height: u32,
    data: Vec<S>,
}

impl<S: Sample> Image<S> {
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, S::default())
    }

    pub fn filled(width: u32, height: u32, value: S) -> Self {
        Self {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        }
    }

    /// Builds an image from a function of texel coordinates.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> S) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self { width, height, data }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// The whole image as a rect in texels.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Vec2::zero(), self.extent())
    }

    pub fn get(&self, x: u32, y: u32) -> Option<S> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y as usize * self.width as usize + x as usize).copied()
    }

    pub fn pixels(&self) -> &[S] {
        &self.data
    }

    pub fn pixels_mut(&mut self) -> &mut [S] {
        &mut self.data
    }
}

impl<S: Sample> SampleSource<S> for Image<S> {
    /// Nearest-texel fetch, clamped to the image edge.
    fn sample(&self, uv: Vec2) -> S {
        if self.width == 0 || self.height == 0 {
            return S::default();
        }
        let x = (uv.x * self.width as f32).floor().clamp(0.0, (self.width - 1) as f32) as u32;
        let y = (uv.y * self.height as f32).floor().clamp(0.0, (self.height - 1) as f32) as u32;
        self.get(x, y).unwrap_or_default()
    }
}
