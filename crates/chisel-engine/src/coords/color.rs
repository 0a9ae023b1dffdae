use core::ops::{Add, Div, Mul};

/// Linear straight-alpha RGBA color.
///
/// Border shading scales `rgb` independently of `a`, so this type is kept
/// straight; premultiplication belongs to whoever blends the result.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Scales the color channels, leaving alpha untouched.
    #[inline]
    pub fn scale_rgb(self, k: f32) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k, self.a)
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Channel-wise linear interpolation, `t = 0` yields `self`.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Add for ColorRgba {
    type Output = ColorRgba;
    #[inline]
    fn add(self, rhs: ColorRgba) -> ColorRgba {
        ColorRgba::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl Mul<f32> for ColorRgba {
    type Output = ColorRgba;
    #[inline]
    fn mul(self, rhs: f32) -> ColorRgba {
        ColorRgba::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

impl Div<f32> for ColorRgba {
    type Output = ColorRgba;
    #[inline]
    fn div(self, rhs: f32) -> ColorRgba {
        ColorRgba::new(self.r / rhs, self.g / rhs, self.b / rhs, self.a / rhs)
    }
}
