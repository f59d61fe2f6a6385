use crate::foundation::error::{MoodError, MoodResult};
use std::ops::{Add, AddAssign, Mul};

pub use kurbo::Point;

/// Canvas size in screen-space units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    /// Width, must be > 0.
    pub width: f64,
    /// Height, must be > 0.
    pub height: f64,
}

impl Dimensions {
    /// Build validated dimensions.
    pub fn new(width: f64, height: f64) -> MoodResult<Self> {
        let dims = Self { width, height };
        dims.validate()?;
        Ok(dims)
    }

    /// Reject zero, negative, or non-finite sizes.
    pub fn validate(self) -> MoodResult<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(MoodError::validation("dimensions width must be > 0"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(MoodError::validation("dimensions height must be > 0"));
        }
        Ok(())
    }

    /// Canvas center point.
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Length of the shorter side.
    pub fn min_side(self) -> f64 {
        self.width.min(self.height)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Unbounded color as produced by a pattern; clamping happens at render time.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Rgb {
    /// All channels zero.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Build a color from raw channel values.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Same hue at a given intensity: `(r, g, b) * k`.
    pub fn splat(r: f64, g: f64, b: f64, k: f64) -> Self {
        Self::new(r * k, g * k, b * k)
    }

    /// True when no channel is NaN or infinite.
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl Add for Rgb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Rgb {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<f64> for Rgb {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }
}

/// Composited color with floored integer channels.
///
/// Channels are not clamped; values may fall outside `0..=255` when weights do not sum to one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: i32,
    /// Green channel.
    pub g: i32,
    /// Blue channel.
    pub b: i32,
}

impl Color {
    /// Build a color from integer channels.
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Floor each channel. NaN maps to 0 and infinities saturate.
    pub fn floor_from(rgb: Rgb) -> Self {
        fn channel(v: f64) -> i32 {
            if v.is_finite() { v.floor() as i32 } else { 0 }
        }

        Self {
            r: channel(rgb.r),
            g: channel(rgb.g),
            b: channel(rgb.b),
        }
    }

    /// Clamp every channel into `0..=255`.
    pub fn to_rgb8(self) -> [u8; 3] {
        fn to_u8(v: i32) -> u8 {
            v.clamp(0, 255) as u8
        }

        [to_u8(self.r), to_u8(self.g), to_u8(self.b)]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
