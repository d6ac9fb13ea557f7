use crate::foundation::error::{TinselError, TinselResult};

pub use kurbo::{Point, Rect, Vec2};

/// Absolute 0-based frame index in export timeline space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> TinselResult<Self> {
        if den == 0 {
            return Err(TinselError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(TinselError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Number of frames needed to cover `secs` seconds, rounded up.
    pub fn secs_to_frames_ceil(self, secs: f64) -> u64 {
        (secs * self.as_f64()).ceil().max(0.0) as u64
    }
}

/// Output canvas dimensions in pixels.
///
/// Dimensions must be even: the MP4 export path encodes yuv420p, which subsamples
/// chroma at 2x2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Create a validated canvas size.
    pub fn new(width: u32, height: u32) -> TinselResult<Self> {
        if width == 0 || height == 0 {
            return Err(TinselError::validation("canvas width/height must be non-zero"));
        }
        if !width.is_multiple_of(2) || !height.is_multiple_of(2) {
            return Err(TinselError::validation(
                "canvas width/height must be even (required for yuv420p mp4 output)",
            ));
        }
        Ok(Self { width, height })
    }

    /// Full canvas area as a rectangle anchored at the origin.
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }
}

pub(crate) fn premul(c: u8, a: u8) -> u8 {
    mul_div255(u16::from(c), u16::from(a)) as u8
}

pub(crate) fn mul_div255(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
