use std::io::Cursor;

use anyhow::Context;

use crate::foundation::core::{CanvasSize, Rgba8Premul};
use crate::foundation::error::{TinselError, TinselResult};

/// A composed raster frame as premultiplied RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major, premultiplied alpha.
    pub data: Vec<u8>,
}

impl Surface {
    /// Create a transparent surface of the given size.
    pub fn new(size: CanvasSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
            data: vec![0u8; size.width as usize * size.height as usize * 4],
        }
    }

    /// Fill the whole surface with one premultiplied color.
    pub fn clear(&mut self, color: Rgba8Premul) {
        for px in self.data.chunks_exact_mut(4) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = color.a;
        }
    }

    /// Read one pixel. Out-of-bounds coordinates are a caller bug.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8Premul {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Rgba8Premul {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
            a: self.data[i + 3],
        }
    }

    /// Encode the surface as PNG bytes (straight alpha).
    pub fn encode_png(&self) -> TinselResult<Vec<u8>> {
        let mut straight = self.data.clone();
        unpremultiply_rgba8_in_place(&mut straight);

        let img = image::RgbaImage::from_raw(self.width, self.height, straight)
            .ok_or_else(|| TinselError::export("surface byte length mismatch for png encode"))?;
        let mut out = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .context("encode surface as png")?;
        Ok(out)
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u32;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u32 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u32 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u32 * 255 + a / 2) / a).min(255) as u8;
    }
}
