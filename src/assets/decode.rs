use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::assets::store::PreparedImage;
use crate::foundation::error::TinselResult;

/// Decode image bytes into a premultiplied RGBA8 raster.
pub fn decode_image(bytes: &[u8]) -> TinselResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Read and decode an image file into a premultiplied RGBA8 raster.
pub fn load_image(path: &Path) -> TinselResult<PreparedImage> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read image file '{}'", path.display()))?;
    decode_image(&bytes)
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}
