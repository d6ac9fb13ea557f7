use crate::assets::store::{PreparedImage, RasterCache};
use crate::foundation::core::{CanvasSize, Rect, Rgba8Premul, mul_div255};
use crate::render::fit::{contain_dst_rect, cover_src_rect};
use crate::render::surface::Surface;
use crate::scene::model::ItemFit;
use crate::scene::store::SceneStore;

/// Fixed inset applied to the tree overlay, in canvas pixels.
pub const TREE_PADDING: TreePadding = TreePadding {
    top: 80.0,
    right: 40.0,
    bottom: 80.0,
    left: 40.0,
};

/// Per-edge inset for the tree overlay rectangle.
#[derive(Clone, Copy, Debug)]
pub struct TreePadding {
    /// Top inset.
    pub top: f64,
    /// Right inset.
    pub right: f64,
    /// Bottom inset.
    pub bottom: f64,
    /// Left inset.
    pub left: f64,
}

impl TreePadding {
    /// The inset overlay rectangle for a canvas of `size`.
    pub fn inset(self, size: CanvasSize) -> Rect {
        let b = size.bounds();
        Rect::new(
            b.x0 + self.left,
            b.y0 + self.top,
            b.x1 - self.right,
            b.y1 - self.bottom,
        )
    }
}

/// Interaction highlight applied to one ornament while drawing.
///
/// Cosmetic only: export captures frames without a highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    /// The ornament under an active drag (gold ring).
    Dragged,
    /// The ornament under the idle pointer (orange ring).
    Hovered,
}

impl Highlight {
    fn ring_color(self) -> Rgba8Premul {
        match self {
            // #FFD700 gold while dragging, #FFA500 orange while hovering.
            Self::Dragged => Rgba8Premul::from_straight_rgba(0xff, 0xd7, 0x00, 0xff),
            Self::Hovered => Rgba8Premul::from_straight_rgba(0xff, 0xa5, 0x00, 0xff),
        }
    }
}

/// Ornament opacity while highlighted (0.85 of full).
const HIGHLIGHT_ALPHA: u8 = 217;

/// Highlight ring stroke width in canvas pixels.
const RING_WIDTH: f64 = 5.0;

/// Highlight ring outset from the ornament footprint.
const RING_OUTSET: f64 = 2.0;

/// Compose one full scene frame.
///
/// Draw order: background cover-fit over the whole canvas, tree overlay
/// cover-fit inside [`TREE_PADDING`], then each ornament in list order at its
/// stored position. `highlight` names at most one ornament to draw dimmed with
/// a colored ring.
pub fn render_scene(
    store: &SceneStore,
    cache: &RasterCache,
    background: &PreparedImage,
    tree: Option<&PreparedImage>,
    highlight: Option<(usize, Highlight)>,
) -> Surface {
    let size = store.canvas().size();
    let mut surface = Surface::new(size);

    draw_cover(&mut surface, background, size.bounds(), 255);
    if let Some(tree) = tree {
        draw_cover(&mut surface, tree, TREE_PADDING.inset(size), 255);
    }

    let item_size = store.item_size();
    let fit = store.item_fit();
    for (i, (source, &pos)) in store.sources().iter().zip(store.positions()).enumerate() {
        // Ornaments without a prepared raster (still decoding or failed) are skipped.
        let Some(img) = cache.get(source) else {
            continue;
        };
        let footprint = item_size.footprint(pos);

        let ring = match highlight {
            Some((h, kind)) if h == i => Some(kind),
            _ => None,
        };
        let alpha = if ring.is_some() { HIGHLIGHT_ALPHA } else { 255 };

        match fit {
            ItemFit::Cover => draw_cover(&mut surface, img, footprint, alpha),
            ItemFit::Contain => draw_contain(&mut surface, img, footprint, alpha),
        }

        if let Some(kind) = ring {
            stroke_rect(
                &mut surface,
                footprint.inflate(RING_OUTSET, RING_OUTSET),
                RING_WIDTH,
                kind.ring_color(),
            );
        }
    }

    surface
}

/// Draw `img` scaled to fill `dst_rect` (cover fit), cropping overflow.
pub fn draw_cover(dst: &mut Surface, img: &PreparedImage, dst_rect: Rect, alpha: u8) {
    let src = cover_src_rect(img.width, img.height, dst_rect);
    blit(dst, img, src, dst_rect, alpha);
}

/// Draw `img` letterboxed inside `dst_rect` (contain fit), never cropping.
pub fn draw_contain(dst: &mut Surface, img: &PreparedImage, dst_rect: Rect, alpha: u8) {
    let full = Rect::new(0.0, 0.0, f64::from(img.width), f64::from(img.height));
    let target = contain_dst_rect(img.width, img.height, dst_rect);
    blit(dst, img, full, target, alpha);
}

/// Scaled premultiplied src-over blit with nearest-neighbor sampling.
///
/// `src_rect` is in source pixel coordinates, `dst_rect` in canvas pixels;
/// drawing is clipped to the surface bounds. `alpha` is a global opacity
/// multiplier applied on top of per-pixel alpha.
pub fn blit(dst: &mut Surface, img: &PreparedImage, src_rect: Rect, dst_rect: Rect, alpha: u8) {
    if dst_rect.width() <= 0.0 || dst_rect.height() <= 0.0 {
        return;
    }
    if src_rect.width() <= 0.0 || src_rect.height() <= 0.0 {
        return;
    }

    let x0 = dst_rect.x0.floor().max(0.0) as i64;
    let y0 = dst_rect.y0.floor().max(0.0) as i64;
    let x1 = (dst_rect.x1.ceil() as i64).min(i64::from(dst.width));
    let y1 = (dst_rect.y1.ceil() as i64).min(i64::from(dst.height));

    let src = img.rgba8_premul.as_slice();
    let alpha = u16::from(alpha);

    for py in y0..y1 {
        let v = (py as f64 + 0.5 - dst_rect.y0) / dst_rect.height();
        if !(0.0..1.0).contains(&v) {
            continue;
        }
        let sy = ((src_rect.y0 + v * src_rect.height()) as i64)
            .clamp(0, i64::from(img.height) - 1) as usize;

        for px in x0..x1 {
            let u = (px as f64 + 0.5 - dst_rect.x0) / dst_rect.width();
            if !(0.0..1.0).contains(&u) {
                continue;
            }
            let sx = ((src_rect.x0 + u * src_rect.width()) as i64)
                .clamp(0, i64::from(img.width) - 1) as usize;

            let si = (sy * img.width as usize + sx) * 4;
            let sr = mul_div255(u16::from(src[si]), alpha);
            let sg = mul_div255(u16::from(src[si + 1]), alpha);
            let sb = mul_div255(u16::from(src[si + 2]), alpha);
            let sa = mul_div255(u16::from(src[si + 3]), alpha);

            let di = (py as usize * dst.width as usize + px as usize) * 4;
            blend_px(&mut dst.data[di..di + 4], sr, sg, sb, sa);
        }
    }
}

/// Stroke an axis-aligned rectangle ring of `width_px` centered on `rect`'s edge.
pub fn stroke_rect(dst: &mut Surface, rect: Rect, width_px: f64, color: Rgba8Premul) {
    let half = width_px / 2.0;
    let outer = rect.inflate(half, half);
    let inner = rect.inflate(-half, -half);

    // Four bands: top, bottom, left, right.
    fill_rect(dst, Rect::new(outer.x0, outer.y0, outer.x1, inner.y0), color);
    fill_rect(dst, Rect::new(outer.x0, inner.y1, outer.x1, outer.y1), color);
    fill_rect(dst, Rect::new(outer.x0, inner.y0, inner.x0, inner.y1), color);
    fill_rect(dst, Rect::new(inner.x1, inner.y0, outer.x1, inner.y1), color);
}

/// Fill an axis-aligned rectangle with a premultiplied color (src-over).
pub fn fill_rect(dst: &mut Surface, rect: Rect, color: Rgba8Premul) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }
    let x0 = rect.x0.floor().max(0.0) as usize;
    let y0 = rect.y0.floor().max(0.0) as usize;
    let x1 = (rect.x1.ceil().max(0.0) as usize).min(dst.width as usize);
    let y1 = (rect.y1.ceil().max(0.0) as usize).min(dst.height as usize);

    for py in y0..y1 {
        for px in x0..x1 {
            let di = (py * dst.width as usize + px) * 4;
            blend_px(
                &mut dst.data[di..di + 4],
                u16::from(color.r),
                u16::from(color.g),
                u16::from(color.b),
                u16::from(color.a),
            );
        }
    }
}

fn blend_px(d: &mut [u8], sr: u16, sg: u16, sb: u16, sa: u16) {
    if sa == 255 {
        d[0] = sr as u8;
        d[1] = sg as u8;
        d[2] = sb as u8;
        d[3] = 255;
        return;
    }
    let inv = 255 - sa;
    d[0] = (sr + mul_div255(u16::from(d[0]), inv)).min(255) as u8;
    d[1] = (sg + mul_div255(u16::from(d[1]), inv)).min(255) as u8;
    d[2] = (sb + mul_div255(u16::from(d[2]), inv)).min(255) as u8;
    d[3] = (sa + mul_div255(u16::from(d[3]), inv)).min(255) as u8;
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
