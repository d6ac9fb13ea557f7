use crate::foundation::core::Rect;

/// Centered source crop, in source pixel coordinates, that fills `dst` while
/// preserving the source aspect ratio (cover fit).
///
/// The crop never exceeds the source bounds, so drawing it scaled into `dst`
/// leaves no empty target area.
pub fn cover_src_rect(src_w: u32, src_h: u32, dst: Rect) -> Rect {
    let sw = f64::from(src_w);
    let sh = f64::from(src_h);
    let src_aspect = sw / sh;
    let dst_aspect = dst.width() / dst.height();

    if src_aspect > dst_aspect {
        // Source is wider than the target; crop horizontally.
        let crop_w = sh * dst_aspect;
        let x0 = (sw - crop_w) / 2.0;
        Rect::new(x0, 0.0, x0 + crop_w, sh)
    } else {
        // Source is taller than the target; crop vertically.
        let crop_h = sw / dst_aspect;
        let y0 = (sh - crop_h) / 2.0;
        Rect::new(0.0, y0, sw, y0 + crop_h)
    }
}

/// Centered destination sub-rectangle inside `dst` that shows the whole source
/// while preserving its aspect ratio (contain fit).
///
/// The full source maps into the returned rectangle, so nothing is cropped;
/// the remainder of `dst` is left untouched.
pub fn contain_dst_rect(src_w: u32, src_h: u32, dst: Rect) -> Rect {
    let src_aspect = f64::from(src_w) / f64::from(src_h);
    let dst_aspect = dst.width() / dst.height();

    if src_aspect > dst_aspect {
        // Source is wider than the target; fit by width.
        let h = dst.width() / src_aspect;
        let y0 = dst.y0 + (dst.height() - h) / 2.0;
        Rect::new(dst.x0, y0, dst.x1, y0 + h)
    } else {
        // Source is taller than the target; fit by height.
        let w = dst.height() * src_aspect;
        let x0 = dst.x0 + (dst.width() - w) / 2.0;
        Rect::new(x0, dst.y0, x0 + w, dst.y1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fit.rs"]
mod tests;
