use crate::foundation::core::{CanvasSize, Point};
use crate::scene::model::ItemSize;

/// Mapping from on-screen (displayed) coordinates to canvas pixel coordinates.
///
/// The canvas backing store has fixed pixel dimensions while its on-screen
/// element may be scaled by page layout; pointer positions arrive in display
/// space and are converted through the displayed-size-to-backing-size ratio.
#[derive(Clone, Copy, Debug)]
pub struct ViewTransform {
    /// Canvas backing size in pixels.
    pub canvas: CanvasSize,
    /// Displayed element width.
    pub display_width: f64,
    /// Displayed element height.
    pub display_height: f64,
}

impl ViewTransform {
    /// Identity mapping: the canvas is displayed at its backing size.
    pub fn identity(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            display_width: f64::from(canvas.width),
            display_height: f64::from(canvas.height),
        }
    }

    /// Convert a display-space point (relative to the element's top-left) into
    /// canvas pixel coordinates.
    pub fn to_canvas(&self, display: Point) -> Point {
        let scale_x = f64::from(self.canvas.width) / self.display_width;
        let scale_y = f64::from(self.canvas.height) / self.display_height;
        Point::new(display.x * scale_x, display.y * scale_y)
    }
}

/// Find the topmost ornament whose footprint contains `pos` (canvas pixels).
///
/// Ornaments are scanned from last-drawn to first-drawn so the visually topmost
/// one wins ties, matching pick expectations for overlapping sprites. All four
/// footprint edges are inclusive (`Rect::contains` excludes right/bottom).
pub fn hit_test(positions: &[Point], item_size: ItemSize, pos: Point) -> Option<usize> {
    positions
        .iter()
        .enumerate()
        .rev()
        .find(|&(_, &p)| {
            let r = item_size.footprint(p);
            pos.x >= r.x0 && pos.x <= r.x1 && pos.y >= r.y0 && pos.y <= r.y1
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
#[path = "../../tests/unit/interact/pointer.rs"]
mod tests;
