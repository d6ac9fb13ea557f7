use super::*;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn cover_wide_source_crops_horizontally() {
    // 200x100 source into a 100x100 target: crop a centered 100x100 column.
    let src = cover_src_rect(200, 100, Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_close(src.x0, 50.0);
    assert_close(src.x1, 150.0);
    assert_close(src.y0, 0.0);
    assert_close(src.y1, 100.0);
}

#[test]
fn cover_tall_source_crops_vertically() {
    let src = cover_src_rect(100, 200, Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_close(src.y0, 50.0);
    assert_close(src.y1, 150.0);
    assert_close(src.x0, 0.0);
    assert_close(src.x1, 100.0);
}

#[test]
fn cover_crop_always_fills_target_and_stays_in_bounds() {
    let dst = Rect::new(10.0, 20.0, 190.0, 140.0);
    for (w, h) in [(1u32, 1u32), (7, 3), (3, 7), (1920, 1080), (100, 100)] {
        let src = cover_src_rect(w, h, dst);
        // Within the source bounds, so the scaled draw leaves no empty area.
        assert!(src.x0 >= -1e-9 && src.y0 >= -1e-9);
        assert!(src.x1 <= f64::from(w) + 1e-9);
        assert!(src.y1 <= f64::from(h) + 1e-9);
        // Crop aspect matches the target aspect.
        assert_close(src.width() / src.height(), dst.width() / dst.height());
    }
}

#[test]
fn contain_wide_source_letterboxes_vertically() {
    let target = contain_dst_rect(200, 100, Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_close(target.x0, 0.0);
    assert_close(target.x1, 100.0);
    assert_close(target.y0, 25.0);
    assert_close(target.y1, 75.0);
}

#[test]
fn contain_never_crops_and_stays_inside_target() {
    let dst = Rect::new(5.0, 5.0, 105.0, 205.0);
    for (w, h) in [(1u32, 1u32), (7, 3), (3, 7), (1920, 1080)] {
        let target = contain_dst_rect(w, h, dst);
        // Inside the destination.
        assert!(target.x0 >= dst.x0 - 1e-9 && target.y0 >= dst.y0 - 1e-9);
        assert!(target.x1 <= dst.x1 + 1e-9 && target.y1 <= dst.y1 + 1e-9);
        // The whole source maps in with its aspect preserved.
        assert_close(
            target.width() / target.height(),
            f64::from(w) / f64::from(h),
        );
    }
}
