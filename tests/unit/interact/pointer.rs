use super::*;
use crate::foundation::core::CanvasSize;

fn item(w: f64, h: f64) -> ItemSize {
    ItemSize { width: w, height: h }
}

#[test]
fn hit_test_returns_topmost_of_overlapping_footprints() {
    // Ornament 1 is drawn after ornament 0, so it wins where they overlap.
    let positions = vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)];
    let size = item(10.0, 10.0);

    assert_eq!(hit_test(&positions, size, Point::new(7.0, 7.0)), Some(1));
    assert_eq!(hit_test(&positions, size, Point::new(2.0, 2.0)), Some(0));
}

#[test]
fn hit_test_includes_all_four_footprint_edges() {
    let positions = vec![Point::new(10.0, 20.0)];
    let size = item(30.0, 40.0);

    assert_eq!(hit_test(&positions, size, Point::new(10.0, 20.0)), Some(0));
    assert_eq!(hit_test(&positions, size, Point::new(40.0, 60.0)), Some(0));
    assert_eq!(hit_test(&positions, size, Point::new(40.0, 20.0)), Some(0));
    assert_eq!(hit_test(&positions, size, Point::new(10.0, 60.0)), Some(0));
    assert_eq!(hit_test(&positions, size, Point::new(40.1, 60.0)), None);
}

#[test]
fn hit_test_misses_outside_every_footprint() {
    let positions = vec![Point::new(0.0, 0.0)];
    assert_eq!(
        hit_test(&positions, item(10.0, 10.0), Point::new(50.0, 50.0)),
        None
    );
    assert_eq!(hit_test(&[], item(10.0, 10.0), Point::new(1.0, 1.0)), None);
}

#[test]
fn view_transform_scales_display_to_backing_pixels() {
    let canvas = CanvasSize::new(600, 600).unwrap();
    let view = ViewTransform {
        canvas,
        display_width: 300.0,
        display_height: 150.0,
    };
    let p = view.to_canvas(Point::new(150.0, 75.0));
    assert_eq!(p, Point::new(300.0, 300.0));

    let identity = ViewTransform::identity(canvas);
    assert_eq!(identity.to_canvas(Point::new(42.0, 7.0)), Point::new(42.0, 7.0));
}
