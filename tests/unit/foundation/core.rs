use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(30, 1).is_ok());
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_secs_to_frames_ceil_rounds_up() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.secs_to_frames_ceil(1.0), 30);
    assert_eq!(fps.secs_to_frames_ceil(1.01), 31);
    assert_eq!(fps.secs_to_frames_ceil(0.0), 0);
}

#[test]
fn canvas_size_requires_even_nonzero_dimensions() {
    assert!(CanvasSize::new(600, 600).is_ok());
    assert!(CanvasSize::new(1080, 1350).is_ok());
    assert!(CanvasSize::new(0, 600).is_err());
    assert!(CanvasSize::new(601, 600).is_err());
    assert!(CanvasSize::new(600, 601).is_err());
}

#[test]
fn canvas_bounds_covers_full_area() {
    let b = CanvasSize::new(600, 400).unwrap().bounds();
    assert_eq!(b, Rect::new(0.0, 0.0, 600.0, 400.0));
}

#[test]
fn premultiply_straight_rgba() {
    let c = Rgba8Premul::from_straight_rgba(255, 255, 255, 128);
    assert_eq!(c.a, 128);
    assert_eq!(c.r, 128);

    let t = Rgba8Premul::from_straight_rgba(10, 20, 30, 0);
    assert_eq!((t.r, t.g, t.b, t.a), (0, 0, 0, 0));
}
