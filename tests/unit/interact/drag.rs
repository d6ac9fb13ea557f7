use super::*;
use crate::scene::store::BatchSource;

fn store_with(n: usize) -> SceneStore {
    let mut store = SceneStore::default();
    store.add_ornaments(
        (0..n).map(|i| std::path::PathBuf::from(format!("{i}.png"))),
        BatchSource::Picker,
    );
    store
}

#[test]
fn down_outside_any_footprint_stays_idle() {
    let store = store_with(1);
    let mut drag = DragController::new();
    let resp = drag.on_down(&store, Point::new(5000.0, 5000.0));
    assert!(!drag.is_dragging());
    assert!(!resp.redraw);
    assert_eq!(resp.cursor, CursorHint::Default);
}

#[test]
fn grab_offset_reproduces_position_without_drift() {
    let mut store = store_with(1);
    let mut drag = DragController::new();

    let start = store.positions()[0];
    let grab = Point::new(start.x + 13.0, start.y + 27.0);
    let resp = drag.on_down(&store, grab);
    assert!(resp.consume);
    assert!(drag.is_dragging());

    // The grabbed point keeps the same offset to the ornament origin at every
    // intermediate move, including moves far off-canvas.
    for target in [
        Point::new(200.0, 300.0),
        Point::new(-40.0, 12.5),
        Point::new(9999.0, 0.25),
    ] {
        drag.on_move(&mut store, target);
        let pos = store.positions()[0];
        assert_eq!(pos.x, target.x - 13.0);
        assert_eq!(pos.y, target.y - 27.0);
    }

    drag.on_up();
    assert!(!drag.is_dragging());
    assert_eq!(drag.hovered(), None);
}

#[test]
fn hover_tracks_while_idle_and_requests_redraw_on_change() {
    let mut store = store_with(1);
    let mut drag = DragController::new();
    let over = store.positions()[0] + Vec2::new(1.0, 1.0);

    let resp = drag.on_move(&mut store, over);
    assert!(resp.redraw);
    assert_eq!(resp.cursor, CursorHint::Grab);
    assert_eq!(drag.hovered(), Some(0));

    // Unchanged hover needs no redraw.
    let resp = drag.on_move(&mut store, over);
    assert!(!resp.redraw);

    let resp = drag.on_move(&mut store, Point::new(5000.0, 5000.0));
    assert!(resp.redraw);
    assert_eq!(drag.hovered(), None);
    assert_eq!(resp.cursor, CursorHint::Default);
}

#[test]
fn leave_clears_hover_but_not_an_active_drag() {
    let mut store = store_with(1);
    let mut drag = DragController::new();
    let inside = store.positions()[0] + Vec2::new(1.0, 1.0);

    drag.on_move(&mut store, inside);
    assert_eq!(drag.hovered(), Some(0));
    drag.on_leave();
    assert_eq!(drag.hovered(), None);

    drag.on_down(&store, inside);
    let resp = drag.on_leave();
    assert!(drag.is_dragging());
    assert_eq!(resp.cursor, CursorHint::Grabbing);

    // Document-level move keeps driving the drag outside the canvas.
    drag.on_move(&mut store, Point::new(-100.0, -100.0));
    assert!(store.positions()[0].x < 0.0);

    drag.on_up();
    assert!(!drag.is_dragging());
}

#[test]
fn topmost_ornament_wins_the_grab() {
    let mut store = store_with(2);
    // Stack both ornaments at the same spot.
    store.set_position(0, Point::new(100.0, 100.0)).unwrap();
    store.set_position(1, Point::new(100.0, 100.0)).unwrap();

    let mut drag = DragController::new();
    drag.on_down(&store, Point::new(110.0, 110.0));
    assert_eq!(drag.dragged(), Some(1));
}
