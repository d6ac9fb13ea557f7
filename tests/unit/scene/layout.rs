use super::*;

#[test]
fn grid_slots_wrap_after_five_columns() {
    assert_eq!(grid_slot(0), Point::new(50.0, 50.0));
    assert_eq!(grid_slot(4), Point::new(50.0 + 4.0 * 110.0, 50.0));
    assert_eq!(grid_slot(5), Point::new(50.0, 160.0));
    assert_eq!(grid_slot(12), Point::new(50.0 + 2.0 * 110.0, 50.0 + 2.0 * 110.0));
}

#[test]
fn reconcile_matches_length_for_all_counts() {
    for len in 0..=40usize {
        let mut positions = Vec::new();
        reconcile_positions(&mut positions, len);
        assert_eq!(positions.len(), len);
    }
}

#[test]
fn reconcile_grow_appends_without_touching_existing() {
    let dragged = Point::new(999.0, -3.0);
    let mut positions = vec![grid_slot(0), dragged];

    reconcile_positions(&mut positions, 4);
    assert_eq!(positions.len(), 4);
    assert_eq!(positions[1], dragged);
    assert_eq!(positions[2], grid_slot(2));
    assert_eq!(positions[3], grid_slot(3));
}

#[test]
fn reconcile_shrink_truncates_prefix() {
    let mut positions: Vec<Point> = (0..7).map(grid_slot).collect();
    reconcile_positions(&mut positions, 3);
    assert_eq!(positions, vec![grid_slot(0), grid_slot(1), grid_slot(2)]);
}

#[test]
fn reconcile_same_length_is_noop() {
    let dragged = vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
    let mut positions = dragged.clone();
    reconcile_positions(&mut positions, 2);
    assert_eq!(positions, dragged);
}
