use super::*;

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}

#[test]
fn add_keeps_positions_parallel_to_sources() {
    let mut store = SceneStore::default();
    store.add_ornaments(paths(&["a.png", "b.png", "c.png"]), BatchSource::Picker);
    assert_eq!(store.len(), 3);
    assert_eq!(store.positions().len(), 3);
    assert_eq!(store.positions()[0], crate::scene::layout::grid_slot(0));
}

#[test]
fn add_clamps_batch_at_cap_with_notice() {
    let mut store = SceneStore::default();
    let batch: Vec<PathBuf> = (0..25).map(|i| PathBuf::from(format!("{i}.png"))).collect();
    let outcome = store.add_ornaments(batch, BatchSource::Picker);

    assert_eq!(outcome.accepted, MAX_ORNAMENTS);
    assert_eq!(outcome.rejected, 5);
    assert!(outcome.notice.is_some());
    assert_eq!(store.len(), MAX_ORNAMENTS);
}

#[test]
fn add_accepts_exactly_cap_minus_previous() {
    let mut store = SceneStore::default();
    store.add_ornaments(
        (0..18).map(|i| PathBuf::from(format!("{i}.png"))),
        BatchSource::Picker,
    );
    let outcome = store.add_ornaments(
        (0..5).map(|i| PathBuf::from(format!("late_{i}.png"))),
        BatchSource::Picker,
    );
    assert_eq!(outcome.accepted, 2);
    assert_eq!(outcome.rejected, 3);
    assert_eq!(store.len(), MAX_ORNAMENTS);
}

#[test]
fn drag_drop_filters_non_images_picker_does_not() {
    let mut store = SceneStore::default();
    let outcome = store.add_ornaments(
        paths(&["a.png", "notes.txt", "b.JPG", "no_ext"]),
        BatchSource::DragDrop,
    );
    assert_eq!(outcome.accepted, 2);
    assert_eq!(outcome.rejected, 2);
    assert!(outcome.notice.is_some());

    let mut store = SceneStore::default();
    let outcome = store.add_ornaments(paths(&["notes.txt"]), BatchSource::Picker);
    assert_eq!(outcome.accepted, 1);
    assert!(outcome.notice.is_none());
}

#[test]
fn remove_reconciles_and_bumps_generation() {
    let mut store = SceneStore::default();
    store.add_ornaments(paths(&["a.png", "b.png", "c.png"]), BatchSource::Picker);
    let generation = store.generation();

    store.remove_ornament(1).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.positions().len(), 2);
    assert!(store.generation() > generation);

    assert!(store.remove_ornament(5).is_err());
}

#[test]
fn clear_all_declined_leaves_scene_unchanged() {
    let mut store = SceneStore::default();
    store.add_ornaments(paths(&["a.png", "b.png"]), BatchSource::Picker);
    let before_def = store.to_def();
    let generation = store.generation();

    assert!(!store.clear_all(false));
    assert_eq!(store.to_def(), before_def);
    assert_eq!(store.generation(), generation);

    assert!(store.clear_all(true));
    assert!(store.is_empty());
    assert!(store.positions().is_empty());
}

#[test]
fn set_position_is_unclamped() {
    let mut store = SceneStore::default();
    store.add_ornaments(paths(&["a.png"]), BatchSource::Picker);
    store
        .set_position(0, Point::new(-500.0, 9000.0))
        .unwrap();
    assert_eq!(store.positions()[0], Point::new(-500.0, 9000.0));
    assert!(store.set_position(1, Point::ZERO).is_err());
}

#[test]
fn def_round_trip_preserves_selection_and_ornaments() {
    let mut store = SceneStore::default();
    store.add_ornaments(paths(&["a.png", "b.png"]), BatchSource::Picker);
    store.set_canvas(CanvasPreset::Square);
    store.set_tree(Some(TreePreset::LitFir));
    store.set_item_fit(ItemFit::Cover);
    store.set_position(1, Point::new(7.0, 8.0)).unwrap();

    let def = store.to_def();
    let rebuilt = SceneStore::from_def(def.clone());
    assert_eq!(rebuilt.to_def(), def);
    assert_eq!(rebuilt.positions()[1], Point::new(7.0, 8.0));
}
