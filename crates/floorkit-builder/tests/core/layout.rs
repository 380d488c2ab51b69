use floorkit_builder::{FloorplanBuilder, SavedLayout, TemplateCatalog};

#[test]
fn test_layout_round_trip_through_builder() {
    let catalog = TemplateCatalog::builtin();
    let mut builder = FloorplanBuilder::new();
    builder.add_element(catalog.get("round-table-4").unwrap(), 40.0, 40.0);
    builder.add_element(catalog.get("booth-4").unwrap(), 200.0, 40.0);

    let layout = builder.to_layout("Dining Room");
    assert_eq!(layout.total_seats, 8);

    let json = layout.to_json().unwrap();
    let restored = SavedLayout::from_json(&json).unwrap();

    let mut other = FloorplanBuilder::new();
    other.load_layout(&restored);
    assert_eq!(other.elements(), builder.elements());
    assert_eq!(other.total_seats(), 8);
    assert_eq!(other.history_len(), 1);
    assert!(!other.can_undo());
    assert!(other.selected_id().is_none());
}

#[test]
fn test_update_layout_refreshes_seats() {
    let catalog = TemplateCatalog::builtin();
    let mut builder = FloorplanBuilder::new();
    let mut layout = builder.to_layout("Patio");
    assert_eq!(layout.total_seats, 0);

    builder.add_element(catalog.get("rect-table-6").unwrap(), 0.0, 0.0);
    builder.update_layout(&mut layout);
    assert_eq!(layout.total_seats, 6);
    assert_eq!(layout.elements.len(), 1);
}
