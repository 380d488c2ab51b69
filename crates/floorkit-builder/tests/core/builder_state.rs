use floorkit_builder::{ElementUpdate, FloorplanBuilder, TemplateCatalog};

fn seated(catalog: &TemplateCatalog, seats: u32) -> floorkit_builder::ElementTemplate {
    catalog
        .get("square-table-4")
        .unwrap()
        .clone()
        .with_seats(seats)
}

#[test]
fn test_builder_new() {
    let builder = FloorplanBuilder::new();
    assert!(builder.is_empty());
    assert_eq!(builder.total_seats(), 0);
    assert!(builder.selected_element().is_none());
    assert!(!builder.can_undo());
    assert!(!builder.can_redo());
}

#[test]
fn test_total_seats_scenario() {
    let catalog = TemplateCatalog::builtin();
    let mut builder = FloorplanBuilder::new();

    let a = builder.add_element(&seated(&catalog, 4), 10.0, 10.0);
    assert_eq!(builder.total_seats(), 4);

    builder.add_element(&seated(&catalog, 2), 100.0, 10.0);
    assert_eq!(builder.total_seats(), 6);

    builder.delete_element(&a);
    assert_eq!(builder.total_seats(), 2);
}

#[test]
fn test_undo_redo_scenario() {
    let catalog = TemplateCatalog::builtin();
    let mut builder = FloorplanBuilder::new();

    let a = builder.add_element(catalog.get("plant").unwrap(), 0.0, 0.0);
    let b = builder.add_element(catalog.get("pillar").unwrap(), 50.0, 0.0);

    assert!(builder.undo());
    assert!(builder.undo());
    assert!(builder.is_empty());
    assert!(!builder.can_undo());

    assert!(builder.redo());
    assert!(builder.redo());
    let ids: Vec<&str> = builder.elements().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec![a.as_str(), b.as_str()]);
    assert!(!builder.can_redo());
}

#[test]
fn test_undo_restores_previous_update() {
    let catalog = TemplateCatalog::builtin();
    let mut builder = FloorplanBuilder::new();
    let id = builder.add_element(catalog.get("booth-4").unwrap(), 0.0, 0.0);
    let before = builder.elements().to_vec();

    builder.update_element(
        &id,
        &ElementUpdate::new()
            .color("#000000")
            .label(Some("VIP".to_string())),
    );
    let after = builder.elements().to_vec();
    assert_ne!(before, after);

    builder.undo();
    assert_eq!(builder.elements(), before.as_slice());
    builder.redo();
    assert_eq!(builder.elements(), after.as_slice());
}

#[test]
fn test_duplicate_offsets_copy() {
    let catalog = TemplateCatalog::builtin();
    let mut builder = FloorplanBuilder::new();
    let id = builder.add_element(catalog.get("rect-table-6").unwrap(), 30.0, 45.0);
    builder.rotate_element(&id, 90.0);

    let copy_id = builder.duplicate_element(&id).unwrap();
    assert_ne!(copy_id, id);
    assert_eq!(builder.selected_id(), Some(copy_id.as_str()));

    let original = builder.element(&id).unwrap().clone();
    let mut copy = builder.element(&copy_id).unwrap().clone();
    assert_eq!((copy.x, copy.y), (original.x + 20.0, original.y + 20.0));

    copy.id = original.id.clone();
    copy.x = original.x;
    copy.y = original.y;
    assert_eq!(copy, original);
}

#[test]
fn test_z_order() {
    let catalog = TemplateCatalog::builtin();
    let mut builder = FloorplanBuilder::new();
    let a = builder.add_element(catalog.get("plant").unwrap(), 0.0, 0.0);
    let b = builder.add_element(catalog.get("plant").unwrap(), 0.0, 0.0);
    let c = builder.add_element(catalog.get("plant").unwrap(), 0.0, 0.0);

    let order = |builder: &FloorplanBuilder| -> Vec<String> {
        builder.elements().iter().map(|e| e.id.clone()).collect()
    };

    assert!(builder.bring_to_front(&a));
    assert_eq!(order(&builder), vec![b.clone(), c.clone(), a.clone()]);

    assert!(builder.send_to_back(&c));
    assert_eq!(order(&builder), vec![c.clone(), b.clone(), a.clone()]);

    let len = builder.history_len();
    assert!(!builder.bring_to_front("missing"));
    assert!(!builder.send_to_back("missing"));
    assert_eq!(builder.history_len(), len);
}

#[test]
fn test_select_unknown_clears() {
    let catalog = TemplateCatalog::builtin();
    let mut builder = FloorplanBuilder::new();
    let id = builder.add_element(catalog.get("plant").unwrap(), 0.0, 0.0);

    builder.select(Some("missing"));
    assert_eq!(builder.selected_id(), None);

    builder.select(Some(&id));
    assert_eq!(builder.selected_element().unwrap().id, id);

    builder.clear_selection();
    assert!(builder.selected_element().is_none());
}

#[test]
fn test_undo_past_add_drops_selection() {
    let catalog = TemplateCatalog::builtin();
    let mut builder = FloorplanBuilder::new();
    builder.add_element(catalog.get("plant").unwrap(), 0.0, 0.0);
    builder.undo();
    assert!(builder.selected_id().is_none());
}

#[test]
fn test_view_changes_do_not_commit() {
    let mut builder = FloorplanBuilder::new();
    let len = builder.history_len();
    builder.zoom_in();
    builder.set_pan(100.0, -50.0);
    builder.toggle_grid();
    builder.toggle_snap();
    builder.set_grid_size(10.0);
    builder.select(None);
    assert_eq!(builder.history_len(), len);
    assert_eq!(builder.canvas().pan_x(), 100.0);
    assert_eq!(builder.canvas().grid_size(), 10.0);
}
