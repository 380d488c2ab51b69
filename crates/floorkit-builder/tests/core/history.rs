use floorkit_builder::{BuilderOptions, FloorplanBuilder, TemplateCatalog, MAX_HISTORY};
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn test_history_capped() {
    let catalog = TemplateCatalog::builtin();
    let template = catalog.get("plant").unwrap();
    let mut builder = FloorplanBuilder::new();

    for i in 0..(MAX_HISTORY * 2) {
        builder.add_element(template, i as f64, 0.0);
        assert!(builder.history_len() <= MAX_HISTORY);
        assert!(builder.history_index() < builder.history_len());
    }
    assert_eq!(builder.history_len(), MAX_HISTORY);
    assert_eq!(builder.history_index(), MAX_HISTORY - 1);

    let mut undos = 0;
    while builder.undo() {
        undos += 1;
    }
    assert_eq!(undos, MAX_HISTORY - 1);
    assert_eq!(builder.element_count(), MAX_HISTORY * 2 - (MAX_HISTORY - 1));
}

#[test]
fn test_custom_history_capacity() {
    let catalog = TemplateCatalog::builtin();
    let options = BuilderOptions {
        max_history: 5,
        ..BuilderOptions::default()
    };
    let mut builder = FloorplanBuilder::with_options(options);
    for _ in 0..20 {
        builder.add_element(catalog.get("plant").unwrap(), 0.0, 0.0);
    }
    assert_eq!(builder.history_len(), 5);
}

#[test]
fn test_can_undo_can_redo_track_cursor() {
    let catalog = TemplateCatalog::builtin();
    let mut builder = FloorplanBuilder::new();
    builder.add_element(catalog.get("plant").unwrap(), 0.0, 0.0);
    builder.add_element(catalog.get("plant").unwrap(), 0.0, 0.0);

    assert!(builder.can_undo() && !builder.can_redo());
    builder.undo();
    assert!(builder.can_undo() && builder.can_redo());
    builder.undo();
    assert_eq!(builder.history_index(), 0);
    assert!(!builder.can_undo() && builder.can_redo());
    assert!(!builder.undo());
}

proptest! {
    #[test]
    fn prop_added_ids_are_distinct(count in 1usize..80) {
        let catalog = TemplateCatalog::builtin();
        let template = catalog.get("round-table-2").unwrap();
        let mut builder = FloorplanBuilder::new();
        let ids: HashSet<String> = (0..count)
            .map(|i| builder.add_element(template, i as f64, i as f64))
            .collect();
        prop_assert_eq!(ids.len(), count);
    }

    #[test]
    fn prop_undo_then_redo_round_trips(ops in prop::collection::vec(0u8..5, 1..30)) {
        let catalog = TemplateCatalog::builtin();
        let template = catalog.get("booth-4").unwrap();
        let mut builder = FloorplanBuilder::new();

        for op in ops {
            let target = builder.elements().first().map(|e| e.id.clone());
            let before = builder.elements().to_vec();
            match (op, target) {
                (0, _) | (_, None) => {
                    builder.add_element(template, 10.0, 10.0);
                }
                (1, Some(id)) => {
                    builder.delete_element(&id);
                }
                (2, Some(id)) => {
                    builder.duplicate_element(&id);
                }
                (3, Some(id)) => {
                    builder.bring_to_front(&id);
                }
                (_, Some(id)) => {
                    builder.rotate_element(&id, 45.0);
                }
            }
            let after = builder.elements().to_vec();

            if builder.can_undo() {
                builder.undo();
                prop_assert_eq!(builder.elements(), before.as_slice());
                builder.redo();
                prop_assert_eq!(builder.elements(), after.as_slice());
            }
        }
    }
}
