use floorkit_builder::{BuilderOptions, FloorplanBuilder};

#[test]
fn test_snap_rounds_to_nearest() {
    let builder = FloorplanBuilder::new();
    assert_eq!(builder.canvas().grid_size(), 20.0);
    assert_eq!(builder.snap_value(23.0), 20.0);
    assert_eq!(builder.snap_value(33.0), 40.0);
    assert_eq!(builder.snap_value(-23.0), -20.0);
}

#[test]
fn test_snap_disabled_is_identity() {
    let mut builder = FloorplanBuilder::new();
    builder.toggle_snap();
    for v in [-17.3, 0.0, 23.0, 33.0, 1e9] {
        assert_eq!(builder.snap_value(v), v);
    }
}

#[test]
fn test_zoom_in_saturates_at_max() {
    let mut builder = FloorplanBuilder::new();
    for _ in 0..100 {
        builder.zoom_in();
    }
    assert_eq!(builder.canvas().zoom(), 5.0);
    builder.zoom_in();
    assert_eq!(builder.canvas().zoom(), 5.0);
}

#[test]
fn test_zoom_out_saturates_at_min() {
    let mut builder = FloorplanBuilder::new();
    for _ in 0..100 {
        builder.zoom_out();
    }
    assert_eq!(builder.canvas().zoom(), 0.2);
}

#[test]
fn test_zoom_step_and_reset() {
    let mut builder = FloorplanBuilder::new();
    builder.zoom_in();
    assert!((builder.canvas().zoom() - 1.2).abs() < 1e-9);
    builder.reset_zoom();
    assert_eq!(builder.canvas().zoom(), 1.0);
    builder.set_zoom(2.5);
    assert_eq!(builder.canvas().zoom(), 2.5);
}

#[test]
fn test_options_drive_canvas() {
    let options = BuilderOptions {
        grid_size: 25.0,
        snap_to_grid: false,
        show_grid: false,
        max_zoom: 3.0,
        ..BuilderOptions::default()
    };
    let mut builder = FloorplanBuilder::with_options(options);
    assert_eq!(builder.canvas().grid_size(), 25.0);
    assert!(!builder.canvas().snap_to_grid());
    assert!(!builder.canvas().show_grid());
    builder.set_zoom(10.0);
    assert_eq!(builder.canvas().zoom(), 3.0);
}
