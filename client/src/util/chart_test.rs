use super::*;

// =============================================================
// nice_ceiling
// =============================================================

#[test]
fn nice_ceiling_keeps_round_values() {
    assert_eq!(nice_ceiling(200.0), 200.0);
    assert_eq!(nice_ceiling(100.0), 100.0);
    assert_eq!(nice_ceiling(5.0), 5.0);
}

#[test]
fn nice_ceiling_rounds_up_to_step() {
    assert_eq!(nice_ceiling(120.0), 200.0);
    assert_eq!(nice_ceiling(201.0), 500.0);
    assert_eq!(nice_ceiling(730.0), 1000.0);
    assert_eq!(nice_ceiling(0.3), 0.5);
}

#[test]
fn nice_ceiling_handles_degenerate_input() {
    assert_eq!(nice_ceiling(0.0), 1.0);
    assert_eq!(nice_ceiling(-5.0), 1.0);
    assert_eq!(nice_ceiling(f64::NAN), 1.0);
}

// =============================================================
// ChartGeometry
// =============================================================

#[test]
fn default_layout_plot_area() {
    let layout = ChartLayout::default();
    assert_eq!(layout.plot_width(), 568.0);
    assert_eq!(layout.plot_height(), 240.0);
    assert_eq!(layout.baseline(), 256.0);
}

#[test]
fn x_at_spreads_categories_edge_to_edge() {
    let geo = ChartGeometry::new(ChartLayout::default(), 5, 200.0);
    assert_eq!(geo.x_at(0), 48.0);
    assert_eq!(geo.x_at(2), 332.0);
    assert_eq!(geo.x_at(4), 616.0);
}

#[test]
fn x_at_centers_single_category() {
    let geo = ChartGeometry::new(ChartLayout::default(), 1, 10.0);
    assert_eq!(geo.x_at(0), 332.0);
}

#[test]
fn y_at_maps_top_down_and_clamps() {
    let geo = ChartGeometry::new(ChartLayout::default(), 5, 200.0);
    assert_eq!(geo.y_at(200.0), 16.0);
    assert_eq!(geo.y_at(100.0), 136.0);
    assert_eq!(geo.y_at(0.0), 256.0);
    assert_eq!(geo.y_at(-10.0), 256.0);
    assert_eq!(geo.y_at(999.0), 16.0);
}

#[test]
fn points_attr_formats_pairs() {
    let geo = ChartGeometry::new(ChartLayout::default(), 2, 200.0);
    assert_eq!(geo.points_attr(&[0.0, 200.0]), "48.0,256.0 616.0,16.0");
    assert_eq!(geo.points_attr(&[]), "");
}

#[test]
fn y_ticks_are_evenly_spaced() {
    let geo = ChartGeometry::new(ChartLayout::default(), 5, 200.0);
    assert_eq!(geo.y_ticks(4), vec![0.0, 50.0, 100.0, 150.0, 200.0]);
    assert_eq!(geo.y_ticks(0), vec![0.0, 200.0]);
}
