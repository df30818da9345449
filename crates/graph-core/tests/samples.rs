// File: crates/graph-core/tests/samples.rs
// Purpose: Validate sample-point generation: coverage, determinism, restartability.

use graph_core::{LinearFn, PlotPoint, Samples};

#[test]
fn unit_samples_cover_the_window() {
    let pts: Vec<PlotPoint> = Samples::unit(LinearFn::new(2.0, 1.0), 0.0, 10.0).collect();
    assert_eq!(pts.len(), 11);
    assert_eq!(pts[0], PlotPoint { x: 0.0, y: 1.0 });
    assert_eq!(pts[1], PlotPoint { x: 1.0, y: 3.0 });
    assert_eq!(pts[10], PlotPoint { x: 10.0, y: 21.0 });
    for (i, p) in pts.iter().enumerate() {
        assert_eq!(p.x, i as f64);
        assert_eq!(p.y, 2.0 * p.x + 1.0);
    }
}

#[test]
fn fractional_span_rounds_point_count_up() {
    // ceil(2.5) + 1 points starting at x_min.
    let pts: Vec<PlotPoint> = Samples::unit(LinearFn::new(1.0, 0.0), 0.0, 2.5).collect();
    assert_eq!(pts.len(), 4);
    assert_eq!(pts.last().map(|p| p.x), Some(3.0));
}

#[test]
fn negative_window_starts_at_x_min() {
    let pts: Vec<PlotPoint> = Samples::unit(LinearFn::new(1.0, 0.0), -3.0, 3.0).collect();
    assert_eq!(pts.len(), 7);
    assert_eq!(pts[0].x, -3.0);
    assert_eq!(pts[6].x, 3.0);
}

#[test]
fn samples_are_restartable_and_deterministic() {
    let s = Samples::unit(LinearFn::new(-0.5, 4.0), 0.0, 8.0);
    let first: Vec<PlotPoint> = s.collect();
    let second: Vec<PlotPoint> = s.collect();
    assert_eq!(first, second);
}

#[test]
fn size_hint_is_exact() {
    let mut s = Samples::unit(LinearFn::new(1.0, 0.0), 0.0, 10.0);
    assert_eq!(s.len(), 11);
    s.next();
    s.next();
    assert_eq!(s.len(), 9);
}

#[test]
fn custom_step_spaces_points() {
    let pts: Vec<PlotPoint> = Samples::new(LinearFn::new(1.0, 0.0), 0.0, 4.0, 0.5).collect();
    // Point count follows the window span; step only sets spacing.
    assert_eq!(pts.len(), 5);
    assert_eq!(pts[1].x, 0.5);
}
