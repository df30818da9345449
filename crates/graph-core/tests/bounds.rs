// File: crates/graph-core/tests/bounds.rs
// Purpose: Validate bounds construction, ordering checks, and zero-crossing queries.

use graph_core::{AxisBounds, AxisKind, BoundsError};

#[test]
fn default_window_is_zero_to_ten() {
    let b = AxisBounds::default();
    assert_eq!((b.x_min, b.x_max, b.y_min, b.y_max), (0.0, 10.0, 0.0, 10.0));
}

#[test]
fn ordered_bounds_are_accepted() {
    let b = AxisBounds::new(-5.0, 5.0, -1.0, 1.0).expect("ordered bounds");
    assert_eq!(b.x_span(), 10.0);
    assert_eq!(b.y_span(), 2.0);
}

#[test]
fn inverted_bounds_are_rejected_per_axis() {
    assert_eq!(
        AxisBounds::new(10.0, 0.0, 0.0, 10.0),
        Err(BoundsError::Inverted { axis: AxisKind::X, min: 10.0, max: 0.0 })
    );
    assert_eq!(
        AxisBounds::new(0.0, 10.0, 3.0, -3.0),
        Err(BoundsError::Inverted { axis: AxisKind::Y, min: 3.0, max: -3.0 })
    );
}

#[test]
fn zero_width_domain_is_its_own_error() {
    assert_eq!(
        AxisBounds::new(4.0, 4.0, 0.0, 10.0),
        Err(BoundsError::ZeroWidthDomain { axis: AxisKind::X, at: 4.0 })
    );
    assert_eq!(
        AxisBounds::new(0.0, 10.0, -2.0, -2.0),
        Err(BoundsError::ZeroWidthDomain { axis: AxisKind::Y, at: -2.0 })
    );
}

#[test]
fn nan_endpoints_are_rejected() {
    assert!(AxisBounds::new(f64::NAN, 1.0, 0.0, 1.0).is_err());
    assert!(AxisBounds::new(0.0, 1.0, 0.0, f64::NAN).is_err());
}

#[test]
fn zero_crossing_queries_include_endpoints() {
    let b = AxisBounds::new(0.0, 10.0, -5.0, 5.0).expect("valid bounds");
    assert!(b.x_crosses_zero());
    assert!(b.y_crosses_zero());

    let b = AxisBounds::new(1.0, 10.0, -5.0, -1.0).expect("valid bounds");
    assert!(!b.x_crosses_zero());
    assert!(!b.y_crosses_zero());
}
