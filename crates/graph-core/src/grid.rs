// File: crates/graph-core/src/grid.rs
// Summary: Gridline tick layout helpers.

/// Number of gridline intervals per axis.
pub const GRID_INTERVALS: usize = 10;

/// Evenly spaced values covering `[start, end]` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Domain positions of the gridlines spanning `[min, max]`.
pub fn tick_positions(min: f64, max: f64) -> Vec<f64> {
    linspace(min, max, GRID_INTERVALS + 1)
}
