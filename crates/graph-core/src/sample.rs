// File: crates/graph-core/src/sample.rs
// Summary: Lazy sample-point generator for the function trace.

use crate::parse::LinearFn;

/// A single data point in domain coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Finite, restartable iterator of `(x, y)` samples for a linear function.
///
/// Yields `ceil(x_max - x_min) + 1` points starting at `x_min`, advancing by
/// `step`. Pure over its inputs: cloning restarts the sequence, and the same
/// arguments always produce the same points. Regenerated on every redraw,
/// never cached across bounds changes.
#[derive(Clone, Copy, Debug)]
pub struct Samples {
    f: LinearFn,
    x_min: f64,
    step: f64,
    next: usize,
    count: usize,
}

impl Samples {
    /// Samples of `f` across `[x_min, x_max]` at the given step.
    pub fn new(f: LinearFn, x_min: f64, x_max: f64, step: f64) -> Self {
        let span = (x_max - x_min).max(0.0);
        let count = span.ceil() as usize + 1;
        Self { f, x_min, step, next: 0, count }
    }

    /// Unit-step samples, the redraw default.
    pub fn unit(f: LinearFn, x_min: f64, x_max: f64) -> Self {
        Self::new(f, x_min, x_max, 1.0)
    }
}

impl Iterator for Samples {
    type Item = PlotPoint;

    fn next(&mut self) -> Option<PlotPoint> {
        if self.next >= self.count {
            return None;
        }
        let x = self.x_min + self.step * self.next as f64;
        self.next += 1;
        Some(PlotPoint { x, y: self.f.eval(x) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Samples {}
