// File: crates/graph-core/src/bounds.rs
// Summary: Visible-domain bounds model with ordering validation.

use thiserror::Error;

/// Which axis a bounds violation was detected on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

impl std::fmt::Display for AxisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisKind::X => write!(f, "x"),
            AxisKind::Y => write!(f, "y"),
        }
    }
}

/// Rejected bounds update. The previous bounds stay in effect.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum BoundsError {
    #[error("{axis}-axis bounds are inverted: min {min} exceeds max {max}")]
    Inverted { axis: AxisKind, min: f64, max: f64 },
    #[error("{axis}-axis bounds span zero width at {at}")]
    ZeroWidthDomain { axis: AxisKind, at: f64 },
}

/// The currently visible x/y window of the chart.
/// Invariant: `x_min < x_max` and `y_min < y_max` (enforced by [`AxisBounds::new`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisBounds {
    /// Validate and construct bounds. A zero-width span is reported as its
    /// own error kind rather than folded into inversion.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, BoundsError> {
        check_span(AxisKind::X, x_min, x_max)?;
        check_span(AxisKind::Y, y_min, y_max)?;
        Ok(Self { x_min, x_max, y_min, y_max })
    }

    pub fn x_span(&self) -> f64 { self.x_max - self.x_min }
    pub fn y_span(&self) -> f64 { self.y_max - self.y_min }

    /// Whether the value 0 lies inside the x window.
    pub fn x_crosses_zero(&self) -> bool {
        self.x_min <= 0.0 && 0.0 <= self.x_max
    }

    /// Whether the value 0 lies inside the y window.
    pub fn y_crosses_zero(&self) -> bool {
        self.y_min <= 0.0 && 0.0 <= self.y_max
    }
}

impl Default for AxisBounds {
    /// The initial [0, 10] x [0, 10] window.
    fn default() -> Self {
        Self { x_min: 0.0, x_max: 10.0, y_min: 0.0, y_max: 10.0 }
    }
}

fn check_span(axis: AxisKind, min: f64, max: f64) -> Result<(), BoundsError> {
    if min == max {
        return Err(BoundsError::ZeroWidthDomain { axis, at: min });
    }
    // Also rejects NaN endpoints, which fail every ordering comparison.
    if !(min < max) {
        return Err(BoundsError::Inverted { axis, min, max });
    }
    Ok(())
}
