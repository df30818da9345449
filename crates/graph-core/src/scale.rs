// File: crates/graph-core/src/scale.rs
// Summary: Domain-to-pixel affine mapping, rebuilt from live bounds on every refresh.

use crate::bounds::AxisBounds;
use crate::types::Frame;

/// Forward coordinate mapping from domain values to surface pixels.
///
/// Built fresh from the current [`AxisBounds`] and [`Frame`] each time the
/// chart refreshes; holding a `Mapper` across a bounds change would reuse a
/// stale window, so nothing in this crate stores one.
#[derive(Clone, Copy, Debug)]
pub struct Mapper {
    left: f64,
    top: f64,
    plot_w: f64,
    plot_h: f64,
    bounds: AxisBounds,
}

impl Mapper {
    pub fn new(bounds: AxisBounds, frame: Frame) -> Self {
        Self {
            left: frame.plot_left(),
            top: frame.plot_top(),
            plot_w: frame.plot_width(),
            plot_h: frame.plot_height(),
            bounds,
        }
    }

    /// Map a domain x to a pixel x. `map_x(x_min)` is the left plot edge,
    /// `map_x(x_max)` the right.
    #[inline]
    pub fn map_x(&self, x: f64) -> f64 {
        self.left + (x - self.bounds.x_min) / self.bounds.x_span() * self.plot_w
    }

    /// Map a domain y to a pixel y, inverted: larger domain values map to
    /// smaller pixel coordinates.
    #[inline]
    pub fn map_y(&self, y: f64) -> f64 {
        self.top + self.plot_h - (y - self.bounds.y_min) / self.bounds.y_span() * self.plot_h
    }

    /// Pixel y of the horizontal axis: the zero crossing when 0 is inside
    /// the y window, otherwise the nearest horizontal plot edge.
    pub fn x_axis_pixel_y(&self) -> f64 {
        if self.bounds.y_crosses_zero() {
            self.map_y(0.0)
        } else if self.bounds.y_min > 0.0 {
            self.top + self.plot_h
        } else {
            self.top
        }
    }

    /// Pixel x of the vertical axis: the zero crossing when 0 is inside
    /// the x window, otherwise the nearest vertical plot edge.
    pub fn y_axis_pixel_x(&self) -> f64 {
        if self.bounds.x_crosses_zero() {
            self.map_x(0.0)
        } else if self.bounds.x_min > 0.0 {
            self.left
        } else {
            self.left + self.plot_w
        }
    }
}
