// File: crates/graph-core/src/types.rs
// Summary: Shared types and constants (plot size, margins, pixel frame).

/// Default plot-area width in pixels.
pub const WIDTH: i32 = 600;
/// Default plot-area height in pixels.
pub const HEIGHT: i32 = 400;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(50, 30, 20, 50)
    }
}

/// Fixed pixel extents of the drawing surface: the plot-area size plus the
/// margins offsetting it from the surface origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
}

impl Frame {
    pub const fn new(width: i32, height: i32, insets: Insets) -> Self {
        Self { width, height, insets }
    }

    /// Left pixel edge of the plot rectangle.
    pub fn plot_left(&self) -> f64 { self.insets.left as f64 }
    /// Right pixel edge of the plot rectangle.
    pub fn plot_right(&self) -> f64 { self.insets.left as f64 + self.width as f64 }
    /// Top pixel edge of the plot rectangle.
    pub fn plot_top(&self) -> f64 { self.insets.top as f64 }
    /// Bottom pixel edge of the plot rectangle.
    pub fn plot_bottom(&self) -> f64 { self.insets.top as f64 + self.height as f64 }

    pub fn plot_width(&self) -> f64 { self.width as f64 }
    pub fn plot_height(&self) -> f64 { self.height as f64 }

    /// Total surface width including margins.
    pub const fn surface_width(&self) -> i32 { self.width + self.insets.hsum() as i32 }
    /// Total surface height including margins.
    pub const fn surface_height(&self) -> i32 { self.height + self.insets.vsum() as i32 }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}
