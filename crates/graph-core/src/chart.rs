// File: crates/graph-core/src/chart.rs
// Summary: Redraw orchestrator: owns bounds and artifact lifecycle, emits surface instructions.

use crate::bounds::{AxisBounds, BoundsError};
use crate::grid::tick_positions;
use crate::parse::{parse, LinearFn, ParseError};
use crate::sample::Samples;
use crate::scale::Mapper;
use crate::surface::{ArtifactTag, Shape, Surface};
use crate::types::Frame;

/// A single-function line chart over a fixed pixel frame.
///
/// The chart owns the visible [`AxisBounds`] and the artifact lifecycle on
/// the surface. All mutation happens through [`Chart::plot`] and
/// [`Chart::update_bounds`]; each runs to completion before the next, so no
/// artifact is ever observed half-updated.
pub struct Chart {
    frame: Frame,
    bounds: AxisBounds,
    current: Option<LinearFn>,
}

impl Chart {
    /// Chart over `frame` with the default [0, 10] x [0, 10] window.
    /// Call [`Chart::refresh`] to draw the initial axes and gridlines.
    pub fn new(frame: Frame) -> Self {
        Self { frame, bounds: AxisBounds::default(), current: None }
    }

    /// The bounds currently in effect.
    pub fn bounds(&self) -> AxisBounds {
        self.bounds
    }

    /// The last successfully parsed function, if any.
    pub fn current(&self) -> Option<LinearFn> {
        self.current
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Parse `input` and redraw the function line over the current window.
    ///
    /// Plot-only path: axes and gridlines stay untouched; only the
    /// `FunctionLine` artifact is replaced. The raw input is echoed back
    /// before parsing. On a parse failure the stale line is removed so the
    /// surface never shows a trace inconsistent with the echoed text, the
    /// user is notified, and no other state changes.
    pub fn plot(&mut self, surface: &mut dyn Surface, input: &str) -> Result<LinearFn, ParseError> {
        surface.echo(input);
        match parse(input) {
            Ok(f) => {
                self.current = Some(f);
                self.draw_line(surface, f);
                Ok(f)
            }
            Err(e) => {
                self.current = None;
                surface.remove(ArtifactTag::FunctionLine);
                surface.notify(&e.to_string());
                Err(e)
            }
        }
    }

    /// Atomically replace the visible window and redraw everything.
    ///
    /// Validation happens before any mutation: on error the previous bounds
    /// and every artifact stay exactly as they were. On success every pixel
    /// position is stale, so the full-refresh path runs unconditionally.
    pub fn update_bounds(
        &mut self,
        surface: &mut dyn Surface,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> Result<(), BoundsError> {
        let bounds = match AxisBounds::new(x_min, x_max, y_min, y_max) {
            Ok(b) => b,
            Err(e) => {
                surface.notify(&e.to_string());
                return Err(e);
            }
        };
        self.bounds = bounds;
        self.refresh(surface);
        Ok(())
    }

    /// Full refresh: clear every tagged artifact, then redraw in fixed
    /// order: x-axis, y-axis, x-gridlines, y-gridlines, function line (the
    /// last only when a parsed function is current).
    pub fn refresh(&mut self, surface: &mut dyn Surface) {
        for tag in ArtifactTag::DRAW_ORDER {
            surface.remove(tag);
        }

        let m = Mapper::new(self.bounds, self.frame);
        let (left, right) = (self.frame.plot_left(), self.frame.plot_right());
        let (top, bottom) = (self.frame.plot_top(), self.frame.plot_bottom());

        let axis_y = m.x_axis_pixel_y();
        surface.draw(
            ArtifactTag::XAxis,
            Shape::Segment { from: (left, axis_y), to: (right, axis_y) },
        );
        let axis_x = m.y_axis_pixel_x();
        surface.draw(
            ArtifactTag::YAxis,
            Shape::Segment { from: (axis_x, top), to: (axis_x, bottom) },
        );

        let verticals = tick_positions(self.bounds.x_min, self.bounds.x_max)
            .into_iter()
            .map(|x| {
                let px = m.map_x(x);
                [(px, top), (px, bottom)]
            })
            .collect();
        surface.draw(ArtifactTag::XGridlines, Shape::Segments(verticals));

        let horizontals = tick_positions(self.bounds.y_min, self.bounds.y_max)
            .into_iter()
            .map(|y| {
                let py = m.map_y(y);
                [(left, py), (right, py)]
            })
            .collect();
        surface.draw(ArtifactTag::YGridlines, Shape::Segments(horizontals));

        if let Some(f) = self.current {
            self.draw_line(surface, f);
        }
    }

    /// Replace the `FunctionLine` artifact with a freshly sampled trace.
    /// Remove-before-draw keeps at most one line on the surface.
    fn draw_line(&self, surface: &mut dyn Surface, f: LinearFn) {
        let m = Mapper::new(self.bounds, self.frame);
        let points = Samples::unit(f, self.bounds.x_min, self.bounds.x_max)
            .map(|p| (m.map_x(p.x), m.map_y(p.y)))
            .collect();
        surface.remove(ArtifactTag::FunctionLine);
        surface.draw(ArtifactTag::FunctionLine, Shape::Polyline(points));
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(Frame::default())
    }
}
