// File: crates/graph-core/src/surface.rs
// Summary: Drawing-surface protocol (tagged artifacts) and a recording implementation.

use std::collections::BTreeMap;

/// Role of a visual element on the surface. At most one artifact per tag is
/// ever live; the orchestrator removes the prior artifact before drawing a
/// replacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ArtifactTag {
    XAxis,
    YAxis,
    XGridlines,
    YGridlines,
    FunctionLine,
}

impl ArtifactTag {
    /// All tags, in the fixed full-refresh draw order.
    pub const DRAW_ORDER: [ArtifactTag; 5] = [
        ArtifactTag::XAxis,
        ArtifactTag::YAxis,
        ArtifactTag::XGridlines,
        ArtifactTag::YGridlines,
        ArtifactTag::FunctionLine,
    ];
}

/// Geometry of one artifact, in surface pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A single straight segment (axes).
    Segment { from: (f64, f64), to: (f64, f64) },
    /// A batch of parallel segments (gridlines).
    Segments(Vec<[(f64, f64); 2]>),
    /// A connected point sequence (the function trace).
    Polyline(Vec<(f64, f64)>),
}

/// The external drawing surface the chart emits instructions to.
///
/// Implementations own the actual rendering (SVG, canvas, raster); this
/// crate only decides what is stale and what to draw in which order.
pub trait Surface {
    /// Remove the artifact with this tag, if present. Removing an absent
    /// tag is a no-op.
    fn remove(&mut self, tag: ArtifactTag);
    /// Draw a new artifact under this tag.
    fn draw(&mut self, tag: ArtifactTag, shape: Shape);
    /// Display the raw input text back to the user.
    fn echo(&mut self, text: &str);
    /// Show a blocking user notification (parse/bounds failures).
    fn notify(&mut self, message: &str);
}

/// One recorded surface instruction, in emission order.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    Remove(ArtifactTag),
    Draw(ArtifactTag, Shape),
    Echo(String),
    Notify(String),
}

/// A [`Surface`] that records the instruction stream and tracks which
/// artifacts are live. Used by the tests and the demo driver.
#[derive(Debug, Default)]
pub struct Recorder {
    pub ops: Vec<SurfaceOp>,
    live: BTreeMap<ArtifactTag, Shape>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live artifacts carrying `tag` (0 or 1 when the remove-
    /// before-draw discipline holds).
    pub fn live_count(&self, tag: ArtifactTag) -> usize {
        usize::from(self.live.contains_key(&tag))
    }

    /// Shape of the live artifact under `tag`, if any.
    pub fn live_shape(&self, tag: ArtifactTag) -> Option<&Shape> {
        self.live.get(&tag)
    }

    /// Tags of draw instructions, in emission order.
    pub fn draw_sequence(&self) -> Vec<ArtifactTag> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Draw(tag, _) => Some(*tag),
                _ => None,
            })
            .collect()
    }

    /// Last notification message, if any was emitted.
    pub fn last_notification(&self) -> Option<&str> {
        self.ops.iter().rev().find_map(|op| match op {
            SurfaceOp::Notify(m) => Some(m.as_str()),
            _ => None,
        })
    }
}

impl Surface for Recorder {
    fn remove(&mut self, tag: ArtifactTag) {
        self.live.remove(&tag);
        self.ops.push(SurfaceOp::Remove(tag));
    }

    fn draw(&mut self, tag: ArtifactTag, shape: Shape) {
        self.live.insert(tag, shape.clone());
        self.ops.push(SurfaceOp::Draw(tag, shape));
    }

    fn echo(&mut self, text: &str) {
        self.ops.push(SurfaceOp::Echo(text.to_string()));
    }

    fn notify(&mut self, message: &str) {
        self.ops.push(SurfaceOp::Notify(message.to_string()));
    }
}
