// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports the parse/bounds/redraw API.

pub mod bounds;
pub mod chart;
pub mod grid;
pub mod parse;
pub mod sample;
pub mod scale;
pub mod surface;
pub mod types;

pub use bounds::{AxisBounds, AxisKind, BoundsError};
pub use chart::Chart;
pub use parse::{parse, LinearFn, ParseError};
pub use sample::{PlotPoint, Samples};
pub use scale::Mapper;
pub use surface::{ArtifactTag, Recorder, Shape, Surface, SurfaceOp};
pub use types::{Frame, Insets, HEIGHT, WIDTH};
