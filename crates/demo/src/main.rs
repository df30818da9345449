// File: crates/demo/src/main.rs
// Summary: Demo drives plot and bounds-update flows and prints the surface instruction log.

use anyhow::Result;
use graph_core::{Chart, Frame, Recorder, SurfaceOp};

fn main() -> Result<()> {
    // Expression from CLI or a sample line
    let input = std::env::args().nth(1).unwrap_or_else(|| "y = 2x + 3".to_string());

    let mut chart = Chart::new(Frame::default());
    let mut surface = Recorder::new();

    // Initial axes and gridlines over the default [0, 10] x [0, 10] window
    chart.refresh(&mut surface);

    let f = chart.plot(&mut surface, &input)?;
    println!("Plotted: {input}  (slope {}, intercept {})", f.slope, f.intercept);

    // Widen the window; every artifact is redrawn against the new mapping
    chart.update_bounds(&mut surface, -10.0, 10.0, -25.0, 25.0)?;
    println!("Bounds now {:?}", chart.bounds());

    println!("\nSurface instruction log ({} ops):", surface.ops.len());
    for op in &surface.ops {
        match op {
            SurfaceOp::Remove(tag) => println!("  remove {tag:?}"),
            SurfaceOp::Draw(tag, shape) => println!("  draw   {tag:?}: {}", describe(shape)),
            SurfaceOp::Echo(text) => println!("  echo   {text:?}"),
            SurfaceOp::Notify(msg) => println!("  notify {msg:?}"),
        }
    }
    Ok(())
}

fn describe(shape: &graph_core::Shape) -> String {
    match shape {
        graph_core::Shape::Segment { from, to } => {
            format!("segment ({:.1}, {:.1}) -> ({:.1}, {:.1})", from.0, from.1, to.0, to.1)
        }
        graph_core::Shape::Segments(lines) => format!("{} gridlines", lines.len()),
        graph_core::Shape::Polyline(pts) => format!("polyline with {} points", pts.len()),
    }
}
