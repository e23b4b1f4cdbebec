//! Draws the partition of the plane made by a decision tree.
//! 
//! [`SplitCanvas`] is the only thing a tree needs from a drawing surface.
//! [`SegmentRecorder`] keeps the segments in memory and
//! [`PlotCanvas`] draws them on a `plotters` chart.

/// Defines the drawing surface trait.
pub mod canvas;
/// Defines the `plotters` backed canvas.
pub mod plot;

pub use canvas::{SplitCanvas, Segment, SegmentRecorder};
pub use plot::{PlotCanvas, render_partition};
