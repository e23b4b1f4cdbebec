use crate::common::Result;


/// A 2D surface that accepts dashed line segments.
pub trait SplitCanvas {
    /// Draws a dashed straight segment from `from` to `to`.
    fn dashed_line(&mut self, from: (f64, f64), to: (f64, f64)) -> Result<()>;
}


/// A line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// One end point.
    pub from: (f64, f64),
    /// The other end point.
    pub to: (f64, f64),
}


impl Segment {
    /// Returns `true` if both end points share the `x` coordinate.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.from.0 == self.to.0
    }


    /// Returns `true` if both end points share the `y` coordinate.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.from.1 == self.to.1
    }
}


/// A canvas that records the segments in drawing order.
#[derive(Debug, Clone, Default)]
pub struct SegmentRecorder {
    segments: Vec<Segment>,
}


impl SegmentRecorder {
    /// Construct an empty recorder.
    pub fn new() -> Self {
        Self { segments: Vec::new(), }
    }


    /// Returns the recorded segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments[..]
    }


    /// Returns the recorded segments, consuming `self`.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}


impl SplitCanvas for SegmentRecorder {
    fn dashed_line(&mut self, from: (f64, f64), to: (f64, f64)) -> Result<()> {
        self.segments.push(Segment { from, to });
        Ok(())
    }
}


/// Cuts the segment `from -> to` into `n` dashes of equal length
/// separated by gaps of the same length.
pub(crate) fn dashes(from: (f64, f64), to: (f64, f64), n: usize)
    -> Vec<((f64, f64), (f64, f64))>
{
    let n = n.max(1);
    let pieces = (2 * n - 1) as f64;
    let (dx, dy) = ((to.0 - from.0) / pieces, (to.1 - from.1) / pieces);

    (0..n).map(|k| {
            let s = (2 * k) as f64;
            let start = (from.0 + s * dx, from.1 + s * dy);
            let end = (from.0 + (s + 1f64) * dx, from.1 + (s + 1f64) * dy);
            (start, end)
        })
        .collect()
}
