use plotters::prelude::*;
use plotters::coord::types::RangedCoordf64;

use crate::{
    common::{
        constants::{DASHES_PER_LINE, PLOT_WIDTH, PLOT_HEIGHT},
        MiniLearnError,
        Result,
    },
    DecisionTree,
    Sample,
};
use super::canvas::{SplitCanvas, dashes};

use std::fmt;
use std::path::Path;


/// The chart type [`PlotCanvas`] draws on.
pub type Chart2d<'b, DB> =
    ChartContext<'b, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;


/// A [`SplitCanvas`] that draws on a `plotters` chart
/// with `f64` coordinates.
/// Each dashed line is drawn as a series of short segments.
/// 
/// # Example
/// ```no_run
/// use plotters::prelude::*;
/// use minilearn::prelude::*;
/// 
/// # fn run(tree: &DecisionTree) -> minilearn::Result<()> {
/// let root = SVGBackend::new("tree.svg", (640, 480)).into_drawing_area();
/// let mut chart = ChartBuilder::on(&root)
///     .build_cartesian_2d(0f64..1f64, 0f64..1f64)
///     .unwrap();
/// let mut canvas = PlotCanvas::new(&mut chart)
///     .style(BLACK.stroke_width(2));
/// tree.draw_splits(&mut canvas, (0.0, 1.0), (0.0, 1.0))?;
/// # Ok(())
/// # }
/// ```
pub struct PlotCanvas<'a, 'b, DB: DrawingBackend> {
    chart: &'a mut Chart2d<'b, DB>,
    style: ShapeStyle,
    n_dashes: usize,
}


impl<'a, 'b, DB: DrawingBackend> PlotCanvas<'a, 'b, DB> {
    /// Construct a new canvas that draws cyan dashed lines on `chart`.
    pub fn new(chart: &'a mut Chart2d<'b, DB>) -> Self {
        Self {
            chart,
            style: CYAN.stroke_width(1),
            n_dashes: DASHES_PER_LINE,
        }
    }


    /// Set the line style.
    pub fn style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }


    /// Set the number of dashes per line.
    /// Default value is `40`.
    pub fn n_dashes(mut self, n_dashes: usize) -> Self {
        self.n_dashes = n_dashes;
        self
    }
}


impl<DB: DrawingBackend> SplitCanvas for PlotCanvas<'_, '_, DB> {
    fn dashed_line(&mut self, from: (f64, f64), to: (f64, f64)) -> Result<()> {
        let style = self.style;
        let pieces = dashes(from, to, self.n_dashes);
        self.chart
            .draw_series(
                pieces.into_iter()
                    .map(|(start, end)| PathElement::new(vec![start, end], style))
            )
            .map_err(drawing_error)?;
        Ok(())
    }
}


/// Writes an SVG file to `path` that shows
/// the examples of a 2D `sample` (red if the label is positive,
/// blue otherwise) and the splits of `tree` over
/// the rectangle `x_range x y_range`.
/// 
/// Returns `Err` if `sample` or the training sample of `tree`
/// does not have exactly 2 features.
pub fn render_partition<P>(
    path: P,
    tree: &DecisionTree,
    sample: &Sample,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Result<()>
    where P: AsRef<Path>,
{
    let n_feature = sample.shape().1;
    if !sample.is_empty() && n_feature != 2 {
        return Err(MiniLearnError::DimensionMismatch {
            expected: 2,
            got: n_feature,
        });
    }
    match tree.n_feature() {
        Some(tree_feature) if tree_feature != 2 => {
            return Err(MiniLearnError::DimensionMismatch {
                expected: 2,
                got: tree_feature,
            });
        },
        _ => {},
    }

    let root = SVGBackend::new(path.as_ref(), (PLOT_WIDTH, PLOT_HEIGHT))
        .into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)
        .map_err(drawing_error)?;
    chart.configure_mesh()
        .draw()
        .map_err(drawing_error)?;

    chart
        .draw_series(
            sample.rows()
                .zip(sample.target())
                .map(|(x, &y)| {
                    let color = if y > 0f64 { RED } else { BLUE };
                    Circle::new((x[0], x[1]), 3, color.filled())
                })
        )
        .map_err(drawing_error)?;

    let mut canvas = PlotCanvas::new(&mut chart);
    tree.draw_splits(&mut canvas, x_range, y_range)?;

    root.present().map_err(drawing_error)?;
    log::info!("wrote the partition to {}", path.as_ref().display());
    Ok(())
}


#[inline]
fn drawing_error<E: fmt::Display>(error: E) -> MiniLearnError {
    MiniLearnError::Drawing(error.to_string())
}
