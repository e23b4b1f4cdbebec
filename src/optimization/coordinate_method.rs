use crate::common::{MiniLearnError, Result};
use crate::common::constants::DEFAULT_HORIZON;
use super::coordinate::CoordinateSelector;
use super::trace::Trace;
use super::progress;

use std::time::{Duration, Instant};


/// A coordinate method.
/// At each iteration `it = 0, 1, ..., horizon - 1`,
/// the driver asks the selector for a coordinate `i` and
/// sets `alpha[i] = update(alpha, i, it)`.
/// 
/// The update oracle decides whether this is a coordinate descent,
/// ascent, minimization or maximization method.
/// 
/// # Example
/// Minimize `f(x) = x_0^2 + x_1^2` by exact coordinate minimization.
/// ```
/// use minilearn::optimization::{CoordinateMethod, Cyclic};
/// 
/// let update = |_alpha: &[f64], _i: usize, _it: usize| 0.0;
/// let objective = |alpha: &[f64]| alpha.iter().map(|a| a * a).sum();
/// let selector = Cyclic::new(2).unwrap();
/// let trace = CoordinateMethod::new(update, selector, objective)
///     .horizon(2)
///     .run(vec![1.0, 1.0])
///     .unwrap();
/// 
/// assert_eq!(&[0.0, 0.0], trace.model());
/// ```
pub struct CoordinateMethod<U, C, F> {
    update: U,
    selector: C,
    objective: F,
    horizon: usize,
    verbose: bool,
}


impl<U, C, F> CoordinateMethod<U, C, F>
    where U: Fn(&[f64], usize, usize) -> f64,
          C: CoordinateSelector,
          F: Fn(&[f64]) -> f64,
{
    /// Construct a new instance of `CoordinateMethod`
    /// that runs `10` iterations by default.
    pub fn new(update: U, selector: C, objective: F) -> Self {
        Self {
            update,
            selector,
            objective,
            horizon: DEFAULT_HORIZON,
            verbose: false,
        }
    }


    /// Set the number of iterations.
    pub fn horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }


    /// Print the progress table to stdout if `flag` is `true`.
    pub fn verbose(mut self, flag: bool) -> Self {
        self.verbose = flag;
        self
    }


    /// Run the coordinate method from `init`.
    /// The selector keeps its state across calls.
    /// 
    /// Returns an error if the selector returns a coordinate
    /// out of the range of `init`.
    pub fn run(&mut self, init: Vec<f64>) -> Result<Trace> {
        let dim = init.len();
        let mut alpha = init;

        let mut objective_values = Vec::with_capacity(self.horizon);
        let mut elapsed = Vec::with_capacity(self.horizon);
        let mut total = Duration::ZERO;

        log::info!(
            "coordinate method: dim = {dim}, horizon = {}",
            self.horizon,
        );
        if self.verbose {
            progress::print_header("Coordinate method", self.horizon);
        }

        for it in 0..self.horizon {
            let now = Instant::now();

            let i = self.selector.next_coordinate();
            if i >= dim {
                return Err(MiniLearnError::CoordinateOutOfRange {
                    coordinate: i,
                    dim,
                });
            }
            alpha[i] = (self.update)(&alpha[..], i, it);

            total += now.elapsed();

            let value = (self.objective)(&alpha[..]);
            log::debug!("iteration {it}: coordinate = {i}, objective = {value}");

            if self.verbose {
                progress::print_row(it + 1, value, total);
            }
            objective_values.push(value);
            elapsed.push(total);
        }

        if self.verbose {
            progress::print_footer();
        }

        Ok(Trace::new(alpha, objective_values, elapsed))
    }
}
