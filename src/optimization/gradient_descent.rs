use crate::common::{checker, Result};
use crate::common::constants::DEFAULT_HORIZON;
use super::step_length::StepOracle;
use super::trace::Trace;
use super::progress;

use std::time::{Duration, Instant};


/// A hook applied to the iterate after each gradient step.
/// Receives the iterate and the iteration counter `t >= 1`.
type PostGradient = Box<dyn Fn(Vec<f64>, usize) -> Vec<f64>>;


/// Gradient descent with an optional post-gradient hook and
/// optional model averaging.
/// 
/// At the `t`th iteration (`t = 1, 2, ..., horizon`),
/// the driver computes `delta = gradient(theta, t)` and updates
/// `theta <- theta - step_length(t) * delta`.
/// If a post-gradient hook is set,
/// `theta <- post(theta, t)` follows
/// (e.g., a projection or a thresholding).
/// 
/// With model averaging, the driver keeps the running sum of
/// the iterates (including the initial one) and
/// reports the objective value at the running average.
/// 
/// # Example
/// Minimize `f(x) = (x - 3)^2`.
/// ```
/// use minilearn::optimization::{GradientDescent, StepLength};
/// 
/// let gradient = |x: &[f64], _t: usize| vec![2.0 * (x[0] - 3.0)];
/// let objective = |x: &[f64]| (x[0] - 3.0).powi(2);
/// let trace = GradientDescent::new(
///         gradient, StepLength::Constant(0.25), objective
///     )
///     .horizon(40)
///     .run(&[0.0])
///     .unwrap();
/// 
/// assert!((trace.model()[0] - 3.0).abs() < 1e-6);
/// ```
pub struct GradientDescent<G, S, F> {
    gradient: G,
    step: S,
    objective: F,
    horizon: usize,
    model_averaging: bool,
    post_gradient: Option<PostGradient>,
    verbose: bool,
}


impl<G, S, F> GradientDescent<G, S, F>
    where G: Fn(&[f64], usize) -> Vec<f64>,
          S: StepOracle,
          F: Fn(&[f64]) -> f64,
{
    /// Construct a new instance of `GradientDescent`.
    /// By default, the driver runs `10` iterations
    /// without model averaging or post-gradient hook.
    pub fn new(gradient: G, step: S, objective: F) -> Self {
        Self {
            gradient,
            step,
            objective,
            horizon: DEFAULT_HORIZON,
            model_averaging: false,
            post_gradient: None,
            verbose: false,
        }
    }


    /// Set the number of iterations.
    pub fn horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }


    /// Enable/disable model averaging.
    pub fn model_averaging(mut self, flag: bool) -> Self {
        self.model_averaging = flag;
        self
    }


    /// Set the post-gradient hook.
    pub fn post_gradient<P>(mut self, post: P) -> Self
        where P: Fn(Vec<f64>, usize) -> Vec<f64> + 'static
    {
        self.post_gradient = Some(Box::new(post));
        self
    }


    /// Print the progress table to stdout if `flag` is `true`.
    pub fn verbose(mut self, flag: bool) -> Self {
        self.verbose = flag;
        self
    }


    /// Run gradient descent from `init`.
    /// 
    /// Returns an error if the gradient oracle or
    /// the post-gradient hook returns a vector
    /// whose dimension differs from `init`.
    pub fn run(&self, init: &[f64]) -> Result<Trace> {
        let dim = init.len();
        let mut theta = init.to_vec();
        let mut sum = init.to_vec();

        let mut objective_values = Vec::with_capacity(self.horizon);
        let mut elapsed = Vec::with_capacity(self.horizon);
        let mut total = Duration::ZERO;

        log::info!(
            "gradient descent: dim = {dim}, horizon = {}, averaging = {}",
            self.horizon, self.model_averaging,
        );
        if self.verbose {
            progress::print_header("Gradient descent", self.horizon);
        }

        for it in 0..self.horizon {
            let t = it + 1;
            let now = Instant::now();

            let delta = (self.gradient)(&theta[..], t);
            checker::dimension(&delta[..], dim)?;

            let eta = self.step.step_length(t);
            theta.iter_mut()
                .zip(delta)
                .for_each(|(th, d)| { *th -= eta * d; });

            if let Some(post) = &self.post_gradient {
                theta = post(theta, t);
                checker::dimension(&theta[..], dim)?;
            }

            if self.model_averaging {
                sum.iter_mut()
                    .zip(&theta)
                    .for_each(|(s, th)| { *s += th; });
            }
            total += now.elapsed();

            let value = if self.model_averaging {
                let n = (it + 2) as f64;
                let average = sum.iter()
                    .map(|s| s / n)
                    .collect::<Vec<_>>();
                (self.objective)(&average[..])
            } else {
                (self.objective)(&theta[..])
            };
            log::debug!("iteration {t}: objective = {value}");

            if self.verbose {
                progress::print_row(t, value, total);
            }
            objective_values.push(value);
            elapsed.push(total);
        }

        if self.verbose {
            progress::print_footer();
        }

        let model = if self.model_averaging {
            let n = (self.horizon + 1) as f64;
            sum.into_iter()
                .map(|s| s / n)
                .collect::<Vec<_>>()
        } else {
            theta
        };

        if model.iter().any(|m| !m.is_finite()) {
            log::warn!("gradient descent ended at a non-finite model");
        }

        Ok(Trace::new(model, objective_values, elapsed))
    }
}
