use std::time::Duration;


/// The output of an optimization driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    model: Vec<f64>,
    objective_values: Vec<f64>,
    elapsed: Vec<Duration>,
}


impl Trace {
    #[inline]
    pub(super) fn new(
        model: Vec<f64>,
        objective_values: Vec<f64>,
        elapsed: Vec<Duration>,
    ) -> Self
    {
        Self { model, objective_values, elapsed, }
    }


    /// Returns the final model.
    #[inline]
    pub fn model(&self) -> &[f64] {
        &self.model[..]
    }


    /// Returns the objective value after each iteration.
    #[inline]
    pub fn objective_values(&self) -> &[f64] {
        &self.objective_values[..]
    }


    /// Returns the objective value after the last iteration.
    #[inline]
    pub fn last_objective_value(&self) -> Option<f64> {
        self.objective_values.last().copied()
    }


    /// Returns the cumulative running time after each iteration.
    /// The time spent on evaluating the objective is not counted.
    #[inline]
    pub fn elapsed(&self) -> &[Duration] {
        &self.elapsed[..]
    }
}
