//! Defines the traits of trained models.
use crate::Sample;


/// A trait that defines the behavor of regressor.
/// You only need to implement `predict` method.
pub trait Regressor {
    /// Predicts the target value of the given point.
    fn predict(&self, point: &[f64]) -> f64;


    /// Predicts the target values of all examples of `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<f64> {
        sample.rows()
            .map(|point| self.predict(point))
            .collect::<Vec<_>>()
    }
}
