//! First-order optimization drivers.
//! 
//! The word *oracle* refers to a function that does a certain job
//! to our satisfaction.
//! A step-length oracle returns a step length whenever asked,
//! a gradient oracle returns a direction
//! (the gradient or a mini-batch stochastic gradient),
//! a coordinate oracle picks the next coordinate to update.
//! 
//! Both drivers run for a fixed number of iterations and
//! return a [`Trace`] that holds the final model,
//! the objective value after each iteration,
//! and the cumulative running time.

/// Defines the step-length oracles.
pub mod step_length;
/// Defines the gradient descent driver.
pub mod gradient_descent;
/// Defines the coordinate selection oracles.
pub mod coordinate;
/// Defines the coordinate method driver.
pub mod coordinate_method;
/// Defines the output of the drivers.
pub mod trace;

mod progress;


pub use step_length::{StepLength, StepOracle};
pub use gradient_descent::GradientDescent;
pub use coordinate::{
    CoordinateSelector,
    CoordinateRule,
    Cyclic,
    Uniform,
    RandomPermutation,
};
pub use coordinate_method::CoordinateMethod;
pub use trace::Trace;
