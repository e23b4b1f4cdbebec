use std::fmt;


/// A step-length oracle.
/// `step_length(t)` is the step length of the `t`th iteration,
/// starting from `t = 1`.
/// 
/// Any function of type `Fn(usize) -> f64` is a step-length oracle.
pub trait StepOracle {
    /// Returns the step length of the `t`th iteration.
    fn step_length(&self, t: usize) -> f64;
}


impl<F> StepOracle for F
    where F: Fn(usize) -> f64
{
    #[inline]
    fn step_length(&self, t: usize) -> f64 {
        self(t)
    }
}


/// Step-length sequences.
/// 
/// The constant scheme only suits functions that are
/// both strongly convex and strongly smooth.
/// The quadratic scheme decreases step lengths gradually
/// and is a good choice in several cases.
/// The linear scheme decreases step lengths fairly rapidly and
/// suits functions that are strongly convex but not strongly smooth
/// (e.g., the C-SVM objective) or the other way round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepLength {
    /// `eta`.
    Constant(f64),
    /// `eta / (t + 1)`.
    Linear(f64),
    /// `eta / sqrt(t + 1)`.
    Quadratic(f64),
}


impl StepOracle for StepLength {
    #[inline]
    fn step_length(&self, t: usize) -> f64 {
        let t = t as f64;
        match *self {
            Self::Constant(eta) => eta,
            Self::Linear(eta) => eta / (t + 1f64),
            Self::Quadratic(eta) => eta / (t + 1f64).sqrt(),
        }
    }
}


impl fmt::Display for StepLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(eta) => write!(f, "Constant ({eta})"),
            Self::Linear(eta) => write!(f, "Linear ({eta} / (t + 1))"),
            Self::Quadratic(eta) => write!(f, "Quadratic ({eta} / sqrt(t + 1))"),
        }
    }
}
