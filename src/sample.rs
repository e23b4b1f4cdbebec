//! Defines the training sample.

/// Defines `Sample`.
pub mod sample_struct;

pub use sample_struct::Sample;
