#![warn(missing_docs)]

//! 
//! A small toolkit for a machine learning course.
//! 
//! This crate includes three parts.
//! 
//! - Decision trees
//!     A recursive binary decision tree whose node splitting rule
//!     is given by a pluggable [`StumpOracle`].
//!     A trained tree can draw its partition of the plane
//!     if every split is an axis-aligned threshold.
//! 
//! - Synthetic data
//!     Point clouds (sphere, ellipse, Gaussian, two moons)
//!     for visual demonstrations.
//!     See the [`synthetic`] module.
//! 
//! - First-order optimization
//!     Gradient descent and coordinate methods
//!     driven by step-length, gradient, and coordinate oracles.
//!     See the [`optimization`] module.
//! 
//! # Example
//! ```
//! use minilearn::prelude::*;
//! 
//! let x = vec![
//!     vec![0.0, 0.0], vec![0.0, 1.0],
//!     vec![1.0, 0.0], vec![1.0, 1.0],
//! ];
//! let y = vec![0.0, 0.0, 1.0, 1.0];
//! let sample = Sample::new(x, y).unwrap();
//! 
//! let mut tree = DecisionTreeBuilder::new()
//!     .max_leaf_size(2)
//!     .max_depth(1)
//!     .build();
//! let warnings = tree.fit(&sample, &SquaredErrorStump::new()).unwrap();
//! assert!(warnings.is_empty());
//! 
//! assert_eq!(tree.try_predict(&[0.0, 0.5]).unwrap(), 0.0);
//! assert_eq!(tree.try_predict(&[1.0, 0.5]).unwrap(), 1.0);
//! ```

pub mod common;
pub mod sample;
pub mod hypothesis;
pub mod decision_tree;
pub mod visualize;
pub mod synthetic;
pub mod optimization;

/// Exports the commonly used structs and traits.
pub mod prelude;


pub use common::{
    MiniLearnError,
    Result,
};

pub use sample::Sample;
pub use hypothesis::Regressor;

pub use decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    Node,
    Stump,
    StumpOracle,
    SquaredErrorStump,
    TrainWarning,
};

pub use visualize::{
    SplitCanvas,
    SegmentRecorder,
    Segment,
    PlotCanvas,
    render_partition,
};
