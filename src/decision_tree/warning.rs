//! Defines the non-fatal conditions met while training.
use std::fmt;


/// A non-fatal condition met while training a tree.
/// Training continues after each of them.
#[derive(Debug, Clone, PartialEq)]
pub enum TrainWarning {
    /// A node that passed the size and depth checks
    /// had a single distinct label.
    /// The node became a leaf instead of being split.
    PureNode {
        /// Depth of the node.
        depth: usize,
        /// Number of rows that reached the node.
        n_sample: usize,
        /// The label of the node.
        label: f64,
    },
}


impl fmt::Display for TrainWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PureNode { depth, n_sample, label } => {
                write!(
                    f,
                    "Attempted to split a pure node \
                    (depth {depth}, {n_sample} rows, label {label}). \
                    Node converted to leaf instead."
                )
            },
        }
    }
}
