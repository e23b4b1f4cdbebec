//! A recursive binary decision tree
//! whose splitting rules come from a pluggable [`StumpOracle`].

/// Defines the stumps.
pub mod stump;
/// Defines the stump oracles.
pub mod oracle;
/// Defines the nodes.
pub mod node;
/// Defines the non-fatal training conditions.
pub mod warning;
mod builder;
mod dtree;


pub use builder::DecisionTreeBuilder;
pub use dtree::DecisionTree;
pub use node::{Node, NodeKind};
pub use oracle::{StumpOracle, SquaredErrorStump};
pub use stump::{Stump, OpaqueStump, LeftRight};
pub use warning::TrainWarning;
