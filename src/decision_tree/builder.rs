use crate::common::constants::{
    DEFAULT_MAX_LEAF_SIZE,
    DEFAULT_MAX_DEPTH,
};
use super::dtree::DecisionTree;


/// A struct that builds [`DecisionTree`].
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
/// 
/// # Example
/// 
/// ```
/// use minilearn::DecisionTreeBuilder;
/// let tree = DecisionTreeBuilder::new()
///     .max_leaf_size(5)
///     .max_depth(3)
///     .build();
/// assert_eq!(3, tree.max_depth());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecisionTreeBuilder {
    max_leaf_size: usize,
    max_depth: usize,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`]
    /// with the default parameters.
    pub fn new() -> Self {
        Self {
            max_leaf_size: DEFAULT_MAX_LEAF_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }


    /// Specify the minimal number of rows a node needs to be split.
    /// A node reached by fewer rows becomes a leaf.
    /// Default value is `10`.
    pub fn max_leaf_size(mut self, size: usize) -> Self {
        self.max_leaf_size = size;
        self
    }


    /// Specify the maximal depth of the tree.
    /// Nodes at this depth become leaves.
    /// `max_depth = 0` gives a single leaf.
    /// Default value is `5`.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }


    /// Build a [`DecisionTree`] that has not been trained yet.
    pub fn build(&self) -> DecisionTree {
        DecisionTree::new(self.max_leaf_size, self.max_depth)
    }
}


impl Default for DecisionTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
