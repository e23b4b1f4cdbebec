use serde::{Serialize, Deserialize};

use crate::{
    common::{checker, Result},
    visualize::SplitCanvas,
    Regressor,
    Sample,
};
use super::{
    node::Node,
    oracle::StumpOracle,
    warning::TrainWarning,
};

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// A binary decision tree.
/// 
/// The tree is grown from its root by [`DecisionTree::fit`].
/// Each node asks a [`StumpOracle`] for its splitting rule and
/// becomes a leaf when
/// - fewer than `max_leaf_size` rows reach it,
/// - it sits at depth `max_depth`, or
/// - all the rows reaching it share the same label.
/// 
/// A leaf predicts the mean label of the rows that reached it,
/// so the same tree serves regression and
/// classification by thresholding.
/// 
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](super::DecisionTreeBuilder).
/// 
/// # Example
/// ```
/// use minilearn::prelude::*;
/// 
/// let x = vec![vec![0.0, 0.0], vec![0.2, 1.0], vec![0.9, 0.4]];
/// let y = vec![-1.0, -1.0, 1.0];
/// let sample = Sample::new(x, y).unwrap();
/// 
/// // Split every node on the first feature at `0.5`.
/// let oracle = |_: &Sample, _: &[usize], _: &[usize]| {
///     Stump::feature_threshold(0, 0.5)
/// };
/// let mut tree = DecisionTreeBuilder::new()
///     .max_leaf_size(1)
///     .max_depth(1)
///     .build();
/// tree.fit(&sample, &oracle).unwrap();
/// 
/// assert_eq!(tree.try_predict(&[0.1, 0.0]).unwrap(), -1.0);
/// assert_eq!(tree.try_predict(&[0.7, 0.0]).unwrap(),  1.0);
/// // The tree was grown on 2 features.
/// assert!(tree.try_predict(&[0.7]).is_err());
/// 
/// // Collect the split lines over the unit square.
/// let mut canvas = SegmentRecorder::new();
/// tree.draw_splits(&mut canvas, (0.0, 1.0), (0.0, 1.0)).unwrap();
/// assert_eq!(canvas.segments().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    root: Node,
    max_leaf_size: usize,
    max_depth: usize,
    n_feature: Option<usize>,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(max_leaf_size: usize, max_depth: usize) -> Self {
        Self {
            root: Node::root(),
            max_leaf_size,
            max_depth,
            n_feature: None,
        }
    }


    /// Grow the tree from `sample`.
    /// 
    /// Returns the non-fatal conditions met while training.
    /// Returns `Err` if the oracle returns a stump
    /// that does not fit the shape of `sample`.
    /// In that case the tree is left unchanged.
    /// 
    /// Calling `fit` again replaces the current tree.
    pub fn fit<O>(&mut self, sample: &Sample, oracle: &O)
        -> Result<Vec<TrainWarning>>
        where O: StumpOracle + ?Sized,
    {
        let (n_sample, n_feature) = sample.shape();
        log::info!(
            "growing a tree on {n_sample} rows x {n_feature} features \
            (max leaf size {}, max depth {})",
            self.max_leaf_size, self.max_depth,
        );
        if sample.is_empty() {
            log::warn!("the sample is empty. the root predicts NaN");
        }

        let indices = (0..n_sample).collect::<Vec<_>>();
        let mut root = Node::root();
        let mut warnings = Vec::new();
        root.train(
            sample,
            &indices,
            oracle,
            self.max_leaf_size,
            self.max_depth,
            &mut warnings,
        )?;
        self.root = root;
        self.n_feature = Some(n_feature);

        log::info!(
            "grew a tree with {} leaves and depth {}",
            self.n_leaves(), self.depth(),
        );
        Ok(warnings)
    }


    /// Draw the splits of the tree on `canvas`
    /// over the rectangle `x_range x y_range`.
    /// See [`Node::draw_node_splits`].
    pub fn draw_splits<C>(
        &self,
        canvas: &mut C,
        x_range: (f64, f64),
        y_range: (f64, f64),
    ) -> Result<()>
        where C: SplitCanvas + ?Sized,
    {
        self.root.draw_node_splits(canvas, x_range, y_range)
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the minimal number of rows a node needs to be split.
    #[inline]
    pub fn max_leaf_size(&self) -> usize {
        self.max_leaf_size
    }


    /// Returns the maximal depth of the tree.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }


    /// Returns the number of features of the sample
    /// the tree was grown from,
    /// or `None` if the tree has not been trained.
    #[inline]
    pub fn n_feature(&self) -> Option<usize> {
        self.n_feature
    }


    /// Predicts the target value of `point`
    /// after checking its dimension against the training sample.
    /// 
    /// Returns `Err` if the tree was trained on a sample
    /// whose rows have a different length than `point`.
    /// [`Regressor::predict`] skips this check and
    /// may panic or return a meaningless value on such a point.
    pub fn try_predict(&self, point: &[f64]) -> Result<f64> {
        if let Some(n_feature) = self.n_feature {
            checker::dimension(point, n_feature)?;
        }
        Ok(self.root.predict(point))
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Returns the depth of the deepest leaf.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.max_leaf_depth()
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }


    /// Serialize the tree to a JSON string.
    /// Fails if the tree has an opaque stump.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }


    /// Deserialize a tree from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let tree = serde_json::from_str(json)?;
        Ok(tree)
    }
}


impl Regressor for DecisionTree {
    /// Routes `point` from the root to a leaf and
    /// returns the label of the leaf.
    /// `point` must have as many features as the training sample.
    /// Use [`DecisionTree::try_predict`] for a checked version.
    #[inline]
    fn predict(&self, point: &[f64]) -> f64 {
        self.root.predict(point)
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Max leaf size: {}\n\
            - Max depth: {}\n\
            - Leaves: {}\n\
            - Nodes:\
            ",
            self.max_leaf_size,
            self.max_depth,
            self.n_leaves(),
        )?;

        let mut lines = Vec::new();
        self.root.outline(&mut lines);
        for line in lines {
            writeln!(f, "\t{line}")?;
        }

        write!(f, "----------")
    }
}
