//! A node struct used in the decision tree algorithm.
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::{
    common::{utils, MiniLearnError, Result},
    visualize::SplitCanvas,
    Regressor,
    Sample,
};
use super::{
    stump::{LeftRight, Stump},
    oracle::StumpOracle,
    warning::TrainWarning,
};


/// A node of a decision tree.
/// 
/// A node is either a leaf that predicts a constant label
/// or a branch that owns a stump and exactly two children.
/// The enum [`NodeKind`] makes any other state unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    depth: usize,
    n_sample: usize,
    ancestors: Vec<usize>,
    kind: NodeKind,
}


/// Enumeration of branch nodes and leaf nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// A node that have two childrens.
    /// Points with `score <= 0` go left, the others go right.
    Branch {
        /// The splitting rule.
        stump: Stump,
        /// Left child.
        left: Box<Node>,
        /// Right child.
        right: Box<Node>,
    },
    /// A node that have no child.
    Leaf {
        /// The prediction for every point that reaches this node.
        /// `NaN` if no training row reached it.
        #[serde(with = "nan_as_null")]
        label: f64,
    },
}


/// Writes a `NaN` label as `null` and reads `null` back as `NaN`.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(label: &f64, serializer: S)
        -> Result<S::Ok, S::Error>
        where S: Serializer,
    {
        if label.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(label)
        }
    }


    pub(super) fn deserialize<'de, D>(deserializer: D)
        -> Result<f64, D::Error>
        where D: Deserializer<'de>,
    {
        let label = Option::<f64>::deserialize(deserializer)?;
        Ok(label.unwrap_or(f64::NAN))
    }
}


impl Node {
    /// Construct a leaf with label `0` at `depth`.
    /// `ancestors` are the features used by the ancestors.
    #[inline]
    pub(crate) fn new(depth: usize, ancestors: Vec<usize>) -> Self {
        Self {
            depth,
            n_sample: 0,
            ancestors,
            kind: NodeKind::Leaf { label: 0f64 },
        }
    }


    /// Construct the root node.
    #[inline]
    pub(crate) fn root() -> Self {
        Self::new(0, Vec::new())
    }


    /// Grow the sub-tree rooted at this node
    /// from the rows `indices` of `sample`.
    /// 
    /// The node becomes
    /// 1. a leaf predicting the mean target
    ///    if `indices.len() < max_leaf_size` or `depth >= max_depth`,
    /// 2. a leaf predicting the common target
    ///    if all targets are the same
    ///    (a [`TrainWarning::PureNode`] is pushed to `warnings`),
    /// 3. a branch with the stump returned by `oracle`, otherwise.
    /// 
    /// A child that receives no row becomes a leaf
    /// whose label is `NaN`.
    pub(crate) fn train<O>(
        &mut self,
        sample: &Sample,
        indices: &[usize],
        oracle: &O,
        max_leaf_size: usize,
        max_depth: usize,
        warnings: &mut Vec<TrainWarning>,
    ) -> Result<()>
        where O: StumpOracle + ?Sized,
    {
        self.n_sample = indices.len();
        let target = sample.target();

        if indices.len() < max_leaf_size || self.depth >= max_depth {
            let label = utils::mean_over(target, indices);
            self.kind = NodeKind::Leaf { label };
            return Ok(());
        }

        if is_pure(target, indices) {
            let label = utils::mean_over(target, indices);
            let warning = TrainWarning::PureNode {
                depth: self.depth,
                n_sample: self.n_sample,
                label,
            };
            log::warn!("{warning}");
            warnings.push(warning);

            self.kind = NodeKind::Leaf { label };
            return Ok(());
        }

        let stump = oracle.produce(sample, indices, &self.ancestors);
        stump.check_dimension(sample.shape().1)?;

        let mut ancestors = self.ancestors.clone();
        match stump.feature_threshold_pair() {
            Ok((feature, _)) => { ancestors.push(feature); },
            Err(e) => {
                log::debug!(
                    "depth {}: the split feature is not recorded. {e}",
                    self.depth
                );
            },
        }
        log::debug!(
            "depth {}: split {} rows by [{stump}]",
            self.depth, self.n_sample,
        );

        let (lindices, rindices) = partition(sample, indices, &stump);

        let depth = self.depth + 1;
        let mut left = Node::new(depth, ancestors.clone());
        left.train(
            sample, &lindices, oracle, max_leaf_size, max_depth, warnings
        )?;
        let mut right = Node::new(depth, ancestors);
        right.train(
            sample, &rindices, oracle, max_leaf_size, max_depth, warnings
        )?;

        self.kind = NodeKind::Branch {
            stump,
            left: Box::new(left),
            right: Box::new(right),
        };
        Ok(())
    }


    /// Returns the pair `(feature, threshold)` of the stump.
    /// Fails for leaves and for stumps that are not
    /// of the form `x[feature] - threshold`.
    pub fn extract_stump_model(&self) -> Result<(usize, f64)> {
        match &self.kind {
            NodeKind::Branch { stump, .. } => stump.feature_threshold_pair(),
            NodeKind::Leaf { .. } => Err(MiniLearnError::LeafHasNoStump),
        }
    }


    /// Draw the splits of this sub-tree on `canvas`.
    /// `x_range` and `y_range` bound the region this node governs.
    /// 
    /// A split on feature `0` is a vertical line,
    /// a split on feature `1` is a horizontal line.
    /// The children receive the two halves of the region,
    /// so each leaf ends up with exactly the rectangle it governs.
    /// 
    /// Every stump of this sub-tree must be an axis-aligned threshold
    /// on feature `0` or `1`.
    pub fn draw_node_splits<C>(
        &self,
        canvas: &mut C,
        x_range: (f64, f64),
        y_range: (f64, f64),
    ) -> Result<()>
        where C: SplitCanvas + ?Sized,
    {
        let NodeKind::Branch { left, right, .. } = &self.kind else {
            return Ok(());
        };

        let (feature, threshold) = self.extract_stump_model()?;
        match feature {
            0 => {
                canvas.dashed_line(
                    (threshold, y_range.0), (threshold, y_range.1)
                )?;
                left.draw_node_splits(canvas, (x_range.0, threshold), y_range)?;
                right.draw_node_splits(canvas, (threshold, x_range.1), y_range)?;
            },
            1 => {
                canvas.dashed_line(
                    (x_range.0, threshold), (x_range.1, threshold)
                )?;
                left.draw_node_splits(canvas, x_range, (y_range.0, threshold))?;
                right.draw_node_splits(canvas, x_range, (threshold, y_range.1))?;
            },
            _ => {
                return Err(MiniLearnError::NotPlanarSplit(feature));
            },
        }
        Ok(())
    }


    /// Returns the depth of this node. The root has depth `0`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }


    /// Returns the number of rows that reached this node while training.
    #[inline]
    pub fn n_sample(&self) -> usize {
        self.n_sample
    }


    /// Returns the features used by the ancestors of this node,
    /// from the root downwards.
    #[inline]
    pub fn ancestor_split_features(&self) -> &[usize] {
        &self.ancestors[..]
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }


    /// Returns the inner representation of this node.
    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }


    /// Returns the label if this node is a leaf.
    #[inline]
    pub fn label(&self) -> Option<f64> {
        match self.kind {
            NodeKind::Leaf { label } => Some(label),
            NodeKind::Branch { .. } => None,
        }
    }


    /// Returns the stump if this node is a branch.
    #[inline]
    pub fn stump(&self) -> Option<&Stump> {
        match &self.kind {
            NodeKind::Branch { stump, .. } => Some(stump),
            NodeKind::Leaf { .. } => None,
        }
    }


    /// Returns the pair of the left and right children
    /// if this node is a branch.
    #[inline]
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match &self.kind {
            NodeKind::Branch { left, right, .. } => Some((&**left, &**right)),
            NodeKind::Leaf { .. } => None,
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn n_leaves(&self) -> usize {
        match &self.kind {
            NodeKind::Branch { left, right, .. } => {
                left.n_leaves() + right.n_leaves()
            },
            NodeKind::Leaf { .. } => 1,
        }
    }


    /// Returns the depth of the deepest leaf of this sub-tree.
    pub fn max_leaf_depth(&self) -> usize {
        match &self.kind {
            NodeKind::Branch { left, right, .. } => {
                left.max_leaf_depth().max(right.max_leaf_depth())
            },
            NodeKind::Leaf { .. } => self.depth,
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match &self.kind {
            NodeKind::Branch { stump, left, right } => {
                let splitter = format!(
                    "\tnode_{id} [ label = \"{stump}\" ];\n",
                );

                let left_id = id + 1;
                let (     left,  right_id) = left.to_dot_info(left_id);
                let (mut right, return_id) = right.to_dot_info(right_id);

                let mut info = left;
                info.push(splitter);
                info.append(&mut right);

                let left_edge = format!(
                    "\tnode_{id} -- node_{left_id} [ label = \"No\" ];\n",
                );
                info.push(left_edge);
                let right_edge = format!(
                    "\tnode_{id} -- node_{right_id} [ label = \"Yes\" ];\n",
                );
                info.push(right_edge);

                (info, return_id)
            },
            NodeKind::Leaf { label } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            }
        }
    }


    /// Writes an indented outline of this sub-tree to `lines`.
    pub(super) fn outline(&self, lines: &mut Vec<String>) {
        let indent = "  ".repeat(self.depth);
        match &self.kind {
            NodeKind::Branch { stump, left, right } => {
                lines.push(format!(
                    "{indent}[{stump}] ({} rows)", self.n_sample
                ));
                left.outline(lines);
                right.outline(lines);
            },
            NodeKind::Leaf { label } => {
                lines.push(format!(
                    "{indent}leaf: {label} ({} rows)", self.n_sample
                ));
            },
        }
    }
}


impl Regressor for Node {
    fn predict(&self, point: &[f64]) -> f64 {
        match &self.kind {
            NodeKind::Branch { stump, left, right } => {
                match stump.split(point) {
                    LeftRight::Left  => left.predict(point),
                    LeftRight::Right => right.predict(point),
                }
            },
            NodeKind::Leaf { label } => *label,
        }
    }
}


/// Returns `true` if `target` takes at most one value over `indices`.
#[inline]
fn is_pure(target: &[f64], indices: &[usize]) -> bool {
    let mut labels = indices.iter().map(|&i| target[i]);
    match labels.next() {
        Some(first) => labels.all(|y| y == first),
        None => true,
    }
}


/// Split `indices` into the rows going left and right.
#[inline]
fn partition(sample: &Sample, indices: &[usize], stump: &Stump)
    -> (Vec<usize>, Vec<usize>)
{
    let sides = indices.par_iter()
        .map(|&i| stump.split(&sample[i]))
        .collect::<Vec<_>>();

    let mut lindices = Vec::new();
    let mut rindices = Vec::new();
    for (&i, side) in indices.iter().zip(sides) {
        match side {
            LeftRight::Left  => { lindices.push(i); },
            LeftRight::Right => { rindices.push(i); },
        }
    }
    (lindices, rindices)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualize::SegmentRecorder;
    use std::sync::Mutex;

    fn toy() -> Sample {
        let rows = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ];
        Sample::new(rows, vec![0.0, 0.0, 1.0, 1.0]).unwrap()
    }

    #[test]
    fn test_new_node_is_leaf_with_label_zero() {
        let node = Node::root();
        assert!(node.is_leaf());
        assert_eq!(Some(0.0), node.label());
        assert!(node.children().is_none());
        assert!(node.stump().is_none());
    }

    #[test]
    fn test_is_pure() {
        let target = [1.0, 1.0, 2.0];
        assert!(is_pure(&target, &[0, 1]));
        assert!(!is_pure(&target, &[0, 2]));
        assert!(is_pure(&target, &[]));
    }

    #[test]
    fn test_partition() {
        let sample = toy();
        let stump = Stump::feature_threshold(1, 0.5);
        let (l, r) = partition(&sample, &[0, 1, 2, 3], &stump);
        assert_eq!(vec![0, 2], l);
        assert_eq!(vec![1, 3], r);
    }

    #[test]
    fn test_train_records_ancestors() {
        let rows = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ];
        let sample = Sample::new(rows, vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        let oracle = |_: &Sample, _: &[usize], ancestors: &[usize]| {
            Stump::feature_threshold(ancestors.len() % 2, 0.5)
        };
        let mut root = Node::root();
        let mut warnings = Vec::new();
        root.train(&sample, &[0, 1, 2, 3], &oracle, 2, 2, &mut warnings)
            .unwrap();

        let (left, _) = root.children().unwrap();
        assert_eq!(&[0], left.ancestor_split_features());
        let (ll, lr) = left.children().unwrap();
        assert_eq!(&[0, 1], ll.ancestor_split_features());
        assert_eq!(Some(0.0), ll.label());
        assert_eq!(Some(1.0), lr.label());
        assert_eq!(2, root.max_leaf_depth());
        assert_eq!(4, root.n_leaves());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_train_rejects_out_of_range_feature() {
        let sample = toy();
        let oracle = |_: &Sample, _: &[usize], _: &[usize]| {
            Stump::feature_threshold(5, 0.5)
        };
        let mut root = Node::root();
        let res = root.train(
            &sample, &[0, 1, 2, 3], &oracle, 1, 3, &mut Vec::new()
        );
        assert!(res.is_err());
        assert!(root.is_leaf());
    }

    #[test]
    fn test_empty_child_has_nan_label() {
        let sample = toy();
        let oracle = |_: &Sample, _: &[usize], _: &[usize]| {
            Stump::feature_threshold(0, 10.0)
        };
        let mut root = Node::root();
        root.train(&sample, &[0, 1, 2, 3], &oracle, 2, 1, &mut Vec::new())
            .unwrap();
        let (left, right) = root.children().unwrap();
        assert_eq!(Some(0.5), left.label());
        assert_eq!(0, right.n_sample());
        assert!(right.label().unwrap().is_nan());
    }

    #[test]
    fn test_nan_label_round_trip() {
        let sample = toy();
        let oracle = |_: &Sample, _: &[usize], _: &[usize]| {
            Stump::feature_threshold(0, 10.0)
        };
        let mut root = Node::root();
        root.train(&sample, &[0, 1, 2, 3], &oracle, 2, 1, &mut Vec::new())
            .unwrap();

        let json = serde_json::to_string(&root).unwrap();
        assert!(json.contains(r#""label":null"#), "got {json}.");
        assert!(json.contains(r#""label":0.5"#), "got {json}.");

        let restored: Node = serde_json::from_str(&json).unwrap();
        let (left, right) = restored.children().unwrap();
        assert_eq!(Some(0.5), left.label());
        assert!(right.label().unwrap().is_nan());
    }

    /// Keeps every record at `Warn` or above.
    struct WarnCapture {
        records: Mutex<Vec<String>>,
    }

    impl log::Log for WarnCapture {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                self.records.lock()
                    .unwrap()
                    .push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static WARN_CAPTURE: WarnCapture = WarnCapture {
        records: Mutex::new(Vec::new()),
    };

    #[test]
    fn test_pure_node_warning_is_logged() {
        log::set_logger(&WARN_CAPTURE).unwrap();
        log::set_max_level(log::LevelFilter::Warn);

        let rows = vec![vec![0.0], vec![1.0], vec![2.0]];
        let sample = Sample::new(rows, vec![4.0; 3]).unwrap();
        let mut root = Node::root();
        let mut warnings = Vec::new();
        root.train(
            &sample, &[0, 1, 2], &PanicOracle, 1, 2, &mut warnings
        ).unwrap();

        assert_eq!(1, warnings.len());
        let expected = warnings[0].to_string();
        let records = WARN_CAPTURE.records.lock().unwrap();
        assert!(
            records.iter().any(|r| *r == expected),
            "expected [{expected}] in {records:?}."
        );
    }

    /// Never consulted: a pure node stops before asking the oracle.
    struct PanicOracle;

    impl StumpOracle for PanicOracle {
        fn produce(&self, _: &Sample, _: &[usize], _: &[usize]) -> Stump {
            panic!("a pure node must not ask for a stump");
        }
    }

    #[test]
    fn test_extract_stump_model_of_leaf() {
        let node = Node::root();
        let res = node.extract_stump_model();
        assert!(matches!(res, Err(MiniLearnError::LeafHasNoStump)));
    }

    #[test]
    fn test_draw_rejects_third_feature() {
        let rows = vec![vec![0.0, 0.0, 0.0], vec![0.0, 0.0, 1.0]];
        let sample = Sample::new(rows, vec![0.0, 1.0]).unwrap();
        let oracle = |_: &Sample, _: &[usize], _: &[usize]| {
            Stump::feature_threshold(2, 0.5)
        };
        let mut root = Node::root();
        root.train(&sample, &[0, 1], &oracle, 1, 1, &mut Vec::new())
            .unwrap();

        let mut canvas = SegmentRecorder::new();
        let res = root.draw_node_splits(&mut canvas, (0.0, 1.0), (0.0, 1.0));
        assert!(matches!(res, Err(MiniLearnError::NotPlanarSplit(2))));
    }

    #[test]
    fn test_outline() {
        let sample = toy();
        let oracle = |_: &Sample, _: &[usize], _: &[usize]| {
            Stump::feature_threshold(0, 0.5)
        };
        let mut root = Node::root();
        root.train(&sample, &[0, 1, 2, 3], &oracle, 2, 1, &mut Vec::new())
            .unwrap();
        let mut lines = Vec::new();
        root.outline(&mut lines);
        assert_eq!(3, lines.len());
        assert_eq!("  leaf: 0 (2 rows)", lines[1]);
    }
}
