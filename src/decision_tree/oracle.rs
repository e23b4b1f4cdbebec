//! Defines the stump oracles that decide the node splitting.
use rayon::prelude::*;

use crate::Sample;
use super::stump::Stump;

use std::fmt;


/// A strategy that returns the splitting rule of a node.
/// 
/// [`DecisionTree`](super::DecisionTree) calls
/// [`StumpOracle::produce`] once for each node it splits.
/// `indices` are the rows of `sample` that reach the node and
/// `ancestors` are the features used by the ancestors of the node,
/// from the root downwards.
/// An oracle may use `ancestors` to avoid splitting on
/// an already used feature.
/// 
/// Any function of type `Fn(&Sample, &[usize], &[usize]) -> Stump`
/// is an oracle.
/// Randomized oracles are allowed
/// and simply give randomized trees.
pub trait StumpOracle {
    /// Returns a stump that splits the rows `indices` of `sample`.
    fn produce(&self, sample: &Sample, indices: &[usize], ancestors: &[usize])
        -> Stump;
}


impl<F> StumpOracle for F
    where F: Fn(&Sample, &[usize], &[usize]) -> Stump
{
    #[inline]
    fn produce(&self, sample: &Sample, indices: &[usize], ancestors: &[usize])
        -> Stump
    {
        self(sample, indices, ancestors)
    }
}


/// An oracle that returns the axis-aligned stump
/// minimizing the sum of squared errors
/// of the two mean predictors on both sides.
/// Thresholds are the midpoints of consecutive distinct values.
/// 
/// # Example
/// ```
/// use minilearn::prelude::*;
/// 
/// let oracle = SquaredErrorStump::new()
///     .avoid_reuse(true);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredErrorStump {
    avoid_reuse: bool,
}


impl SquaredErrorStump {
    /// Construct a new instance of [`SquaredErrorStump`].
    #[inline]
    pub fn new() -> Self {
        Self { avoid_reuse: false, }
    }


    /// If `true`, features used by the ancestors are skipped
    /// as long as another feature gives a valid split.
    /// Default value is `false`.
    #[inline]
    pub fn avoid_reuse(mut self, avoid_reuse: bool) -> Self {
        self.avoid_reuse = avoid_reuse;
        self
    }


    /// Returns the best `(loss, feature, threshold)` over `features`.
    fn best_split<I>(&self, sample: &Sample, indices: &[usize], features: I)
        -> Option<(f64, usize, f64)>
        where I: IntoParallelIterator<Item = usize>,
    {
        let target = sample.target();
        features.into_par_iter()
            .filter_map(|j| {
                let mut pairs = indices.iter()
                    .map(|&i| (sample[i][j], target[i]))
                    .collect::<Vec<_>>();
                pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
                best_threshold(&pairs)
                    .map(|(loss, threshold)| (loss, j, threshold))
            })
            .min_by(|a, b| {
                a.0.total_cmp(&b.0)
                    .then(a.1.cmp(&b.1))
            })
    }
}


impl StumpOracle for SquaredErrorStump {
    fn produce(&self, sample: &Sample, indices: &[usize], ancestors: &[usize])
        -> Stump
    {
        let n_feature = sample.shape().1;

        let mut best = None;
        if self.avoid_reuse {
            let fresh = (0..n_feature)
                .filter(|j| !ancestors.contains(j))
                .collect::<Vec<_>>();
            best = self.best_split(sample, indices, fresh);
        }
        if best.is_none() {
            best = self.best_split(sample, indices, 0..n_feature);
        }

        match best {
            Some((_, feature, threshold)) => {
                Stump::feature_threshold(feature, threshold)
            },
            // Every feature is constant over `indices`.
            // All rows go to the left child.
            None => {
                let threshold = indices.first()
                    .and_then(|&i| sample[i].first().copied())
                    .unwrap_or(0f64);
                Stump::feature_threshold(0, threshold)
            },
        }
    }
}


impl fmt::Display for SquaredErrorStump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.avoid_reuse {
            write!(f, "Squared error (avoids ancestor features)")
        } else {
            write!(f, "Squared error")
        }
    }
}


/// Given `(value, target)` pairs sorted by `value`,
/// returns the pair of the minimal loss and its threshold.
/// Returns `None` if all values are the same.
fn best_threshold(pairs: &[(f64, f64)]) -> Option<(f64, f64)> {
    let n = pairs.len();
    let total = pairs.iter().map(|(_, y)| y).sum::<f64>();
    let total_sq = pairs.iter().map(|(_, y)| y * y).sum::<f64>();

    let mut left = 0f64;
    let mut best: Option<(f64, f64)> = None;
    for k in 1..n {
        left += pairs[k - 1].1;
        let (prev, next) = (pairs[k - 1].0, pairs[k].0);
        if prev == next { continue; }

        let right = total - left;
        let (n_left, n_right) = (k as f64, (n - k) as f64);
        let loss = total_sq
            - left * left / n_left
            - right * right / n_right;

        if best.map_or(true, |(l, _)| loss < l) {
            best = Some((loss, (prev + next) / 2f64));
        }
    }
    best
}
