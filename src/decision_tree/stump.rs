//! Defines the decision stumps that split the nodes.
use serde::{Serialize, Deserialize};

use crate::common::{
    MiniLearnError,
    Result,
    utils,
};

use std::fmt;
use std::sync::Arc;


/// The side a point goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftRight {
    /// `score <= 0`.
    Left,
    /// `score > 0`.
    Right,
}


impl LeftRight {
    /// Returns the side that corresponds to `score`.
    /// Ties (`score == 0`) go left.
    /// So does `NaN`.
    #[inline]
    pub fn from_score(score: f64) -> Self {
        if score > 0f64 { Self::Right } else { Self::Left }
    }
}


/// A decision stump.
/// Each variant maps a point `x` to a real-valued score
/// whose sign decides the routing:
/// `score <= 0` goes left, `score > 0` goes right.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub enum Stump {
    /// `x[feature] - threshold`.
    FeatureThreshold {
        /// Index of the feature.
        feature: usize,
        /// The threshold value.
        threshold: f64,
    },
    /// `<weights, x> + bias`.
    Linear {
        /// Weight vector.
        weights: Vec<f64>,
        /// Bias term.
        bias: f64,
    },
    /// An arbitrary scoring function.
    /// Its structure is recovered by probing.
    /// This variant cannot be serialized.
    #[serde(skip)]
    Opaque(OpaqueStump),
}


impl Stump {
    /// Construct the stump `x[feature] - threshold`.
    #[inline]
    pub fn feature_threshold(feature: usize, threshold: f64) -> Self {
        Self::FeatureThreshold { feature, threshold }
    }


    /// Construct the stump `<weights, x> + bias`.
    #[inline]
    pub fn linear(weights: Vec<f64>, bias: f64) -> Self {
        Self::Linear { weights, bias }
    }


    /// Construct a stump from an arbitrary function
    /// over `dim`-dimensional points.
    #[inline]
    pub fn opaque<F>(dim: usize, score: F) -> Self
        where F: Fn(&[f64]) -> f64 + Send + Sync + 'static
    {
        Self::Opaque(OpaqueStump::new(dim, score))
    }


    /// Returns the score of `point`.
    #[inline]
    pub fn score(&self, point: &[f64]) -> f64 {
        match self {
            Self::FeatureThreshold { feature, threshold } => {
                point[*feature] - threshold
            },
            Self::Linear { weights, bias } => {
                utils::inner_product(weights, point) + bias
            },
            Self::Opaque(stump) => stump.score(point),
        }
    }


    /// Returns the side `point` goes to.
    #[inline]
    pub fn split(&self, point: &[f64]) -> LeftRight {
        LeftRight::from_score(self.score(point))
    }


    /// Check whether this stump can score points
    /// with `n_feature` features.
    pub fn check_dimension(&self, n_feature: usize) -> Result<()> {
        match self {
            Self::FeatureThreshold { feature, .. } => {
                if *feature >= n_feature {
                    return Err(MiniLearnError::FeatureOutOfRange {
                        feature: *feature,
                        n_feature,
                    });
                }
            },
            Self::Linear { weights, .. } => {
                if weights.len() != n_feature {
                    return Err(MiniLearnError::DimensionMismatch {
                        expected: n_feature,
                        got: weights.len(),
                    });
                }
            },
            Self::Opaque(stump) => {
                if stump.dim != n_feature {
                    return Err(MiniLearnError::DimensionMismatch {
                        expected: n_feature,
                        got: stump.dim,
                    });
                }
            },
        }
        Ok(())
    }


    /// Returns the pair `(feature, threshold)`
    /// if this stump is equivalent to `x[feature] - threshold`
    /// up to a positive scaling.
    /// 
    /// - `FeatureThreshold` always succeeds.
    /// - `Linear` succeeds if exactly one weight is non-zero
    ///   and that weight is positive.
    /// - `Opaque` is probed at the origin and at each unit vector.
    ///   The score must change along exactly one axis,
    ///   and increase along it.
    ///   The probing assumes the function is affine;
    ///   non-linear functions may give a wrong answer.
    pub fn feature_threshold_pair(&self) -> Result<(usize, f64)> {
        match self {
            Self::FeatureThreshold { feature, threshold } => {
                Ok((*feature, *threshold))
            },
            Self::Linear { weights, bias } => {
                let slopes = weights.iter()
                    .copied()
                    .enumerate()
                    .filter(|(_, w)| *w != 0f64)
                    .collect::<Vec<_>>();
                single_axis(&slopes, *bias)
            },
            Self::Opaque(stump) => {
                let mut probe = vec![0f64; stump.dim];
                let origin = stump.score(&probe);

                let mut slopes = Vec::new();
                for j in 0..stump.dim {
                    probe[j] = 1f64;
                    let delta = stump.score(&probe) - origin;
                    probe[j] = 0f64;
                    if delta != 0f64 {
                        slopes.push((j, delta));
                    }
                }
                single_axis(&slopes, origin)
            },
        }
    }
}


/// Given the non-zero slopes of an affine function and
/// its value at the origin,
/// returns the axis and the point where the function crosses zero.
#[inline]
fn single_axis(slopes: &[(usize, f64)], origin: f64) -> Result<(usize, f64)> {
    match slopes {
        [(feature, slope)] if *slope > 0f64 => {
            Ok((*feature, -origin / slope))
        },
        [(feature, slope)] => {
            Err(MiniLearnError::NotFeatureStump(format!(
                "the score decreases along feature {feature} (slope {slope})"
            )))
        },
        [] => {
            Err(MiniLearnError::NotFeatureStump(
                "the score does not depend on any feature".into()
            ))
        },
        _ => {
            let features = slopes.iter()
                .map(|(j, _)| *j)
                .collect::<Vec<_>>();
            Err(MiniLearnError::NotFeatureStump(format!(
                "the score depends on features {features:?}"
            )))
        },
    }
}


impl fmt::Debug for Stump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FeatureThreshold { feature, threshold } => {
                f.debug_struct("FeatureThreshold")
                    .field("feature", feature)
                    .field("threshold", threshold)
                    .finish()
            },
            Self::Linear { weights, bias } => {
                f.debug_struct("Linear")
                    .field("weights", weights)
                    .field("bias", bias)
                    .finish()
            },
            Self::Opaque(stump) => write!(f, "{stump:?}"),
        }
    }
}


impl fmt::Display for Stump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FeatureThreshold { feature, threshold } => {
                write!(f, "x[{feature}] > {threshold:.2} ?")
            },
            Self::Linear { weights, bias } => {
                let terms = weights.iter()
                    .enumerate()
                    .filter(|(_, w)| **w != 0f64)
                    .map(|(j, w)| format!("{w:.2} x[{j}]"))
                    .collect::<Vec<_>>()
                    .join(" + ");
                write!(f, "{terms} + {bias:.2} > 0 ?")
            },
            Self::Opaque(_) => write!(f, "f(x) > 0 ?"),
        }
    }
}


/// A scoring function whose structure is unknown.
#[derive(Clone)]
pub struct OpaqueStump {
    dim: usize,
    score: Arc<dyn Fn(&[f64]) -> f64 + Send + Sync>,
}


impl OpaqueStump {
    /// Wrap `score` as a stump over `dim`-dimensional points.
    pub fn new<F>(dim: usize, score: F) -> Self
        where F: Fn(&[f64]) -> f64 + Send + Sync + 'static
    {
        Self { dim, score: Arc::new(score), }
    }


    /// Returns the dimension of the points this stump accepts.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }


    /// Returns the score of `point`.
    #[inline]
    pub fn score(&self, point: &[f64]) -> f64 {
        (self.score)(point)
    }
}


impl PartialEq for OpaqueStump {
    /// Two opaque stumps are equal
    /// if they share the same function.
    fn eq(&self, other: &Self) -> bool {
        self.dim == other.dim && Arc::ptr_eq(&self.score, &other.score)
    }
}


impl fmt::Debug for OpaqueStump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opaque")
            .field("dim", &self.dim)
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_goes_left() {
        let stump = Stump::feature_threshold(0, 0.5);
        assert_eq!(LeftRight::Left, stump.split(&[0.5, 3.0]));
        assert_eq!(LeftRight::Right, stump.split(&[0.6, 3.0]));
    }

    #[test]
    fn test_nan_goes_left() {
        assert_eq!(LeftRight::Left, LeftRight::from_score(f64::NAN));
    }

    #[test]
    fn test_linear_score() {
        let stump = Stump::linear(vec![1.0, -2.0], 0.5);
        let res = stump.score(&[1.0, 1.0]);
        assert_eq!(-0.5, res, "expected -0.5, got {res}.");
    }

    #[test]
    fn test_pair_of_feature_threshold() {
        let stump = Stump::feature_threshold(1, -0.25);
        let res = stump.feature_threshold_pair().unwrap();
        assert_eq!((1, -0.25), res);
    }

    #[test]
    fn test_pair_of_single_weight_linear() {
        // 2 x[1] - 1 > 0  <=>  x[1] > 0.5
        let stump = Stump::linear(vec![0.0, 2.0], -1.0);
        let res = stump.feature_threshold_pair().unwrap();
        assert_eq!((1, 0.5), res);
    }

    #[test]
    fn test_pair_of_oblique_linear() {
        let stump = Stump::linear(vec![1.0, 1.0], -1.0);
        let res = stump.feature_threshold_pair();
        assert!(
            matches!(res, Err(MiniLearnError::NotFeatureStump(_))),
            "got {res:?}."
        );
    }

    #[test]
    fn test_pair_of_decreasing_linear() {
        let stump = Stump::linear(vec![-1.0, 0.0], 1.0);
        assert!(stump.feature_threshold_pair().is_err());
    }

    #[test]
    fn test_probe_feature_0() {
        let stump = Stump::opaque(2, |x| x[0] - 0.75);
        let res = stump.feature_threshold_pair().unwrap();
        assert_eq!((0, 0.75), res);
    }

    #[test]
    fn test_probe_feature_1() {
        let stump = Stump::opaque(2, |x| x[1] + 2.0);
        let res = stump.feature_threshold_pair().unwrap();
        assert_eq!((1, -2.0), res);
    }

    #[test]
    fn test_probe_constant() {
        let stump = Stump::opaque(2, |_| 1.0);
        assert!(stump.feature_threshold_pair().is_err());
    }

    #[test]
    fn test_check_dimension() {
        let stump = Stump::feature_threshold(2, 0.0);
        let res = stump.check_dimension(2);
        assert!(
            matches!(
                res,
                Err(MiniLearnError::FeatureOutOfRange { feature: 2, n_feature: 2 })
            ),
            "got {res:?}."
        );
        assert!(stump.check_dimension(3).is_ok());

        let stump = Stump::linear(vec![1.0], 0.0);
        assert!(stump.check_dimension(2).is_err());
    }

    #[test]
    fn test_opaque_eq() {
        let s1 = Stump::opaque(2, |x| x[0]);
        let s2 = s1.clone();
        let s3 = Stump::opaque(2, |x| x[0]);
        assert_eq!(s1, s2);
        assert_ne!(s1, s3);
    }
}
